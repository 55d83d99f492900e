use std::fmt::Debug;

/// Represents how a tensor's elements are organised in memory.
///
/// Operations that need layout-specific behaviour (transpose, reshape) dispatch
/// on the tensor's representation; this tag is what they report in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Dense elements addressed through sizes, strides and a storage offset.
    /// This is the default layout.
    #[default]
    Strided,
    /// Coordinate-format sparse tensor: an `[sparse_dims, nnz]` index tensor
    /// plus a `[nnz, dense...]` values tensor. Has no stride concept.
    SparseCoo,
}
