/// Defines the possible data types for Tensor elements.
///
/// The view engine never looks at element values; the dtype only decides
/// which typed vector backs a newly allocated [`Buffer`](crate::buffer::Buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    /// 64-bit integer type. Used for sparse coordinate indices.
    I64,
}

