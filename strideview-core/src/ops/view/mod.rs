//! Zero-copy operations.
//!
//! Each submodule validates its arguments, asks [`geometry::Geometry`] for
//! the new `(sizes, strides, offset)` triple and hands it to
//! [`as_strided`], which builds the view. `contiguous` and the copy fallback
//! of `reshape` are the only allocating paths here.

pub mod as_strided;
pub mod contiguous;
pub mod diagonal;
pub mod expand;
pub mod geometry;
pub mod permute;
pub mod reshape;
pub mod slice;
pub mod squeeze_unsqueeze;
pub mod transpose;
pub mod unfold;
pub mod utils;

pub use as_strided::{as_strided_inplace_op, as_strided_op};
pub use contiguous::{contiguous_op, copy_op, materialize_op};
pub use diagonal::diagonal_op;
pub use expand::{expand_as_op, expand_op};
pub use geometry::Geometry;
pub use permute::permute_op;
pub use reshape::{flatten_op, reshape_as_op, reshape_op, view_as_op, view_op};
pub use slice::{narrow_op, select_op, slice_op};
pub use squeeze_unsqueeze::{squeeze_inplace_op, squeeze_op, unsqueeze_inplace_op, unsqueeze_op};
pub use transpose::{t_inplace_op, t_op, transpose_inplace_op, transpose_op};
pub use unfold::unfold_op;
