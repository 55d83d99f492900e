use crate::error::StrideViewError;
use crate::ops::view::as_strided::{geometry_of, view_with_geometry};
use crate::tensor::Tensor;

/// Creates a broadcast view of `tensor` with the given target sizes.
///
/// Sizes are matched right-aligned; `-1` keeps the existing size. A size-1
/// axis can be expanded to any size (stride 0, every position aliases the
/// same element), an equal size keeps its stride, and new leading axes may be
/// added. Nothing is copied.
///
/// # Errors
/// - `RankError` if `target` has fewer axes than `tensor`.
/// - `SizeMismatch` if a non-singleton axis would change size.
/// - `InvalidArgument` for `-1` on a new leading axis or any other negative
///   size, or when the expanded element count overflows.
pub fn expand_op(tensor: &Tensor, target: &[isize]) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "expand")?.expand(target)?;
    view_with_geometry(tensor, "expand", geometry)
}

/// Expands `tensor` to the shape of `other`.
pub fn expand_as_op(tensor: &Tensor, other: &Tensor) -> Result<Tensor, StrideViewError> {
    let target: Vec<isize> = other.shape().iter().map(|&s| s as isize).collect();
    expand_op(tensor, &target)
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
