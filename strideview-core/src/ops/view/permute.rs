use crate::error::StrideViewError;
use crate::ops::view::as_strided::{geometry_of, view_with_geometry};
use crate::ops::view::utils::wrap_dims_unique;
use crate::tensor::Tensor;

/// Reorders the axes of `tensor`: axis `i` of the result is axis `dims[i]`
/// of the input. Only sizes and strides move.
///
/// # Errors
/// - `RankError` if `dims` does not have one entry per axis.
/// - `DimensionOutOfRange` for an entry outside `[-rank, rank)`.
/// - `RepeatedDimension` if an axis appears twice.
pub fn permute_op(tensor: &Tensor, dims: &[isize]) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "permute")?;
    let rank = geometry.rank();
    if dims.len() != rank {
        return Err(StrideViewError::RankError {
            operation: "permute".to_string(),
            rank,
            reason: format!("number of dims don't match in permute (got {})", dims.len()),
        });
    }
    let wrapped = wrap_dims_unique("permute", dims, rank)?;
    view_with_geometry(tensor, "permute", geometry.permute(&wrapped))
}

#[cfg(test)]
#[path = "permute_test.rs"]
mod tests;
