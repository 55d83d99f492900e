use crate::error::StrideViewError;
use crate::ops::view::expand::expand_op;
use crate::ops::view::reshape::view_op;
use crate::tensor::Tensor;

/// Builds coordinate grids from `n` vectors.
///
/// Grid `i` has the shape `[len_0, ..., len_{n-1}]` and repeats input `i`
/// along every axis except axis `i`. Rank-0 inputs count as length 1. The
/// grids are expanded views of the inputs, so nothing is copied.
///
/// # Errors
/// - `EmptyList` for an empty list.
/// - `RankError` for an input of rank 2 or more.
/// - `SizeMismatch` from `expand` when, under the legacy empty-shape policy,
///   an empty input other than the last one collapses to `[0]`.
pub fn meshgrid_op(tensors: &[Tensor]) -> Result<Vec<Tensor>, StrideViewError> {
    if tensors.is_empty() {
        return Err(StrideViewError::EmptyList {
            operation: "meshgrid".to_string(),
        });
    }
    let shape = tensors
        .iter()
        .map(|t| match t.shape().as_slice() {
            [] => Ok(1),
            [len] => Ok(*len as isize),
            other => Err(StrideViewError::RankError {
                operation: "meshgrid".to_string(),
                rank: other.len(),
                reason: "expected scalar or 1D tensor in the tensor list".to_string(),
            }),
        })
        .collect::<Result<Vec<isize>, _>>()?;

    tensors
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut view_shape = vec![1; tensors.len()];
            view_shape[i] = -1;
            expand_op(&view_op(t, &view_shape)?, &shape)
        })
        .collect()
}
