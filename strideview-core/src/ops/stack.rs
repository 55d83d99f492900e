use crate::error::StrideViewError;
use crate::ops::cat::{cat_op, cat_out_op};
use crate::ops::view::squeeze_unsqueeze::unsqueeze_op;
use crate::ops::view::utils::wrap_dim;
use crate::tensor::Tensor;

fn stack_inputs(tensors: &[Tensor], dim: isize, operation: &str) -> Result<(Vec<Tensor>, isize), StrideViewError> {
    let first = tensors.first().ok_or_else(|| StrideViewError::EmptyList {
        operation: operation.to_string(),
    })?;
    let d = wrap_dim(dim, first.rank() + 1)? as isize;
    let inputs = tensors
        .iter()
        .map(|t| unsqueeze_op(t, d))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((inputs, d))
}

/// Joins same-shaped tensors along a new axis inserted at `dim`.
///
/// `dim` ranges over `[-rank-1, rank]` of the first tensor. Every input is
/// unsqueezed at `dim` and the results are concatenated.
///
/// # Example
/// ```
/// use strideview_core::{tensor, Tensor};
/// let a = tensor::arange(0.0, 3.0, 1.0).unwrap();
/// let b = tensor::arange(3.0, 6.0, 1.0).unwrap();
/// let s = Tensor::stack(&[a, b], 1).unwrap();
/// assert_eq!(s.shape(), vec![3, 2]);
/// assert_eq!(s.get_f32_data().unwrap(), vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
/// ```
pub fn stack_op(tensors: &[Tensor], dim: isize) -> Result<Tensor, StrideViewError> {
    let (inputs, d) = stack_inputs(tensors, dim, "stack")?;
    cat_op(&inputs, d)
}

/// [`stack_op`] writing into `result`, with the resizing rules of
/// [`cat_out_op`](crate::ops::cat::cat_out_op).
pub fn stack_out_op(result: &Tensor, tensors: &[Tensor], dim: isize) -> Result<(), StrideViewError> {
    let (inputs, d) = stack_inputs(tensors, dim, "stack_out")?;
    cat_out_op(result, &inputs, d)
}
