use crate::error::StrideViewError;
use crate::ops::view::contiguous::copy_op;
use crate::ops::view::diagonal::diagonal_op;
use crate::ops::view::reshape::reshape_op;
use crate::tensor::create::zeros_dtype;
use crate::tensor::Tensor;
use log::debug;

/// Builds a square matrix whose `offset`-th diagonal holds the elements of
/// `tensor` in row-major order; everything else is zero.
///
/// An input with `n` elements gives an `(n + |offset|) x (n + |offset|)`
/// result. A positive `offset` selects a diagonal above the main one.
///
/// # Errors
/// `InvalidArgument` when `offset` makes the matrix size overflow.
pub fn diagflat_op(tensor: &Tensor, offset: isize) -> Result<Tensor, StrideViewError> {
    let flat = reshape_op(tensor, &[-1])?;
    let n = flat.numel();
    let side = n
        .checked_add(offset.unsigned_abs())
        .filter(|side| side.checked_mul(*side).is_some())
        .ok_or_else(|| StrideViewError::InvalidArgument {
            operation: "diagflat".to_string(),
            message: format!("offset {} is too large for {} elements", offset, n),
        })?;
    debug!("diagflat: allocating {}x{} for {} elements", side, side, n);
    let result = zeros_dtype(&[side, side], tensor.dtype())?;
    if n == 0 {
        return Ok(result);
    }
    let diagonal = diagonal_op(&result, offset, 0, 1)?;
    copy_op(&diagonal, &flat)?;
    Ok(result)
}
