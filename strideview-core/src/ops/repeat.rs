use crate::error::StrideViewError;
use crate::ops::view::contiguous::copy_op;
use crate::ops::view::expand::expand_op;
use crate::ops::view::unfold::unfold_op;
use crate::tensor::create::zeros_dtype;
use crate::tensor::Tensor;
use log::debug;
use std::iter;

/// Tiles `tensor`: axis `i` of the result is `repeats[i]` copies of the
/// (left-padded with 1s) input axis.
///
/// The result is allocated once. It is then aliased through one `unfold` per
/// axis so that the broadcast input can be written into every tile with a
/// single copy.
///
/// # Errors
/// - `RankError` if `repeats` has fewer entries than `tensor` has axes.
/// - `InvalidArgument` for a negative entry, or when the result would hold
///   more than `usize::MAX` elements.
pub fn repeat_op(tensor: &Tensor, repeats: &[isize]) -> Result<Tensor, StrideViewError> {
    let shape = tensor.shape();
    if repeats.len() < shape.len() {
        return Err(StrideViewError::RankError {
            operation: "repeat".to_string(),
            rank: shape.len(),
            reason: format!(
                "number of repeat dims ({}) can not be smaller than number of tensor dims",
                repeats.len()
            ),
        });
    }
    if let Some(&r) = repeats.iter().find(|&&r| r < 0) {
        return Err(StrideViewError::InvalidArgument {
            operation: "repeat".to_string(),
            message: format!("repeats must be non-negative, got {}", r),
        });
    }

    let padded: Vec<usize> = iter::repeat(1)
        .take(repeats.len() - shape.len())
        .chain(shape.iter().copied())
        .collect();
    let target: Option<Vec<usize>> = padded
        .iter()
        .zip(repeats)
        .map(|(&p, &r)| p.checked_mul(r as usize))
        .collect();
    let target = target
        .filter(|t| t.iter().try_fold(1usize, |n, &s| n.checked_mul(s)).is_some())
        .ok_or_else(|| StrideViewError::InvalidArgument {
            operation: "repeat".to_string(),
            message: format!("repeats {:?} of shape {:?} overflow the element count", repeats, shape),
        })?;
    let padded_sizes: Vec<isize> = padded.iter().map(|&p| p as isize).collect();
    let source = expand_op(tensor, &padded_sizes)?;

    debug!("repeat: allocating {:?}", target);
    let result = zeros_dtype(&target, tensor.dtype())?;
    if result.numel() == 0 {
        return Ok(result);
    }
    let mut tiles = result.clone();
    for (axis, &size) in padded.iter().enumerate() {
        tiles = unfold_op(&tiles, axis as isize, size, size.max(1))?;
    }
    copy_op(&tiles, &source)?;
    Ok(result)
}
