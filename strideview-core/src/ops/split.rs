use crate::error::StrideViewError;
use crate::ops::view::slice::{narrow_op, select_op};
use crate::ops::view::utils::wrap_dim;
use crate::policy;
use crate::tensor::Tensor;

fn checked_axis(tensor: &Tensor, operation: &str, dim: isize) -> Result<(usize, usize), StrideViewError> {
    let shape = tensor.shape();
    if shape.is_empty() {
        return Err(StrideViewError::RankError {
            operation: operation.to_string(),
            rank: 0,
            reason: format!("{} expects at least a 1-dimensional tensor", operation),
        });
    }
    let d = wrap_dim(dim, shape.len())?;
    Ok((d, shape[d]))
}

/// Splits `tensor` into views of `split_size` elements along `dim`; the last
/// piece holds the remainder.
///
/// `split_size == 0` is only accepted when the axis is empty, in which case a
/// single piece is returned. A `split_size` larger than the axis also yields
/// a single piece.
pub fn split_op(tensor: &Tensor, split_size: isize, dim: isize) -> Result<Vec<Tensor>, StrideViewError> {
    let (d, dim_size) = checked_axis(tensor, "split", dim)?;
    let dim_size = dim_size as isize;
    if split_size < 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "split".to_string(),
            message: format!("split_size must be non-negative, got {}", split_size),
        });
    }
    if split_size == 0 && dim_size != 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "split".to_string(),
            message: format!(
                "split_size can only be 0 if dimension size is 0, but got dimension size of {}",
                dim_size
            ),
        });
    }
    let num_splits = if split_size == 0 {
        1
    } else {
        (dim_size as usize).div_ceil(split_size as usize).max(1) as isize
    };
    let last_split_size = dim_size - split_size * (num_splits - 1);

    (0..num_splits)
        .map(|i| {
            let length = if i < num_splits - 1 { split_size } else { last_split_size };
            narrow_op(tensor, d as isize, i * split_size, length)
        })
        .collect()
}

/// Splits `tensor` along `dim` into consecutive views of the given lengths.
///
/// # Errors
/// - `InvalidArgument` for a negative length.
/// - `SizeMismatch` if the lengths do not sum to the axis size.
/// - `InvalidArgument` for a zero length on a non-empty axis under the legacy
///   empty-shape policy, where `narrow` cannot express an empty piece.
///
/// All of these are checked before any view is built.
pub fn split_with_sizes_op(
    tensor: &Tensor,
    split_sizes: &[isize],
    dim: isize,
) -> Result<Vec<Tensor>, StrideViewError> {
    let (d, dim_size) = checked_axis(tensor, "split_with_sizes", dim)?;
    if split_sizes.iter().any(|&s| s < 0) {
        return Err(StrideViewError::InvalidArgument {
            operation: "split_with_sizes".to_string(),
            message: format!("split_sizes must be non-negative, got {:?}", split_sizes),
        });
    }
    let total = split_sizes.iter().try_fold(0isize, |acc, &s| acc.checked_add(s));
    if total != Some(dim_size as isize) {
        return Err(StrideViewError::SizeMismatch {
            operation: "split_with_sizes".to_string(),
            expected: format!("sizes summing to {} (size of dimension {})", dim_size, d),
            actual: format!("{:?}", split_sizes),
        });
    }
    if policy::collapse_empty_shapes() && dim_size != 0 && split_sizes.contains(&0) {
        return Err(StrideViewError::InvalidArgument {
            operation: "split_with_sizes".to_string(),
            message: format!(
                "zero-length pieces {:?} are not supported on non-empty dimension {}",
                split_sizes, d
            ),
        });
    }

    let mut start = 0;
    let mut pieces = Vec::with_capacity(split_sizes.len());
    for &length in split_sizes {
        pieces.push(narrow_op(tensor, d as isize, start, length)?);
        start += length;
    }
    Ok(pieces)
}

/// Splits `tensor` into `chunks` views of (almost) equal size along `dim`.
///
/// Fewer pieces come back when the axis does not divide evenly, except for an
/// empty axis, which always yields exactly `chunks` empty pieces.
pub fn chunk_op(tensor: &Tensor, chunks: isize, dim: isize) -> Result<Vec<Tensor>, StrideViewError> {
    let (_, dim_size) = checked_axis(tensor, "chunk", dim)?;
    if chunks <= 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "chunk".to_string(),
            message: format!("chunks must be greater than 0, got {}", chunks),
        });
    }
    if dim_size == 0 {
        return split_with_sizes_op(tensor, &vec![0isize; chunks as usize], dim);
    }
    let split_size = dim_size.div_ceil(chunks as usize) as isize;
    split_op(tensor, split_size, dim)
}

/// Removes `dim`, returning one view per index along it.
pub fn unbind_op(tensor: &Tensor, dim: isize) -> Result<Vec<Tensor>, StrideViewError> {
    let (d, dim_size) = checked_axis(tensor, "unbind", dim)?;
    (0..dim_size)
        .map(|i| select_op(tensor, d as isize, i as isize))
        .collect()
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
