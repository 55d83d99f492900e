use crate::error::StrideViewError;
use crate::ops::view::as_strided::{geometry_of, view_with_geometry};
use crate::ops::view::utils::{clamp_index, wrap_dim};
use crate::policy;
use crate::tensor::create::zeros_dtype;
use crate::tensor::Tensor;

fn check_not_scalar(operation: &str, rank: usize) -> Result<(), StrideViewError> {
    if rank == 0 {
        return Err(StrideViewError::RankError {
            operation: operation.to_string(),
            rank,
            reason: format!("{}() cannot be applied to a 0-dim tensor", operation),
        });
    }
    Ok(())
}

/// Takes every `step`-th element of `[start, end)` along `dim`.
///
/// `start` and `end` may be negative (counted from the end of the axis); both
/// are then clamped into `[0, size]` and `end < start` is treated as an empty
/// range. Under the legacy empty-shape policy a zero-length result is a fresh
/// tensor of shape `[0]` rather than a view.
///
/// # Errors
/// - `RankError` on a rank-0 tensor.
/// - `InvalidArgument` if `step <= 0`.
///
/// # Example
/// ```
/// use strideview_core::tensor;
/// let t = tensor::arange(0.0, 10.0, 1.0).unwrap();
/// let s = t.slice(0, 1, -2, 3).unwrap();
/// assert_eq!(s.get_f32_data().unwrap(), vec![1.0, 4.0, 7.0]);
/// assert_eq!(s.strides(), vec![3]);
/// ```
pub fn slice_op(
    tensor: &Tensor,
    dim: isize,
    start: isize,
    end: isize,
    step: isize,
) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "slice")?;
    check_not_scalar("slice", geometry.rank())?;
    let d = wrap_dim(dim, geometry.rank())?;
    if step <= 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "slice".to_string(),
            message: format!("slice step must be positive, got {}", step),
        });
    }
    let size = geometry.sizes[d];
    let start = clamp_index(start, size);
    let end = clamp_index(end, size).max(start);
    if policy::collapse_empty_shapes() && end == start {
        return zeros_dtype(&policy::canonical_empty_shape(), tensor.dtype());
    }
    view_with_geometry(
        tensor,
        "slice",
        geometry.slice(d, start, end, step as usize),
    )
}

/// Returns the `length` elements starting at `start` along `dim`.
///
/// `start` must be non-negative and `start + length` must not exceed the axis
/// size. Under the legacy empty-shape policy `length` must be positive unless
/// the axis itself is empty.
pub fn narrow_op(
    tensor: &Tensor,
    dim: isize,
    start: isize,
    length: isize,
) -> Result<Tensor, StrideViewError> {
    let rank = tensor.rank();
    check_not_scalar("narrow", rank)?;
    let d = wrap_dim(dim, rank)?;
    let cur_size = tensor.shape()[d];
    if start < 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "narrow".to_string(),
            message: format!("start ({}) out of range", start),
        });
    }
    let min_length = if policy::collapse_empty_shapes() && cur_size != 0 {
        1
    } else {
        0
    };
    if length < min_length || start > cur_size as isize - length {
        return Err(StrideViewError::IndexOutOfRange {
            operation: format!("narrow (start {} + length {})", start, length),
            index: start.saturating_add(length),
            dim: d,
            size: cur_size,
        });
    }
    slice_op(tensor, dim, start, start + length, 1)
}

/// Fixes axis `dim` at `index` and removes it. `index` may be negative.
///
/// # Errors
/// - `RankError` on a rank-0 tensor.
/// - `IndexOutOfRange` unless `-size <= index < size`.
pub fn select_op(tensor: &Tensor, dim: isize, index: isize) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "select")?;
    check_not_scalar("select", geometry.rank())?;
    let d = wrap_dim(dim, geometry.rank())?;
    let size = geometry.sizes[d];
    let size_i = size as isize;
    if index < -size_i || index >= size_i {
        return Err(StrideViewError::IndexOutOfRange {
            operation: "select".to_string(),
            index,
            dim: d,
            size,
        });
    }
    let index = (if index < 0 { index + size_i } else { index }) as usize;
    view_with_geometry(tensor, "select", geometry.select(d, index))
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
