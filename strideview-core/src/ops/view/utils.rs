use crate::error::StrideViewError;

/// Normalizes a possibly negative dimension index against `rank`.
///
/// `d' = d + rank` when `d < 0`. Fails with `DimensionOutOfRange` unless
/// `0 <= d' < rank`; on a rank-0 tensor every dimension is rejected.
pub fn wrap_dim(dim: isize, rank: usize) -> Result<usize, StrideViewError> {
    let rank_i = rank as isize;
    let wrapped = if dim < 0 { dim + rank_i } else { dim };
    if wrapped < 0 || wrapped >= rank_i {
        return Err(StrideViewError::DimensionOutOfRange {
            dim,
            min: -rank_i,
            max: rank_i - 1,
        });
    }
    Ok(wrapped as usize)
}

/// Like [`wrap_dim`] but treats a rank-0 tensor as rank 1, so `0` and `-1`
/// are accepted. Only for operations that handle the scalar case themselves.
pub fn wrap_dim_scalar(dim: isize, rank: usize) -> Result<usize, StrideViewError> {
    wrap_dim(dim, rank.max(1))
}

/// Wraps and validates a list of dimensions, rejecting duplicates.
pub(crate) fn wrap_dims_unique(
    operation: &str,
    dims: &[isize],
    rank: usize,
) -> Result<Vec<usize>, StrideViewError> {
    let mut seen = vec![false; rank];
    let mut wrapped = Vec::with_capacity(dims.len());
    for &d in dims {
        let w = wrap_dim(d, rank)?;
        if seen[w] {
            return Err(StrideViewError::RepeatedDimension {
                operation: operation.to_string(),
                dims: dims.to_vec(),
            });
        }
        seen[w] = true;
        wrapped.push(w);
    }
    Ok(wrapped)
}

/// Normalizes a slice bound: negative values count from the end, then the
/// result is clamped into `[0, dim_size]`.
pub(crate) fn clamp_index(idx: isize, dim_size: usize) -> usize {
    if idx >= 0 {
        std::cmp::min(idx as usize, dim_size)
    } else {
        let abs_idx = idx.unsigned_abs();
        if abs_idx > dim_size {
            0
        } else {
            dim_size - abs_idx
        }
    }
}

/// Resolves a proposed shape that may contain a single `-1` wildcard against
/// the element count `numel`.
///
/// # Errors
/// - `AmbiguousShape` if more than one entry is `-1`.
/// - `InvalidArgument` for any other negative entry, or when a wildcard is
///   requested for a zero-element tensor with another zero-sized entry
///   (the wildcard could be any value).
/// - `SizeMismatch` when the explicit sizes cannot produce `numel` elements.
pub fn infer_size(shape: &[isize], numel: usize) -> Result<Vec<usize>, StrideViewError> {
    let mut infer_dim: Option<usize> = None;
    for (dim, &s) in shape.iter().enumerate() {
        if s == -1 {
            if infer_dim.is_some() {
                return Err(StrideViewError::AmbiguousShape {
                    shape: shape.to_vec(),
                });
            }
            infer_dim = Some(dim);
        } else if s < 0 {
            return Err(StrideViewError::InvalidArgument {
                operation: "reshape".to_string(),
                message: format!("invalid shape dimension {}", s),
            });
        }
    }

    let mut result: Vec<usize> = shape.iter().map(|&s| s.max(0) as usize).collect();
    let explicit: Vec<usize> = result
        .iter()
        .enumerate()
        .filter(|&(dim, _)| Some(dim) != infer_dim)
        .map(|(_, &s)| s)
        .collect();
    // A product past usize::MAX can never match `numel`.
    let new_size = if explicit.contains(&0) {
        Some(0)
    } else {
        explicit.iter().try_fold(1usize, |p, &s| p.checked_mul(s))
    };
    let Some(new_size) = new_size else {
        return Err(StrideViewError::SizeMismatch {
            operation: "reshape".to_string(),
            expected: format!("shape compatible with {} elements", numel),
            actual: format!("{:?}", shape),
        });
    };
    if numel == new_size || (infer_dim.is_some() && new_size > 0 && numel % new_size == 0) {
        if let Some(dim) = infer_dim {
            if new_size == 0 {
                return Err(StrideViewError::InvalidArgument {
                    operation: "reshape".to_string(),
                    message: format!(
                        "cannot reshape tensor of 0 elements into shape {:?} because the unspecified dimension size -1 can be any value",
                        shape
                    ),
                });
            }
            result[dim] = numel / new_size;
        }
        return Ok(result);
    }
    Err(StrideViewError::SizeMismatch {
        operation: "reshape".to_string(),
        expected: format!("shape compatible with {} elements", numel),
        actual: format!("{:?}", shape),
    })
}

/// Computes strides that let `new_shape` address the same memory as
/// `(old_shape, old_strides)` without copying, or `None` when no such strides
/// exist.
///
/// Old dimensions are grouped into chunks that are contiguous with respect to
/// each other; every chunk must be matched exactly by a run of new dimensions.
pub fn compute_stride(
    old_shape: &[usize],
    old_strides: &[usize],
    new_shape: &[usize],
) -> Option<Vec<usize>> {
    if old_shape.is_empty() {
        return Some(vec![1; new_shape.len()]);
    }

    let numel: usize = old_shape.iter().product();
    if numel == 0 && old_shape == new_shape {
        return Some(old_strides.to_vec());
    }

    let mut new_strides = vec![0usize; new_shape.len()];
    if numel == 0 {
        for view_d in (0..new_shape.len()).rev() {
            new_strides[view_d] = if view_d == new_shape.len() - 1 {
                1
            } else {
                std::cmp::max(new_shape[view_d + 1], 1) * new_strides[view_d + 1]
            };
        }
        return Some(new_strides);
    }

    let mut view_d = new_shape.len() as isize - 1;
    let mut chunk_base_stride = *old_strides.last()?;
    let mut tensor_numel = 1;
    let mut view_numel = 1;
    for tensor_d in (0..old_shape.len()).rev() {
        tensor_numel *= old_shape[tensor_d];
        let chunk_ends = tensor_d == 0
            || (old_shape[tensor_d - 1] != 1
                && old_strides[tensor_d - 1] != tensor_numel * chunk_base_stride);
        if chunk_ends {
            while view_d >= 0
                && (view_numel < tensor_numel || new_shape[view_d as usize] == 1)
            {
                new_strides[view_d as usize] = view_numel * chunk_base_stride;
                view_numel *= new_shape[view_d as usize];
                view_d -= 1;
            }
            if view_numel != tensor_numel {
                return None;
            }
            if tensor_d > 0 {
                chunk_base_stride = old_strides[tensor_d - 1];
                tensor_numel = 1;
                view_numel = 1;
            }
        }
    }
    if view_d != -1 {
        return None;
    }
    Some(new_strides)
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
