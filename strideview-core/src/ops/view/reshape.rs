use crate::error::StrideViewError;
use crate::ops::view::as_strided::{geometry_of, view_with_geometry};
use crate::ops::view::contiguous::gather_contiguous;
use crate::ops::view::geometry::Geometry;
use crate::ops::view::utils::{compute_stride, infer_size, wrap_dim_scalar};
use crate::policy;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use log::debug;

fn resolve_shape(shape: &[isize], numel: usize) -> Result<Vec<usize>, StrideViewError> {
    let sizes = infer_size(shape, numel)?;
    if policy::collapse_empty_shapes() && numel == 0 {
        return Ok(policy::canonical_empty_shape());
    }
    Ok(sizes)
}

fn to_isize(shape: &[usize]) -> Vec<isize> {
    shape.iter().map(|&s| s as isize).collect()
}

/// Returns a tensor with the same elements as `tensor` and the given shape.
///
/// At most one entry of `shape` may be `-1`; it is inferred from the element
/// count. The result is a view whenever the current strides allow the new
/// shape to address the same memory, and a detached contiguous copy
/// (`is_view() == false`) otherwise.
///
/// # Errors
/// - `UnsupportedLayout` for sparse tensors.
/// - `AmbiguousShape`, `InvalidArgument` or `SizeMismatch` from size inference.
///
/// # Example
/// ```
/// use strideview_core::tensor;
/// let t = tensor::arange(0.0, 6.0, 1.0).unwrap();
/// let r = t.reshape(&[2, -1]).unwrap();
/// assert_eq!(r.shape(), vec![2, 3]);
/// assert!(r.shares_storage(&t));
///
/// // A transposed tensor cannot be flattened without a copy.
/// let f = r.t().unwrap().reshape(&[-1]).unwrap();
/// assert!(!f.shares_storage(&t));
/// assert_eq!(f.get_f32_data().unwrap(), vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
/// ```
pub fn reshape_op(tensor: &Tensor, shape: &[isize]) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "reshape")?;
    let sizes = resolve_shape(shape, geometry.numel())?;
    match compute_stride(&geometry.sizes, &geometry.strides, &sizes) {
        Some(strides) => view_with_geometry(
            tensor,
            "reshape",
            Geometry::new(sizes, strides, geometry.offset),
        ),
        None => {
            debug!(
                "reshape: strides {:?} of shape {:?} incompatible with {:?}, copying",
                geometry.strides, geometry.sizes, sizes
            );
            let buffer = gather_contiguous(tensor, "reshape")?;
            Ok(Tensor::from_data(TensorData::new_owned(buffer, sizes)))
        }
    }
}

/// Reshapes `tensor` to the shape of `other`.
pub fn reshape_as_op(tensor: &Tensor, other: &Tensor) -> Result<Tensor, StrideViewError> {
    reshape_op(tensor, &to_isize(&other.shape()))
}

/// Like [`reshape_op`] but never copies.
///
/// # Errors
/// `IncompatibleView` when the new shape cannot be expressed over the current
/// strides, plus every error of [`reshape_op`].
pub fn view_op(tensor: &Tensor, shape: &[isize]) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "view")?;
    let sizes = resolve_shape(shape, geometry.numel())?;
    let strides = compute_stride(&geometry.sizes, &geometry.strides, &sizes).ok_or_else(|| {
        StrideViewError::IncompatibleView {
            shape: geometry.sizes.clone(),
            strides: geometry.strides.clone(),
            target: sizes.clone(),
        }
    })?;
    view_with_geometry(tensor, "view", Geometry::new(sizes, strides, geometry.offset))
}

pub fn view_as_op(tensor: &Tensor, other: &Tensor) -> Result<Tensor, StrideViewError> {
    view_op(tensor, &to_isize(&other.shape()))
}

/// Merges axes `start_dim..=end_dim` into one.
///
/// Both dims are wrapped as if a rank-0 tensor had one axis. When
/// `start_dim == end_dim` after wrapping the input handle itself is returned,
/// which is always the case for a rank-0 tensor.
pub fn flatten_op(tensor: &Tensor, start_dim: isize, end_dim: isize) -> Result<Tensor, StrideViewError> {
    let shape = tensor.shape();
    let start = wrap_dim_scalar(start_dim, shape.len())?;
    let end = wrap_dim_scalar(end_dim, shape.len())?;
    if start > end {
        return Err(StrideViewError::InvalidArgument {
            operation: "flatten".to_string(),
            message: format!(
                "start_dim ({}) cannot come after end_dim ({})",
                start, end
            ),
        });
    }
    if start == end {
        return Ok(tensor.clone());
    }

    let merged: usize = shape[start..=end].iter().product();
    let mut new_shape = Vec::with_capacity(shape.len() - (end - start));
    new_shape.extend_from_slice(&to_isize(&shape[..start]));
    new_shape.push(merged as isize);
    new_shape.extend_from_slice(&to_isize(&shape[end + 1..]));
    reshape_op(tensor, &new_shape)
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
