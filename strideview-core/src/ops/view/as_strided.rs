use crate::buffer::Buffer;
use crate::error::StrideViewError;
use crate::layout::Layout;
use crate::ops::view::geometry::Geometry;
use crate::tensor::utils::max_reachable_offset;
use crate::tensor::Tensor;
use crate::tensor_data::{TensorData, TensorRepr};
use log::trace;
use std::sync::Arc;

fn check_geometry(
    operation: &str,
    geometry: &Geometry,
    buffer: &Buffer,
) -> Result<(), StrideViewError> {
    if geometry.sizes.len() != geometry.strides.len() {
        return Err(StrideViewError::RankError {
            operation: operation.to_string(),
            rank: geometry.sizes.len(),
            reason: format!(
                "mismatch in length of sizes ({}) and strides ({})",
                geometry.sizes.len(),
                geometry.strides.len()
            ),
        });
    }
    if geometry.sizes.iter().try_fold(1usize, |n, &s| n.checked_mul(s)).is_none() {
        return Err(StrideViewError::InvalidArgument {
            operation: operation.to_string(),
            message: format!("sizes {:?} overflow the element count", geometry.sizes),
        });
    }
    if let Some(max_offset) =
        max_reachable_offset(&geometry.sizes, &geometry.strides, geometry.offset)
    {
        let available = buffer.len()?;
        if max_offset >= available {
            return Err(StrideViewError::StorageOutOfBounds {
                required: max_offset.saturating_add(1),
                available,
            });
        }
    }
    Ok(())
}

/// Builds a new handle over `tensor`'s storage with exactly `geometry`.
///
/// Every zero-copy operation of the crate ends here. The geometry is checked
/// against the storage length before the handle is created.
pub(crate) fn view_with_geometry(
    tensor: &Tensor,
    operation: &str,
    geometry: Geometry,
) -> Result<Tensor, StrideViewError> {
    let buffer = {
        let guard = tensor.read_data();
        Arc::clone(&guard.strided(operation)?.buffer)
    };
    check_geometry(operation, &geometry, &buffer)?;
    trace!(
        "{}: view sizes={:?} strides={:?} offset={}",
        operation,
        geometry.sizes,
        geometry.strides,
        geometry.offset
    );
    let view = TensorData::new_view(buffer, geometry.offset, geometry.sizes, geometry.strides);
    Ok(Tensor::from_data(view))
}

/// Replaces the geometry of `tensor` in place. Validation runs first, so a
/// failed call leaves the handle untouched.
pub(crate) fn set_geometry(
    tensor: &Tensor,
    operation: &str,
    geometry: Geometry,
) -> Result<(), StrideViewError> {
    let mut guard = tensor.write_data();
    let data = &mut *guard;
    let strided = match &mut data.repr {
        TensorRepr::Strided(s) => s,
        TensorRepr::SparseCoo(_) => {
            return Err(StrideViewError::UnsupportedLayout {
                operation: operation.to_string(),
                layout: Layout::SparseCoo,
            })
        }
    };
    check_geometry(operation, &geometry, &strided.buffer)?;
    trace!(
        "{}: in place sizes={:?} strides={:?} offset={}",
        operation,
        geometry.sizes,
        geometry.strides,
        geometry.offset
    );
    data.shape = geometry.sizes;
    strided.strides = geometry.strides;
    strided.offset = geometry.offset;
    Ok(())
}

/// Current geometry of a strided tensor, or `UnsupportedLayout` naming `operation`.
pub(crate) fn geometry_of(tensor: &Tensor, operation: &str) -> Result<Geometry, StrideViewError> {
    let guard = tensor.read_data();
    let strided = guard.strided(operation)?;
    Ok(Geometry::new(
        guard.shape.clone(),
        strided.strides.clone(),
        strided.offset,
    ))
}

/// Creates a view of `tensor` with the given sizes, strides and storage
/// offset. `storage_offset` defaults to the tensor's current offset.
///
/// # Errors
/// - `UnsupportedLayout` for sparse tensors.
/// - `RankError` if `size` and `stride` differ in length.
/// - `StorageOutOfBounds` if the geometry reaches past the end of the storage.
pub fn as_strided_op(
    tensor: &Tensor,
    size: &[usize],
    stride: &[usize],
    storage_offset: Option<usize>,
) -> Result<Tensor, StrideViewError> {
    let offset = match storage_offset {
        Some(o) => o,
        None => geometry_of(tensor, "as_strided")?.offset,
    };
    view_with_geometry(
        tensor,
        "as_strided",
        Geometry::new(size.to_vec(), stride.to_vec(), offset),
    )
}

/// In-place variant of [`as_strided_op`]: rewrites the handle's geometry.
pub fn as_strided_inplace_op(
    tensor: &Tensor,
    size: &[usize],
    stride: &[usize],
    storage_offset: Option<usize>,
) -> Result<(), StrideViewError> {
    let offset = match storage_offset {
        Some(o) => o,
        None => geometry_of(tensor, "as_strided_")?.offset,
    };
    set_geometry(
        tensor,
        "as_strided_",
        Geometry::new(size.to_vec(), stride.to_vec(), offset),
    )
}

#[cfg(test)]
#[path = "as_strided_test.rs"]
mod tests;
