use crate::error::StrideViewError;
use crate::ops::view::as_strided::{geometry_of, set_geometry, view_with_geometry};
use crate::ops::view::contiguous::{copy_op, materialize_op};
use crate::ops::view::slice::select_op;
use crate::ops::view::utils::wrap_dim;
use crate::tensor::Tensor;
use crate::tensor_data::{SparseCooRepr, TensorData, TensorRepr};
use log::debug;

/// Swaps two dimensions of the tensor.
///
/// Dense tensors get a view with the two sizes and strides exchanged; equal
/// dimensions return the input handle itself. Sparse COO tensors have no
/// strides: the result is a copy whose index rows are swapped instead.
pub fn transpose_op(tensor: &Tensor, dim0: isize, dim1: isize) -> Result<Tensor, StrideViewError> {
    let rank = tensor.rank();
    let d0 = wrap_dim(dim0, rank)?;
    let d1 = wrap_dim(dim1, rank)?;
    if d0 == d1 {
        return Ok(tensor.clone());
    }
    if tensor.sparse_dims().is_some() {
        let copy = sparse_clone(tensor)?;
        sparse_transpose_inplace(&copy, d0, d1)?;
        return Ok(copy);
    }
    let geometry = geometry_of(tensor, "transpose")?.transpose(d0, d1);
    view_with_geometry(tensor, "transpose", geometry)
}

/// In-place variant of [`transpose_op`]. Sparse tensors have their index
/// storage rewritten.
pub fn transpose_inplace_op(tensor: &Tensor, dim0: isize, dim1: isize) -> Result<(), StrideViewError> {
    let rank = tensor.rank();
    let d0 = wrap_dim(dim0, rank)?;
    let d1 = wrap_dim(dim1, rank)?;
    if d0 == d1 {
        return Ok(());
    }
    if tensor.sparse_dims().is_some() {
        return sparse_transpose_inplace(tensor, d0, d1);
    }
    let geometry = geometry_of(tensor, "transpose_")?.transpose(d0, d1);
    set_geometry(tensor, "transpose_", geometry)
}

fn check_t(tensor: &Tensor, operation: &str) -> Result<(), StrideViewError> {
    match tensor.sparse_dims() {
        Some((sparse_dims, dense_dims)) => {
            if sparse_dims != 2 || dense_dims != 0 {
                return Err(StrideViewError::RankError {
                    operation: operation.to_string(),
                    rank: tensor.rank(),
                    reason: format!(
                        "expects a tensor with 2 sparse and 0 dense dimensions, but got {} sparse and {} dense dimensions",
                        sparse_dims, dense_dims
                    ),
                });
            }
        }
        None => {
            if tensor.rank() != 2 {
                return Err(StrideViewError::RankError {
                    operation: operation.to_string(),
                    rank: tensor.rank(),
                    reason: "expects a 2D tensor".to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Transpose of a matrix: `transpose(0, 1)` restricted to 2-D tensors
/// (or sparse tensors with 2 sparse and 0 dense dimensions).
pub fn t_op(tensor: &Tensor) -> Result<Tensor, StrideViewError> {
    check_t(tensor, "t")?;
    transpose_op(tensor, 0, 1)
}

pub fn t_inplace_op(tensor: &Tensor) -> Result<(), StrideViewError> {
    check_t(tensor, "t_")?;
    transpose_inplace_op(tensor, 0, 1)
}

fn sparse_parts(tensor: &Tensor) -> Result<SparseCooRepr, StrideViewError> {
    match &tensor.read_data().repr {
        TensorRepr::SparseCoo(coo) => Ok(coo.clone()),
        TensorRepr::Strided(_) => Err(StrideViewError::InternalError(
            "sparse transpose called on a strided tensor".to_string(),
        )),
    }
}

/// Deep copy of a sparse tensor: indices and values get fresh storage.
fn sparse_clone(tensor: &Tensor) -> Result<Tensor, StrideViewError> {
    let coo = sparse_parts(tensor)?;
    debug!("transpose: cloning sparse tensor of shape {:?}", tensor.shape());
    Ok(Tensor::from_data(TensorData {
        dtype: tensor.dtype(),
        shape: tensor.shape(),
        repr: TensorRepr::SparseCoo(SparseCooRepr {
            indices: materialize_op(&coo.indices)?,
            values: materialize_op(&coo.values)?,
            sparse_dims: coo.sparse_dims,
            dense_dims: coo.dense_dims,
        }),
        is_view: false,
    }))
}

/// Swaps rows `d0` and `d1` of the index tensor and the matching sizes.
/// Both dimensions must be sparse ones.
fn sparse_transpose_inplace(tensor: &Tensor, d0: usize, d1: usize) -> Result<(), StrideViewError> {
    let coo = sparse_parts(tensor)?;
    if d0 >= coo.sparse_dims || d1 >= coo.sparse_dims {
        return Err(StrideViewError::InvalidArgument {
            operation: "sparse transpose".to_string(),
            message: format!(
                "transposed dimensions must be sparse. Got sparse_dims: {}, d0: {}, d1: {}",
                coo.sparse_dims, d0, d1
            ),
        });
    }

    if coo.indices.numel() != 0 || coo.values.numel() != 0 {
        let row0 = select_op(&coo.indices, 0, d0 as isize)?;
        let row1 = select_op(&coo.indices, 0, d1 as isize)?;
        let saved = materialize_op(&row0)?;
        copy_op(&row0, &row1)?;
        copy_op(&row1, &saved)?;
    }

    tensor.write_data().shape.swap(d0, d1);
    Ok(())
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
