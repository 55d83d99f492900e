// src/tensor/create.rs

use crate::buffer::Buffer;
use crate::error::StrideViewError;
use crate::tensor::Tensor;
use crate::tensor_data::{SparseCooRepr, TensorData, TensorRepr};
use crate::types::DType;

/// Creates a new F32 tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor, StrideViewError> {
    zeros_dtype(shape, DType::F32)
}

/// Creates a zero-filled tensor of the given shape and dtype.
pub fn zeros_dtype(shape: &[usize], dtype: DType) -> Result<Tensor, StrideViewError> {
    let numel: usize = shape.iter().product();
    let buffer = Buffer::zeros(dtype, numel);
    Ok(Tensor::from_data(TensorData::new_owned(buffer, shape.to_vec())))
}

/// Creates a new tensor filled with zeros, having the same shape and dtype as the input tensor.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, StrideViewError> {
    zeros_dtype(&tensor.shape(), tensor.dtype())
}

/// Creates a new F32 tensor filled with `value`.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor, StrideViewError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a 1-D F32 tensor holding `start, start + step, ...` up to `end` (exclusive).
pub fn arange(start: f32, end: f32, step: f32) -> Result<Tensor, StrideViewError> {
    if step == 0.0 || (end > start && step < 0.0) || (end < start && step > 0.0) {
        return Err(StrideViewError::InvalidArgument {
            operation: "arange".to_string(),
            message: format!("invalid step {} for range [{}, {})", step, start, end),
        });
    }
    let numel = ((end - start) / step).ceil().max(0.0) as usize;
    let data_vec: Vec<f32> = (0..numel).map(|i| start + i as f32 * step).collect();
    Tensor::new(data_vec, vec![numel])
}

/// Builds a coordinate-format sparse tensor.
///
/// `indices` is an I64 tensor of shape `[sparse_dims, nnz]`, `values` has shape
/// `[nnz, dense sizes...]`. The first `sparse_dims` entries of `shape` are
/// addressed by the indices, the remaining ones must equal the dense sizes of
/// `values`. Every coordinate is bounds-checked.
///
/// Contiguous `indices` and `values` are stored as given, not copied: the
/// sparse tensor shares their storage, and an in-place
/// [`Tensor::transpose_`] on it rewrites the caller's index tensor. Pass
/// [`Tensor::materialize`]d inputs to keep them independent.
pub fn sparse_coo(
    indices: &Tensor,
    values: &Tensor,
    shape: Vec<usize>,
) -> Result<Tensor, StrideViewError> {
    let op = "sparse_coo";
    if indices.dtype() != DType::I64 {
        return Err(StrideViewError::DataTypeMismatch {
            operation: op.to_string(),
            expected: DType::I64,
            actual: indices.dtype(),
        });
    }
    let index_shape = indices.shape();
    if index_shape.len() != 2 {
        return Err(StrideViewError::RankError {
            operation: op.to_string(),
            rank: index_shape.len(),
            reason: "indices must have shape [sparse_dims, nnz]".to_string(),
        });
    }
    let value_shape = values.shape();
    if value_shape.is_empty() {
        return Err(StrideViewError::RankError {
            operation: op.to_string(),
            rank: 0,
            reason: "values must have shape [nnz, dense sizes...]".to_string(),
        });
    }
    let (sparse_dims, nnz) = (index_shape[0], index_shape[1]);
    if value_shape[0] != nnz {
        return Err(StrideViewError::SizeMismatch {
            operation: op.to_string(),
            expected: format!("{} values", nnz),
            actual: format!("{} values", value_shape[0]),
        });
    }
    let dense_dims = value_shape.len() - 1;
    if sparse_dims + dense_dims != shape.len() || value_shape[1..] != shape[sparse_dims..] {
        return Err(StrideViewError::SizeMismatch {
            operation: op.to_string(),
            expected: format!("shape {:?}", shape),
            actual: format!(
                "{} sparse dims with values of shape {:?}",
                sparse_dims, value_shape
            ),
        });
    }

    let coords = indices.get_i64_data()?;
    for (i, &c) in coords.iter().enumerate() {
        let dim = i / nnz.max(1);
        if c < 0 || c as usize >= shape[dim] {
            return Err(StrideViewError::IndexOutOfRange {
                operation: op.to_string(),
                index: c as isize,
                dim,
                size: shape[dim],
            });
        }
    }

    Ok(Tensor::from_data(TensorData {
        dtype: values.dtype(),
        shape,
        repr: TensorRepr::SparseCoo(SparseCooRepr {
            indices: indices.contiguous()?,
            values: values.contiguous()?,
            sparse_dims,
            dense_dims,
        }),
        is_view: false,
    }))
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
