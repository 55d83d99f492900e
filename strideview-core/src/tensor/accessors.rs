// src/tensor/accessors.rs
use crate::{
    buffer::Element,
    error::StrideViewError,
    layout::Layout,
    ops::view::utils::wrap_dim,
    tensor::iter_utils::strided_offsets,
    tensor::Tensor,
    tensor_data::TensorRepr,
    types::DType,
};
use std::sync::Arc;

impl Tensor {
    /// Returns a clone of the tensor's shape (sizes).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns a clone of the tensor's strides.
    ///
    /// Sparse tensors have no strides and report an empty vector.
    pub fn strides(&self) -> Vec<usize> {
        match &self.read_data().repr {
            TensorRepr::Strided(s) => s.strides.clone(),
            TensorRepr::SparseCoo(_) => Vec::new(),
        }
    }

    /// Returns the element offset of logical position `(0, ..., 0)` in storage.
    pub fn storage_offset(&self) -> usize {
        match &self.read_data().repr {
            TensorRepr::Strided(s) => s.offset,
            TensorRepr::SparseCoo(_) => 0,
        }
    }

    pub fn dtype(&self) -> DType {
        self.read_data().dtype
    }

    pub fn layout(&self) -> Layout {
        self.read_data().layout()
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Alias of [`rank`](Tensor::rank).
    pub fn dim(&self) -> usize {
        self.rank()
    }

    /// Returns the total number of elements. A rank-0 tensor has one element.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Size of dimension `dim` (negative values count from the end).
    pub fn size(&self, dim: isize) -> Result<usize, StrideViewError> {
        let guard = self.read_data();
        let d = wrap_dim(dim, guard.shape.len())?;
        Ok(guard.shape[d])
    }

    /// Stride of dimension `dim` (negative values count from the end).
    pub fn stride(&self, dim: isize) -> Result<usize, StrideViewError> {
        let guard = self.read_data();
        let strided = guard.strided("stride")?;
        let d = wrap_dim(dim, guard.shape.len())?;
        Ok(strided.strides[d])
    }

    /// Checks if the tensor is contiguous in memory (row-major, no gaps).
    pub fn is_contiguous(&self) -> bool {
        self.read_data().is_contiguous()
    }

    /// `true` if this handle aliases storage allocated for another tensor.
    ///
    /// Results of the reshape copy fallback and of materializing operations are
    /// detached copies and report `false`.
    pub fn is_view(&self) -> bool {
        self.read_data().is_view
    }

    /// `true` if both tensors are backed by the same storage buffer.
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        let a = self.read_data().buffer().cloned();
        let b = other.read_data().buffer().cloned();
        match (a, b) {
            (Some(x), Some(y)) => Arc::ptr_eq(&x, &y),
            _ => false,
        }
    }

    /// Copies the elements into a `Vec` in logical row-major order.
    ///
    /// Works for any strided geometry (transposed, broadcast, sliced).
    pub fn get_data<T: Element>(&self) -> Result<Vec<T>, StrideViewError> {
        let guard = self.read_data();
        if guard.dtype != T::DTYPE {
            return Err(StrideViewError::DataTypeMismatch {
                operation: "get_data".to_string(),
                expected: T::DTYPE,
                actual: guard.dtype,
            });
        }
        let strided = guard.strided("get_data")?;
        let offsets = strided_offsets(&guard.shape, &strided.strides, strided.offset);
        strided.buffer.read_elements::<T>(&offsets)
    }

    pub fn get_f32_data(&self) -> Result<Vec<f32>, StrideViewError> {
        self.get_data::<f32>()
    }

    pub fn get_f64_data(&self) -> Result<Vec<f64>, StrideViewError> {
        self.get_data::<f64>()
    }

    pub fn get_i64_data(&self) -> Result<Vec<i64>, StrideViewError> {
        self.get_data::<i64>()
    }

    /// Reads the element at the given logical indices.
    pub fn at<T: Element>(&self, indices: &[usize]) -> Result<T, StrideViewError> {
        let guard = self.read_data();
        let offset = guard.get_offset(indices)?;
        let strided = guard.strided("at")?;
        let values = strided.buffer.read_elements::<T>(&[offset])?;
        values
            .first()
            .copied()
            .ok_or_else(|| StrideViewError::InternalError("at: no element read".to_string()))
    }

    pub fn at_f32(&self, indices: &[usize]) -> Result<f32, StrideViewError> {
        self.at::<f32>(indices)
    }

    /// Writes one element through this handle. Every tensor sharing the
    /// storage observes the write.
    pub fn set<T: Element>(&self, indices: &[usize], value: T) -> Result<(), StrideViewError> {
        let guard = self.read_data();
        let offset = guard.get_offset(indices)?;
        let strided = guard.strided("set")?;
        strided.buffer.write_elements::<T>(&[offset], &[value])
    }

    pub fn set_f32(&self, indices: &[usize], value: f32) -> Result<(), StrideViewError> {
        self.set::<f32>(indices, value)
    }

    /// Extracts the single value of a one-element F32 tensor.
    pub fn item_f32(&self) -> Result<f32, StrideViewError> {
        let numel = self.numel();
        if numel != 1 {
            return Err(StrideViewError::SizeMismatch {
                operation: "item_f32".to_string(),
                expected: "1 element".to_string(),
                actual: format!("{} elements (shape {:?})", numel, self.shape()),
            });
        }
        let data = self.get_f32_data()?;
        data.first()
            .copied()
            .ok_or_else(|| StrideViewError::InternalError("item_f32: no element read".to_string()))
    }

    /// Index tensor (`[sparse_dims, nnz]`, I64) of a sparse COO tensor.
    pub fn sparse_indices(&self) -> Result<Tensor, StrideViewError> {
        match &self.read_data().repr {
            TensorRepr::SparseCoo(coo) => Ok(coo.indices.clone()),
            TensorRepr::Strided(_) => Err(StrideViewError::UnsupportedLayout {
                operation: "sparse_indices".to_string(),
                layout: Layout::Strided,
            }),
        }
    }

    /// Values tensor (`[nnz, dense sizes...]`) of a sparse COO tensor.
    pub fn sparse_values(&self) -> Result<Tensor, StrideViewError> {
        match &self.read_data().repr {
            TensorRepr::SparseCoo(coo) => Ok(coo.values.clone()),
            TensorRepr::Strided(_) => Err(StrideViewError::UnsupportedLayout {
                operation: "sparse_values".to_string(),
                layout: Layout::Strided,
            }),
        }
    }

    /// `(sparse_dims, dense_dims)` of a sparse COO tensor, `None` when dense.
    pub fn sparse_dims(&self) -> Option<(usize, usize)> {
        match &self.read_data().repr {
            TensorRepr::SparseCoo(coo) => Some((coo.sparse_dims, coo.dense_dims)),
            TensorRepr::Strided(_) => None,
        }
    }
}
