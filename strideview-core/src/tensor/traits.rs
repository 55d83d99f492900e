// src/tensor/traits.rs

use crate::tensor::Tensor;
use crate::tensor_data::TensorRepr;
use crate::types::DType;
use std::fmt::{self, Debug};
use std::sync::Arc;

impl Clone for Tensor {
    /// Clones the Tensor. This is a shallow clone that increases the reference count
    /// of the underlying shared data. In-place geometry changes through one clone
    /// are visible through the others.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Tensor {
    /// Shows dtype, layout and geometry; element data is not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.read_data();
        match &td.repr {
            TensorRepr::Strided(s) => write!(
                f,
                "Tensor(shape={:?}, strides={:?}, offset={}, dtype={:?}, view={})",
                td.shape, s.strides, s.offset, td.dtype, td.is_view
            ),
            TensorRepr::SparseCoo(coo) => write!(
                f,
                "Tensor(shape={:?}, layout=SparseCoo, sparse_dims={}, dense_dims={}, dtype={:?})",
                td.shape, coo.sparse_dims, coo.dense_dims, td.dtype
            ),
        }
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal when they have the same dtype, layout and shape
    /// and hold the same elements in logical order. Strides and offsets are
    /// not compared.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        if self.dtype() != other.dtype()
            || self.layout() != other.layout()
            || self.shape() != other.shape()
        {
            return false;
        }
        if let (Ok(a), Ok(b)) = (self.sparse_indices(), other.sparse_indices()) {
            return a == b
                && matches!(
                    (self.sparse_values(), other.sparse_values()),
                    (Ok(va), Ok(vb)) if va == vb
                );
        }
        match self.dtype() {
            DType::F32 => self.get_f32_data().ok() == other.get_f32_data().ok(),
            DType::F64 => self.get_f64_data().ok() == other.get_f64_data().ok(),
            DType::I64 => self.get_i64_data().ok() == other.get_i64_data().ok(),
        }
    }
}
