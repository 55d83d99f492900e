// src/tensor/mod.rs

use crate::buffer::Element;
use crate::error::StrideViewError;
use crate::tensor_data::TensorData;
use std::sync::{Arc, RwLock};

mod accessors;
pub mod create;
mod join_methods;
mod split_methods;
mod traits;
mod view_methods;

pub mod iter_utils;
pub mod utils;

pub use create::{arange, full, sparse_coo, zeros, zeros_dtype, zeros_like};

/// Represents a multi-dimensional array (tensor) handle.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally:
/// 1.  **Shared Ownership:** cloning a `Tensor` clones the handle. In-place
///     operations (`squeeze_`, `transpose_`, `as_strided_`, ...) change the
///     geometry seen by every clone.
/// 2.  **Views:** view operations build a *new* `TensorData` whose buffer `Arc`
///     is shared with the source, so element writes through a view are visible
///     through the source and vice versa.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new contiguous F32 tensor with the given data and shape.
    ///
    /// # Example
    /// ```
    /// use strideview_core::Tensor;
    /// let t = Tensor::new(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    /// assert_eq!(t.shape(), vec![2, 3]);
    /// assert_eq!(t.strides(), vec![3, 1]);
    /// ```
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, StrideViewError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new contiguous F64 tensor.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, StrideViewError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new contiguous I64 tensor.
    pub fn new_i64(data_vec: Vec<i64>, shape: Vec<usize>) -> Result<Self, StrideViewError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new contiguous tensor of any supported element type.
    pub fn from_vec<T: Element>(data_vec: Vec<T>, shape: Vec<usize>) -> Result<Self, StrideViewError> {
        let tensor_data = TensorData::new(data_vec, shape)?;
        Ok(Self::from_data(tensor_data))
    }

    pub(crate) fn from_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Acquires a read lock on the tensor's metadata.
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's metadata.
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }
}
