// src/tensor_data.rs
use std::fmt::Debug;
use std::sync::Arc;

use crate::buffer::{Buffer, Element};
use crate::error::StrideViewError;
use crate::layout::Layout;
use crate::tensor::utils::calculate_strides;
use crate::tensor::Tensor;
use crate::types::DType;

/// Geometry and storage of a dense, strided tensor.
#[derive(Debug, Clone)]
pub struct StridedRepr {
    /// Shared element storage. Cloning the `Arc` is how views alias memory.
    pub(crate) buffer: Arc<Buffer>,
    /// Element offset delta for a unit step along each dimension.
    pub(crate) strides: Vec<usize>,
    /// Linear index of the element at logical position `(0, ..., 0)`.
    pub(crate) offset: usize,
}

/// Coordinate-format sparse representation.
///
/// `indices` is a dense `I64` tensor of shape `[sparse_dims, nnz]`; column `j`
/// holds the coordinates of the `j`-th stored value. `values` has shape
/// `[nnz, dense sizes...]`.
#[derive(Debug, Clone)]
pub struct SparseCooRepr {
    pub(crate) indices: Tensor,
    pub(crate) values: Tensor,
    pub(crate) sparse_dims: usize,
    pub(crate) dense_dims: usize,
}

/// Layout-specific part of a tensor. Operations with layout-dependent
/// behaviour match on this.
#[derive(Debug, Clone)]
pub enum TensorRepr {
    Strided(StridedRepr),
    SparseCoo(SparseCooRepr),
}

/// Internal metadata of a [`Tensor`] handle.
///
/// Wrapped in `Arc<RwLock<TensorData>>` by `Tensor`, so in-place geometry
/// changes (`squeeze_`, `transpose_`, ...) are visible through every clone of
/// the handle, while views get their own `TensorData` sharing only the buffer.
#[derive(Debug)]
pub struct TensorData {
    pub(crate) dtype: DType,
    /// The sizes of the tensor, one per dimension.
    pub(crate) shape: Vec<usize>,
    pub(crate) repr: TensorRepr,
    /// `true` when this handle aliases storage it did not allocate.
    pub(crate) is_view: bool,
}

impl TensorData {
    /// Creates a contiguous dense tensor owning `data_vec`.
    ///
    /// # Errors
    /// Returns `StrideViewError::TensorCreationError` if the length of `data_vec`
    /// does not match the number of elements implied by `shape`.
    pub fn new<T: Element>(data_vec: Vec<T>, shape: Vec<usize>) -> Result<Self, StrideViewError> {
        let numel: usize = shape.iter().product();
        let data_len = data_vec.len();
        if data_len != numel {
            return Err(StrideViewError::TensorCreationError { data_len, shape });
        }
        let strides = calculate_strides(&shape);
        Ok(TensorData {
            dtype: T::DTYPE,
            shape,
            repr: TensorRepr::Strided(StridedRepr {
                buffer: Arc::new(Buffer::from_vec(data_vec)),
                strides,
                offset: 0,
            }),
            is_view: false,
        })
    }

    /// Creates a `TensorData` over an existing buffer with the given geometry.
    ///
    /// No memory is allocated. The caller is responsible for the geometry being
    /// in bounds; [`as_strided_op`](crate::ops::view::as_strided::as_strided_op)
    /// is the checked entry point.
    pub(crate) fn new_view(
        buffer: Arc<Buffer>,
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<usize>,
    ) -> Self {
        TensorData {
            dtype: buffer.dtype(),
            shape,
            repr: TensorRepr::Strided(StridedRepr {
                buffer,
                strides,
                offset,
            }),
            is_view: true,
        }
    }

    /// Wraps a freshly allocated buffer as a contiguous tensor of `shape`.
    pub(crate) fn new_owned(buffer: Buffer, shape: Vec<usize>) -> Self {
        let strides = calculate_strides(&shape);
        TensorData {
            dtype: buffer.dtype(),
            shape,
            repr: TensorRepr::Strided(StridedRepr {
                buffer: Arc::new(buffer),
                strides,
                offset: 0,
            }),
            is_view: false,
        }
    }

    pub fn layout(&self) -> Layout {
        match self.repr {
            TensorRepr::Strided(_) => Layout::Strided,
            TensorRepr::SparseCoo(_) => Layout::SparseCoo,
        }
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the strided representation, or `UnsupportedLayout` naming `operation`.
    pub(crate) fn strided(&self, operation: &str) -> Result<&StridedRepr, StrideViewError> {
        match &self.repr {
            TensorRepr::Strided(s) => Ok(s),
            TensorRepr::SparseCoo(_) => Err(StrideViewError::UnsupportedLayout {
                operation: operation.to_string(),
                layout: Layout::SparseCoo,
            }),
        }
    }

    /// Provides access to the shared buffer of a dense tensor.
    pub fn buffer(&self) -> Option<&Arc<Buffer>> {
        match &self.repr {
            TensorRepr::Strided(s) => Some(&s.buffer),
            TensorRepr::SparseCoo(_) => None,
        }
    }

    /// Calculates the linear offset into the shared buffer for the given indices.
    pub fn get_offset(&self, indices: &[usize]) -> Result<usize, StrideViewError> {
        let strided = self.strided("get_offset")?;
        if indices.len() != self.shape.len() {
            return Err(StrideViewError::RankError {
                operation: "get_offset".to_string(),
                rank: self.shape.len(),
                reason: format!("got {} indices", indices.len()),
            });
        }
        let mut relative_offset = 0;
        for (dim, (&idx, &size)) in indices.iter().zip(self.shape.iter()).enumerate() {
            if idx >= size {
                return Err(StrideViewError::IndexOutOfRange {
                    operation: "get_offset".to_string(),
                    index: idx as isize,
                    dim,
                    size,
                });
            }
            relative_offset += idx * strided.strides[dim];
        }
        Ok(strided.offset + relative_offset)
    }

    /// Checks if the tensor is laid out in row-major order without gaps.
    /// Dimensions of size 1 are ignored; a tensor with no elements is contiguous.
    /// Sparse tensors are never contiguous.
    pub fn is_contiguous(&self) -> bool {
        let strided = match &self.repr {
            TensorRepr::Strided(s) => s,
            TensorRepr::SparseCoo(_) => return false,
        };
        if self.shape.iter().any(|&s| s == 0) {
            return true;
        }
        let mut expected = 1;
        for i in (0..self.shape.len()).rev() {
            let size = self.shape[i];
            if size != 1 {
                if strided.strides[i] != expected {
                    return false;
                }
                expected *= size;
            }
        }
        true
    }
}
