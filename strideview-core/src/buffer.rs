use std::fmt::Debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use num_traits::Zero;

use crate::error::StrideViewError;
use crate::types::DType;

/// Shared element storage backing one or more tensors.
///
/// A `Buffer` is always held behind an `Arc` by
/// [`TensorData`](crate::tensor_data::TensorData); every view derived from a
/// tensor clones that `Arc`, so writes through any of them are observed by all
/// the others. The `RwLock` gives interior mutability without copy-on-write.
#[derive(Debug)]
pub enum Buffer {
    F32(RwLock<Vec<f32>>),
    F64(RwLock<Vec<f64>>),
    I64(RwLock<Vec<i64>>),
}

/// Element types that can live in a [`Buffer`].
pub trait Element: Copy + Zero + Debug + Send + Sync + 'static {
    const DTYPE: DType;

    /// Returns the typed vector if `buffer` holds this element type.
    fn typed(buffer: &Buffer) -> Option<&RwLock<Vec<Self>>>;

    /// Wraps an owned vector into the matching buffer variant.
    fn into_buffer(data: Vec<Self>) -> Buffer;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    fn typed(buffer: &Buffer) -> Option<&RwLock<Vec<f32>>> {
        match buffer {
            Buffer::F32(data) => Some(data),
            _ => None,
        }
    }

    fn into_buffer(data: Vec<f32>) -> Buffer {
        Buffer::F32(RwLock::new(data))
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    fn typed(buffer: &Buffer) -> Option<&RwLock<Vec<f64>>> {
        match buffer {
            Buffer::F64(data) => Some(data),
            _ => None,
        }
    }

    fn into_buffer(data: Vec<f64>) -> Buffer {
        Buffer::F64(RwLock::new(data))
    }
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;

    fn typed(buffer: &Buffer) -> Option<&RwLock<Vec<i64>>> {
        match buffer {
            Buffer::I64(data) => Some(data),
            _ => None,
        }
    }

    fn into_buffer(data: Vec<i64>) -> Buffer {
        Buffer::I64(RwLock::new(data))
    }
}

fn read_lock<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockReadGuard<'_, Vec<T>>, StrideViewError> {
    lock.read().map_err(|e| StrideViewError::LockError {
        lock_type: "read".to_string(),
        reason: format!("buffer lock poisoned: {}", e),
    })
}

fn write_lock<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockWriteGuard<'_, Vec<T>>, StrideViewError> {
    lock.write().map_err(|e| StrideViewError::LockError {
        lock_type: "write".to_string(),
        reason: format!("buffer lock poisoned: {}", e),
    })
}

fn gather_from<T: Element>(
    lock: &RwLock<Vec<T>>,
    offsets: &[usize],
) -> Result<Vec<T>, StrideViewError> {
    let data = read_lock(lock)?;
    offsets
        .iter()
        .map(|&o| {
            data.get(o).copied().ok_or(StrideViewError::StorageOutOfBounds {
                required: o + 1,
                available: data.len(),
            })
        })
        .collect()
}

fn scatter_into<T: Element>(
    lock: &RwLock<Vec<T>>,
    offsets: &[usize],
    values: &[T],
) -> Result<(), StrideViewError> {
    let mut data = write_lock(lock)?;
    let available = data.len();
    if let Some(&max) = offsets.iter().max() {
        if max >= available {
            return Err(StrideViewError::StorageOutOfBounds {
                required: max + 1,
                available,
            });
        }
    }
    for (&o, &v) in offsets.iter().zip(values.iter()) {
        data[o] = v;
    }
    Ok(())
}

impl Buffer {
    /// Allocates a zero-filled buffer of `len` elements.
    pub fn zeros(dtype: DType, len: usize) -> Self {
        match dtype {
            DType::F32 => f32::into_buffer(vec![0.0; len]),
            DType::F64 => f64::into_buffer(vec![0.0; len]),
            DType::I64 => i64::into_buffer(vec![0; len]),
        }
    }

    /// Wraps an owned vector.
    pub fn from_vec<T: Element>(data: Vec<T>) -> Self {
        T::into_buffer(data)
    }

    pub fn dtype(&self) -> DType {
        match self {
            Buffer::F32(_) => DType::F32,
            Buffer::F64(_) => DType::F64,
            Buffer::I64(_) => DType::I64,
        }
    }

    /// Number of allocated elements.
    pub fn len(&self) -> Result<usize, StrideViewError> {
        match self {
            Buffer::F32(data) => Ok(read_lock(data)?.len()),
            Buffer::F64(data) => Ok(read_lock(data)?.len()),
            Buffer::I64(data) => Ok(read_lock(data)?.len()),
        }
    }

    pub fn is_empty(&self) -> Result<bool, StrideViewError> {
        Ok(self.len()? == 0)
    }

    fn typed_or_err<T: Element>(&self, operation: &str) -> Result<&RwLock<Vec<T>>, StrideViewError> {
        T::typed(self).ok_or_else(|| StrideViewError::DataTypeMismatch {
            operation: operation.to_string(),
            expected: T::DTYPE,
            actual: self.dtype(),
        })
    }

    /// Reads the elements at the given linear offsets, in order.
    pub fn read_elements<T: Element>(&self, offsets: &[usize]) -> Result<Vec<T>, StrideViewError> {
        gather_from(self.typed_or_err::<T>("read_elements")?, offsets)
    }

    /// Writes `values[i]` to linear offset `offsets[i]`.
    pub fn write_elements<T: Element>(
        &self,
        offsets: &[usize],
        values: &[T],
    ) -> Result<(), StrideViewError> {
        if offsets.len() != values.len() {
            return Err(StrideViewError::InternalError(format!(
                "write_elements: {} offsets for {} values",
                offsets.len(),
                values.len()
            )));
        }
        scatter_into(self.typed_or_err::<T>("write_elements")?, offsets, values)
    }

    /// Allocates a new buffer holding the elements found at `offsets`, in order.
    pub fn gather(&self, offsets: &[usize]) -> Result<Buffer, StrideViewError> {
        Ok(match self {
            Buffer::F32(data) => f32::into_buffer(gather_from(data, offsets)?),
            Buffer::F64(data) => f64::into_buffer(gather_from(data, offsets)?),
            Buffer::I64(data) => i64::into_buffer(gather_from(data, offsets)?),
        })
    }

    /// Copies `src[src_offsets[i]]` into `self[dst_offsets[i]]` for every `i`.
    ///
    /// The source is fully read before the destination lock is taken, so `self`
    /// and `src` may be the same buffer and no two buffer locks are ever held at
    /// once.
    pub fn copy_elements(
        &self,
        dst_offsets: &[usize],
        src: &Buffer,
        src_offsets: &[usize],
    ) -> Result<(), StrideViewError> {
        if dst_offsets.len() != src_offsets.len() {
            return Err(StrideViewError::InternalError(format!(
                "copy_elements: {} destination offsets for {} source offsets",
                dst_offsets.len(),
                src_offsets.len()
            )));
        }
        match (self, src) {
            (Buffer::F32(dst), Buffer::F32(s)) => {
                let values = gather_from(s, src_offsets)?;
                scatter_into(dst, dst_offsets, &values)
            }
            (Buffer::F64(dst), Buffer::F64(s)) => {
                let values = gather_from(s, src_offsets)?;
                scatter_into(dst, dst_offsets, &values)
            }
            (Buffer::I64(dst), Buffer::I64(s)) => {
                let values = gather_from(s, src_offsets)?;
                scatter_into(dst, dst_offsets, &values)
            }
            (dst, s) => Err(StrideViewError::DataTypeMismatch {
                operation: "copy_elements".to_string(),
                expected: dst.dtype(),
                actual: s.dtype(),
            }),
        }
    }
}
