use crate::buffer::Buffer;
use crate::error::StrideViewError;
use crate::ops::view::expand::expand_as_op;
use crate::tensor::iter_utils::strided_offsets;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use log::debug;
use std::sync::Arc;

/// Storage and logical-order element offsets of a strided tensor.
pub(crate) fn buffer_and_offsets(
    tensor: &Tensor,
    operation: &str,
) -> Result<(Arc<Buffer>, Vec<usize>), StrideViewError> {
    let guard = tensor.read_data();
    let strided = guard.strided(operation)?;
    let offsets = strided_offsets(&guard.shape, &strided.strides, strided.offset);
    Ok((Arc::clone(&strided.buffer), offsets))
}

/// Copies the elements of `tensor` in logical order into a new buffer.
pub(crate) fn gather_contiguous(tensor: &Tensor, operation: &str) -> Result<Buffer, StrideViewError> {
    let (buffer, offsets) = buffer_and_offsets(tensor, operation)?;
    buffer.gather(&offsets)
}

/// Copies `tensor` into fresh contiguous storage, whatever its layout.
/// The result is a detached copy (`is_view() == false`).
pub fn materialize_op(tensor: &Tensor) -> Result<Tensor, StrideViewError> {
    let shape = tensor.shape();
    debug!("materialize: copying tensor of shape {:?}", shape);
    let buffer = gather_contiguous(tensor, "materialize")?;
    Ok(Tensor::from_data(TensorData::new_owned(buffer, shape)))
}

/// Returns `tensor` itself when it is already contiguous, otherwise a
/// contiguous copy.
pub fn contiguous_op(tensor: &Tensor) -> Result<Tensor, StrideViewError> {
    tensor.read_data().strided("contiguous")?;
    if tensor.is_contiguous() {
        return Ok(tensor.clone());
    }
    materialize_op(tensor)
}

/// Copies the elements of `src` into the memory viewed by `dst`.
///
/// `src` is broadcast to `dst`'s shape first and must have the same dtype.
/// The source is read completely before anything is written, so `dst` and
/// `src` may overlap.
pub fn copy_op(dst: &Tensor, src: &Tensor) -> Result<(), StrideViewError> {
    if dst.dtype() != src.dtype() {
        return Err(StrideViewError::DataTypeMismatch {
            operation: "copy_".to_string(),
            expected: dst.dtype(),
            actual: src.dtype(),
        });
    }
    let src = if src.shape() == dst.shape() {
        src.clone()
    } else {
        expand_as_op(src, dst)?
    };
    let (src_buffer, src_offsets) = buffer_and_offsets(&src, "copy_")?;
    let (dst_buffer, dst_offsets) = buffer_and_offsets(dst, "copy_")?;
    dst_buffer.copy_elements(&dst_offsets, &src_buffer, &src_offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{self, Tensor};
    use crate::types::DType;

    #[test]
    fn test_contiguous_returns_same_handle() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[2, 3])?;
        let c = contiguous_op(&t)?;
        c.set_f32(&[0, 0], 1.0)?;
        assert_eq!(t.at_f32(&[0, 0])?, 1.0);
        Ok(())
    }

    #[test]
    fn test_contiguous_copies_transposed() -> Result<(), StrideViewError> {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
        let tt = t.transpose(0, 1)?;
        let c = contiguous_op(&tt)?;
        assert!(c.is_contiguous());
        assert!(!c.shares_storage(&t));
        assert!(!c.is_view());
        assert_eq!(c.strides(), vec![2, 1]);
        assert_eq!(c.get_f32_data()?, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        Ok(())
    }

    #[test]
    fn test_materialize_always_copies() -> Result<(), StrideViewError> {
        let t = Tensor::new_i64(vec![1, 2, 3], vec![3])?;
        let m = materialize_op(&t)?;
        assert_eq!(m.dtype(), DType::I64);
        assert!(!m.shares_storage(&t));
        assert_eq!(m, t);
        Ok(())
    }

    #[test]
    fn test_copy_into_view() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[3, 3])?;
        let col = t.select(1, 1)?;
        copy_op(&col, &Tensor::new(vec![1.0, 2.0, 3.0], vec![3])?)?;
        assert_eq!(
            t.get_f32_data()?,
            vec![0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0]
        );
        Ok(())
    }

    #[test]
    fn test_copy_broadcasts_source() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[2, 2])?;
        copy_op(&t, &Tensor::new(vec![7.0], vec![])?)?;
        assert_eq!(t.get_f32_data()?, vec![7.0; 4]);
        Ok(())
    }

    #[test]
    fn test_copy_from_own_transpose() -> Result<(), StrideViewError> {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
        let transposed = t.as_strided(&[2, 2], &[1, 2], Some(0))?;
        copy_op(&t, &transposed)?;
        assert_eq!(t.get_f32_data()?, vec![1.0, 3.0, 2.0, 4.0]);
        Ok(())
    }

    #[test]
    fn test_copy_errors() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[2, 2])?;
        let i = Tensor::new_i64(vec![1, 2, 3, 4], vec![2, 2])?;
        assert!(matches!(copy_op(&t, &i), Err(StrideViewError::DataTypeMismatch { .. })));
        let wrong = tensor::zeros(&[3])?;
        assert!(matches!(copy_op(&t, &wrong), Err(StrideViewError::SizeMismatch { .. })));
        Ok(())
    }
}
