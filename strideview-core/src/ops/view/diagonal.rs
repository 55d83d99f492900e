use crate::error::StrideViewError;
use crate::ops::view::as_strided::{geometry_of, view_with_geometry};
use crate::ops::view::utils::wrap_dim;
use crate::policy;
use crate::tensor::Tensor;

/// Returns a view of the `offset`-th diagonal of the plane spanned by `dim1`
/// and `dim2`.
///
/// Both axes are removed and the diagonal is appended as the last axis, with
/// stride `stride[dim1] + stride[dim2]`. A positive `offset` selects a
/// diagonal above the main one (shifts along `dim2`), a negative one below it.
///
/// Under the legacy empty-shape policy an empty diagonal is an error.
pub fn diagonal_op(
    tensor: &Tensor,
    offset: isize,
    dim1: isize,
    dim2: isize,
) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "diagonal")?;
    let d1 = wrap_dim(dim1, geometry.rank())?;
    let d2 = wrap_dim(dim2, geometry.rank())?;
    if d1 == d2 {
        return Err(StrideViewError::InvalidArgument {
            operation: "diagonal".to_string(),
            message: format!("diagonal dimensions cannot be identical {}, {}", dim1, dim2),
        });
    }
    if policy::collapse_empty_shapes() && geometry.diagonal_size(offset, d1, d2) == 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "diagonal".to_string(),
            message: format!(
                "invalid diagonal offset {} for dimensions of size {} and {}",
                offset, geometry.sizes[d1], geometry.sizes[d2]
            ),
        });
    }
    view_with_geometry(tensor, "diagonal", geometry.diagonal(offset, d1, d2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor;

    #[test]
    fn test_diagonal_offset_one() -> Result<(), StrideViewError> {
        let t = tensor::arange(0.0, 16.0, 1.0)?.reshape(&[4, 4])?;
        let d = diagonal_op(&t, 1, 0, 1)?;
        assert_eq!(d.shape(), vec![3]);
        assert_eq!(d.strides(), vec![t.stride(0)? + t.stride(1)?]);
        assert_eq!(d.storage_offset(), t.storage_offset() + t.stride(1)?);
        assert_eq!(d.get_f32_data()?, vec![1.0, 6.0, 11.0]);
        Ok(())
    }

    #[test]
    fn test_diagonal_negative_offset_and_dims() -> Result<(), StrideViewError> {
        let t = tensor::arange(0.0, 6.0, 1.0)?.reshape(&[2, 3])?;
        assert_eq!(diagonal_op(&t, 0, 0, 1)?.get_f32_data()?, vec![0.0, 4.0]);
        assert_eq!(diagonal_op(&t, -1, 0, 1)?.get_f32_data()?, vec![3.0]);
        // Swapping the axes mirrors the offset.
        assert_eq!(diagonal_op(&t, 1, 1, 0)?.get_f32_data()?, vec![3.0]);
        assert_eq!(diagonal_op(&t, 0, -1, -2)?.get_f32_data()?, vec![0.0, 4.0]);
        Ok(())
    }

    #[test]
    fn test_diagonal_is_view() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[3, 3])?;
        let d = diagonal_op(&t, 0, 0, 1)?;
        d.set_f32(&[2], 1.0)?;
        assert_eq!(t.at_f32(&[2, 2])?, 1.0);
        Ok(())
    }

    #[test]
    fn test_diagonal_errors() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[3, 3])?;
        assert!(matches!(
            diagonal_op(&t, 0, 1, -1),
            Err(StrideViewError::InvalidArgument { .. })
        ));
        assert!(matches!(
            diagonal_op(&t, 0, 0, 2),
            Err(StrideViewError::DimensionOutOfRange { .. })
        ));
        let v = tensor::zeros(&[3])?;
        assert!(diagonal_op(&v, 0, 0, 1).is_err());
        Ok(())
    }

    #[cfg(not(feature = "full-empty-shapes"))]
    #[test]
    fn test_diagonal_empty_rejected() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[3, 3])?;
        assert!(matches!(
            diagonal_op(&t, 3, 0, 1),
            Err(StrideViewError::InvalidArgument { .. })
        ));
        Ok(())
    }

    #[cfg(feature = "full-empty-shapes")]
    #[test]
    fn test_diagonal_empty_allowed() -> Result<(), StrideViewError> {
        let t = tensor::zeros(&[3, 3])?;
        let d = diagonal_op(&t, 3, 0, 1)?;
        assert_eq!(d.shape(), vec![0]);
        assert_eq!(d.storage_offset(), 0);
        Ok(())
    }
}
