use crate::error::StrideViewError;
use crate::ops::view::as_strided::{geometry_of, view_with_geometry};
use crate::ops::view::utils::wrap_dim_scalar;
use crate::tensor::Tensor;

/// Returns a view of all windows of `size` elements taken every `step`
/// elements along `dim`. The windows form a new trailing axis.
///
/// Windows may overlap (`step < size`); overlapping positions alias the same
/// storage element.
pub fn unfold_op(
    tensor: &Tensor,
    dim: isize,
    size: usize,
    step: usize,
) -> Result<Tensor, StrideViewError> {
    let geometry = geometry_of(tensor, "unfold")?;
    let d = wrap_dim_scalar(dim, geometry.rank())?;
    let max_size = if geometry.rank() == 0 { 1 } else { geometry.sizes[d] };
    if size > max_size {
        return Err(StrideViewError::InvalidArgument {
            operation: "unfold".to_string(),
            message: format!(
                "maximum size for tensor at dimension {} is {} but size is {}",
                d, max_size, size
            ),
        });
    }
    if step == 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "unfold".to_string(),
            message: "step must be positive".to_string(),
        });
    }
    view_with_geometry(tensor, "unfold", geometry.unfold(d, size, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor;

    #[test]
    fn test_unfold_windows() -> Result<(), StrideViewError> {
        let t = tensor::arange(0.0, 7.0, 1.0)?;
        let u = unfold_op(&t, 0, 2, 2)?;
        assert_eq!(u.shape(), vec![3, 2]);
        assert_eq!(u.get_f32_data()?, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_unfold_overlapping() -> Result<(), StrideViewError> {
        let t = tensor::arange(0.0, 4.0, 1.0)?;
        let u = unfold_op(&t, -1, 3, 1)?;
        assert_eq!(u.shape(), vec![2, 3]);
        assert_eq!(u.strides(), vec![1, 1]);
        assert_eq!(u.get_f32_data()?, vec![0.0, 1.0, 2.0, 1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_unfold_inner_dim() -> Result<(), StrideViewError> {
        let t = tensor::arange(0.0, 12.0, 1.0)?.reshape(&[2, 6])?;
        let u = unfold_op(&t, 1, 3, 3)?;
        assert_eq!(u.shape(), vec![2, 2, 3]);
        assert_eq!(u.at_f32(&[1, 1, 0])?, 9.0);
        Ok(())
    }

    #[test]
    fn test_unfold_errors() -> Result<(), StrideViewError> {
        let t = tensor::arange(0.0, 4.0, 1.0)?;
        assert!(matches!(unfold_op(&t, 0, 5, 1), Err(StrideViewError::InvalidArgument { .. })));
        assert!(matches!(unfold_op(&t, 0, 2, 0), Err(StrideViewError::InvalidArgument { .. })));
        Ok(())
    }
}
