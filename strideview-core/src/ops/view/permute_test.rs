use crate::error::StrideViewError;
use crate::ops::view::permute::permute_op;
use crate::tensor::{self, Tensor};

#[test]
fn test_permute_basic() -> Result<(), StrideViewError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let permuted = permute_op(&t, &[1, 0])?;
    assert_eq!(permuted.shape(), vec![3, 2]);
    assert_eq!(permuted.strides(), vec![1, 3]);
    assert_eq!(permuted.get_f32_data()?, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    Ok(())
}

#[test]
fn test_permute_identity() -> Result<(), StrideViewError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    let permuted = permute_op(&t, &[0, 1])?;
    assert_eq!(permuted.shape(), t.shape());
    assert_eq!(permuted.strides(), t.strides());
    Ok(())
}

#[test]
fn test_permute_higher_dim() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 24.0, 1.0)?.reshape(&[2, 3, 4])?;
    let permuted = permute_op(&t, &[2, 0, 1])?;
    assert_eq!(permuted.shape(), vec![4, 2, 3]);
    assert_eq!(permuted.strides(), vec![1, 12, 4]);
    assert_eq!(permuted.at_f32(&[3, 1, 2])?, t.at_f32(&[1, 2, 3])?);
    Ok(())
}

#[test]
fn test_permute_negative_dims() -> Result<(), StrideViewError> {
    let t = tensor::zeros(&[2, 3, 4])?;
    assert_eq!(permute_op(&t, &[-1, 0, -2])?.shape(), vec![4, 2, 3]);
    Ok(())
}

#[test]
fn test_permute_invalid_axes_length() -> Result<(), StrideViewError> {
    let t = Tensor::new(vec![1.0, 2.0], vec![2])?;
    assert!(matches!(permute_op(&t, &[0, 1]), Err(StrideViewError::RankError { .. })));
    Ok(())
}

#[test]
fn test_permute_invalid_axis_value() -> Result<(), StrideViewError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    assert!(matches!(
        permute_op(&t, &[0, 2]),
        Err(StrideViewError::DimensionOutOfRange { .. })
    ));
    Ok(())
}

#[test]
fn test_permute_duplicate_axis() -> Result<(), StrideViewError> {
    let t = tensor::zeros(&[2, 3, 4])?;
    assert_eq!(
        permute_op(&t, &[0, 0, 1]).err(),
        Some(StrideViewError::RepeatedDimension {
            operation: "permute".to_string(),
            dims: vec![0, 0, 1]
        })
    );
    Ok(())
}
