use super::*;
use crate::error::StrideViewError;
use crate::tensor::{self, Tensor};

fn shapes(pieces: &[Tensor]) -> Vec<Vec<usize>> {
    pieces.iter().map(|p| p.shape()).collect()
}

#[test]
fn test_split_remainder_last() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 10.0, 1.0)?;
    let pieces = split_op(&t, 3, 0)?;
    assert_eq!(shapes(&pieces), vec![vec![3], vec![3], vec![3], vec![1]]);
    assert_eq!(pieces[1].storage_offset(), 3);
    assert_eq!(pieces[3].get_f32_data()?, vec![9.0]);
    assert!(pieces.iter().all(|p| p.shares_storage(&t)));
    Ok(())
}

#[test]
fn test_split_inner_dim() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 10.0, 1.0)?.reshape(&[2, 5])?;
    let pieces = split_op(&t, 2, -1)?;
    assert_eq!(shapes(&pieces), vec![vec![2, 2], vec![2, 2], vec![2, 1]]);
    assert_eq!(pieces[2].get_f32_data()?, vec![4.0, 9.0]);
    let whole = split_op(&t, 7, 1)?;
    assert_eq!(shapes(&whole), vec![vec![2, 5]]);
    Ok(())
}

#[test]
fn test_split_errors() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 4.0, 1.0)?;
    assert!(matches!(split_op(&t, 0, 0), Err(StrideViewError::InvalidArgument { .. })));
    assert!(matches!(split_op(&t, -1, 0), Err(StrideViewError::InvalidArgument { .. })));
    let scalar = Tensor::new(vec![1.0], vec![])?;
    assert!(matches!(split_op(&scalar, 1, 0), Err(StrideViewError::RankError { .. })));
    Ok(())
}

#[test]
fn test_split_empty_axis() -> Result<(), StrideViewError> {
    let empty = tensor::zeros(&[0])?;
    let pieces = split_op(&empty, 0, 0)?;
    assert_eq!(shapes(&pieces), vec![vec![0]]);
    Ok(())
}

#[test]
fn test_split_with_sizes() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 10.0, 1.0)?.reshape(&[2, 5])?;
    let pieces = split_with_sizes_op(&t, &[1, 4], 1)?;
    assert_eq!(shapes(&pieces), vec![vec![2, 1], vec![2, 4]]);
    assert_eq!(pieces[0].get_f32_data()?, vec![0.0, 5.0]);
    assert_eq!(pieces[1].storage_offset(), 1);
    Ok(())
}

#[test]
fn test_split_with_sizes_validates_first() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 5.0, 1.0)?;
    assert!(matches!(
        split_with_sizes_op(&t, &[2, 2], 0),
        Err(StrideViewError::SizeMismatch { .. })
    ));
    assert!(matches!(
        split_with_sizes_op(&t, &[6, -1], 0),
        Err(StrideViewError::InvalidArgument { .. })
    ));
    Ok(())
}

#[test]
fn test_chunk() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 10.0, 1.0)?;
    assert_eq!(shapes(&chunk_op(&t, 3, 0)?), vec![vec![4], vec![4], vec![2]]);
    let six = tensor::arange(0.0, 6.0, 1.0)?;
    // ceil(6 / 4) = 2, so only three pieces come back.
    assert_eq!(chunk_op(&six, 4, 0)?.len(), 3);
    Ok(())
}

#[test]
fn test_chunk_empty_keeps_count() -> Result<(), StrideViewError> {
    let empty = tensor::zeros(&[0])?;
    let pieces = chunk_op(&empty, 3, 0)?;
    assert_eq!(pieces.len(), 3);
    assert!(pieces.iter().all(|p| p.numel() == 0));
    Ok(())
}

#[test]
fn test_chunk_errors() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 4.0, 1.0)?;
    assert!(matches!(chunk_op(&t, 0, 0), Err(StrideViewError::InvalidArgument { .. })));
    assert!(matches!(chunk_op(&t, 2, 1), Err(StrideViewError::DimensionOutOfRange { .. })));
    Ok(())
}

#[test]
fn test_unbind() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 6.0, 1.0)?.reshape(&[2, 3])?;
    let cols = unbind_op(&t, 1)?;
    assert_eq!(shapes(&cols), vec![vec![2], vec![2], vec![2]]);
    assert_eq!(cols[2].get_f32_data()?, vec![2.0, 5.0]);
    let rows = unbind_op(&t, 0)?;
    rows[1].set_f32(&[0], 30.0)?;
    assert_eq!(t.at_f32(&[1, 0])?, 30.0);
    Ok(())
}

#[test]
fn test_huge_split_and_chunk_sizes() -> Result<(), StrideViewError> {
    let m = tensor::arange(0.0, 6.0, 1.0)?.reshape(&[3, 2])?;
    let pieces = split_op(&m, isize::MAX, 0)?;
    assert_eq!(shapes(&pieces), vec![vec![3, 2]]);
    assert!(pieces[0].shares_storage(&m));

    let pieces = chunk_op(&m, isize::MAX, 0)?;
    assert_eq!(shapes(&pieces), vec![vec![1, 2], vec![1, 2], vec![1, 2]]);
    assert_eq!(pieces[2].get_f32_data()?, vec![4.0, 5.0]);

    assert!(matches!(
        split_with_sizes_op(&m, &[isize::MAX, isize::MAX, 5], 0),
        Err(StrideViewError::SizeMismatch { .. })
    ));
    Ok(())
}

#[cfg(not(feature = "full-empty-shapes"))]
#[test]
fn test_split_with_sizes_zero_piece_on_filled_axis() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 3.0, 1.0)?;
    match split_with_sizes_op(&t, &[0, 3], 0) {
        Err(StrideViewError::InvalidArgument { operation, .. }) => {
            assert_eq!(operation, "split_with_sizes")
        }
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    Ok(())
}

#[cfg(feature = "full-empty-shapes")]
#[test]
fn test_split_with_sizes_zero_piece_on_filled_axis() -> Result<(), StrideViewError> {
    let t = tensor::arange(0.0, 3.0, 1.0)?;
    let pieces = split_with_sizes_op(&t, &[0, 3], 0)?;
    assert_eq!(shapes(&pieces), vec![vec![0], vec![3]]);
    Ok(())
}
