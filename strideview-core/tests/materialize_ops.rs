use approx::assert_relative_eq;
use strideview_core::{tensor, DType, StrideViewError, Tensor};

mod common;
use common::{init_logger, range_tensor};

#[test]
fn test_cat_of_split_restores_content() -> Result<(), StrideViewError> {
    init_logger();
    let t = range_tensor(&[4, 6])?;
    for dim in [0isize, 1, -1] {
        for k in 1..=7 {
            let pieces = t.split(k, dim)?;
            assert_eq!(Tensor::cat(&pieces, dim)?, t, "split size {} dim {}", k, dim);
        }
    }
    Ok(())
}

#[test]
fn test_cat_of_non_contiguous_views() -> Result<(), StrideViewError> {
    init_logger();
    let t = range_tensor(&[3, 4])?;
    let left = t.narrow(1, 0, 2)?;
    let right = t.narrow(1, 2, 2)?;
    let swapped = Tensor::cat(&[right, left], 1)?;
    assert!(swapped.is_contiguous());
    assert_eq!(
        swapped.select(0, 0)?.get_f32_data()?,
        vec![2.0, 3.0, 0.0, 1.0]
    );
    Ok(())
}

#[test]
fn test_reshape_copy_is_detached() -> Result<(), StrideViewError> {
    init_logger();
    let t = range_tensor(&[3, 4])?;
    let flat = t.t()?.reshape(&[12])?;
    assert!(!flat.is_view());
    flat.set_f32(&[0], 100.0)?;
    assert_relative_eq!(t.at_f32(&[0, 0])?, 0.0);
    assert!(matches!(
        t.t()?.view(&[12]),
        Err(StrideViewError::IncompatibleView { .. })
    ));
    Ok(())
}

#[test]
fn test_repeat_f64() -> Result<(), StrideViewError> {
    init_logger();
    let t = Tensor::new_f64(vec![0.5, 1.5], vec![2, 1])?;
    let r = t.repeat(&[2, 1, 3])?;
    assert_eq!(r.shape(), vec![2, 2, 3]);
    assert_eq!(r.dtype(), DType::F64);
    let data = r.get_f64_data()?;
    let tile = [0.5, 0.5, 0.5, 1.5, 1.5, 1.5];
    for (i, value) in data.iter().enumerate() {
        assert_relative_eq!(*value, tile[i % 6]);
    }
    Ok(())
}

#[test]
fn test_diagflat_matches_diagonal() -> Result<(), StrideViewError> {
    init_logger();
    let v = tensor::arange(1.0, 4.0, 1.0)?;
    for offset in [-2isize, 0, 3] {
        let m = v.diagflat(offset)?;
        assert_eq!(m.diagonal(offset, 0, 1)?, v);
        let total: f32 = m.get_f32_data()?.iter().sum();
        assert_relative_eq!(total, 6.0);
    }
    Ok(())
}

#[test]
fn test_cat_out_writes_into_caller_storage() -> Result<(), StrideViewError> {
    init_logger();
    let out = tensor::zeros(&[2, 6])?;
    let keep = out.view(&[12])?;
    let a = range_tensor(&[2, 2])?;
    let b = range_tensor(&[2, 3])?;
    out.cat_out(&[a, b], 1)?;
    assert_eq!(out.shape(), vec![2, 5]);
    assert!(out.shares_storage(&keep));
    assert_eq!(
        keep.narrow(0, 0, 10)?.get_f32_data()?,
        vec![0.0, 1.0, 0.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 5.0]
    );
    Ok(())
}

#[test]
fn test_stack_along_last_axis() -> Result<(), StrideViewError> {
    init_logger();
    let a = range_tensor(&[2, 2])?;
    let b = a.t()?;
    let s = Tensor::stack(&[a, b], -1)?;
    assert_eq!(s.shape(), vec![2, 2, 2]);
    assert_eq!(s.get_f32_data()?, vec![0.0, 0.0, 1.0, 2.0, 2.0, 1.0, 3.0, 3.0]);
    Ok(())
}
