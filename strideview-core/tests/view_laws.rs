//! Randomized checks of the geometry laws every view operation must obey.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use strideview_core::{StrideViewError, Tensor};

mod common;
use common::{assert_geometry, init_logger, range_tensor};

const CASES: usize = 64;

fn random_shape(rng: &mut StdRng) -> Vec<usize> {
    let rank = rng.gen_range(1..=4);
    (0..rank).map(|_| rng.gen_range(2..=4)).collect()
}

/// A permuted (usually non-contiguous) view of a fresh range tensor.
fn random_view(rng: &mut StdRng) -> Result<(Tensor, Tensor), StrideViewError> {
    let base = range_tensor(&random_shape(rng))?;
    let mut perm: Vec<isize> = (0..base.rank() as isize).collect();
    perm.shuffle(rng);
    let view = base.permute(&perm)?;
    Ok((base, view))
}

#[test]
fn test_aliasing_law() -> Result<(), StrideViewError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let (base, view) = random_view(&mut rng)?;
        let v = view.as_strided(&view.shape(), &view.strides(), None)?;
        assert_eq!(v.numel(), v.shape().iter().product::<usize>());

        let index: Vec<usize> = v.shape().iter().map(|&s| rng.gen_range(0..s)).collect();
        let linear: usize = v.storage_offset()
            + index.iter().zip(v.strides()).map(|(i, s)| i * s).sum::<usize>();
        v.set_f32(&index, -1.0)?;
        let flat = base.reshape(&[-1])?;
        assert_eq!(flat.at_f32(&[linear])?, -1.0);
    }
    Ok(())
}

#[test]
fn test_transpose_involution() -> Result<(), StrideViewError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let (_, t) = random_view(&mut rng)?;
        let rank = t.rank() as isize;
        let a = rng.gen_range(-rank..rank);
        let b = rng.gen_range(-rank..rank);
        let back = t.transpose(a, b)?.transpose(a, b)?;
        assert_geometry(&back, &t.shape(), &t.strides(), t.storage_offset());
    }
    Ok(())
}

#[test]
fn test_unsqueeze_squeeze_round_trip() -> Result<(), StrideViewError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..CASES {
        let (_, t) = random_view(&mut rng)?;
        let rank = t.rank() as isize;
        let d = rng.gen_range(-rank - 1..=rank);
        let back = t.unsqueeze(d)?.squeeze(Some(d))?;
        assert_geometry(&back, &t.shape(), &t.strides(), t.storage_offset());
    }
    Ok(())
}

#[test]
fn test_reshape_round_trip_without_copy() -> Result<(), StrideViewError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(17);
    let mut viewed = 0;
    for _ in 0..CASES {
        let (_, t) = random_view(&mut rng)?;
        if t.rank() < 2 {
            continue;
        }
        let start = rng.gen_range(0..t.rank() - 1) as isize;
        let merged = t.flatten(start, start + 1)?;
        if !merged.shares_storage(&t) {
            assert!(!merged.is_view());
            continue;
        }
        viewed += 1;
        let original: Vec<isize> = t.shape().iter().map(|&s| s as isize).collect();
        let back = merged.reshape(&original)?;
        assert_geometry(&back, &t.shape(), &t.strides(), t.storage_offset());
    }
    assert!(viewed > 0);
    Ok(())
}

#[test]
fn test_cat_split_law() -> Result<(), StrideViewError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..CASES {
        let (_, t) = random_view(&mut rng)?;
        let rank = t.rank() as isize;
        let dim = rng.gen_range(-rank..rank);
        let k = rng.gen_range(1..=5);
        let pieces = t.split(k, dim)?;
        assert_eq!(Tensor::cat(&pieces, dim)?, t);

        let slices = t
            .unbind(dim)?
            .iter()
            .map(|p| p.unsqueeze(dim))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(Tensor::cat(&slices, dim)?, t);
    }
    Ok(())
}
