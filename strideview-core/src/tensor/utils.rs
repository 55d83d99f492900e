/// Calculates the contiguous (row-major) strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Returns the largest linear index reachable through the given geometry,
/// or `None` when the geometry addresses no element at all.
///
/// Saturates at `usize::MAX` instead of overflowing, which no buffer can hold.
pub fn max_reachable_offset(shape: &[usize], strides: &[usize], offset: usize) -> Option<usize> {
    if shape.iter().any(|&s| s == 0) {
        return None;
    }
    Some(
        shape
            .iter()
            .zip(strides.iter())
            .fold(offset, |acc, (&size, &stride)| {
                acc.saturating_add((size - 1).saturating_mul(stride))
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_strides_simple() {
        assert_eq!(calculate_strides(&[2, 3]), vec![3, 1]);
        assert_eq!(calculate_strides(&[4, 5, 6]), vec![30, 6, 1]);
        assert_eq!(calculate_strides(&[5]), vec![1]);
        assert_eq!(calculate_strides(&[1, 5]), vec![5, 1]);
        assert_eq!(calculate_strides(&[5, 1]), vec![1, 1]);
    }

    #[test]
    fn test_calculate_strides_empty() {
        assert_eq!(calculate_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_calculate_strides_includes_zero_dim() {
        assert_eq!(calculate_strides(&[0]), vec![1]);
        assert_eq!(calculate_strides(&[2, 0, 3]), vec![0, 3, 1]);
    }

    #[test]
    fn test_max_reachable_offset() {
        assert_eq!(max_reachable_offset(&[2, 3], &[3, 1], 0), Some(5));
        assert_eq!(max_reachable_offset(&[3, 2], &[1, 3], 4), Some(9));
        assert_eq!(max_reachable_offset(&[4, 3], &[0, 1], 2), Some(4));
        assert_eq!(max_reachable_offset(&[], &[], 7), Some(7));
        assert_eq!(max_reachable_offset(&[2, 0], &[1, 1], 0), None);
        assert_eq!(max_reachable_offset(&[usize::MAX, 3], &[2, 1], 5), Some(usize::MAX));
    }
}
