/// Iterates over the physical buffer offsets of a strided geometry in
/// logical row-major order.
///
/// This is what every copy kernel walks: zipping the offsets of a source and a
/// destination geometry of the same shape pairs up elements at equal logical
/// positions, whatever their strides.
#[derive(Debug, Clone)]
pub struct StridedOffsetIter<'a> {
    shape: &'a [usize],
    strides: &'a [usize],
    coord: Vec<usize>,
    current: usize,
    remaining: usize,
}

impl<'a> StridedOffsetIter<'a> {
    pub fn new(shape: &'a [usize], strides: &'a [usize], offset: usize) -> Self {
        debug_assert_eq!(shape.len(), strides.len());
        Self {
            shape,
            strides,
            coord: vec![0; shape.len()],
            current: offset,
            remaining: shape.iter().product(),
        }
    }
}

impl<'a> Iterator for StridedOffsetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            // Odometer step from the innermost dimension. Size-1 axes may carry
            // saturated strides; wrapping keeps the carry exact.
            for dim in (0..self.shape.len()).rev() {
                self.coord[dim] += 1;
                self.current = self.current.wrapping_add(self.strides[dim]);
                if self.coord[dim] < self.shape[dim] {
                    break;
                }
                self.current = self
                    .current
                    .wrapping_sub(self.coord[dim].wrapping_mul(self.strides[dim]));
                self.coord[dim] = 0;
            }
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for StridedOffsetIter<'a> {}

/// Collects every physical offset of a strided geometry in logical order.
pub fn strided_offsets(shape: &[usize], strides: &[usize], offset: usize) -> Vec<usize> {
    StridedOffsetIter::new(shape, strides, offset).collect()
}
