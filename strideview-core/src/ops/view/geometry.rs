//! Pure geometry calculators.
//!
//! Every function here maps a `(sizes, strides, offset)` triple plus the
//! (already normalized) operation parameters to a new triple. Nothing here
//! touches storage or tensor handles; argument validation happens in the
//! owning `*_op` before these run, except for [`Geometry::expand`] whose rules
//! are per-axis.

use crate::error::StrideViewError;
use crate::tensor::utils::calculate_strides;

/// Sizes, strides and absolute storage offset of a strided view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    pub sizes: Vec<usize>,
    pub strides: Vec<usize>,
    pub offset: usize,
}

impl Geometry {
    pub fn new(sizes: Vec<usize>, strides: Vec<usize>, offset: usize) -> Self {
        Geometry {
            sizes,
            strides,
            offset,
        }
    }

    /// Row-major geometry of `sizes` starting at offset 0.
    pub fn contiguous(sizes: &[usize]) -> Self {
        Geometry::new(sizes.to_vec(), calculate_strides(sizes), 0)
    }

    pub fn rank(&self) -> usize {
        self.sizes.len()
    }

    pub fn numel(&self) -> usize {
        self.sizes.iter().product()
    }

    /// Drops every axis of size 1.
    pub fn squeeze_all(&self) -> Self {
        let (sizes, strides): (Vec<usize>, Vec<usize>) = self
            .sizes
            .iter()
            .zip(self.strides.iter())
            .filter(|&(&s, _)| s != 1)
            .map(|(&s, &st)| (s, st))
            .unzip();
        Geometry::new(sizes, strides, self.offset)
    }

    /// Drops axis `dim` when its size is 1; otherwise returns the geometry unchanged.
    /// A rank-0 geometry is returned unchanged.
    pub fn squeeze_dim(&self, dim: usize) -> Self {
        if self.rank() == 0 || self.sizes[dim] != 1 {
            return self.clone();
        }
        let mut out = self.clone();
        out.sizes.remove(dim);
        out.strides.remove(dim);
        out
    }

    /// Inserts a size-1 axis at `dim` (`0 <= dim <= rank`).
    pub fn unsqueeze(&self, dim: usize) -> Self {
        let new_stride = if dim >= self.rank() {
            1
        } else {
            self.sizes[dim] * self.strides[dim]
        };
        let mut out = self.clone();
        out.sizes.insert(dim, 1);
        out.strides.insert(dim, new_stride);
        out
    }

    /// Broadcasts to `target`, right-aligned.
    ///
    /// `-1` keeps the existing size and is rejected on new leading axes. A
    /// size-1 axis may take any size and gets stride 0.
    pub fn expand(&self, target: &[isize]) -> Result<Self, StrideViewError> {
        let rank = self.rank();
        let ndim = target.len();
        if ndim < rank {
            return Err(StrideViewError::RankError {
                operation: "expand".to_string(),
                rank,
                reason: format!(
                    "the number of sizes provided ({}) must be greater or equal to the number of dimensions in the tensor",
                    ndim
                ),
            });
        }

        let mut sizes = vec![0usize; ndim];
        let mut strides = vec![0usize; ndim];
        for i in (0..ndim).rev() {
            let existing = (i + rank).checked_sub(ndim);
            let (mut size, mut stride) = match existing {
                Some(d) => (self.sizes[d], self.strides[d]),
                None if i == ndim - 1 => (1, 1),
                None => (1, sizes[i + 1] * strides[i + 1]),
            };

            let requested = target[i];
            let target_size = if requested == -1 {
                if existing.is_none() {
                    return Err(StrideViewError::InvalidArgument {
                        operation: "expand".to_string(),
                        message: format!(
                            "the expanded size of the tensor (-1) isn't allowed in a leading, non-existing dimension {}",
                            i
                        ),
                    });
                }
                size
            } else if requested < 0 {
                return Err(StrideViewError::InvalidArgument {
                    operation: "expand".to_string(),
                    message: format!("invalid target size {} at dimension {}", requested, i),
                });
            } else {
                requested as usize
            };

            if size != target_size {
                if size != 1 {
                    return Err(StrideViewError::SizeMismatch {
                        operation: "expand".to_string(),
                        expected: format!("size {} or 1 at dimension {}", size, i),
                        actual: format!("{}", target_size),
                    });
                }
                size = target_size;
                stride = 0;
            }
            sizes[i] = size;
            strides[i] = stride;
        }
        if sizes.iter().try_fold(1usize, |n, &s| n.checked_mul(s)).is_none() {
            return Err(StrideViewError::InvalidArgument {
                operation: "expand".to_string(),
                message: format!("expanded sizes {:?} overflow the element count", sizes),
            });
        }
        Ok(Geometry::new(sizes, strides, self.offset))
    }

    /// Length of the `offset`-th diagonal of the `(dim1, dim2)` plane, clamped at 0.
    pub fn diagonal_size(&self, offset: isize, dim1: usize, dim2: usize) -> usize {
        let s1 = self.sizes[dim1] as isize;
        let s2 = self.sizes[dim2] as isize;
        let size = if offset >= 0 {
            s1.min(s2 - offset)
        } else {
            (s1 + offset).min(s2)
        };
        size.max(0) as usize
    }

    /// Removes `dim1` and `dim2` and appends the diagonal axis.
    pub fn diagonal(&self, offset: isize, dim1: usize, dim2: usize) -> Self {
        let diag_size = self.diagonal_size(offset, dim1, dim2);
        let mut out = self.clone();
        if diag_size > 0 {
            if offset >= 0 {
                out.offset += offset as usize * self.strides[dim2];
            } else {
                out.offset += offset.unsigned_abs() * self.strides[dim1];
            }
        }
        let (hi, lo) = if dim1 > dim2 { (dim1, dim2) } else { (dim2, dim1) };
        out.sizes.remove(hi);
        out.sizes.remove(lo);
        out.strides.remove(hi);
        out.strides.remove(lo);
        out.sizes.push(diag_size);
        out.strides.push(self.strides[dim1] + self.strides[dim2]);
        out
    }

    /// Reorders axes; `dims` must already be a valid permutation.
    pub fn permute(&self, dims: &[usize]) -> Self {
        Geometry::new(
            dims.iter().map(|&d| self.sizes[d]).collect(),
            dims.iter().map(|&d| self.strides[d]).collect(),
            self.offset,
        )
    }

    pub fn transpose(&self, dim0: usize, dim1: usize) -> Self {
        let mut out = self.clone();
        out.sizes.swap(dim0, dim1);
        out.strides.swap(dim0, dim1);
        out
    }

    /// Strided sub-range `[start, end)` of axis `dim` with a positive `step`.
    /// `start` and `end` are already clamped into `[0, size]`.
    pub fn slice(&self, dim: usize, start: usize, end: usize, step: usize) -> Self {
        let len = if end > start {
            (end - start + step - 1) / step
        } else {
            0
        };
        let mut out = self.clone();
        out.offset += start * self.strides[dim];
        out.sizes[dim] = len;
        out.strides[dim] = out.strides[dim].saturating_mul(step);
        out
    }

    /// Drops axis `dim`, fixing it at `index`.
    pub fn select(&self, dim: usize, index: usize) -> Self {
        let mut out = self.clone();
        out.offset += index * self.strides[dim];
        out.sizes.remove(dim);
        out.strides.remove(dim);
        out
    }

    /// Sliding windows of `size` elements every `step` along `dim`, appended
    /// as a new last axis. A rank-0 geometry yields a single axis of `size`.
    pub fn unfold(&self, dim: usize, size: usize, step: usize) -> Self {
        let mut out = self.clone();
        if self.rank() == 0 {
            out.sizes.push(size);
            out.strides.push(1);
            return out;
        }
        out.sizes[dim] = (self.sizes[dim] - size) / step + 1;
        out.strides[dim] = self.strides[dim].saturating_mul(step);
        out.sizes.push(size);
        out.strides.push(self.strides[dim]);
        out
    }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
