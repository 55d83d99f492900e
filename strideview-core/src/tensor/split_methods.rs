use crate::error::StrideViewError;
use crate::ops;
use crate::tensor::Tensor;

/// Decompositions of a tensor into lists of views along one dimension.
impl Tensor {
    /// Splits into `chunks` views of (almost) equal size along `dim`.
    ///
    /// # Example
    /// ```
    /// use strideview_core::tensor;
    /// let t = tensor::arange(0.0, 10.0, 1.0).unwrap();
    /// let sizes: Vec<usize> = t.chunk(3, 0).unwrap().iter().map(|c| c.numel()).collect();
    /// assert_eq!(sizes, vec![4, 4, 2]);
    /// ```
    pub fn chunk(&self, chunks: isize, dim: isize) -> Result<Vec<Tensor>, StrideViewError> {
        ops::split::chunk_op(self, chunks, dim)
    }

    /// Splits into views of `split_size` elements along `dim`; the last one
    /// may be shorter.
    pub fn split(&self, split_size: isize, dim: isize) -> Result<Vec<Tensor>, StrideViewError> {
        ops::split::split_op(self, split_size, dim)
    }

    pub fn split_with_sizes(&self, split_sizes: &[isize], dim: isize) -> Result<Vec<Tensor>, StrideViewError> {
        ops::split::split_with_sizes_op(self, split_sizes, dim)
    }

    /// One view per index along `dim`, with `dim` removed.
    pub fn unbind(&self, dim: isize) -> Result<Vec<Tensor>, StrideViewError> {
        ops::split::unbind_op(self, dim)
    }
}
