use crate::error::StrideViewError;
use crate::ops::view;
use crate::tensor::Tensor;

/// This `impl` block provides the methods that create views of a `Tensor` or
/// change its geometry in place.
///
/// Views share the underlying buffer but have their own shape, strides and
/// offset, so they are cheap to build and frequently non-contiguous. Methods
/// with a trailing underscore modify the handle itself and every clone of it.
impl Tensor {
    /// Creates a view with explicit sizes, strides and storage offset.
    ///
    /// This is the low-level constructor every other view goes through.
    /// `storage_offset` defaults to the tensor's current offset. The geometry
    /// is checked against the storage length.
    ///
    /// Delegates to [`view::as_strided_op`].
    ///
    /// # Example
    /// ```
    /// use strideview_core::tensor;
    /// let t = tensor::arange(0.0, 6.0, 1.0).unwrap();
    /// // Overlapping windows of length 3.
    /// let w = t.as_strided(&[4, 3], &[1, 1], None).unwrap();
    /// assert_eq!(w.get_f32_data().unwrap()[3..6], [1.0, 2.0, 3.0]);
    /// ```
    pub fn as_strided(
        &self,
        size: &[usize],
        stride: &[usize],
        storage_offset: Option<usize>,
    ) -> Result<Tensor, StrideViewError> {
        view::as_strided_op(self, size, stride, storage_offset)
    }

    /// In-place version of [`Tensor::as_strided`].
    pub fn as_strided_(
        &self,
        size: &[usize],
        stride: &[usize],
        storage_offset: Option<usize>,
    ) -> Result<(), StrideViewError> {
        view::as_strided_inplace_op(self, size, stride, storage_offset)
    }

    /// Removes size-1 dimensions: all of them with `None`, or only `dim`.
    ///
    /// # Example
    /// ```
    /// use strideview_core::tensor;
    /// let t = tensor::zeros(&[2, 1, 3, 1]).unwrap();
    /// assert_eq!(t.squeeze(None).unwrap().shape(), vec![2, 3]);
    /// assert_eq!(t.squeeze(Some(1)).unwrap().shape(), vec![2, 3, 1]);
    /// assert_eq!(t.squeeze(Some(0)).unwrap().shape(), vec![2, 1, 3, 1]);
    /// ```
    pub fn squeeze(&self, dim: Option<isize>) -> Result<Tensor, StrideViewError> {
        view::squeeze_op(self, dim)
    }

    pub fn squeeze_(&self, dim: Option<isize>) -> Result<(), StrideViewError> {
        view::squeeze_inplace_op(self, dim)
    }

    /// Inserts a size-1 dimension at `dim` (`-rank-1 <= dim <= rank`).
    pub fn unsqueeze(&self, dim: isize) -> Result<Tensor, StrideViewError> {
        view::unsqueeze_op(self, dim)
    }

    pub fn unsqueeze_(&self, dim: isize) -> Result<(), StrideViewError> {
        view::unsqueeze_inplace_op(self, dim)
    }

    /// Broadcasts the tensor to `sizes` without copying. `-1` keeps a size.
    ///
    /// # Example
    /// ```
    /// use strideview_core::Tensor;
    /// let col = Tensor::new(vec![1.0, 2.0], vec![2, 1]).unwrap();
    /// let e = col.expand(&[2, 3]).unwrap();
    /// assert_eq!(e.strides(), vec![1, 0]);
    /// assert_eq!(e.get_f32_data().unwrap(), vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
    /// ```
    pub fn expand(&self, sizes: &[isize]) -> Result<Tensor, StrideViewError> {
        view::expand_op(self, sizes)
    }

    pub fn expand_as(&self, other: &Tensor) -> Result<Tensor, StrideViewError> {
        view::expand_as_op(self, other)
    }

    /// Returns the `offset`-th diagonal of the matrices spanned by `dim1` and
    /// `dim2`, appended as the last axis.
    pub fn diagonal(&self, offset: isize, dim1: isize, dim2: isize) -> Result<Tensor, StrideViewError> {
        view::diagonal_op(self, offset, dim1, dim2)
    }

    /// Reorders the dimensions.
    ///
    /// # Example
    /// ```
    /// use strideview_core::tensor;
    /// let t = tensor::zeros(&[2, 3, 4]).unwrap();
    /// let p = t.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(p.shape(), vec![4, 2, 3]);
    /// assert_eq!(p.strides(), vec![1, 12, 4]);
    /// ```
    pub fn permute(&self, dims: &[isize]) -> Result<Tensor, StrideViewError> {
        view::permute_op(self, dims)
    }

    /// Swaps two dimensions. Sparse tensors are copied instead of viewed.
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Result<Tensor, StrideViewError> {
        view::transpose_op(self, dim0, dim1)
    }

    pub fn transpose_(&self, dim0: isize, dim1: isize) -> Result<(), StrideViewError> {
        view::transpose_inplace_op(self, dim0, dim1)
    }

    /// Transpose of a 2-D tensor.
    pub fn t(&self) -> Result<Tensor, StrideViewError> {
        view::t_op(self)
    }

    pub fn t_(&self) -> Result<(), StrideViewError> {
        view::t_inplace_op(self)
    }

    /// Returns `length` elements of `dim` starting at `start`.
    pub fn narrow(&self, dim: isize, start: isize, length: isize) -> Result<Tensor, StrideViewError> {
        view::narrow_op(self, dim, start, length)
    }

    /// Fixes `dim` at `index` and removes it.
    pub fn select(&self, dim: isize, index: isize) -> Result<Tensor, StrideViewError> {
        view::select_op(self, dim, index)
    }

    /// Takes every `step`-th element of `[start, end)` along `dim`.
    /// See [`view::slice_op`] for how the bounds are normalized.
    pub fn slice(&self, dim: isize, start: isize, end: isize, step: isize) -> Result<Tensor, StrideViewError> {
        view::slice_op(self, dim, start, end, step)
    }

    /// Sliding windows of `size` elements every `step` along `dim`.
    pub fn unfold(&self, dim: isize, size: usize, step: usize) -> Result<Tensor, StrideViewError> {
        view::unfold_op(self, dim, size, step)
    }

    /// Returns a tensor of the given shape holding the same elements.
    ///
    /// A view when the current strides allow it, a contiguous copy otherwise.
    /// Use [`Tensor::view`] to forbid the copy.
    pub fn reshape(&self, shape: &[isize]) -> Result<Tensor, StrideViewError> {
        view::reshape_op(self, shape)
    }

    pub fn reshape_as(&self, other: &Tensor) -> Result<Tensor, StrideViewError> {
        view::reshape_as_op(self, other)
    }

    /// Like [`Tensor::reshape`] but fails with `IncompatibleView` instead of copying.
    pub fn view(&self, shape: &[isize]) -> Result<Tensor, StrideViewError> {
        view::view_op(self, shape)
    }

    pub fn view_as(&self, other: &Tensor) -> Result<Tensor, StrideViewError> {
        view::view_as_op(self, other)
    }

    /// Merges dimensions `start_dim..=end_dim` into one.
    ///
    /// # Example
    /// ```
    /// use strideview_core::tensor;
    /// let t = tensor::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(t.flatten(0, -1).unwrap().shape(), vec![24]);
    /// assert_eq!(t.flatten(1, 2).unwrap().shape(), vec![2, 12]);
    /// ```
    pub fn flatten(&self, start_dim: isize, end_dim: isize) -> Result<Tensor, StrideViewError> {
        view::flatten_op(self, start_dim, end_dim)
    }

    /// Returns `self` if it is already contiguous, otherwise a contiguous copy.
    pub fn contiguous(&self) -> Result<Tensor, StrideViewError> {
        view::contiguous_op(self)
    }

    /// Always copies into fresh contiguous storage.
    pub fn materialize(&self) -> Result<Tensor, StrideViewError> {
        view::materialize_op(self)
    }

    /// Copies `src` (broadcast to this shape) into the memory this tensor views.
    pub fn copy_(&self, src: &Tensor) -> Result<(), StrideViewError> {
        view::copy_op(self, src)
    }
}

#[cfg(test)]
#[path = "view_methods_test.rs"]
mod tests;
