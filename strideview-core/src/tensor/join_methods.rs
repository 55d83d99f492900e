use crate::error::StrideViewError;
use crate::ops;
use crate::tensor::Tensor;

/// Operations that build a new tensor from one or more inputs by copying.
///
/// `meshgrid` is the exception: its grids are expanded views.
impl Tensor {
    /// Concatenates `tensors` along `dim`. See [`ops::cat::cat_op`].
    ///
    /// # Example
    /// ```
    /// use strideview_core::Tensor;
    /// let a = Tensor::new(vec![1.0, 2.0], vec![1, 2]).unwrap();
    /// let b = Tensor::new(vec![3.0, 4.0, 5.0, 6.0], vec![2, 2]).unwrap();
    /// let c = Tensor::cat(&[a, b], 0).unwrap();
    /// assert_eq!(c.shape(), vec![3, 2]);
    /// ```
    pub fn cat(tensors: &[Tensor], dim: isize) -> Result<Tensor, StrideViewError> {
        ops::cat::cat_op(tensors, dim)
    }

    /// Concatenates `tensors` into `self`, resizing it.
    pub fn cat_out(&self, tensors: &[Tensor], dim: isize) -> Result<(), StrideViewError> {
        ops::cat::cat_out_op(self, tensors, dim)
    }

    /// Joins same-shaped tensors along a new dimension `dim`.
    pub fn stack(tensors: &[Tensor], dim: isize) -> Result<Tensor, StrideViewError> {
        ops::stack::stack_op(tensors, dim)
    }

    pub fn stack_out(&self, tensors: &[Tensor], dim: isize) -> Result<(), StrideViewError> {
        ops::stack::stack_out_op(self, tensors, dim)
    }

    pub fn meshgrid(tensors: &[Tensor]) -> Result<Vec<Tensor>, StrideViewError> {
        ops::meshgrid::meshgrid_op(tensors)
    }

    /// Tiles the tensor `repeats[i]` times along each dimension.
    ///
    /// # Example
    /// ```
    /// use strideview_core::tensor;
    /// let t = tensor::arange(0.0, 2.0, 1.0).unwrap();
    /// let r = t.repeat(&[2, 2]).unwrap();
    /// assert_eq!(r.shape(), vec![2, 4]);
    /// assert_eq!(r.get_f32_data().unwrap(), vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    /// ```
    pub fn repeat(&self, repeats: &[isize]) -> Result<Tensor, StrideViewError> {
        ops::repeat::repeat_op(self, repeats)
    }

    /// Square matrix with the flattened tensor on its `offset`-th diagonal.
    pub fn diagflat(&self, offset: isize) -> Result<Tensor, StrideViewError> {
        ops::diagflat::diagflat_op(self, offset)
    }
}
