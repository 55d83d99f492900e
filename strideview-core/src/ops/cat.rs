use crate::buffer::Buffer;
use crate::error::StrideViewError;
use crate::layout::Layout;
use crate::ops::view::as_strided::set_geometry;
use crate::ops::view::contiguous::copy_op;
use crate::ops::view::geometry::Geometry;
use crate::ops::view::slice::narrow_op;
use crate::ops::view::utils::wrap_dim;
use crate::tensor::create::zeros_dtype;
use crate::tensor::utils::calculate_strides;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::types::DType;
use log::{debug, warn};

/// Validated inputs of a concatenation.
struct CatPlan<'a> {
    dim: usize,
    shape: Vec<usize>,
    dtype: DType,
    inputs: Vec<&'a Tensor>,
}

/// A one-dimensional tensor with no elements. Such inputs are ignored by
/// `cat` whatever their dtype or the other inputs' rank.
fn is_skipped_empty(tensor: &Tensor) -> bool {
    tensor.shape() == [0]
}

fn plan_cat<'a>(
    tensors: &'a [Tensor],
    dim: isize,
    operation: &str,
) -> Result<CatPlan<'a>, StrideViewError> {
    let first = tensors.first().ok_or_else(|| StrideViewError::EmptyList {
        operation: operation.to_string(),
    })?;
    for (position, t) in tensors.iter().enumerate() {
        if t.rank() == 0 {
            return Err(StrideViewError::RankError {
                operation: operation.to_string(),
                rank: 0,
                reason: format!(
                    "zero-dimensional tensor (at position {}) cannot be concatenated",
                    position
                ),
            });
        }
        if t.layout() != Layout::Strided {
            return Err(StrideViewError::UnsupportedLayout {
                operation: operation.to_string(),
                layout: t.layout(),
            });
        }
    }

    let inputs: Vec<&Tensor> = tensors.iter().filter(|t| !is_skipped_empty(t)).collect();
    if inputs.is_empty() {
        return Ok(CatPlan {
            dim: 0,
            shape: vec![0],
            dtype: first.dtype(),
            inputs,
        });
    }
    let reference = inputs[0];
    let reference_shape = reference.shape();
    let d = wrap_dim(dim, reference_shape.len())?;
    let dtype = reference.dtype();
    let mut shape = reference_shape.clone();
    shape[d] = 0;

    for t in &inputs {
        if t.dtype() != dtype {
            return Err(StrideViewError::DataTypeMismatch {
                operation: operation.to_string(),
                expected: dtype,
                actual: t.dtype(),
            });
        }
        let t_shape = t.shape();
        if t_shape.len() != shape.len() {
            return Err(StrideViewError::RankError {
                operation: operation.to_string(),
                rank: t_shape.len(),
                reason: format!("tensors must have {} dimensions", shape.len()),
            });
        }
        let agrees = t_shape
            .iter()
            .zip(reference_shape.iter())
            .enumerate()
            .all(|(axis, (a, b))| axis == d || a == b);
        if !agrees {
            return Err(StrideViewError::SizeMismatch {
                operation: operation.to_string(),
                expected: format!("{:?} except at dimension {}", reference_shape, d),
                actual: format!("{:?}", t_shape),
            });
        }
        shape[d] += t_shape[d];
    }

    Ok(CatPlan {
        dim: d,
        shape,
        dtype,
        inputs,
    })
}

/// Copies every input into its slot of `result`, which already has the
/// planned shape.
fn write_slots(result: &Tensor, plan: &CatPlan<'_>) -> Result<(), StrideViewError> {
    let mut start = 0;
    for input in &plan.inputs {
        let length = input.shape()[plan.dim];
        if input.numel() > 0 {
            let slot = narrow_op(result, plan.dim as isize, start as isize, length as isize)?;
            copy_op(&slot, input)?;
        }
        start += length;
    }
    Ok(())
}

/// Gives `result` the contiguous geometry `shape`, reusing its storage when
/// it is contiguous and large enough.
fn resize_output(
    result: &Tensor,
    shape: &[usize],
    dtype: DType,
    operation: &str,
) -> Result<(), StrideViewError> {
    let needed: usize = shape.iter().product();
    let (reusable, offset) = {
        let guard = result.read_data();
        let strided = guard.strided(operation)?;
        let fits = strided.buffer.len()? >= strided.offset + needed;
        (guard.is_contiguous() && fits, strided.offset)
    };
    if reusable {
        let geometry = Geometry::new(shape.to_vec(), calculate_strides(shape), offset);
        return set_geometry(result, operation, geometry);
    }
    warn!(
        "{}: output storage cannot hold shape {:?}, reallocating",
        operation, shape
    );
    *result.write_data() = TensorData::new_owned(Buffer::zeros(dtype, needed), shape.to_vec());
    Ok(())
}

/// Concatenates `tensors` along `dim` into a newly allocated tensor.
///
/// All inputs must share dtype, rank and every size except `dim`. Inputs of
/// shape `[0]` are skipped, and `dim` is resolved against the first input
/// that is not.
///
/// # Errors
/// - `EmptyList` for an empty list.
/// - `RankError` if an input is rank 0 or ranks differ.
/// - `DataTypeMismatch`, `SizeMismatch` for disagreeing inputs.
pub fn cat_op(tensors: &[Tensor], dim: isize) -> Result<Tensor, StrideViewError> {
    let plan = plan_cat(tensors, dim, "cat")?;
    debug!("cat: allocating {:?} from {} inputs", plan.shape, plan.inputs.len());
    let result = zeros_dtype(&plan.shape, plan.dtype)?;
    write_slots(&result, &plan)?;
    Ok(result)
}

/// Concatenates `tensors` along `dim` into `result`.
///
/// `result` is resized in place to the concatenated shape; its storage is
/// reused when it is contiguous and large enough.
///
/// # Errors
/// Everything [`cat_op`] reports, plus `AliasedOutput` when `result` shares
/// storage with an input and `DataTypeMismatch` when its dtype differs.
pub fn cat_out_op(result: &Tensor, tensors: &[Tensor], dim: isize) -> Result<(), StrideViewError> {
    let plan = plan_cat(tensors, dim, "cat_out")?;
    result.read_data().strided("cat_out")?;
    if let Some(position) = tensors.iter().position(|t| result.shares_storage(t)) {
        return Err(StrideViewError::AliasedOutput {
            operation: "cat_out".to_string(),
            position,
        });
    }
    if result.dtype() != plan.dtype {
        return Err(StrideViewError::DataTypeMismatch {
            operation: "cat_out".to_string(),
            expected: plan.dtype,
            actual: result.dtype(),
        });
    }
    resize_output(result, &plan.shape, plan.dtype, "cat_out")?;
    write_slots(result, &plan)
}

#[cfg(test)]
#[path = "cat_test.rs"]
mod tests;
