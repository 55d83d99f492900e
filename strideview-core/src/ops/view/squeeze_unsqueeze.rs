use crate::{
    error::StrideViewError,
    ops::view::as_strided::{geometry_of, set_geometry, view_with_geometry},
    ops::view::geometry::Geometry,
    ops::view::utils::{wrap_dim, wrap_dim_scalar},
    policy,
    tensor::Tensor,
};

fn squeeze_geometry(tensor: &Tensor, dim: Option<isize>) -> Result<Geometry, StrideViewError> {
    let geometry = geometry_of(tensor, "squeeze")?;
    match dim {
        None => Ok(geometry.squeeze_all()),
        Some(d) => {
            let d = wrap_dim_scalar(d, geometry.rank())?;
            Ok(geometry.squeeze_dim(d))
        }
    }
}

fn unsqueeze_geometry(tensor: &Tensor, dim: isize) -> Result<Geometry, StrideViewError> {
    let geometry = geometry_of(tensor, "unsqueeze")?;
    if policy::collapse_empty_shapes() && geometry.numel() == 0 {
        return Err(StrideViewError::InvalidArgument {
            operation: "unsqueeze".to_string(),
            message: "cannot unsqueeze empty tensor".to_string(),
        });
    }
    let d = wrap_dim(dim, geometry.rank() + 1)?;
    Ok(geometry.unsqueeze(d))
}

/// Removes size-1 dimensions.
///
/// With `dim == None` every size-1 axis is dropped. With `Some(d)` only axis
/// `d` is dropped, and only when its size is exactly 1; otherwise the result
/// has the input's geometry. A rank-0 tensor accepts `0`/`-1` and is returned
/// unchanged.
pub fn squeeze_op(tensor: &Tensor, dim: Option<isize>) -> Result<Tensor, StrideViewError> {
    let geometry = squeeze_geometry(tensor, dim)?;
    view_with_geometry(tensor, "squeeze", geometry)
}

pub fn squeeze_inplace_op(tensor: &Tensor, dim: Option<isize>) -> Result<(), StrideViewError> {
    let geometry = squeeze_geometry(tensor, dim)?;
    set_geometry(tensor, "squeeze_", geometry)
}

/// Inserts a size-1 axis at `dim`, which may range over `[-rank-1, rank]`.
///
/// The new axis gets stride `sizes[dim] * strides[dim]` (1 when appended last),
/// so `squeeze(unsqueeze(t, d), d)` restores `t`'s geometry exactly.
pub fn unsqueeze_op(tensor: &Tensor, dim: isize) -> Result<Tensor, StrideViewError> {
    let geometry = unsqueeze_geometry(tensor, dim)?;
    view_with_geometry(tensor, "unsqueeze", geometry)
}

pub fn unsqueeze_inplace_op(tensor: &Tensor, dim: isize) -> Result<(), StrideViewError> {
    let geometry = unsqueeze_geometry(tensor, dim)?;
    set_geometry(tensor, "unsqueeze_", geometry)
}

#[cfg(test)]
#[path = "squeeze_unsqueeze_test.rs"]
mod tests;
