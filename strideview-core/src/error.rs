use crate::layout::Layout;
use crate::types::DType;
use thiserror::Error;

/// Error type for every fallible operation of the view engine.
///
/// All checks are performed before any geometry is computed or memory is
/// touched, so receiving one of these never implies a partially updated handle.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum StrideViewError {
    /// The tensor has the wrong (often zero) number of dimensions for the operation.
    #[error("{operation}: {reason} (tensor has rank {rank})")]
    RankError {
        operation: String,
        rank: usize,
        reason: String,
    },

    #[error("Dimension out of range (expected to be in range of [{min}, {max}], but got {dim})")]
    DimensionOutOfRange { dim: isize, min: isize, max: isize },

    #[error("{operation}: repeated dim in {dims:?}")]
    RepeatedDimension { operation: String, dims: Vec<isize> },

    #[error("Size mismatch during {operation}: expected {expected}, got {actual}")]
    SizeMismatch {
        operation: String,
        expected: String,
        actual: String,
    },

    #[error("only one dimension can be inferred, got shape {shape:?}")]
    AmbiguousShape { shape: Vec<isize> },

    #[error("{operation} is not supported for tensors with layout {layout:?}")]
    UnsupportedLayout { operation: String, layout: Layout },

    #[error("{operation} expects a non-empty list of tensors")]
    EmptyList { operation: String },

    #[error("{operation}: index {index} out of range for dimension {dim} of size {size}")]
    IndexOutOfRange {
        operation: String,
        index: isize,
        dim: usize,
        size: usize,
    },

    #[error("{operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error(
        "view size {target:?} is not compatible with input tensor's size {shape:?} and stride {strides:?}; use reshape instead"
    )]
    IncompatibleView {
        shape: Vec<usize>,
        strides: Vec<usize>,
        target: Vec<usize>,
    },

    #[error("view requires storage of at least {required} elements but storage holds {available}")]
    StorageOutOfBounds { required: usize, available: usize },

    #[error("{operation}: output tensor shares storage with input at position {position}")]
    AliasedOutput { operation: String, position: usize },

    #[error("Data type mismatch for operation {operation}: expected {expected:?}, got {actual:?}")]
    DataTypeMismatch {
        operation: String,
        expected: DType,
        actual: DType,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Failed to acquire {lock_type} lock: {reason}")]
    LockError { lock_type: String, reason: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}
