//! # strideview-core
//!
//! The view/geometry engine of a strided tensor library: shape, stride and
//! storage-offset arithmetic for zero-copy views (reshape, slice, permute,
//! expand, ...) plus the few operations that must allocate and copy (cat,
//! stack, repeat, diagflat).

pub mod buffer;
pub mod error;
pub mod layout;
pub mod ops;
pub mod policy;
pub mod tensor;
pub mod tensor_data;
pub mod types;

pub use buffer::{Buffer, Element};
pub use error::StrideViewError;
pub use layout::Layout;
pub use tensor::Tensor;
pub use types::DType;

// Re-export traits required by public functions/structs
pub use num_traits;
