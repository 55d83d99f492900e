//! # Shape Operations Module (`ops`)
//!
//! Operations are grouped by whether they can return a view.
//!
//! ## Structure:
//!
//! - [`view`]: operations that only compute a new geometry over the same
//!   storage (reshape, slice, permute, expand, ...), plus `contiguous`.
//! - [`split`]: decompositions into lists of views (split, chunk, unbind).
//! - [`cat`], [`stack`], [`repeat`], [`diagflat`]: operations that must
//!   allocate because no single stride layout describes their result.
//! - [`meshgrid`]: coordinate grids built from expanded views.
//!
//! Each operation has a core function named `xxx_op`; the public `Tensor`
//! methods in [`crate::tensor`] delegate to them.

pub mod cat;
pub mod diagflat;
pub mod meshgrid;
pub mod repeat;
pub mod split;
pub mod stack;
pub mod view;

pub use cat::{cat_op, cat_out_op};
pub use diagflat::diagflat_op;
pub use meshgrid::meshgrid_op;
pub use repeat::repeat_op;
pub use split::{chunk_op, split_op, split_with_sizes_op, unbind_op};
pub use stack::{stack_op, stack_out_op};
