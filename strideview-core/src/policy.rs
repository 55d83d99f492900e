//! Empty-shape policy.
//!
//! Zero-element results were historically canonicalized to shape `[0]`
//! regardless of the shape the operation would otherwise produce. That
//! behaviour is kept by default. Building with the `full-empty-shapes`
//! feature keeps zero-size dimensions where they are instead.

/// Returns `true` when zero-element results collapse to the canonical `[0]` shape.
///
/// Affects `reshape`, `slice`/`narrow`, `diagonal` and `unsqueeze`.
#[inline]
pub fn collapse_empty_shapes() -> bool {
    !cfg!(feature = "full-empty-shapes")
}

/// Shape of the canonical empty tensor under the legacy policy.
pub(crate) fn canonical_empty_shape() -> Vec<usize> {
    vec![0]
}
