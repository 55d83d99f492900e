use strideview_core::{tensor, StrideViewError, Tensor};

/// Installs `env_logger` once so `RUST_LOG=trace` shows the view geometry.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Row-major F32 tensor holding `0, 1, 2, ...` with the given shape.
#[allow(dead_code)]
pub fn range_tensor(shape: &[usize]) -> Result<Tensor, StrideViewError> {
    let numel: usize = shape.iter().product();
    let target: Vec<isize> = shape.iter().map(|&s| s as isize).collect();
    tensor::arange(0.0, numel as f32, 1.0)?.reshape(&target)
}

#[allow(dead_code)]
pub fn assert_geometry(t: &Tensor, shape: &[usize], strides: &[usize], offset: usize) {
    assert_eq!(t.shape(), shape, "shape mismatch");
    assert_eq!(t.strides(), strides, "strides mismatch");
    assert_eq!(t.storage_offset(), offset, "storage offset mismatch");
}
