//! Trailing-axis shape checks shared by every module.
//!
//! All modules operate on the last axis of a `[..., N]` tensor and treat the
//! leading axes as an opaque batch. These helpers validate that axis and
//! provide the flatten/unflatten used by modules that need a fixed rank.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::ShapeError;

/// Length of the trailing axis, or an error for rank-0 inputs.
pub fn trailing_dim<const D: usize>(
    module: &'static str,
    dims: &[usize; D],
) -> Result<usize, ShapeError> {
    dims.last().copied().ok_or(ShapeError::ScalarInput { module })
}

/// Require the trailing axis to hold exactly `expected` values.
pub fn check_trailing<const D: usize>(
    module: &'static str,
    dims: &[usize; D],
    expected: usize,
) -> Result<(), ShapeError> {
    let actual = trailing_dim(module, dims)?;
    if actual != expected {
        return Err(ShapeError::TrailingDimMismatch {
            module,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Require the trailing axis to hold at least `required` values.
pub fn check_trailing_min<const D: usize>(
    module: &'static str,
    dims: &[usize; D],
    required: usize,
) -> Result<usize, ShapeError> {
    let actual = trailing_dim(module, dims)?;
    if actual < required {
        return Err(ShapeError::TrailingDimTooShort {
            module,
            required,
            actual,
        });
    }
    Ok(actual)
}

/// Collapse all leading axes into one: `[..., N]` -> `[batch, N]`.
pub fn flatten_batch<B: Backend, const D: usize>(x: Tensor<B, D>) -> Tensor<B, 2> {
    let dims = x.dims();
    let n = dims[D - 1];
    let batch: usize = dims[..D - 1].iter().product();
    x.reshape([batch, n])
}

/// Restore the leading axes of `like` around a new trailing length.
pub fn unflatten_batch<B: Backend, const D: usize>(
    x: Tensor<B, 2>,
    like: [usize; D],
    trailing: usize,
) -> Tensor<B, D> {
    let mut dims = like;
    dims[D - 1] = trailing;
    x.reshape(dims)
}

/// Split the trailing axis into `[..., 1]` columns.
pub fn columns<B: Backend, const D: usize>(x: &Tensor<B, D>) -> Vec<Tensor<B, D>> {
    let axis = D - 1;
    (0..x.dims()[axis])
        .map(|i| x.clone().narrow(axis, i, 1))
        .collect()
}
