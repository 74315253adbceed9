//! Inverse generalized-cepstrum gain normalization.
//!
//! ```text
//! gamma == 0:  c0 = ln K,              c(m) = c'(m)
//! gamma != 0:  c0 = (K^gamma - 1)/gamma, c(m) = c'(m) K^gamma
//! ```
//!
//! `K <= 0` is not guarded: the log and power produce NaN/Inf which flow
//! through to the output.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use tracing::debug;

use super::gnorm::GainNormalization;
use crate::error::{ConfigError, ShapeError};
use crate::gamma;
use crate::shape;

const NAME: &str = "ignorm";

/// Inverse gain normalization, `[..., M+1] -> [..., M+1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseGainNormalization {
    cep_order: usize,
    gamma: f64,
}

impl InverseGainNormalization {
    /// Create the module for cepstra of order `cep_order`.
    ///
    /// `c`, when given, overrides `gamma` with `1 / c`.
    pub fn new(cep_order: usize, gamma: f64, c: Option<f64>) -> Result<Self, ConfigError> {
        let resolved = gamma::resolve(gamma, c)?;
        let gamma = resolved.gamma();
        debug!(cep_order, gamma, "ignorm initialized");
        Ok(Self { cep_order, gamma })
    }

    pub(crate) fn from_resolved(cep_order: usize, gamma: f64) -> Self {
        Self { cep_order, gamma }
    }

    pub fn cep_order(&self) -> usize {
        self.cep_order
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The module undoing this one.
    pub fn inverse(&self) -> GainNormalization {
        GainNormalization::from_resolved(self.cep_order, self.gamma)
    }

    /// Denormalize `y` of shape `[..., M+1]`.
    ///
    /// # Panics
    ///
    /// If the trailing dimension is not `M+1`.
    pub fn forward<B: Backend, const D: usize>(&self, y: Tensor<B, D>) -> Tensor<B, D> {
        self.try_forward(y).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`forward`](Self::forward), returning shape violations as errors.
    pub fn try_forward<B: Backend, const D: usize>(
        &self,
        y: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        shape::check_trailing(NAME, &y.dims(), self.cep_order + 1)?;
        Ok(ignorm(y, self.gamma))
    }
}

/// Inverse gain normalization along the trailing axis with a resolved `gamma`.
///
/// # Panics
///
/// If the trailing axis is empty.
pub fn ignorm<B: Backend, const D: usize>(y: Tensor<B, D>, gamma: f64) -> Tensor<B, D> {
    let axis = D - 1;
    let m = shape::check_trailing_min(NAME, &y.dims(), 1).unwrap_or_else(|e| panic!("{e}")) - 1;
    let k = y.clone().narrow(axis, 0, 1);

    if gamma == 0.0 {
        let x0 = k.log();
        if m == 0 {
            return x0;
        }
        let x1 = y.narrow(axis, 1, m);
        return Tensor::cat(vec![x0, x1], axis);
    }

    let z = k.powf_scalar(gamma);
    let x0 = z.clone().sub_scalar(1.0).div_scalar(gamma);
    if m == 0 {
        return x0;
    }
    let x1 = y.narrow(axis, 1, m) * z;
    Tensor::cat(vec![x0, x1], axis)
}
