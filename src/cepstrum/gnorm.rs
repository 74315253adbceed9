//! Generalized-cepstrum gain normalization.
//!
//! Splits a generalized cepstrum `[c0, c1..cM]` into a gain `K` and a
//! normalized shape `c'`:
//!
//! ```text
//! gamma == 0:  K = exp(c0),                  c'(m) = c(m)
//! gamma != 0:  K = (1 + gamma c0)^(1/gamma),  c'(m) = c(m) / (1 + gamma c0)
//! ```

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use tracing::debug;

use super::ignorm::InverseGainNormalization;
use crate::error::{ConfigError, ShapeError};
use crate::gamma;
use crate::shape;

const NAME: &str = "gnorm";

/// Gain normalization of a generalized cepstrum, `[..., M+1] -> [..., M+1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainNormalization {
    cep_order: usize,
    gamma: f64,
}

impl GainNormalization {
    /// Create the module for cepstra of order `cep_order`.
    ///
    /// `c`, when given, overrides `gamma` with `1 / c`.
    pub fn new(cep_order: usize, gamma: f64, c: Option<f64>) -> Result<Self, ConfigError> {
        let resolved = gamma::resolve(gamma, c)?;
        let gamma = resolved.gamma();
        debug!(cep_order, gamma, "gnorm initialized");
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
    pub fn inverse(&self) -> InverseGainNormalization {
        InverseGainNormalization::from_resolved(self.cep_order, self.gamma)
    }

    /// Normalize `x` of shape `[..., M+1]`.
    ///
    /// # Panics
    ///
    /// If the trailing dimension is not `M+1`.
    pub fn forward<B: Backend, const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        self.try_forward(x).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`forward`](Self::forward), returning shape violations as errors.
    pub fn try_forward<B: Backend, const D: usize>(
        &self,
        x: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        shape::check_trailing(NAME, &x.dims(), self.cep_order + 1)?;
        Ok(gnorm(x, self.gamma))
    }
}

/// Gain normalization along the trailing axis with a resolved `gamma`.
///
/// # Panics
///
/// If the trailing axis is empty.
pub fn gnorm<B: Backend, const D: usize>(x: Tensor<B, D>, gamma: f64) -> Tensor<B, D> {
    let axis = D - 1;
    let m = shape::check_trailing_min(NAME, &x.dims(), 1).unwrap_or_else(|e| panic!("{e}")) - 1;
    let x0 = x.clone().narrow(axis, 0, 1);

    if gamma == 0.0 {
        let k = x0.exp();
        if m == 0 {
            return k;
        }
        let x1 = x.narrow(axis, 1, m);
        return Tensor::cat(vec![k, x1], axis);
    }

    // z = 1 + gamma c0 = K^gamma
    let z = x0.mul_scalar(gamma).add_scalar(1.0);
    let k = z.clone().powf_scalar(1.0 / gamma);
    if m == 0 {
        return k;
    }
    let y1 = x.narrow(axis, 1, m) / z;
    Tensor::cat(vec![k, y1], axis)
}
