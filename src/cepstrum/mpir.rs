//! Cepstrum <-> minimum-phase impulse response.
//!
//! Both directions are the classic recursion derived from `h'(z) = c'(z) h(z)`:
//!
//! ```text
//! h(0) = exp c(0),  h(n) = sum_{k=1}^{min(n,M)} (k/n) c(k) h(n-k)
//! c(0) = ln h(0),   c(m) = (h(m) - sum_{k=1}^{m-1} (k/m) c(k) h(m-k)) / h(0)
//! ```
//!
//! Each step depends on the previous ones, so the work is sequential along
//! the coefficient axis and batched across the leading axes.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use tracing::debug;

use crate::error::{ConfigError, ShapeError};
use crate::shape;

/// Cepstrum to minimum-phase impulse response, `[..., M+1] -> [..., N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CepstrumToImpulseResponse {
    cep_order: usize,
    ir_length: usize,
}

impl CepstrumToImpulseResponse {
    pub fn new(cep_order: usize, ir_length: usize) -> Result<Self, ConfigError> {
        if ir_length == 0 {
            return Err(ConfigError::InvalidImpulseResponseLength(ir_length));
        }
        debug!(cep_order, ir_length, "c2mpir initialized");
        Ok(Self {
            cep_order,
            ir_length,
        })
    }

    pub fn cep_order(&self) -> usize {
        self.cep_order
    }

    pub fn ir_length(&self) -> usize {
        self.ir_length
    }

    /// # Panics
    ///
    /// If the trailing dimension is not `M+1`.
    pub fn forward<B: Backend, const D: usize>(&self, c: Tensor<B, D>) -> Tensor<B, D> {
        self.try_forward(c).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_forward<B: Backend, const D: usize>(
        &self,
        c: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        shape::check_trailing("c2mpir", &c.dims(), self.cep_order + 1)?;
        Ok(c2mpir(c, self.ir_length))
    }
}

/// Impulse response of length `ir_length` from a cepstrum on the trailing axis.
pub fn c2mpir<B: Backend, const D: usize>(c: Tensor<B, D>, ir_length: usize) -> Tensor<B, D> {
    let axis = D - 1;
    let c = shape::columns(&c);
    let m = c.len() - 1;

    let mut h: Vec<Tensor<B, D>> = Vec::with_capacity(ir_length);
    h.push(c[0].clone().exp());
    for n in 1..ir_length {
        let mut acc: Option<Tensor<B, D>> = None;
        for k in 1..=n.min(m) {
            let term = (c[k].clone() * h[n - k].clone()).mul_scalar(k as f64 / n as f64);
            acc = Some(match acc {
                Some(sum) => sum + term,
                None => term,
            });
        }
        let next = match acc {
            Some(sum) => sum,
            None => h[0].zeros_like(),
        };
        h.push(next);
    }

    Tensor::cat(h, axis)
}

/// Minimum-phase impulse response to cepstrum, `[..., N] -> [..., M+1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpulseResponseToCepstrum {
    ir_length: usize,
    cep_order: usize,
}

impl ImpulseResponseToCepstrum {
    pub fn new(ir_length: usize, cep_order: usize) -> Result<Self, ConfigError> {
        if ir_length == 0 {
            return Err(ConfigError::InvalidImpulseResponseLength(ir_length));
        }
        debug!(ir_length, cep_order, "mpir2c initialized");
        Ok(Self {
            ir_length,
            cep_order,
        })
    }

    pub fn cep_order(&self) -> usize {
        self.cep_order
    }

    pub fn ir_length(&self) -> usize {
        self.ir_length
    }

    /// # Panics
    ///
    /// If the trailing dimension is not `N`.
    pub fn forward<B: Backend, const D: usize>(&self, h: Tensor<B, D>) -> Tensor<B, D> {
        self.try_forward(h).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_forward<B: Backend, const D: usize>(
        &self,
        h: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        shape::check_trailing("mpir2c", &h.dims(), self.ir_length)?;
        Ok(mpir2c(h, self.cep_order))
    }
}

/// Cepstrum of order `cep_order` from an impulse response on the trailing axis.
///
/// Samples past the end of the impulse response are taken as zero.
pub fn mpir2c<B: Backend, const D: usize>(h: Tensor<B, D>, cep_order: usize) -> Tensor<B, D> {
    let axis = D - 1;
    let h = shape::columns(&h);
    let n = h.len();
    let h0 = h[0].clone();

    let mut c: Vec<Tensor<B, D>> = Vec::with_capacity(cep_order + 1);
    c.push(h0.clone().log());
    for m in 1..=cep_order {
        let mut acc = if m < n {
            h[m].clone()
        } else {
            h0.zeros_like()
        };
        for k in 1..m {
            if m - k < n {
                let term = (c[k].clone() * h[m - k].clone()).mul_scalar(k as f64 / m as f64);
                acc = acc - term;
            }
        }
        c.push(acc / h0.clone());
    }

    Tensor::cat(c, axis)
}
