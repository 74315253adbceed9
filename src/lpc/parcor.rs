//! LPC <-> PARCOR conversion (Levinson-Durbin step-down / step-up).
//!
//! Vectors are laid out as `[K, a(1), ..., a(M)]` and `[K, k(1), ..., k(M)]`;
//! the gain `K` passes through untouched.
//!
//! ```text
//! step-down:  k(m) = a_m(m),  a_{m-1}(i) = (a_m(i) - k(m) a_m(m-i)) / (1 - k(m)^2)
//! step-up:    a_m(i) = a_{m-1}(i) + k(m) a_{m-1}(m-i),  a_m(m) = k(m)
//! ```

use burn::tensor::backend::Backend;
use burn::tensor::{Bool, Tensor};
use tracing::debug;

use crate::error::ShapeError;
use crate::shape;

/// LPC coefficients to PARCOR coefficients, `[..., M+1] -> [..., M+1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LpcToParcor {
    lpc_order: usize,
}

impl LpcToParcor {
    pub fn new(lpc_order: usize) -> Self {
        debug!(lpc_order, "lpc2par initialized");
        Self { lpc_order }
    }

    pub fn order(&self) -> usize {
        self.lpc_order
    }

    pub fn inverse(&self) -> ParcorToLpc {
        ParcorToLpc::new(self.lpc_order)
    }

    /// # Panics
    ///
    /// If the trailing dimension is not `M+1`.
    pub fn forward<B: Backend, const D: usize>(&self, a: Tensor<B, D>) -> Tensor<B, D> {
        self.try_forward(a).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_forward<B: Backend, const D: usize>(
        &self,
        a: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        shape::check_trailing("lpc2par", &a.dims(), self.lpc_order + 1)?;
        Ok(lpc2par(a))
    }

    /// Largest `|k(m)|` of each filter, shape `[..., 1]`.
    ///
    /// The all-pole filter is stable iff the margin is below one. An order-0
    /// filter has margin zero.
    ///
    /// # Panics
    ///
    /// If the trailing dimension is not `M+1`.
    pub fn stability_margin<B: Backend, const D: usize>(&self, a: Tensor<B, D>) -> Tensor<B, D> {
        self.try_stability_margin(a).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_stability_margin<B: Backend, const D: usize>(
        &self,
        a: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        let k = self.try_forward(a)?;
        let axis = D - 1;
        if self.lpc_order == 0 {
            return Ok(k.zeros_like());
        }
        Ok(k.narrow(axis, 1, self.lpc_order).abs().max_dim(axis))
    }

    /// Whether each filter is stable, shape `[..., 1]`.
    ///
    /// # Panics
    ///
    /// If the trailing dimension is not `M+1`.
    pub fn is_stable<B: Backend, const D: usize>(&self, a: Tensor<B, D>) -> Tensor<B, D, Bool> {
        self.stability_margin(a).lower_elem(1.0)
    }
}

/// Step-down recursion along the trailing axis.
///
/// Unstable filters with `|k(m)| = 1` divide by zero; the resulting Inf/NaN
/// are left in the output.
pub fn lpc2par<B: Backend, const D: usize>(a: Tensor<B, D>) -> Tensor<B, D> {
    let axis = D - 1;
    let mut cols = shape::columns(&a);
    let gain = cols.remove(0);
    let order = cols.len();

    // a[i - 1] holds a_m(i)
    let mut a = cols;
    let mut parcor = Vec::with_capacity(order + 1);
    for m in (1..=order).rev() {
        let km = a[m - 1].clone();
        let denom = (km.clone() * km.clone()).neg().add_scalar(1.0);
        a = (1..m)
            .map(|i| (a[i - 1].clone() - km.clone() * a[m - i - 1].clone()) / denom.clone())
            .collect();
        parcor.push(km);
    }
    parcor.push(gain);
    parcor.reverse();

    Tensor::cat(parcor, axis)
}

/// PARCOR coefficients to LPC coefficients, `[..., M+1] -> [..., M+1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParcorToLpc {
    lpc_order: usize,
}

impl ParcorToLpc {
    pub fn new(lpc_order: usize) -> Self {
        debug!(lpc_order, "par2lpc initialized");
        Self { lpc_order }
    }

    pub fn order(&self) -> usize {
        self.lpc_order
    }

    pub fn inverse(&self) -> LpcToParcor {
        LpcToParcor::new(self.lpc_order)
    }

    /// # Panics
    ///
    /// If the trailing dimension is not `M+1`.
    pub fn forward<B: Backend, const D: usize>(&self, k: Tensor<B, D>) -> Tensor<B, D> {
        self.try_forward(k).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_forward<B: Backend, const D: usize>(
        &self,
        k: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        shape::check_trailing("par2lpc", &k.dims(), self.lpc_order + 1)?;
        Ok(par2lpc(k))
    }
}

/// Step-up recursion along the trailing axis.
pub fn par2lpc<B: Backend, const D: usize>(k: Tensor<B, D>) -> Tensor<B, D> {
    let axis = D - 1;
    let mut cols = shape::columns(&k);
    let gain = cols.remove(0);

    let mut a: Vec<Tensor<B, D>> = Vec::with_capacity(cols.len() + 1);
    for (idx, km) in cols.into_iter().enumerate() {
        let m = idx + 1;
        let mut next: Vec<Tensor<B, D>> = (1..m)
            .map(|i| a[i - 1].clone() + km.clone() * a[m - i - 1].clone())
            .collect();
        next.push(km);
        a = next;
    }
    a.insert(0, gain);

    Tensor::cat(a, axis)
}
