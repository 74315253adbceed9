//! # DSP Burn
//!
//! Differentiable speech-analysis transforms on the Burn tensor framework.
//! Every module is a small immutable struct built once from validated
//! hyperparameters and applied to tensors of any rank; the last axis holds
//! the coefficients and all leading axes are batch.
//!
//! ## Modules
//!
//! - **Generalized cepstrum**: gain normalization ([`GainNormalization`]) and
//!   its exact inverse ([`InverseGainNormalization`]); cepstrum <-> minimum-phase
//!   impulse response.
//! - **Linear prediction**: LPC <-> PARCOR (step-down / step-up) with a
//!   stability check.
//! - **Analysis**: frame-wise zero-crossing rate.
//!
//! ## Data Flow
//!
//! ```text
//! Config (serde) -> init() -> Module -> forward(Tensor<B, D>[..., M+1]) -> Tensor<B, D>
//! ```
//!
//! Forward passes are built only from Burn tensor ops, so wrapping the
//! backend in `burn::backend::Autodiff` yields gradients for free.

pub mod analysis;
pub mod cepstrum;
pub mod config;
pub mod error;
pub mod gamma;
pub mod lpc;
pub mod shape;

pub use analysis::ZeroCrossing;
pub use cepstrum::{
    CepstrumToImpulseResponse, GainNormalization, ImpulseResponseToCepstrum,
    InverseGainNormalization,
};
pub use config::{
    load_config, save_config, GainNormalizationConfig, ImpulseResponseConfig, ParcorConfig,
    ZeroCrossingConfig,
};
pub use error::{ConfigError, ShapeError};
pub use gamma::{Advisory, Exponent};
pub use lpc::{LpcToParcor, ParcorToLpc};
