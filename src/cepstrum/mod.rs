//! Generalized-cepstrum transforms.
//!
//! - [`GainNormalization`] / [`InverseGainNormalization`]: split a generalized
//!   cepstrum into gain and shape, and back.
//! - [`CepstrumToImpulseResponse`] / [`ImpulseResponseToCepstrum`]: recursive
//!   conversion between a cepstrum and its minimum-phase impulse response.

pub mod gnorm;
pub mod ignorm;
pub mod mpir;


pub use gnorm::{gnorm, GainNormalization};
pub use ignorm::{ignorm, InverseGainNormalization};
pub use mpir::{c2mpir, mpir2c, CepstrumToImpulseResponse, ImpulseResponseToCepstrum};
