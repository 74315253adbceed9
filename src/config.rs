//! Serializable module configurations.
//!
//! Each config mirrors the hyperparameters of one module and builds it with
//! `init()`, which is where all validation happens. Configs can be read from
//! JSON with [`load_config`].

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::analysis::ZeroCrossing;
use crate::cepstrum::{
    CepstrumToImpulseResponse, GainNormalization, ImpulseResponseToCepstrum,
    InverseGainNormalization,
};
use crate::error::ConfigError;
use crate::lpc::{LpcToParcor, ParcorToLpc};

/// Hyperparameters shared by gain normalization and its inverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainNormalizationConfig {
    /// Order of the cepstrum, M. Vectors hold M+1 values.
    pub cep_order: usize,
    #[serde(default)]
    pub gamma: f64,
    /// Inverse gamma; overrides `gamma` when present.
    #[serde(default)]
    pub c: Option<f64>,
}

impl Default for GainNormalizationConfig {
    fn default() -> Self {
        Self {
            cep_order: 24,
            gamma: 0.0,
            c: None,
        }
    }
}

impl GainNormalizationConfig {
    pub fn new(cep_order: usize) -> Self {
        Self {
            cep_order,
            ..Self::default()
        }
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_c(mut self, c: u32) -> Self {
        self.c = Some(f64::from(c));
        self
    }

    pub fn init(&self) -> Result<GainNormalization, ConfigError> {
        GainNormalization::new(self.cep_order, self.gamma, self.c)
    }

    pub fn init_inverse(&self) -> Result<InverseGainNormalization, ConfigError> {
        InverseGainNormalization::new(self.cep_order, self.gamma, self.c)
    }
}

/// Hyperparameters of the cepstrum / impulse response conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpulseResponseConfig {
    pub cep_order: usize,
    pub ir_length: usize,
}

impl Default for ImpulseResponseConfig {
    fn default() -> Self {
        Self {
            cep_order: 24,
            ir_length: 128,
        }
    }
}

impl ImpulseResponseConfig {
    pub fn init(&self) -> Result<CepstrumToImpulseResponse, ConfigError> {
        CepstrumToImpulseResponse::new(self.cep_order, self.ir_length)
    }

    pub fn init_inverse(&self) -> Result<ImpulseResponseToCepstrum, ConfigError> {
        ImpulseResponseToCepstrum::new(self.ir_length, self.cep_order)
    }
}

/// Hyperparameters of the LPC / PARCOR conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcorConfig {
    pub lpc_order: usize,
}

impl Default for ParcorConfig {
    fn default() -> Self {
        Self { lpc_order: 24 }
    }
}

impl ParcorConfig {
    pub fn init(&self) -> LpcToParcor {
        LpcToParcor::new(self.lpc_order)
    }

    pub fn init_inverse(&self) -> ParcorToLpc {
        ParcorToLpc::new(self.lpc_order)
    }
}

/// Hyperparameters of zero-crossing analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroCrossingConfig {
    pub frame_length: usize,
    #[serde(default)]
    pub norm: bool,
}

impl Default for ZeroCrossingConfig {
    fn default() -> Self {
        Self {
            frame_length: 400,
            norm: false,
        }
    }
}

impl ZeroCrossingConfig {
    pub fn init(&self) -> Result<ZeroCrossing, ConfigError> {
        ZeroCrossing::new(self.frame_length, self.norm)
    }
}

/// Parse a config from a JSON string.
pub fn load_config<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).context("Failed to parse module config")
}

/// Serialize a config to pretty-printed JSON.
pub fn save_config<T: Serialize>(config: &T) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to serialize module config")
}
