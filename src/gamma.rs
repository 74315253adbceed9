//! Resolution of the generalized-cepstrum exponent.
//!
//! Callers may give the exponent either directly as `gamma` or as an integer
//! inverse `c` (gamma = 1/c). The two are reconciled once, at construction,
//! into a single `f64`.

use std::fmt;
use std::num::NonZeroU32;

use tracing::warn;

use crate::error::ConfigError;

/// A validated exponent specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    /// gamma given directly, within [-1, 1].
    Direct(f64),
    /// gamma = 1 / c.
    InverseInteger(NonZeroU32),
}

impl Exponent {
    /// Validate a direct gamma.
    pub fn direct(gamma: f64) -> Result<Self, ConfigError> {
        if !gamma.is_finite() || !(-1.0..=1.0).contains(&gamma) {
            return Err(ConfigError::GammaOutOfRange(gamma));
        }
        Ok(Self::Direct(gamma))
    }

    /// Validate an inverse gamma. `c` arrives as a float so that values such
    /// as `1.5` coming from a config file can be rejected rather than truncated.
    pub fn inverse(c: f64) -> Result<Self, ConfigError> {
        if !c.is_finite() || c.fract() != 0.0 || c < 1.0 || c > u32::MAX as f64 {
            return Err(ConfigError::InvalidInverseGamma(c));
        }
        NonZeroU32::new(c as u32)
            .map(Self::InverseInteger)
            .ok_or(ConfigError::InvalidInverseGamma(c))
    }

    /// The effective gamma.
    pub fn gamma(&self) -> f64 {
        match *self {
            Self::Direct(gamma) => gamma,
            Self::InverseInteger(c) => 1.0 / f64::from(c.get()),
        }
    }
}

/// Non-fatal notice produced while resolving an exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// An explicit gamma was overridden by `c`.
    GammaIgnored { gamma: f64, c: u32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GammaIgnored { gamma, c } => {
                write!(f, "gamma = {gamma} is given but not used, c = {c} takes precedence")
            }
        }
    }
}

/// Outcome of reconciling `gamma` and `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub exponent: Exponent,
    pub advisories: Vec<Advisory>,
}

impl Resolved {
    pub fn gamma(&self) -> f64 {
        self.exponent.gamma()
    }
}

/// Reconcile an explicit `gamma` with an optional inverse gamma `c`.
///
/// Without `c` the given gamma is used as-is. With `c`, gamma = 1/c and a
/// nonzero explicit gamma is reported as an [`Advisory`] (and logged) rather
/// than rejected. Range violations are [`ConfigError`]s, for `gamma` even
/// when `c` overrides it.
pub fn resolve(gamma: f64, c: Option<f64>) -> Result<Resolved, ConfigError> {
    let direct = Exponent::direct(gamma)?;
    let Some(c) = c else {
        return Ok(Resolved {
            exponent: direct,
            advisories: Vec::new(),
        });
    };

    let exponent = Exponent::inverse(c)?;
    let mut advisories = Vec::new();
    if gamma != 0.0 {
        if let Exponent::InverseInteger(c) = exponent {
            let advisory = Advisory::GammaIgnored { gamma, c: c.get() };
            warn!(gamma, c = c.get(), "{advisory}");
            advisories.push(advisory);
        }
    }

    Ok(Resolved {
        exponent,
        advisories,
    })
}
