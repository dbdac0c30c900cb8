/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Morse parameter records and heteroatomic combination rules

use super::errors::{ParamsError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_2;
use std::fmt;
use std::str::FromStr;

/// Tabulated Morse parameters for a homonuclear element pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MorseParams {
    /// Equilibrium distance, Angstroms
    pub re: f64,
    /// Well depth (sign carries no physical meaning here)
    #[serde(rename = "De")]
    pub de: f64,
    /// Decay rate, inverse Angstroms
    pub a: f64,
}

impl MorseParams {
    /// Create a parameter record
    pub fn new(re: f64, de: f64, a: f64) -> Self {
        Self { re, de, a }
    }

    /// Derived length scale `sigma = re - ln(2)/a`
    pub fn sigma(&self) -> f64 {
        self.re - LN_2 / self.a
    }

    /// Validate that the record yields a usable potential
    pub fn validate(&self, element: &str) -> Result<()> {
        if !(self.re.is_finite() && self.de.is_finite() && self.a.is_finite()) {
            return Err(ParamsError::InvalidParameters {
                element: element.to_string(),
                detail: "non-finite entry".to_string(),
            });
        }
        if self.re <= 0.0 || self.a <= 0.0 {
            return Err(ParamsError::InvalidParameters {
                element: element.to_string(),
                detail: format!("re and a must be positive (re={}, a={})", self.re, self.a),
            });
        }
        if self.sigma() <= 0.0 {
            return Err(ParamsError::InvalidParameters {
                element: element.to_string(),
                detail: format!("derived sigma {} is not positive", self.sigma()),
            });
        }
        Ok(())
    }

    /// Resolve into the `(re, D, sigma)` triple consumed by the kernel.
    /// The well depth is taken as its absolute value.
    pub fn resolve(&self) -> AtomParams {
        AtomParams {
            re: self.re,
            d: self.de.abs(),
            sig: self.sigma(),
        }
    }
}

/// Per-atom `(re, D, sigma)` triple, resolved once at model construction so
/// the kernel never performs string lookups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomParams {
    /// Equilibrium distance
    pub re: f64,
    /// Well depth, always non-negative
    pub d: f64,
    /// Length scale `re - ln(2)/a`
    pub sig: f64,
}

/// Parameters for one interacting pair after applying a combination rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairParams {
    pub re: f64,
    pub d: f64,
    pub sig: f64,
}

/// Rule for mixing two atoms' Morse parameters into pair parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationRule {
    /// A single fixed universal triple, independent of the pair's identities
    Mean,
    /// Harmonic-style mixing of well depth, sigma and equilibrium distance
    Yang,
}

/// Universal pair parameters used by the `mean` rule
const MEAN_DE: f64 = 9.975126;
const MEAN_RE: f64 = 1.682829;
const MEAN_A: f64 = 1.51511;

impl CombinationRule {
    /// Combine two atoms' resolved parameters into pair parameters
    pub fn combine(&self, p1: &AtomParams, p2: &AtomParams) -> PairParams {
        match self {
            CombinationRule::Mean => PairParams {
                re: MEAN_RE,
                d: MEAN_DE,
                sig: MEAN_RE - LN_2 / MEAN_A,
            },
            CombinationRule::Yang => {
                let d = (2.0 * p1.d * p2.d) / (p1.d + p2.d);
                let sig =
                    (p1.sig * p2.sig) * (p1.sig + p2.sig) / (p1.sig * p1.sig + p2.sig * p2.sig);
                let re = (p1.re * p2.re) * (p1.re + p2.re) / (p1.re * p1.re + p2.re * p2.re);
                PairParams { re, d, sig }
            }
        }
    }
}

impl FromStr for CombinationRule {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mean" => Ok(CombinationRule::Mean),
            "yang" => Ok(CombinationRule::Yang),
            other => Err(ParamsError::UnknownCombinationRule(other.to_string())),
        }
    }
}

impl fmt::Display for CombinationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinationRule::Mean => write!(f, "mean"),
            CombinationRule::Yang => write!(f, "yang"),
        }
    }
}
