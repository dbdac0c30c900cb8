/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Morse parameterization
//!
//! Tabulated per-element parameters, the derived `(re, D, sigma)` triples
//! consumed by the kernel, and the heteroatomic combination rules.

pub mod errors;
pub mod morse;
pub mod table;

pub use errors::{ParamsError, Result};
pub use morse::{AtomParams, CombinationRule, MorseParams, PairParams};
pub use table::{ParameterSource, ParameterTable};
