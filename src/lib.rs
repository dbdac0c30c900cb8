/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! # morse-delta
//!
//! A pairwise Morse-potential baseline ("delta") model for machine-learned
//! interatomic potentials: a closed-form physics predictor of per-atom
//! energies and forces, used standalone or subtracted from reference data
//! before training a neural-network correction on the residual.
//!
//! The crate covers the pairwise-summation core: tabulated per-element
//! Morse parameters with heteroatomic combination rules, neighbor-list
//! construction over periodic boundary conditions, the analytic
//! energy/force kernel, and an order-preserving batch predictor.

pub mod atoms;
pub mod cli;
pub mod model;
pub mod neighbors;
pub mod params;
pub mod report;

pub use atoms::{Atom, Cell, ConfigId, Configuration, Vector3D};
pub use model::{ModelError, MorseModel, Prediction};
pub use neighbors::NeighborList;
pub use params::{CombinationRule, MorseParams, ParameterSource, ParameterTable};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
