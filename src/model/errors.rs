/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Error types for model construction and prediction

use crate::neighbors::NeighborError;
use crate::params::ParamsError;

/// Error types for the Morse delta model
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Morse parameters missing for element(s) {elements:?} in configuration {config}")]
    MissingParameters { config: usize, elements: Vec<String> },

    #[error(
        "Degenerate geometry in configuration {config}: zero distance between atom {atom} and \
         neighbor {neighbor} (offset {offset:?})"
    )]
    DegenerateGeometry {
        config: usize,
        atom: usize,
        neighbor: usize,
        offset: [i32; 3],
    },

    #[error(
        "Non-finite interaction in configuration {config} between atom {atom} and neighbor \
         {neighbor} at r = {r}"
    )]
    NonFiniteInteraction {
        config: usize,
        atom: usize,
        neighbor: usize,
        r: f64,
    },

    #[error("Unknown configuration handle: {0}")]
    UnknownConfiguration(usize),

    #[error("Parameter error: {0}")]
    Params(#[from] ParamsError),

    #[error("Neighbor-list error: {0}")]
    Neighbors(#[from] NeighborError),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
