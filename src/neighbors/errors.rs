/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Error types for neighbor-list construction

use crate::atoms::AtomError;

/// Error types for neighbor-list construction
#[derive(Debug, thiserror::Error)]
pub enum NeighborError {
    #[error("Invalid cutoff radius {0}: must be finite and positive")]
    InvalidCutoff(f64),

    #[error("Configuration {index}: {source}")]
    BadCell {
        index: usize,
        #[source]
        source: AtomError,
    },
}

/// Result type for neighbor-list operations
pub type Result<T> = std::result::Result<T, NeighborError>;
