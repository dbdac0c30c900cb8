/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(i32),

    #[error("Non-finite position for atom {index}: {detail}")]
    NonFinitePosition { index: usize, detail: String },

    #[error("Invalid cell: {0}")]
    InvalidCell(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
