/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Error types for the parameter store

use std::path::PathBuf;

/// Error types for parameter loading and combination-rule selection
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("Morse parameters not available for {0}, requires manual definition")]
    MissingElement(String),

    #[error("Unknown combination rule: {0}")]
    UnknownCombinationRule(String),

    #[error("Invalid Morse parameters for {element}: {detail}")]
    InvalidParameters { element: String, detail: String },

    #[error("Failed to read parameter file {path}: {source}")]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse parameter file {path}: {detail}")]
    ParseError { path: PathBuf, detail: String },

    #[error("Invalid parameter JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, ParamsError>;
