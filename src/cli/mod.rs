/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Command Line Interface (CLI) module
//!
//! Argument parsing for the demo binary.

use crate::params::{CombinationRule, ParameterSource};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Pairwise Morse-potential delta model demo
#[derive(Parser, Debug)]
#[command(name = "morse-delta", version, about)]
pub struct Cli {
    /// Neighbor-list cutoff radius in Angstroms
    #[arg(long, default_value_t = 6.0)]
    pub cutoff: f64,

    /// Combination rule for heteroatomic pairs (mean or yang)
    #[arg(long, default_value = "yang")]
    pub combo: String,

    /// Directory of per-element <Elem><Elem>.csv parameter files
    /// (built-in table when omitted)
    #[arg(long)]
    pub params_dir: Option<PathBuf>,

    /// JSON file overriding individual element parameters
    #[arg(long)]
    pub params_json: Option<PathBuf>,

    /// Directory for the model report
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,
}

impl Cli {
    /// Parse the combination-rule argument
    pub fn combination_rule(&self) -> anyhow::Result<CombinationRule> {
        Ok(self.combo.parse()?)
    }

    /// Assemble the parameter source from the arguments
    pub fn parameter_source(&self) -> anyhow::Result<ParameterSource> {
        let mut source = match &self.params_dir {
            Some(dir) => ParameterSource::directory(dir),
            None => ParameterSource::builtin(),
        };
        if let Some(path) = &self.params_json {
            let json = fs::read_to_string(path)?;
            source = source.with_json_override(&json);
        }
        Ok(source)
    }
}
