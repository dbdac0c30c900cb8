/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Atom representation for pairwise potential calculations

use super::database;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use std::fmt;

/// Represents a single atom: a validated chemical element at a cartesian position
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atomic number (Z) of the element
    atomic_number: i32,
    /// Atomic symbol (element symbol)
    symbol: String,
    /// Position of the atom in 3D space, in Angstroms
    position: Vector3D,
}

impl Atom {
    /// Create a new atom from an element symbol and a position
    pub fn new(symbol: &str, position: Vector3D) -> Result<Self> {
        let atomic_number = database::atomic_number(symbol)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;

        Ok(Self {
            atomic_number,
            symbol: symbol.to_string(),
            position,
        })
    }

    /// Create a new atom from an atomic number and a position
    pub fn from_atomic_number(atomic_number: i32, position: Vector3D) -> Result<Self> {
        let symbol = database::element_symbol(atomic_number)
            .ok_or(AtomError::InvalidAtomicNumber(atomic_number))?;

        Ok(Self {
            atomic_number,
            symbol: symbol.to_string(),
            position,
        })
    }

    /// Get the atomic number
    pub fn atomic_number(&self) -> i32 {
        self.atomic_number
    }

    /// Get the atomic symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the position
    pub fn position(&self) -> &Vector3D {
        &self.position
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.position)
    }
}
