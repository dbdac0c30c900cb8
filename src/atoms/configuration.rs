/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Atomic configuration: an immutable snapshot of atoms in a periodic cell
//!
//! Configurations are identified in hot paths by a [`ConfigId`] handle
//! assigned at ingestion; the content hash exists only to deduplicate
//! identical configurations (e.g. to share neighbor-list work).

use super::atom::Atom;
use super::cell::Cell;
use super::errors::{AtomError, Result};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// Integer handle identifying a configuration within an ingested collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigId(pub usize);

impl ConfigId {
    /// The position of this configuration in the ingested collection
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An ordered collection of atoms plus a periodic cell, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    atoms: Vec<Atom>,
    cell: Cell,
    title: String,
}

impl Configuration {
    /// Create a configuration, validating that every position is finite
    pub fn new(atoms: Vec<Atom>, cell: Cell) -> Result<Self> {
        for (index, atom) in atoms.iter().enumerate() {
            if !atom.position().is_finite() {
                return Err(AtomError::NonFinitePosition {
                    index,
                    detail: format!("{} at {}", atom.symbol(), atom.position()),
                });
            }
        }
        for row in cell.rows() {
            if !row.is_finite() {
                return Err(AtomError::InvalidCell(
                    "cell matrix contains non-finite entries".to_string(),
                ));
            }
        }

        Ok(Self {
            atoms,
            cell,
            title: String::new(),
        })
    }

    /// Create a configuration with a descriptive title
    pub fn with_title(atoms: Vec<Atom>, cell: Cell, title: &str) -> Result<Self> {
        let mut config = Self::new(atoms, cell)?;
        config.title = title.to_string();
        Ok(config)
    }

    /// Get the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the atoms in order
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Get a single atom by index
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Number of atoms in the configuration
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Get the periodic cell
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// The set of distinct element symbols present
    pub fn element_set(&self) -> BTreeSet<String> {
        self.atoms
            .iter()
            .map(|atom| atom.symbol().to_string())
            .collect()
    }

    /// Content hash over the full state (symbols, bit-exact positions, cell).
    /// Suitable for deduplication only; use [`ConfigId`] as the primary key.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for atom in &self.atoms {
            atom.symbol().hash(&mut hasher);
            atom.position().x.to_bits().hash(&mut hasher);
            atom.position().y.to_bits().hash(&mut hasher);
            atom.position().z.to_bits().hash(&mut hasher);
        }
        for row in self.cell.rows() {
            row.x.to_bits().hash(&mut hasher);
            row.y.to_bits().hash(&mut hasher);
            row.z.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Collect the distinct element symbols across a whole collection
    pub fn collection_elements(configurations: &[Configuration]) -> BTreeSet<String> {
        configurations
            .iter()
            .flat_map(|config| config.element_set())
            .collect()
    }
}
