/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Periodic cell representation
//!
//! A `Cell` is a 3x3 matrix whose rows are the lattice vectors. The all-zero
//! matrix denotes a non-periodic (isolated) configuration.

use super::errors::{AtomError, Result};
use super::vector::Vector3D;

/// A 3x3 periodic cell matrix with lattice vectors as rows
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    rows: [Vector3D; 3],
}

impl Cell {
    /// Create a cell from three lattice (row) vectors
    pub fn new(a: Vector3D, b: Vector3D, c: Vector3D) -> Self {
        Self { rows: [a, b, c] }
    }

    /// Create a cell from a row-major 3x3 array
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::new(
            Vector3D::new(rows[0][0], rows[0][1], rows[0][2]),
            Vector3D::new(rows[1][0], rows[1][1], rows[1][2]),
            Vector3D::new(rows[2][0], rows[2][1], rows[2][2]),
        )
    }

    /// Create a cubic cell with the given edge length
    pub fn cubic(edge: f64) -> Self {
        Self::from_rows([[edge, 0.0, 0.0], [0.0, edge, 0.0], [0.0, 0.0, edge]])
    }

    /// Create the zero (non-periodic) cell
    pub fn zero() -> Self {
        Self::default()
    }

    /// Get the lattice vectors
    pub fn rows(&self) -> &[Vector3D; 3] {
        &self.rows
    }

    /// True if this is the zero matrix, i.e. a non-periodic configuration
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(|r| r.length_squared() == 0.0)
    }

    /// Signed cell volume (triple product of the lattice vectors)
    pub fn volume(&self) -> f64 {
        self.rows[0].dot(&self.rows[1].cross(&self.rows[2]))
    }

    /// Convert an integer periodic-image offset into a cartesian shift:
    /// `offset[0]*a + offset[1]*b + offset[2]*c`
    pub fn offset_to_cartesian(&self, offset: [i32; 3]) -> Vector3D {
        self.rows[0] * f64::from(offset[0])
            + self.rows[1] * f64::from(offset[1])
            + self.rows[2] * f64::from(offset[2])
    }

    /// Perpendicular spacings between opposite cell faces, one per lattice
    /// direction. Used to bound how many periodic images can fall inside a
    /// cutoff sphere. Fails for a nonzero but singular (zero-volume) cell.
    pub fn face_spacings(&self) -> Result<[f64; 3]> {
        let volume = self.volume().abs();
        if volume < 1e-12 {
            return Err(AtomError::InvalidCell(
                "nonzero cell has (near-)zero volume; lattice vectors are linearly dependent"
                    .to_string(),
            ));
        }

        let cross_bc = self.rows[1].cross(&self.rows[2]).length();
        let cross_ca = self.rows[2].cross(&self.rows[0]).length();
        let cross_ab = self.rows[0].cross(&self.rows[1]).length();

        Ok([volume / cross_bc, volume / cross_ca, volume / cross_ab])
    }
}
