/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Atomic data model
//!
//! This module provides the geometric and chemical building blocks used by
//! the potential: 3D vectors, periodic cells, validated atoms and immutable
//! atomic configurations.

pub mod atom;
pub mod cell;
pub mod configuration;
pub mod database;
pub mod errors;
pub mod vector;

pub use atom::Atom;
pub use cell::Cell;
pub use configuration::{ConfigId, Configuration};
pub use errors::{AtomError, Result};
pub use vector::Vector3D;
