/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Pairwise Morse-potential delta model
//!
//! [`MorseModel`] owns a configuration collection, its neighbor lists and a
//! resolved parameter table, and predicts per-configuration energies and
//! per-atom forces. All state is read-only after construction, so batch
//! prediction parallelizes freely across configurations.
//!
//! Pair-counting convention: neighbor lists are full (each unordered pair
//! appears once per direction) and each direction contributes a half share
//! of both the pair energy and the pair force. An isolated dimer at its
//! equilibrium separation therefore has energy exactly `-D`, and forces
//! keep Newton's-third-law symmetry.

pub mod errors;
pub mod kernel;

pub use errors::{ModelError, Result};

use crate::atoms::{ConfigId, Configuration, Vector3D};
use crate::neighbors::NeighborList;
use crate::params::{AtomParams, CombinationRule, ParameterSource, ParameterTable};
use log::{info, warn};
use rayon::prelude::*;

/// Distances below this are treated as a data-integrity failure
const MIN_PAIR_DISTANCE: f64 = 1e-10;

/// Prediction output for one configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Total configuration energy
    pub energy: f64,
    /// Per-atom force vectors, aligned with the configuration's atom order
    pub forces: Vec<Vector3D>,
    /// Number of atoms in the configuration
    pub atom_count: usize,
}

/// Morse-potential delta model over a fixed configuration collection
#[derive(Debug)]
pub struct MorseModel {
    configurations: Vec<Configuration>,
    table: ParameterTable,
    rule: CombinationRule,
    neighbor_list: NeighborList,
    /// Per-configuration resolved `(re, D, sigma)` triples, aligned with
    /// atom order; `None` when the configuration contains an element the
    /// parameter store could not resolve
    atom_params: Vec<Option<Vec<AtomParams>>>,
}

impl MorseModel {
    /// Construct a model: load parameters for every element present, build
    /// neighbor lists once, resolve per-atom parameter triples, and log the
    /// active parameterization.
    ///
    /// Missing element parameters are warnings here; prediction on an
    /// affected configuration fails with [`ModelError::MissingParameters`].
    pub fn new(
        configurations: Vec<Configuration>,
        cutoff: f64,
        rule: CombinationRule,
        source: &ParameterSource,
    ) -> Result<Self> {
        let elements = Configuration::collection_elements(&configurations);
        let table = ParameterTable::load(&elements, source)?;
        let neighbor_list = NeighborList::build(&configurations, cutoff)?;

        let atom_params = configurations
            .iter()
            .map(|config| resolve_atom_params(config, &table))
            .collect();

        let model = Self {
            configurations,
            table,
            rule,
            neighbor_list,
            atom_params,
        };
        model.log_construction();
        Ok(model)
    }

    fn log_construction(&self) {
        info!(
            "Morse delta model: {} configuration(s), cutoff {} A, combination rule '{}'",
            self.configurations.len(),
            self.neighbor_list.cutoff(),
            self.rule
        );
        for (element, params) in self.table.iter() {
            info!(
                "  {}: re = {} A, De = {}, a = {} 1/A (sigma = {:.6} A)",
                element,
                params.re,
                params.de,
                params.a,
                params.sigma()
            );
        }
        if !self.table.missing().is_empty() {
            warn!(
                "No Morse parameters for element(s) {:?}; affected configurations cannot be \
                 predicted until parameters are supplied",
                self.table.missing()
            );
        }
    }

    /// The ingested configurations, in input order
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Handles for every ingested configuration, in input order
    pub fn config_ids(&self) -> impl Iterator<Item = ConfigId> {
        (0..self.configurations.len()).map(ConfigId)
    }

    /// The cutoff radius the neighbor lists were built with
    pub fn cutoff(&self) -> f64 {
        self.neighbor_list.cutoff()
    }

    /// The active combination rule
    pub fn rule(&self) -> CombinationRule {
        self.rule
    }

    /// The resolved parameter table
    pub fn parameter_table(&self) -> &ParameterTable {
        &self.table
    }

    /// Predict energy, per-atom forces and atom count for one configuration
    pub fn predict(&self, id: ConfigId) -> Result<Prediction> {
        let index = id.index();
        let config = self
            .configurations
            .get(index)
            .ok_or(ModelError::UnknownConfiguration(index))?;
        let params = self.atom_params[index]
            .as_deref()
            .ok_or_else(|| ModelError::MissingParameters {
                config: index,
                elements: config
                    .element_set()
                    .into_iter()
                    .filter(|e| self.table.missing().contains(e))
                    .collect(),
            })?;
        let neighbors = self
            .neighbor_list
            .neighbors(id)
            .ok_or(ModelError::UnknownConfiguration(index))?;

        let natoms = config.atom_count();
        let cell = config.cell();
        let positions: Vec<Vector3D> = config.atoms().iter().map(|a| *a.position()).collect();

        let mut energy = 0.0;
        let mut forces = vec![Vector3D::origin(); natoms];

        for (i, atom_neighbors) in neighbors.iter().enumerate() {
            for neighbor in atom_neighbors {
                let j = neighbor.index;
                let d = positions[j] + cell.offset_to_cartesian(neighbor.offset) - positions[i];
                let r = d.length();
                if r < MIN_PAIR_DISTANCE {
                    return Err(ModelError::DegenerateGeometry {
                        config: index,
                        atom: i,
                        neighbor: j,
                        offset: neighbor.offset,
                    });
                }

                let pair = self.rule.combine(&params[i], &params[j]);
                let (e, f) = kernel::pair_energy_force(r, d, &pair);
                if !e.is_finite() || !f.is_finite() {
                    return Err(ModelError::NonFiniteInteraction {
                        config: index,
                        atom: i,
                        neighbor: j,
                        r,
                    });
                }

                // Full lists visit each unordered pair from both sides;
                // each direction carries a half share.
                energy += 0.5 * e;
                forces[i] -= f * 0.5;
                forces[j] += f * 0.5;
            }
        }

        Ok(Prediction {
            energy,
            forces,
            atom_count: natoms,
        })
    }

    /// Predict the whole collection, in input order.
    ///
    /// Failures are isolated per configuration: one bad configuration
    /// yields an `Err` entry without disturbing the rest of the batch.
    pub fn predict_all(&self) -> Vec<Result<Prediction>> {
        (0..self.configurations.len())
            .into_par_iter()
            .map(|index| self.predict(ConfigId(index)))
            .collect()
    }

    /// Predict the whole collection into three aligned sequences: energies,
    /// per-atom forces and atom counts. Fails on the first configuration
    /// that cannot be predicted; use [`predict_all`](Self::predict_all) to
    /// keep partial results.
    pub fn predict_batch(&self) -> Result<(Vec<f64>, Vec<Vec<Vector3D>>, Vec<usize>)> {
        let mut energies = Vec::with_capacity(self.configurations.len());
        let mut forces = Vec::with_capacity(self.configurations.len());
        let mut atom_counts = Vec::with_capacity(self.configurations.len());
        for result in self.predict_all() {
            let prediction = result?;
            energies.push(prediction.energy);
            forces.push(prediction.forces);
            atom_counts.push(prediction.atom_count);
        }
        Ok((energies, forces, atom_counts))
    }
}

/// Resolve per-atom `(re, D, sigma)` triples for one configuration, or
/// `None` if any of its elements lacks parameters
fn resolve_atom_params(
    config: &Configuration,
    table: &ParameterTable,
) -> Option<Vec<AtomParams>> {
    config
        .atoms()
        .iter()
        .map(|atom| table.get(atom.symbol()).map(|p| p.resolve()))
        .collect()
}
