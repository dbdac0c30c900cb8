/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Neighbor-list construction for periodic atomic configurations
//!
//! For every atom this enumerates all other atoms (and periodic images,
//! including images of the atom itself) within a cutoff radius. Lists are
//! FULL: each unordered pair appears twice, once per direction. They are
//! built once for a whole configuration collection and looked up by
//! [`ConfigId`]; identical configurations (by content hash) share one
//! computed entry.

pub mod errors;

pub use errors::{NeighborError, Result};

use crate::atoms::{Cell, ConfigId, Configuration, Vector3D};
use std::collections::HashMap;

/// One neighbor of a reference atom: the neighbor's atom index within the
/// configuration plus the periodic-image offset it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    /// Index of the neighbor atom in the configuration's atom order
    pub index: usize,
    /// Integer triplet selecting the periodic image of the neighbor
    pub offset: [i32; 3],
}

/// Per-atom neighbor enumerations for a collection of configurations
#[derive(Debug, Clone)]
pub struct NeighborList {
    cutoff: f64,
    /// Unique neighbor data, one entry per distinct configuration content
    entries: Vec<Vec<Vec<Neighbor>>>,
    /// Maps each configuration's position to its entry in `entries`
    slots: Vec<usize>,
}

impl NeighborList {
    /// Build neighbor lists for every configuration in the collection.
    ///
    /// The cutoff must be finite and positive; a nonzero singular cell is
    /// rejected. Identical configurations are detected by content hash
    /// (verified by equality) and computed once.
    pub fn build(configurations: &[Configuration], cutoff: f64) -> Result<Self> {
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return Err(NeighborError::InvalidCutoff(cutoff));
        }

        let mut entries: Vec<Vec<Vec<Neighbor>>> = Vec::new();
        let mut slots = Vec::with_capacity(configurations.len());
        let mut seen: HashMap<u64, Vec<(usize, usize)>> = HashMap::new();

        for (index, config) in configurations.iter().enumerate() {
            let hash = config.content_hash();
            let duplicate = seen.get(&hash).and_then(|candidates| {
                candidates
                    .iter()
                    .find(|&&(other, _)| configurations[other] == *config)
                    .map(|&(_, slot)| slot)
            });

            let slot = match duplicate {
                Some(slot) => slot,
                None => {
                    let entry = build_for_configuration(config, cutoff)
                        .map_err(|source| NeighborError::BadCell { index, source })?;
                    entries.push(entry);
                    let slot = entries.len() - 1;
                    seen.entry(hash).or_default().push((index, slot));
                    slot
                }
            };
            slots.push(slot);
        }

        Ok(Self {
            cutoff,
            entries,
            slots,
        })
    }

    /// The cutoff radius the lists were built with
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Number of configurations covered
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no configurations are covered
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Per-atom neighbor lists for one configuration, O(1) by handle
    pub fn neighbors(&self, id: ConfigId) -> Option<&[Vec<Neighbor>]> {
        self.slots
            .get(id.index())
            .map(|&slot| self.entries[slot].as_slice())
    }
}

/// Enumerate neighbors for a single configuration
fn build_for_configuration(
    config: &Configuration,
    cutoff: f64,
) -> crate::atoms::Result<Vec<Vec<Neighbor>>> {
    let natoms = config.atom_count();
    let positions: Vec<Vector3D> = config.atoms().iter().map(|a| *a.position()).collect();
    let cell = config.cell();

    let mut lists = vec![Vec::new(); natoms];
    let cutoff_sq = cutoff * cutoff;

    for offset in image_offsets(cell, &positions, cutoff)? {
        let shift = cell.offset_to_cartesian(offset);
        let home_image = offset == [0, 0, 0];
        for i in 0..natoms {
            for j in 0..natoms {
                // A self-pair only exists through a distinct periodic image
                if home_image && i == j {
                    continue;
                }
                let d = positions[j] + shift - positions[i];
                if d.length_squared() <= cutoff_sq {
                    lists[i].push(Neighbor { index: j, offset });
                }
            }
        }
    }

    Ok(lists)
}

/// All periodic-image offsets whose cells can intersect a cutoff sphere.
/// The per-axis range is the cutoff divided by the spacing between opposite
/// cell faces, widened by the atoms' fractional-coordinate spread so that
/// positions need not be wrapped into the home cell.
fn image_offsets(
    cell: &Cell,
    positions: &[Vector3D],
    cutoff: f64,
) -> crate::atoms::Result<Vec<[i32; 3]>> {
    if cell.is_zero() {
        return Ok(vec![[0, 0, 0]]);
    }

    let spacings = cell.face_spacings()?;
    let volume = cell.volume();
    let rows = cell.rows();
    let reciprocal = [
        rows[1].cross(&rows[2]) * (1.0 / volume),
        rows[2].cross(&rows[0]) * (1.0 / volume),
        rows[0].cross(&rows[1]) * (1.0 / volume),
    ];

    let mut ranges = [0i32; 3];
    for axis in 0..3 {
        let mut min_f = f64::INFINITY;
        let mut max_f = f64::NEG_INFINITY;
        for position in positions {
            let fractional = position.dot(&reciprocal[axis]);
            min_f = min_f.min(fractional);
            max_f = max_f.max(fractional);
        }
        let spread = if positions.is_empty() {
            0.0
        } else {
            max_f - min_f
        };
        ranges[axis] = (cutoff / spacings[axis] + spread).ceil() as i32;
    }
    let (na, nb, nc) = (ranges[0], ranges[1], ranges[2]);

    let mut offsets = Vec::with_capacity(
        ((2 * na + 1) * (2 * nb + 1) * (2 * nc + 1)) as usize,
    );
    for ia in -na..=na {
        for ib in -nb..=nb {
            for ic in -nc..=nc {
                offsets.push([ia, ib, ic]);
            }
        }
    }
    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Atom;
    use std::collections::HashSet;

    fn config(atoms: Vec<(&str, [f64; 3])>, cell: Cell) -> Configuration {
        let atoms = atoms
            .into_iter()
            .map(|(symbol, p)| Atom::new(symbol, Vector3D::new(p[0], p[1], p[2])).unwrap())
            .collect();
        Configuration::new(atoms, cell).unwrap()
    }

    fn neighbor_set(list: &[Neighbor]) -> HashSet<(usize, [i32; 3])> {
        list.iter().map(|n| (n.index, n.offset)).collect()
    }

    #[test]
    fn test_invalid_cutoff_rejected() {
        let c = config(vec![("Cu", [0.0, 0.0, 0.0])], Cell::zero());
        assert!(NeighborList::build(std::slice::from_ref(&c), 0.0).is_err());
        assert!(NeighborList::build(std::slice::from_ref(&c), -1.0).is_err());
        assert!(NeighborList::build(&[c], f64::INFINITY).is_err());
    }

    #[test]
    fn test_isolated_pair_is_bothways() {
        let c = config(
            vec![("Cu", [0.0, 0.0, 0.0]), ("Cu", [2.0, 0.0, 0.0])],
            Cell::zero(),
        );
        let list = NeighborList::build(&[c], 3.0).unwrap();
        let neighbors = list.neighbors(ConfigId(0)).unwrap();

        assert_eq!(neighbor_set(&neighbors[0]), HashSet::from([(1, [0, 0, 0])]));
        assert_eq!(neighbor_set(&neighbors[1]), HashSet::from([(0, [0, 0, 0])]));
    }

    #[test]
    fn test_out_of_range_pair_excluded() {
        let c = config(
            vec![("Cu", [0.0, 0.0, 0.0]), ("Cu", [5.0, 0.0, 0.0])],
            Cell::zero(),
        );
        let list = NeighborList::build(&[c], 3.0).unwrap();
        let neighbors = list.neighbors(ConfigId(0)).unwrap();
        assert!(neighbors[0].is_empty());
        assert!(neighbors[1].is_empty());
    }

    #[test]
    fn test_simple_cubic_coordination() {
        // One atom in a cubic cell: six nearest periodic self-images
        let c = config(vec![("Cu", [0.0, 0.0, 0.0])], Cell::cubic(3.0));
        let list = NeighborList::build(&[c], 3.5).unwrap();
        let neighbors = list.neighbors(ConfigId(0)).unwrap();

        let set = neighbor_set(&neighbors[0]);
        assert_eq!(set.len(), 6);
        for (index, offset) in &set {
            assert_eq!(*index, 0);
            let order: i32 = offset.iter().map(|o| o.abs()).sum();
            assert_eq!(order, 1);
        }
    }

    #[test]
    fn test_cubic_with_diagonal_images() {
        // Raising the cutoff past a*sqrt(2) picks up the 12 edge images too
        let c = config(vec![("Cu", [0.0, 0.0, 0.0])], Cell::cubic(3.0));
        let list = NeighborList::build(&[c], 4.5).unwrap();
        let set = neighbor_set(&list.neighbors(ConfigId(0)).unwrap()[0]);
        assert_eq!(set.len(), 18);
    }

    #[test]
    fn test_offsets_map_through_cell() {
        let c = config(
            vec![("Cu", [0.0, 0.0, 0.0]), ("Cu", [2.5, 0.0, 0.0])],
            Cell::cubic(3.0),
        );
        let list = NeighborList::build(std::slice::from_ref(&c), 1.0).unwrap();
        let neighbors = list.neighbors(ConfigId(0)).unwrap();

        // Atom 1 is 2.5 away directly but 0.5 away through the -x image
        assert_eq!(
            neighbor_set(&neighbors[0]),
            HashSet::from([(1, [-1, 0, 0])])
        );
        assert_eq!(neighbor_set(&neighbors[1]), HashSet::from([(0, [1, 0, 0])]));
    }

    #[test]
    fn test_unwrapped_positions_still_find_images() {
        // Atom 1 sits three cells outside the home cell; its nearest image
        // to atom 0 is one lattice vector away
        let c = config(
            vec![("Cu", [0.0, 0.0, 0.0]), ("Cu", [10.0, 0.0, 0.0])],
            Cell::cubic(3.0),
        );
        let list = NeighborList::build(&[c], 1.5).unwrap();
        let neighbors = list.neighbors(ConfigId(0)).unwrap();
        assert_eq!(
            neighbor_set(&neighbors[0]),
            HashSet::from([(1, [-3, 0, 0])])
        );
    }

    #[test]
    fn test_duplicate_configurations_share_entries() {
        let a = config(
            vec![("Cu", [0.0, 0.0, 0.0]), ("Cu", [2.0, 0.0, 0.0])],
            Cell::zero(),
        );
        let b = a.clone();
        let c = config(
            vec![("Cu", [0.0, 0.0, 0.0]), ("Cu", [2.1, 0.0, 0.0])],
            Cell::zero(),
        );

        let list = NeighborList::build(&[a, b, c], 3.0).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.slots[0], list.slots[1]);
        assert_ne!(list.slots[0], list.slots[2]);
    }

    #[test]
    fn test_singular_cell_rejected() {
        let c = config(
            vec![("Cu", [0.0, 0.0, 0.0])],
            Cell::from_rows([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
        );
        assert!(NeighborList::build(&[c], 3.0).is_err());
    }
}
