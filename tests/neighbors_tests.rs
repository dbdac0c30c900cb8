/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

use morse_delta::atoms::{Atom, Cell, ConfigId, Configuration, Vector3D};
use morse_delta::NeighborList;
use std::collections::HashSet;

fn fcc_cell(lattice: f64) -> Configuration {
    let half = lattice / 2.0;
    let basis = [
        Vector3D::origin(),
        Vector3D::new(half, half, 0.0),
        Vector3D::new(half, 0.0, half),
        Vector3D::new(0.0, half, half),
    ];
    let atoms = basis
        .iter()
        .map(|&p| Atom::new("Cu", p).unwrap())
        .collect();
    Configuration::new(atoms, Cell::cubic(lattice)).unwrap()
}

fn neighbor_sets(list: &NeighborList, id: ConfigId) -> Vec<HashSet<(usize, [i32; 3])>> {
    list.neighbors(id)
        .unwrap()
        .iter()
        .map(|atom_list| atom_list.iter().map(|n| (n.index, n.offset)).collect())
        .collect()
}

#[test]
fn test_fcc_first_shell_coordination() {
    // In fcc each atom has 12 nearest neighbors at a/sqrt(2)
    let lattice = 3.615;
    let config = fcc_cell(lattice);
    let first_shell = lattice / 2.0_f64.sqrt();

    let list = NeighborList::build(&[config], first_shell + 0.1).unwrap();
    for atom_set in neighbor_sets(&list, ConfigId(0)) {
        assert_eq!(atom_set.len(), 12);
    }
}

#[test]
fn test_neighbor_sets_are_deterministic() {
    // Order may vary between builds; the per-atom sets must not
    let configs = [fcc_cell(3.615)];
    let a = NeighborList::build(&configs, 5.0).unwrap();
    let b = NeighborList::build(&configs, 5.0).unwrap();

    assert_eq!(
        neighbor_sets(&a, ConfigId(0)),
        neighbor_sets(&b, ConfigId(0))
    );
}

#[test]
fn test_full_lists_are_symmetric() {
    // Every (i -> j, offset) entry has a (j -> i, -offset) mirror
    let config = fcc_cell(3.615);
    let list = NeighborList::build(&[config], 5.0).unwrap();
    let sets = neighbor_sets(&list, ConfigId(0));

    for (i, atom_set) in sets.iter().enumerate() {
        for &(j, offset) in atom_set {
            let mirror = (i, [-offset[0], -offset[1], -offset[2]]);
            assert!(
                sets[j].contains(&mirror),
                "missing mirror of {} -> {} {:?}",
                i,
                j,
                offset
            );
        }
    }
}

#[test]
fn test_cutoff_respected() {
    let config = fcc_cell(3.615);
    let cutoff = 4.0;
    let list = NeighborList::build(std::slice::from_ref(&config), cutoff).unwrap();

    let positions: Vec<Vector3D> = config.atoms().iter().map(|a| *a.position()).collect();
    for (i, atom_list) in list.neighbors(ConfigId(0)).unwrap().iter().enumerate() {
        for neighbor in atom_list {
            let d = positions[neighbor.index] + config.cell().offset_to_cartesian(neighbor.offset)
                - positions[i];
            assert!(d.length() <= cutoff + 1e-12);
            assert!(d.length() > 0.0);
        }
    }
}
