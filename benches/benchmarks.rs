/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use morse_delta::atoms::{Atom, Cell, ConfigId, Configuration, Vector3D};
use morse_delta::model::kernel;
use morse_delta::params::{CombinationRule, PairParams, ParameterSource};
use morse_delta::MorseModel;

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

fn kernel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pair Kernel");

    let pair = PairParams {
        re: 2.866,
        d: 0.3429,
        sig: 2.35,
    };

    group.bench_function("pair_energy", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(kernel::pair_energy(black_box(i as f64 * 0.005 + 1.0), &pair));
            }
        })
    });

    group.bench_function("pair_energy_force", |b| {
        b.iter(|| {
            for i in 1..1000 {
                let r = i as f64 * 0.005 + 1.0;
                black_box(kernel::pair_energy_force(
                    black_box(r),
                    Vector3D::new(r, 0.0, 0.0),
                    &pair,
                ));
            }
        })
    });

    group.finish();
}

fn prediction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prediction");
    group.sample_size(20);

    let configurations: Vec<Configuration> = (0..16)
        .map(|i| fcc_cell(3.5 + 0.02 * i as f64))
        .collect();
    let model = MorseModel::new(
        configurations,
        6.0,
        CombinationRule::Yang,
        &ParameterSource::builtin(),
    )
    .unwrap();

    group.bench_function("predict_one_fcc_cell", |b| {
        b.iter(|| black_box(model.predict(ConfigId(0)).unwrap()))
    });

    group.bench_function("predict_all_16_cells", |b| {
        b.iter(|| black_box(model.predict_all()))
    });

    group.finish();
}

criterion_group!(benches, kernel_benchmark, prediction_benchmark);
criterion_main!(benches);
