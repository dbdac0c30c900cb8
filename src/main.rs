/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Demo binary: predicts a few built-in copper configurations and writes
//! the model report

use clap::Parser;
use morse_delta::atoms::{Atom, Cell, Configuration, Vector3D};
use morse_delta::cli::Cli;
use morse_delta::report;
use morse_delta::MorseModel;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("morse-delta v{}", morse_delta::VERSION);

    let configurations = demo_configurations()?;
    let model = MorseModel::new(
        configurations,
        cli.cutoff,
        cli.combination_rule()?,
        &cli.parameter_source()?,
    )?;

    fs::create_dir_all(&cli.results_dir)?;
    let mut sink = BufWriter::new(File::create(cli.results_dir.join("morse_model.txt"))?);
    report::write_model_report(&mut sink, &model)?;
    sink.flush()?;

    for (id, result) in model.config_ids().zip(model.predict_all()) {
        let title = model.configurations()[id.index()].title().to_string();
        match result {
            Ok(prediction) => println!(
                "{:<24} {:>3} atoms  energy {:>12.6} eV",
                title, prediction.atom_count, prediction.energy
            ),
            Err(err) => println!("{:<24} failed: {}", title, err),
        }
    }

    Ok(())
}

/// A copper dimer plus small periodic fcc copper cells at a few lattice
/// constants
fn demo_configurations() -> anyhow::Result<Vec<Configuration>> {
    let mut configurations = Vec::new();

    let dimer = vec![
        Atom::new("Cu", Vector3D::origin())?,
        Atom::new("Cu", Vector3D::new(2.866, 0.0, 0.0))?,
    ];
    configurations.push(Configuration::with_title(dimer, Cell::zero(), "Cu dimer")?);

    for lattice in [3.5, 3.615, 3.8] {
        let half = lattice / 2.0;
        let basis = [
            Vector3D::origin(),
            Vector3D::new(half, half, 0.0),
            Vector3D::new(half, 0.0, half),
            Vector3D::new(0.0, half, half),
        ];
        let atoms = basis
            .iter()
            .map(|&p| Atom::new("Cu", p))
            .collect::<Result<Vec<_>, _>>()?;
        configurations.push(Configuration::with_title(
            atoms,
            Cell::cubic(lattice),
            &format!("Cu fcc a={}", lattice),
        )?);
    }

    Ok(configurations)
}
