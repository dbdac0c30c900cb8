/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Diagnostics and parity reporting
//!
//! Everything here writes through caller-supplied `io::Write` sinks so the
//! numerical core stays free of filesystem side effects; the convenience
//! functions at the bottom wire the sinks to files in a results directory.

use crate::atoms::Vector3D;
use crate::model::MorseModel;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// File name for the energy parity table
pub const ENERGY_PARITY_FILE: &str = "morse_parity_e.dat";
/// File name for the force parity table
pub const FORCE_PARITY_FILE: &str = "morse_parity_f.dat";

/// Write the plain-text construction record: timestamp, parameter table and
/// combination rule
pub fn write_model_report<W: Write>(sink: &mut W, model: &MorseModel) -> io::Result<()> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    writeln!(sink, "# morse-delta model report (unix time {})", timestamp)?;
    writeln!(sink, "{}", "-".repeat(50))?;
    writeln!(
        sink,
        "configurations: {}",
        model.configurations().len()
    )?;
    writeln!(sink, "cutoff: {} A", model.cutoff())?;
    writeln!(sink, "combination rule: {}", model.rule())?;
    writeln!(sink, "parameters (element: re, De, a, sigma):")?;
    for (element, params) in model.parameter_table().iter() {
        writeln!(
            sink,
            "  {}: {} {} {} {:.6}",
            element,
            params.re,
            params.de,
            params.a,
            params.sigma()
        )?;
    }
    if !model.parameter_table().missing().is_empty() {
        writeln!(
            sink,
            "missing parameters: {:?}",
            model.parameter_table().missing()
        )?;
    }
    Ok(())
}

/// Write an energy parity table: one `reference predicted` row per
/// configuration
pub fn write_energy_parity<W: Write>(
    sink: &mut W,
    reference: &[f64],
    predicted: &[f64],
) -> io::Result<()> {
    check_aligned(reference.len(), predicted.len())?;
    writeln!(sink, "# ab initio energy, eV\tMorse energy, eV")?;
    for (target, value) in reference.iter().zip(predicted) {
        writeln!(sink, "{:.8e}\t{:.8e}", target, value)?;
    }
    Ok(())
}

/// Write a force parity table: one row per cartesian force component,
/// flattened over configurations and atoms
pub fn write_force_parity<W: Write>(
    sink: &mut W,
    reference: &[Vec<Vector3D>],
    predicted: &[Vec<Vector3D>],
) -> io::Result<()> {
    check_aligned(reference.len(), predicted.len())?;
    writeln!(sink, "# ab initio force, eV/A\tMorse force, eV/A")?;
    for (target_forces, forces) in reference.iter().zip(predicted) {
        check_aligned(target_forces.len(), forces.len())?;
        for (target, value) in target_forces.iter().zip(forces) {
            writeln!(sink, "{:.8e}\t{:.8e}", target.x, value.x)?;
            writeln!(sink, "{:.8e}\t{:.8e}", target.y, value.y)?;
            writeln!(sink, "{:.8e}\t{:.8e}", target.z, value.z)?;
        }
    }
    Ok(())
}

/// Write both parity tables into a results directory, creating it if needed
pub fn write_parity_files<P: AsRef<Path>>(
    results_dir: P,
    reference_energies: &[f64],
    predicted_energies: &[f64],
    reference_forces: &[Vec<Vector3D>],
    predicted_forces: &[Vec<Vector3D>],
) -> io::Result<()> {
    let dir = results_dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut energy_sink = BufWriter::new(File::create(dir.join(ENERGY_PARITY_FILE))?);
    write_energy_parity(&mut energy_sink, reference_energies, predicted_energies)?;
    energy_sink.flush()?;

    let mut force_sink = BufWriter::new(File::create(dir.join(FORCE_PARITY_FILE))?);
    write_force_parity(&mut force_sink, reference_forces, predicted_forces)?;
    force_sink.flush()
}

fn check_aligned(reference: usize, predicted: usize) -> io::Result<()> {
    if reference != predicted {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "reference and predicted sequences are misaligned ({} vs {})",
                reference, predicted
            ),
        ));
    }
    Ok(())
}
