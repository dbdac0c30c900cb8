/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Parameter store: tabulated Morse parameters per chemical element
//!
//! Parameters come from one of three places, in increasing precedence:
//! the built-in table of literature values, a directory of per-element
//! `<Elem><Elem>.csv` files, and an optional JSON override supplied by the
//! caller. Elements that cannot be resolved are recorded and reported, not
//! fatal at load time; prediction on a configuration containing such an
//! element fails later with a distinguishable error.

use super::errors::{ParamsError, Result};
use super::morse::MorseParams;
use log::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Built-in Morse parameters for homonuclear pairs (eV, Angstroms).
/// Metals follow the Girifalco-Weizer fits; diatomics follow spectroscopic
/// constants.
static BUILTIN_PARAMS: Lazy<BTreeMap<&'static str, MorseParams>> = Lazy::new(|| {
    BTreeMap::from([
        ("H", MorseParams::new(0.741, 4.745, 1.944)),
        ("N", MorseParams::new(1.098, 9.760, 2.689)),
        ("O", MorseParams::new(1.208, 5.211, 2.654)),
        ("Na", MorseParams::new(3.659, 0.06334, 0.58993)),
        ("Al", MorseParams::new(3.253, 0.2703, 1.1646)),
        ("K", MorseParams::new(5.247, 0.05424, 0.49767)),
        ("Ca", MorseParams::new(4.569, 0.1623, 0.80535)),
        ("Cr", MorseParams::new(2.754, 0.4414, 1.5721)),
        ("Fe", MorseParams::new(2.845, 0.4174, 1.3885)),
        ("Ni", MorseParams::new(2.780, 0.4205, 1.4199)),
        ("Cu", MorseParams::new(2.866, 0.3429, 1.3588)),
        ("Mo", MorseParams::new(2.976, 0.8032, 1.5079)),
        ("Ag", MorseParams::new(3.115, 0.3323, 1.3690)),
        ("W", MorseParams::new(3.032, 0.9906, 1.4116)),
        ("Pb", MorseParams::new(3.733, 0.2348, 1.1836)),
    ])
});

/// Where parameter records are resolved from
#[derive(Debug, Clone, Default)]
pub struct ParameterSource {
    /// Directory holding per-element `<Elem><Elem>.csv` files.
    /// When `None`, the built-in table is used.
    pub directory: Option<PathBuf>,
    /// JSON document mapping element symbols to parameter records,
    /// e.g. `{"Cu": {"re": 2.866, "De": 0.3429, "a": 1.3588}}`.
    /// Entries here take precedence over files and built-ins.
    pub json_override: Option<String>,
}

impl ParameterSource {
    /// Use the built-in parameter table only
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Read per-element files from a directory
    pub fn directory<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            directory: Some(dir.as_ref().to_path_buf()),
            json_override: None,
        }
    }

    /// Attach a JSON override to this source
    pub fn with_json_override(mut self, json: &str) -> Self {
        self.json_override = Some(json.to_string());
        self
    }
}

/// Element-keyed Morse parameter table with its unresolved-element set
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    params: BTreeMap<String, MorseParams>,
    missing: BTreeSet<String>,
}

impl ParameterTable {
    /// Load parameters for every element in `elements`.
    ///
    /// Elements without usable records are logged and collected into the
    /// missing set rather than aborting the load; a malformed JSON override
    /// is a hard error since it is explicit user input.
    pub fn load(elements: &BTreeSet<String>, source: &ParameterSource) -> Result<Self> {
        let overrides: HashMap<String, MorseParams> = match &source.json_override {
            Some(json) => parse_json_override(json)?,
            None => HashMap::new(),
        };

        let mut table = Self::default();
        for element in elements {
            if let Some(params) = overrides.get(element) {
                table.params.insert(element.clone(), *params);
                continue;
            }

            let record = match &source.directory {
                Some(dir) => read_element_file(dir, element),
                None => BUILTIN_PARAMS
                    .get(element.as_str())
                    .copied()
                    .ok_or_else(|| ParamsError::MissingElement(element.clone())),
            };

            match record.and_then(|params| params.validate(element).map(|_| params)) {
                Ok(params) => {
                    table.params.insert(element.clone(), params);
                }
                Err(err) => {
                    warn!("{}", err);
                    table.missing.insert(element.clone());
                }
            }
        }

        Ok(table)
    }

    /// Manually define (or replace) an element's parameters
    pub fn insert(&mut self, element: &str, params: MorseParams) -> Result<()> {
        params.validate(element)?;
        self.params.insert(element.to_string(), params);
        self.missing.remove(element);
        Ok(())
    }

    /// Get the parameters for an element
    pub fn get(&self, element: &str) -> Option<&MorseParams> {
        self.params.get(element)
    }

    /// Elements that could not be resolved at load time
    pub fn missing(&self) -> &BTreeSet<String> {
        &self.missing
    }

    /// Iterate over the resolved `(element, parameters)` entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MorseParams)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of resolved entries
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if no entries are resolved
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct OverrideRecord {
    re: f64,
    #[serde(rename = "De")]
    de: f64,
    a: f64,
}

fn parse_json_override(json: &str) -> Result<HashMap<String, MorseParams>> {
    let records: HashMap<String, OverrideRecord> = serde_json::from_str(json)?;
    let mut overrides = HashMap::with_capacity(records.len());
    for (element, record) in records {
        let params = MorseParams::new(record.re, record.de, record.a);
        params.validate(&element)?;
        overrides.insert(element, params);
    }
    Ok(overrides)
}

/// Read one `<Elem><Elem>.csv` file: a comma-separated header naming at
/// least `re`, `De` and `a`, followed by one data row.
fn read_element_file(dir: &Path, element: &str) -> Result<MorseParams> {
    let path = dir.join(format!("{0}{0}.csv", element));
    let file = File::open(&path).map_err(|source| ParamsError::FileError {
        path: path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut lines = reader.lines().filter_map(|line| match line {
        Ok(text) if !text.trim().is_empty() => Some(Ok(text)),
        Ok(_) => None,
        Err(err) => Some(Err(err)),
    });

    let header = lines
        .next()
        .transpose()
        .map_err(|source| ParamsError::FileError {
            path: path.clone(),
            source,
        })?
        .ok_or_else(|| ParamsError::ParseError {
            path: path.clone(),
            detail: "empty file".to_string(),
        })?;
    let row = lines
        .next()
        .transpose()
        .map_err(|source| ParamsError::FileError {
            path: path.clone(),
            source,
        })?
        .ok_or_else(|| ParamsError::ParseError {
            path: path.clone(),
            detail: "missing data row".to_string(),
        })?;

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let values: Vec<&str> = row.split(',').map(str::trim).collect();
    if values.len() != columns.len() {
        return Err(ParamsError::ParseError {
            path,
            detail: format!(
                "header has {} columns but data row has {}",
                columns.len(),
                values.len()
            ),
        });
    }

    let field = |name: &str| -> Result<f64> {
        let index = columns
            .iter()
            .position(|&c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| ParamsError::ParseError {
                path: path.clone(),
                detail: format!("missing column '{}'", name),
            })?;
        values[index].parse::<f64>().map_err(|_| ParamsError::ParseError {
            path: path.clone(),
            detail: format!("invalid value '{}' for column '{}'", values[index], name),
        })
    };

    Ok(MorseParams::new(field("re")?, field("De")?, field("a")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn elements(symbols: &[&str]) -> BTreeSet<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    fn write_param_file(dir: &Path, element: &str, content: &str) {
        let path = dir.join(format!("{0}{0}.csv", element));
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_builtin_load() {
        let table =
            ParameterTable::load(&elements(&["Cu", "Ni"]), &ParameterSource::builtin()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.missing().is_empty());
        assert_relative_eq!(table.get("Cu").unwrap().re, 2.866, epsilon = 1e-12);
    }

    #[test]
    fn test_builtin_missing_element_is_recorded_not_fatal() {
        let table =
            ParameterTable::load(&elements(&["Cu", "Xe"]), &ParameterSource::builtin()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.missing().contains("Xe"));
        assert!(table.get("Xe").is_none());
    }

    #[test]
    fn test_directory_load() {
        let dir = TempDir::new().unwrap();
        write_param_file(dir.path(), "Cu", "re,De,a\n2.866,0.3429,1.3588\n");
        write_param_file(dir.path(), "Pt", "De,re,a,extra\n0.7102,2.897,1.6047,0.0\n");

        let table = ParameterTable::load(
            &elements(&["Cu", "Pt"]),
            &ParameterSource::directory(dir.path()),
        )
        .unwrap();
        assert!(table.missing().is_empty());
        assert_relative_eq!(table.get("Pt").unwrap().de, 0.7102, epsilon = 1e-12);
        assert_relative_eq!(table.get("Pt").unwrap().re, 2.897, epsilon = 1e-12);
    }

    #[test]
    fn test_directory_missing_file_continues() {
        let dir = TempDir::new().unwrap();
        write_param_file(dir.path(), "Cu", "re,De,a\n2.866,0.3429,1.3588\n");

        let table = ParameterTable::load(
            &elements(&["Cu", "Au"]),
            &ParameterSource::directory(dir.path()),
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.missing().contains("Au"));
    }

    #[test]
    fn test_malformed_file_is_recorded_as_missing() {
        let dir = TempDir::new().unwrap();
        write_param_file(dir.path(), "Cu", "re,De\n2.866,0.3429\n");
        write_param_file(dir.path(), "Ni", "re,De,a\nnot,a,number\n");

        let table = ParameterTable::load(
            &elements(&["Cu", "Ni"]),
            &ParameterSource::directory(dir.path()),
        )
        .unwrap();
        assert!(table.missing().contains("Cu"));
        assert!(table.missing().contains("Ni"));
    }

    #[test]
    fn test_json_override_takes_precedence() {
        let source = ParameterSource::builtin()
            .with_json_override(r#"{"Cu": {"re": 2.5, "De": 0.5, "a": 1.5}}"#);
        let table = ParameterTable::load(&elements(&["Cu"]), &source).unwrap();
        assert_relative_eq!(table.get("Cu").unwrap().re, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_json_override_supplies_unknown_element() {
        let source = ParameterSource::builtin()
            .with_json_override(r#"{"Xe": {"re": 4.4, "De": 0.024, "a": 1.5}}"#);
        let table = ParameterTable::load(&elements(&["Xe"]), &source).unwrap();
        assert!(table.missing().is_empty());
        assert_relative_eq!(table.get("Xe").unwrap().a, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_json_override_is_fatal() {
        let source = ParameterSource::builtin().with_json_override("not json");
        assert!(ParameterTable::load(&elements(&["Cu"]), &source).is_err());

        let bad_values =
            ParameterSource::builtin().with_json_override(r#"{"Cu": {"re": -1.0, "De": 1.0, "a": 1.0}}"#);
        assert!(ParameterTable::load(&elements(&["Cu"]), &bad_values).is_err());
    }

    #[test]
    fn test_manual_insert_clears_missing() {
        let mut table =
            ParameterTable::load(&elements(&["Xe"]), &ParameterSource::builtin()).unwrap();
        assert!(table.missing().contains("Xe"));

        table.insert("Xe", MorseParams::new(4.4, 0.024, 1.5)).unwrap();
        assert!(table.missing().is_empty());
        assert!(table.get("Xe").is_some());
    }
}
