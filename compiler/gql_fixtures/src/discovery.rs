//! Fixture discovery.
//!
//! A fixture is a file named `NN-<anything>.gql` (two ASCII digits, a
//! dash) in the fixture directory. Its expected output lives next to it
//! with the `.json` extension. Subdirectories are not searched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::FixtureError;

/// A discovered fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    /// File name of the `.gql` source, e.g. `01-punctuation.gql`.
    pub name: String,
    /// Path to the `.gql` source.
    pub source_path: PathBuf,
    /// Path to the paired `.json` expected output (may not exist).
    pub expected_path: PathBuf,
}

impl Fixture {
    pub fn new(dir: &Path, name: &str) -> Self {
        let stem = name.strip_suffix(".gql").unwrap_or(name);
        Fixture {
            name: name.to_owned(),
            source_path: dir.join(name),
            expected_path: dir.join(format!("{stem}.json")),
        }
    }
}

/// Returns `true` for file names of the form `NN-*.gql`.
pub fn is_fixture_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
        && name.ends_with(".gql")
        && !name.contains('\n')
}

/// Discover all fixtures in `dir`, sorted by file name.
pub fn discover_fixtures(dir: &Path) -> Result<Vec<Fixture>, FixtureError> {
    let entries = fs::read_dir(dir).map_err(|e| FixtureError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FixtureError::io(dir, e))?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if is_fixture_name(&name) && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();

    Ok(names.iter().map(|name| Fixture::new(dir, name)).collect())
}
