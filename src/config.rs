//! Package sets for the command-line driver.
//!
//! Packages are either the built-in demonstration list or loaded from a JSON
//! file of the form `{"packages": [{"code": "RUN", "data": [15000, 1, 75]}]}`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::package::SensorPackage;

/// An ordered list of sensor packages to summarize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageSet {
    /// Packages in processing order.
    pub packages: Vec<SensorPackage>,
}

impl PackageSet {
    /// The demonstration packages: one swim, one run, one walk.
    pub fn demo() -> Self {
        Self {
            packages: vec![
                SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
                SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
                SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
            ],
        }
    }

    /// Loads a package set from a JSON file.
    ///
    /// ## Errors
    /// Returns an error if:
    /// - the file cannot be read
    /// - the file is not a valid package set
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read packages file {}", path.display()))?;
        let set: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse packages file {}", path.display()))?;
        debug!(path = %path.display(), count = set.packages.len(), "loaded packages");
        Ok(set)
    }

    /// Loads from `path` when given, otherwise returns the demonstration set.
    ///
    /// ## Errors
    /// Same as [`PackageSet::load`].
    pub fn load_or_demo(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::demo()),
        }
    }
}
