use std::{fs::File, io::BufReader, path::{Path, PathBuf}};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geo::GeoParams;

/// Run configuration: where the inputs live, which columns are parties,
/// where results go, and the GEO thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Election results, one row per district.
    pub election: PathBuf,
    /// Dual-graph edges, one pair of district labels per row.
    pub edges: PathBuf,
    /// Whether the election file starts with a header row.
    pub election_header: bool,
    /// Whether the edge file starts with a header row.
    pub edges_header: bool,
    /// Zero-based election columns holding party vote counts (default: all but the first).
    pub party_columns: Option<Vec<usize>>,
    pub output_dir: PathBuf,
    pub output_prefix: String,
    pub params: GeoParams,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            election: PathBuf::new(),
            edges: PathBuf::new(),
            election_header: false,
            edges_header: false,
            party_columns: None,
            output_dir: PathBuf::from("."),
            output_prefix: String::new(),
            params: GeoParams::default(),
        }
    }
}

impl GeoConfig {
    /// Load a configuration from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[config] Failed to open config file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[config] Failed to parse config file: {}", path.display()))
    }

    /// Check that inputs are named and thresholds are consistent.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.election.as_os_str().is_empty(), "[config] no election file given");
        ensure!(!self.edges.as_os_str().is_empty(), "[config] no edge file given");
        self.params.validate()?;
        Ok(())
    }
}
