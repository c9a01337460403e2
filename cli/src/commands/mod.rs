pub mod score;
pub mod stats;

use anyhow::Result;
use geo_metric::{Deviation, GeoConfig};

use crate::cli::InputArgs;

/// Merge the optional config file with command-line overrides.
pub fn load_config(input: &InputArgs) -> Result<GeoConfig> {
    let mut config = match &input.config {
        Some(path) => GeoConfig::from_json_file(path)?,
        None => GeoConfig::default(),
    };

    if let Some(election) = &input.election { config.election = election.clone(); }
    if let Some(edges) = &input.edges { config.edges = edges.clone(); }
    if let Some(columns) = &input.columns { config.party_columns = Some(columns.clone()); }
    if input.header { config.election_header = true; }
    if input.edges_header { config.edges_header = true; }
    if let Some(min_cvs) = input.min_cvs { config.params.min_cvs = min_cvs; }
    if let Some(max_cvs) = input.max_cvs { config.params.max_cvs = max_cvs; }
    if input.sample_std { config.params.deviation = Deviation::Sample; }

    config.validate()?;
    Ok(config)
}
