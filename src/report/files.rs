use std::path::{Path, PathBuf};

use crate::{geo::GeoParams, types::Party};

/// Output paths of one party's summary and audit tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportFiles {
    pub summary: PathBuf,
    pub audit: PathBuf,
}

impl ReportFiles {
    /// `{party}{prefix}_GEO_{max}_{min}.csv` and `{party}_aux_{prefix}_GEO_{max}_{min}.csv` under `dir`.
    pub fn new(dir: &Path, prefix: &str, party: &Party, params: &GeoParams) -> Self {
        let suffix = format!("{prefix}_GEO_{}_{}.csv", params.max_cvs, params.min_cvs);
        Self {
            summary: dir.join(format!("{party}{suffix}")),
            audit: dir.join(format!("{party}_aux_{suffix}")),
        }
    }
}
