use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Original vote share at or above which a donor counts as a won district.
pub const WINNING_SHARE: f64 = 0.5;

/// Estimator used for the spread of average neighbor vote shares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deviation {
    /// Divide by `n`.
    #[default]
    Population,
    /// Divide by `n - 1`.
    Sample,
}

/// Thresholds for the GEO pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoParams {
    /// Vote share a losing district must reach to become competitive.
    pub min_cvs: f64,
    /// Vote share a winning district may not drop below when sharing.
    pub max_cvs: f64,
    /// How the neighborhood margin σ is estimated. The same σ is used for
    /// both winning and losing districts.
    pub deviation: Deviation,
}

impl Default for GeoParams {
    fn default() -> Self {
        Self { min_cvs: 0.5, max_cvs: 0.55, deviation: Deviation::Population }
    }
}

impl GeoParams {
    pub fn new(min_cvs: f64, max_cvs: f64) -> Result<Self, GeoError> {
        let params = Self { min_cvs, max_cvs, ..Self::default() };
        params.validate()?;
        Ok(params)
    }

    /// Require `0 <= min_cvs <= max_cvs <= 1`.
    pub fn validate(&self) -> Result<(), GeoError> {
        for (name, value) in [("min_cvs", self.min_cvs), ("max_cvs", self.max_cvs)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeoError::Config(format!("{name} must lie in [0, 1], got {value}")));
            }
        }
        if self.min_cvs > self.max_cvs {
            return Err(GeoError::Config(format!(
                "min_cvs ({}) must not exceed max_cvs ({})", self.min_cvs, self.max_cvs
            )));
        }
        Ok(())
    }
}
