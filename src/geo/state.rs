use serde::Serialize;

/// Mutable per-district record for one party's pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistrictState {
    /// Share before any transfer.
    pub original_share: f64,
    /// Share after the transfers applied so far.
    pub share: f64,
    /// Frozen ranking key `A(D)`.
    pub avg_share: f64,
    /// Vote share the district may still give away. Only decreases.
    pub capacity: f64,
    /// Vote share given away so far. Only increases.
    pub total_shared: f64,
    /// At or above `min_cvs`, either originally or after a lift.
    pub competitive: bool,
    /// Lifted to competitiveness by this pass.
    pub made_competitive: bool,
}

/// Per-district records of one party's pass, indexed by graph node.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunState {
    pub districts: Vec<DistrictState>,
    /// The neighborhood margin σ the capacities were derived with.
    pub margin: f64,
}

impl RunState {
    #[inline] pub fn get(&self, node: usize) -> &DistrictState { &self.districts[node] }

    /// Number of districts lifted by the pass.
    pub fn made_competitive_count(&self) -> usize {
        self.districts.iter().filter(|d| d.made_competitive).count()
    }
}
