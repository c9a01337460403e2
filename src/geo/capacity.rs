use crate::geo::GeoParams;

/// How a district is treated by the pass, judged on its current vote share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Above `max_cvs`: may donate down to its floor.
    ShareableWinner,
    /// Within `[min_cvs, max_cvs]`: already competitive, never donates.
    LockedWinner,
    /// Below `min_cvs`: a candidate for lifting.
    Loser,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ShareableWinner => "shareable",
            Category::LockedWinner => "locked",
            Category::Loser => "losing",
        }
    }
}

/// Votes-to-share rule for one party's pass, with the neighborhood margin σ fixed.
#[derive(Clone, Copy, Debug)]
pub struct ShareCapacity<'a> {
    params: &'a GeoParams,
    margin: f64,
}

impl<'a> ShareCapacity<'a> {
    pub fn new(params: &'a GeoParams, margin: f64) -> Self {
        Self { params, margin }
    }

    pub fn classify(&self, share: f64) -> Category {
        if share > self.params.max_cvs {
            Category::ShareableWinner
        } else if share >= self.params.min_cvs {
            Category::LockedWinner
        } else {
            Category::Loser
        }
    }

    /// Vote share a district with `share` and neighborhood average `average` may give away.
    /// Never negative, and never more than the district holds.
    pub fn capacity(&self, share: f64, average: f64) -> f64 {
        let floor = (average - self.margin).max(0.0);
        match self.classify(share) {
            Category::ShareableWinner => (share - self.params.max_cvs.max(floor)).max(0.0),
            Category::LockedWinner => 0.0,
            Category::Loser => (share - floor).max(0.0),
        }
    }
}
