use std::fmt;

use serde::Serialize;

use crate::{geo::WINNING_SHARE, types::{DistrictId, Party}};

/// Whether a donor originally won or lost its district.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Standing {
    #[serde(rename = "W")]
    Won,
    #[serde(rename = "L")]
    Lost,
}

impl Standing {
    /// Standing of a district from its original vote share.
    #[inline]
    pub fn from_share(original_share: f64) -> Self {
        if original_share >= WINNING_SHARE { Standing::Won } else { Standing::Lost }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Standing::Won => "W", Standing::Lost => "L" })
    }
}

/// One nonzero transfer of vote share from a donor into a lifted district.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransferRecord {
    pub recipient: DistrictId,
    pub recipient_original_share: f64,
    pub recipient_avg_share: f64,
    pub donor: DistrictId,
    pub amount: f64,
    pub donor_standing: Standing,
}

/// Total given away by one donor over the whole pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contribution {
    pub district: DistrictId,
    pub total_shared: f64,
    pub standing: Standing,
}

/// Outcome of one party's pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartyResult {
    pub party: Party,
    pub geo_score: usize,
    /// Lifted districts, in the order they were lifted.
    pub newly_competitive: Vec<DistrictId>,
    /// Donors that originally won, deduplicated in order of first transfer.
    pub contributing_won: Vec<DistrictId>,
    /// Donors that originally lost, deduplicated in order of first transfer.
    pub contributing_lost: Vec<DistrictId>,
    /// Every donor in order of first transfer, with its total given.
    pub contributions: Vec<Contribution>,
    pub transfers: Vec<TransferRecord>,
}

impl PartyResult {
    /// Contributions ordered by total shared, largest first; ties keep first-transfer order.
    pub fn contributions_by_total(&self) -> Vec<&Contribution> {
        let mut sorted = self.contributions.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.total_shared.total_cmp(&a.total_shared));
        sorted
    }

    /// Transfers into one lifted district.
    pub fn transfers_into<'a>(&'a self, recipient: &'a DistrictId) -> impl Iterator<Item = &'a TransferRecord> + 'a {
        self.transfers.iter().filter(move |t| &t.recipient == recipient)
    }
}
