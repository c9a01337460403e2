use ndarray::{Array2, ArrayView1, Axis};

use crate::{election::ElectionTable, error::GeoError, types::{DistrictId, Party}};

/// Per-party vote share of every district: party votes over all votes cast in the district.
#[derive(Debug, Clone)]
pub struct VoteShareTable {
    districts: Vec<DistrictId>,
    parties: Vec<Party>,
    shares: Array2<f64>, // (n_districts, n_parties), each in [0, 1]
}

impl VoteShareTable {
    /// Derive shares from raw counts. A district with zero total votes has no
    /// defined share and fails with [`GeoError::ZeroVotes`].
    pub fn from_election(election: &ElectionTable) -> Result<Self, GeoError> {
        let totals = election.votes().sum_axis(Axis(1));
        if let Some(row) = totals.iter().position(|&total| total == 0.0) {
            return Err(GeoError::ZeroVotes { district: election.districts()[row].clone() });
        }

        let shares = election.votes() / &totals.insert_axis(Axis(1));

        Ok(Self {
            districts: election.districts().to_vec(),
            parties: election.parties().to_vec(),
            shares,
        })
    }

    #[inline] pub fn districts(&self) -> &[DistrictId] { &self.districts }

    #[inline] pub fn parties(&self) -> &[Party] { &self.parties }

    #[inline] pub fn num_parties(&self) -> usize { self.parties.len() }

    /// Vote share of every district for one party, in district order.
    #[inline] pub fn party_shares(&self, party: usize) -> ArrayView1<'_, f64> { self.shares.column(party) }

    /// Find a party by label.
    pub fn party(&self, label: &str) -> Result<&Party, GeoError> {
        self.parties.iter()
            .find(|party| party.label == label)
            .ok_or_else(|| GeoError::UnknownParty(label.to_string()))
    }

    /// Reorder rows to follow `order`, where `order[i]` is the current row of the new row `i`.
    pub(crate) fn reindexed(&self, order: &[usize]) -> Self {
        Self {
            districts: order.iter().map(|&row| self.districts[row].clone()).collect(),
            parties: self.parties.clone(),
            shares: self.shares.select(Axis(0), order),
        }
    }
}
