use ndarray::{Array2, ArrayView1};

use crate::{error::GeoError, types::{DistrictId, Party}};

/// Raw vote counts, one row per district and one column per party.
#[derive(Debug, Clone)]
pub struct ElectionTable {
    districts: Vec<DistrictId>,
    parties: Vec<Party>,
    votes: Array2<f64>, // (n_districts, n_parties)
}

impl ElectionTable {
    /// Build a table from district labels, party labels and row-major vote counts.
    pub fn new(districts: Vec<DistrictId>, parties: Vec<String>, votes: Array2<f64>) -> Result<Self, GeoError> {
        if votes.dim() != (districts.len(), parties.len()) {
            return Err(GeoError::InputShape(format!(
                "vote matrix is {:?}, expected ({}, {})", votes.dim(), districts.len(), parties.len()
            )));
        }
        if parties.is_empty() {
            return Err(GeoError::InputShape("election table has no party columns".into()));
        }
        if let Some(((row, col), value)) = votes.indexed_iter().find(|(_, v)| !v.is_finite() || **v < 0.0) {
            return Err(GeoError::InputShape(format!(
                "district '{}' has invalid vote count {value} for party '{}'", districts[row], parties[col]
            )));
        }

        let parties = parties.into_iter().enumerate()
            .map(|(i, label)| Party::new(i, label))
            .collect();

        Ok(Self { districts, parties, votes })
    }

    /// Build a table from per-district rows of vote counts.
    pub fn from_rows<I, D>(parties: Vec<String>, rows: I) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = (D, Vec<f64>)>,
        D: Into<DistrictId>,
    {
        let mut districts = Vec::new();
        let mut flat = Vec::new();
        for (district, counts) in rows {
            let district = district.into();
            if counts.len() != parties.len() {
                return Err(GeoError::InputShape(format!(
                    "district '{district}' has {} vote counts, expected {}", counts.len(), parties.len()
                )));
            }
            districts.push(district);
            flat.extend(counts);
        }

        let votes = Array2::from_shape_vec((districts.len(), parties.len()), flat)
            .map_err(|e| GeoError::InputShape(e.to_string()))?;
        Self::new(districts, parties, votes)
    }

    #[inline] pub fn districts(&self) -> &[DistrictId] { &self.districts }

    #[inline] pub fn parties(&self) -> &[Party] { &self.parties }

    #[inline] pub fn votes(&self) -> &Array2<f64> { &self.votes }

    /// Raw vote counts of every district for one party.
    #[inline] pub fn party_votes(&self, party: usize) -> ArrayView1<'_, f64> { self.votes.column(party) }
}
