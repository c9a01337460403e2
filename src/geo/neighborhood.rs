use ndarray::ArrayView1;

use crate::{geo::Deviation, graph::DistrictGraph};

/// Average neighbor vote share `A(D)` of every district and its spread σ.
///
/// Computed once per party from the original shares and then frozen: the
/// pass ranks districts by these values even after shares have moved.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborhoodStats {
    averages: Vec<f64>,
    std_dev: f64,
}

impl NeighborhoodStats {
    /// `A(D) = (share(D) + Σ share(n)) / (1 + |neighbors(D)|)` for every district.
    pub fn compute(graph: &DistrictGraph, shares: &[f64], deviation: Deviation) -> Self {
        assert!(shares.len() == graph.node_count(), "shares.len() must equal graph.node_count()");

        let averages = (0..graph.node_count())
            .map(|node| {
                let total = shares[node] + graph.edges(node).map(|n| shares[n]).sum::<f64>();
                total / (graph.degree(node) + 1) as f64
            })
            .collect::<Vec<_>>();

        let std_dev = std_dev(&averages, deviation);
        Self { averages, std_dev }
    }

    /// Average neighbor vote share of a district.
    #[inline] pub fn average(&self, node: usize) -> f64 { self.averages[node] }

    #[inline] pub fn averages(&self) -> &[f64] { &self.averages }

    /// Spread of the averages, used as the margin on both sides.
    #[inline] pub fn std_dev(&self) -> f64 { self.std_dev }

    /// Districts ordered by decreasing `A(D)`; ties keep input order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order = (0..self.averages.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| self.averages[b].total_cmp(&self.averages[a]));
        order
    }
}

/// Standard deviation of `values`; zero when there are too few values to estimate it.
fn std_dev(values: &[f64], deviation: Deviation) -> f64 {
    let ddof = match deviation {
        Deviation::Population => 0.0,
        Deviation::Sample => 1.0,
    };
    if (values.len() as f64) <= ddof { return 0.0 }

    ArrayView1::from(values).std(ddof)
}
