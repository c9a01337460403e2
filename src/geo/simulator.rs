use crate::{
    geo::{Contribution, DistrictState, GeoParams, NeighborhoodStats, PartyResult, RunState, ShareCapacity, Standing, TransferRecord},
    graph::DistrictGraph,
    types::{DistrictId, Party},
};

/// Slack allowed when comparing a deficit against the capacity available to cover it.
pub(crate) const SHARE_TOLERANCE: f64 = 1e-9;

/// Runs the GEO pass for one party over a fixed district graph.
#[derive(Clone, Copy, Debug)]
pub struct Simulator<'a> {
    graph: &'a DistrictGraph,
    params: &'a GeoParams,
}

impl<'a> Simulator<'a> {
    pub fn new(graph: &'a DistrictGraph, params: &'a GeoParams) -> Self {
        Self { graph, params }
    }

    /// Fresh state for a party before any transfer: neighborhood averages,
    /// initial capacities and the already-competitive flags.
    pub fn initial_state(&self, shares: &[f64]) -> RunState {
        self.prepare(shares).0
    }

    /// Initial state plus the processing order (decreasing `A(D)`, ties in input order).
    fn prepare(&self, shares: &[f64]) -> (RunState, Vec<usize>) {
        let stats = NeighborhoodStats::compute(self.graph, shares, self.params.deviation);
        let engine = ShareCapacity::new(self.params, stats.std_dev());

        let districts = shares.iter().zip(stats.averages())
            .map(|(&share, &avg_share)| DistrictState {
                original_share: share,
                share,
                avg_share,
                capacity: engine.capacity(share, avg_share),
                total_shared: 0.0,
                competitive: (self.params.min_cvs..=self.params.max_cvs).contains(&share),
                made_competitive: false,
            })
            .collect();

        (RunState { districts, margin: stats.std_dev() }, stats.ranking())
    }

    /// Run the pass and return only the party outcome.
    pub fn run(&self, party: Party, shares: &[f64]) -> PartyResult {
        self.run_with_state(party, shares).0
    }

    /// Run the pass, returning the outcome and the final per-district state.
    ///
    /// Losing districts are visited once, in decreasing order of their original
    /// neighborhood average. Each is lifted to exactly `min_cvs` when the summed
    /// capacity of its neighbors still in the donor pool covers its deficit;
    /// the deficit is then split among those neighbors in proportion to their
    /// remaining capacity.
    pub fn run_with_state(&self, party: Party, shares: &[f64]) -> (PartyResult, RunState) {
        let min_cvs = self.params.min_cvs;
        let (mut state, order) = self.prepare(shares);
        let losses = order.iter().copied()
            .filter(|&node| state.districts[node].share < min_cvs)
            .collect::<Vec<_>>();
        let mut in_pool = state.districts.iter()
            .map(|d| d.share > self.params.max_cvs || d.share < min_cvs)
            .collect::<Vec<_>>();

        let mut newly_competitive = Vec::new();
        let mut transfers = Vec::new();
        let mut contributed = vec![false; state.districts.len()];
        let mut contributors = Vec::new();

        for &recipient in &losses {
            let deficit = min_cvs - state.districts[recipient].share;
            let donors = self.graph.edges(recipient)
                .filter(|&n| in_pool[n])
                .collect::<Vec<_>>();
            let available = donors.iter().map(|&n| state.districts[n].capacity).sum::<f64>();

            if deficit > available + SHARE_TOLERANCE { continue }

            let lifted = &mut state.districts[recipient];
            lifted.share = min_cvs;
            lifted.capacity = 0.0;
            lifted.competitive = true;
            lifted.made_competitive = true;
            let (recipient_original_share, recipient_avg_share) = (lifted.original_share, lifted.avg_share);
            in_pool[recipient] = false;
            newly_competitive.push(self.graph.district(recipient).clone());

            if deficit <= 0.0 { continue }

            for donor in donors {
                let giver = &mut state.districts[donor];
                if giver.capacity == 0.0 { continue }

                let portion = giver.capacity / available * deficit;
                giver.share -= portion;
                giver.capacity = (giver.capacity - portion).max(0.0);
                giver.total_shared += portion;
                if !std::mem::replace(&mut contributed[donor], true) { contributors.push(donor) }

                transfers.push(TransferRecord {
                    recipient: self.graph.district(recipient).clone(),
                    recipient_original_share,
                    recipient_avg_share,
                    donor: self.graph.district(donor).clone(),
                    amount: portion,
                    donor_standing: Standing::from_share(giver.original_share),
                });
            }
        }

        let result = self.collect(party, &state, newly_competitive, &contributors, transfers);
        (result, state)
    }

    /// Read the final state and transfer log out into a [`PartyResult`].
    fn collect(
        &self,
        party: Party,
        state: &RunState,
        newly_competitive: Vec<DistrictId>,
        contributors: &[usize],
        transfers: Vec<TransferRecord>,
    ) -> PartyResult {
        let contributions = contributors.iter()
            .map(|&node| Contribution {
                district: self.graph.district(node).clone(),
                total_shared: state.get(node).total_shared,
                standing: Standing::from_share(state.get(node).original_share),
            })
            .collect::<Vec<_>>();

        let by_standing = |standing: Standing| contributions.iter()
            .filter(|c| c.standing == standing)
            .map(|c| c.district.clone())
            .collect::<Vec<_>>();

        PartyResult {
            party,
            geo_score: state.made_competitive_count(),
            newly_competitive,
            contributing_won: by_standing(Standing::Won),
            contributing_lost: by_standing(Standing::Lost),
            contributions,
            transfers,
        }
    }
}
