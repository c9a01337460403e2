use std::path::{Path, PathBuf};

use ahash::AHashMap;
use anyhow::Result;
use rayon::prelude::*;

use crate::{
    config::GeoConfig,
    election::{ElectionTable, VoteShareTable},
    error::GeoError,
    geo::{GeoParams, PartyResult, RunState, Simulator},
    graph::DistrictGraph,
    io::{csv, fs::{StagedFiles, ensure_dir_exists}},
    report::{ReportFiles, audit_frame, state_frame, summary_frame},
    types::{DistrictId, Party},
};

/// A validated map: adjacency, vote shares aligned to it, and thresholds.
/// Each party is simulated from scratch against this shared, immutable input.
#[derive(Clone, Debug)]
pub struct GeoAnalysis {
    graph: DistrictGraph,
    shares: VoteShareTable,
    params: GeoParams,
}

impl GeoAnalysis {
    /// Pair a graph with vote shares. Every district must appear in both.
    pub fn new(graph: DistrictGraph, shares: VoteShareTable, params: GeoParams) -> Result<Self, GeoError> {
        params.validate()?;

        let mut rows = AHashMap::with_capacity(shares.districts().len());
        for (row, district) in shares.districts().iter().enumerate() {
            if rows.insert(district.as_str(), row).is_some() {
                return Err(GeoError::InputShape(format!("district '{district}' has more than one row of election results")));
            }
        }

        let order = graph.districts().iter()
            .map(|district| rows.get(district.as_str()).copied().ok_or_else(|| {
                GeoError::InputShape(format!("district '{district}' is in the adjacency graph but has no election results"))
            }))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(extra) = shares.districts().iter().find(|d| graph.index_of(d.as_str()).is_none()) {
            return Err(GeoError::InputShape(format!("district '{extra}' has election results but is not in the adjacency graph")));
        }

        let shares = if order.iter().enumerate().all(|(i, &row)| i == row) { shares } else { shares.reindexed(&order) };
        Ok(Self { graph, shares, params })
    }

    /// Build the graph from the election's districts plus an edge list, then derive shares.
    pub fn from_election<I>(election: &ElectionTable, edges: I, params: GeoParams) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = (DistrictId, DistrictId)>,
    {
        params.validate()?;
        let shares = VoteShareTable::from_election(election)?;
        let graph = DistrictGraph::from_edge_list(election.districts().to_vec(), edges)?;
        Self::new(graph, shares, params)
    }

    /// Read both input files named by `config` and validate them.
    pub fn from_config(config: &GeoConfig, verbose: u8) -> Result<Self> {
        config.validate()?;

        if verbose > 0 { eprintln!("[load] election results <- {}", config.election.display()); }
        let election = csv::read_election(&config.election, config.election_header, config.party_columns.as_deref())?;

        if verbose > 0 { eprintln!("[load] dual graph edges <- {}", config.edges.display()); }
        let edges = csv::read_edges(&config.edges, config.edges_header)?;

        let analysis = Self::from_election(&election, edges, config.params.clone())?;
        if verbose > 0 {
            eprintln!(
                "[load] {} districts, {} adjacencies, {} parties",
                analysis.graph.node_count(), analysis.graph.edge_count() / 2, analysis.shares.num_parties()
            );
        }
        Ok(analysis)
    }

    #[inline] pub fn graph(&self) -> &DistrictGraph { &self.graph }

    #[inline] pub fn shares(&self) -> &VoteShareTable { &self.shares }

    #[inline] pub fn params(&self) -> &GeoParams { &self.params }

    #[inline] pub fn parties(&self) -> &[Party] { self.shares.parties() }

    #[inline] pub fn simulator(&self) -> Simulator<'_> { Simulator::new(&self.graph, &self.params) }

    /// Vote shares of one party in graph order.
    pub fn party_shares(&self, party: &Party) -> Vec<f64> {
        self.shares.party_shares(party.index).to_vec()
    }

    /// State of one party before any transfer.
    pub fn initial_state(&self, party: &Party) -> RunState {
        self.simulator().initial_state(&self.party_shares(party))
    }

    /// Run the pass for one party.
    pub fn compute_party(&self, party: &Party) -> PartyResult {
        self.simulator().run(party.clone(), &self.party_shares(party))
    }

    /// Run the pass for one party, keeping the final per-district state.
    pub fn compute_party_with_state(&self, party: &Party) -> (PartyResult, RunState) {
        self.simulator().run_with_state(party.clone(), &self.party_shares(party))
    }

    /// Run every party. Parties share no mutable state, so they run in parallel;
    /// results come back in party order.
    pub fn compute_all(&self) -> Vec<PartyResult> {
        self.parties().par_iter().map(|party| self.compute_party(party)).collect()
    }

    /// Per-district table of one party as CSV text, before the pass or after it.
    pub fn state_csv(&self, party: &Party, after_pass: bool) -> Result<String> {
        let state = if after_pass { self.compute_party_with_state(party).1 } else { self.initial_state(party) };
        let mut df = state_frame(&self.graph, &state, &self.params)?;
        csv::write_csv_string(&mut df, Some(5))
    }

    /// Write summary and audit tables for every result (plus an optional JSON
    /// dump) into `dir`. Either every file is written or none is.
    pub fn write_reports(&self, results: &[PartyResult], dir: &Path, prefix: &str, json: Option<&Path>, verbose: u8) -> Result<Vec<PathBuf>> {
        ensure_dir_exists(dir)?;

        let mut staged = StagedFiles::new();
        for result in results {
            let files = ReportFiles::new(dir, prefix, &result.party, &self.params);

            let mut summary = summary_frame(result)?;
            staged.stage(&files.summary, |file| csv::write_csv(&mut summary, file, None))?;

            let mut audit = audit_frame(result)?;
            staged.stage(&files.audit, |file| csv::write_csv(&mut audit, file, Some(5)))?;
        }
        if let Some(path) = json {
            staged.stage(path, |file| Ok(serde_json::to_writer_pretty(file, results)?))?;
        }

        if verbose > 0 { eprintln!("[report] committing {} files to {}", staged.len(), dir.display()); }
        let written = staged.commit()?;
        if verbose > 1 {
            written.iter().for_each(|path| eprintln!("[report] wrote {}", path.display()));
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn election() -> ElectionTable {
        ElectionTable::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec!["1".into(), "2".into()],
            array![[70.0, 30.0], [60.0, 40.0], [45.0, 55.0]],
        ).unwrap()
    }

    fn edges() -> Vec<(DistrictId, DistrictId)> {
        vec![("A".into(), "B".into()), ("B".into(), "C".into())]
    }

    #[test]
    fn every_party_is_scored_in_order() {
        let analysis = GeoAnalysis::from_election(&election(), edges(), GeoParams::default()).unwrap();
        let results = analysis.compute_all();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].party.label, "1");
        assert_eq!(results[0].geo_score, 1);
        assert_eq!(results[1].party.label, "2");
    }

    #[test]
    fn shares_are_aligned_to_graph_order() {
        let shares = VoteShareTable::from_election(&election()).unwrap();
        let graph = DistrictGraph::from_edge_list(
            vec!["C".into(), "A".into(), "B".into()],
            edges(),
        ).unwrap();

        let analysis = GeoAnalysis::new(graph, shares, GeoParams::default()).unwrap();
        let first = analysis.party_shares(&analysis.parties()[0]);
        assert!((first[0] - 0.45).abs() < 1e-12);
        assert!((first[1] - 0.70).abs() < 1e-12);
    }

    #[test]
    fn district_missing_from_graph_is_rejected() {
        let shares = VoteShareTable::from_election(&election()).unwrap();
        let graph = DistrictGraph::from_edge_list(vec!["A".into(), "B".into()], Vec::new()).unwrap();

        let err = GeoAnalysis::new(graph, shares, GeoParams::default()).unwrap_err();
        assert!(matches!(err, GeoError::InputShape(ref msg) if msg.contains("'C'")));
    }

    #[test]
    fn district_missing_from_election_is_rejected() {
        let shares = VoteShareTable::from_election(&election()).unwrap();
        let graph = DistrictGraph::from_edge_list(
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            Vec::new(),
        ).unwrap();

        let err = GeoAnalysis::new(graph, shares, GeoParams::default()).unwrap_err();
        assert!(matches!(err, GeoError::InputShape(ref msg) if msg.contains("'D'")));
    }

    #[test]
    fn invalid_params_fail_before_simulation() {
        let err = GeoAnalysis::from_election(&election(), edges(), GeoParams { min_cvs: 0.6, max_cvs: 0.55, ..GeoParams::default() }).unwrap_err();
        assert!(matches!(err, GeoError::Config(_)));
    }

    #[test]
    fn state_csv_has_a_row_per_district() {
        let analysis = GeoAnalysis::from_election(&election(), edges(), GeoParams::default()).unwrap();
        let party = analysis.parties()[0].clone();

        let before = analysis.state_csv(&party, false).unwrap();
        assert_eq!(before.lines().count(), 4);
        assert!(before.lines().next().unwrap().starts_with("District,Original Vote Share"));

        let after = analysis.state_csv(&party, true).unwrap();
        assert!(after.lines().any(|line| line.starts_with("C,0.45000,0.50000")));
    }

    #[test]
    fn reports_are_written_for_every_party() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = GeoAnalysis::from_election(&election(), edges(), GeoParams::default()).unwrap();
        let results = analysis.compute_all();

        let written = analysis.write_reports(&results, dir.path(), "Test", Some(&dir.path().join("geo.json")), 0).unwrap();

        assert_eq!(written.len(), 5);
        assert!(dir.path().join("1Test_GEO_0.55_0.5.csv").exists());
        assert!(dir.path().join("2_aux_Test_GEO_0.55_0.5.csv").exists());
        let json = std::fs::read_to_string(dir.path().join("geo.json")).unwrap();
        assert!(json.contains("\"geo_score\": 1"));
    }

    #[test]
    fn failed_json_target_leaves_no_tables_behind() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("geo.json");
        std::fs::create_dir(&json).unwrap();
        std::fs::write(json.join("existing.txt"), "keep").unwrap();

        let analysis = GeoAnalysis::from_election(&election(), edges(), GeoParams::default()).unwrap();
        let results = analysis.compute_all();

        assert!(analysis.write_reports(&results, dir.path(), "", Some(&json), 0).is_err());
        assert!(!dir.path().join("1_GEO_0.55_0.5.csv").exists());
        assert!(!dir.path().join("2_aux__GEO_0.55_0.5.csv").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(std::fs::read_to_string(json.join("existing.txt")).unwrap(), "keep");
    }
}
