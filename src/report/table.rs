use anyhow::Result;
use polars::{frame::DataFrame, prelude::NamedFrom, series::Series};

use crate::{
    geo::{GeoParams, PartyResult, RunState, ShareCapacity, TransferRecord},
    graph::DistrictGraph,
    types::DistrictId,
};

/// One row per lifted district / contributor, ragged columns padded with blanks.
/// The GEO score appears on the first row only.
pub fn summary_frame(result: &PartyResult) -> Result<DataFrame> {
    let rows = 1usize
        .max(result.newly_competitive.len())
        .max(result.contributing_won.len())
        .max(result.contributing_lost.len());

    let padded = |list: &[DistrictId]| {
        (0..rows).map(|i| list.get(i).map(|d| d.to_string())).collect::<Vec<Option<String>>>()
    };
    let score = (0..rows)
        .map(|i| (i == 0).then(|| result.geo_score.to_string()))
        .collect::<Vec<Option<String>>>();

    Ok(DataFrame::new(vec![
        Series::new("GEO score".into(), score).into(),
        Series::new("Newly Competitive".into(), padded(&result.newly_competitive)).into(),
        Series::new("Contributing Wins".into(), padded(&result.contributing_won)).into(),
        Series::new("Contributing Losses".into(), padded(&result.contributing_lost)).into(),
    ])?)
}

/// One row per transfer, in the order transfers happened.
pub fn audit_frame(result: &PartyResult) -> Result<DataFrame> {
    let transfers = &result.transfers;
    let text = |f: fn(&TransferRecord) -> String| transfers.iter().map(f).collect::<Vec<String>>();
    let value = |f: fn(&TransferRecord) -> f64| transfers.iter().map(f).collect::<Vec<f64>>();

    Ok(DataFrame::new(vec![
        Series::new("Newly Competitive District".into(), text(|t| t.recipient.to_string())).into(),
        Series::new("Original Vote Share".into(), value(|t| t.recipient_original_share)).into(),
        Series::new("Avg Neighbor Vote Share".into(), value(|t| t.recipient_avg_share)).into(),
        Series::new("District Transferring Votes".into(), text(|t| t.donor.to_string())).into(),
        Series::new("Vote Shares Transferred".into(), value(|t| t.amount)).into(),
        Series::new("Transferring District Winning/Losing".into(), text(|t| t.donor_standing.to_string())).into(),
    ])?)
}

/// Per-district view of a run state, in graph order.
pub fn state_frame(graph: &DistrictGraph, state: &RunState, params: &GeoParams) -> Result<DataFrame> {
    let engine = ShareCapacity::new(params, state.margin);
    let districts = &state.districts;

    Ok(DataFrame::new(vec![
        Series::new("District".into(), graph.districts().iter().map(|d| d.to_string()).collect::<Vec<_>>()).into(),
        Series::new("Original Vote Share".into(), districts.iter().map(|d| d.original_share).collect::<Vec<_>>()).into(),
        Series::new("Vote Share".into(), districts.iter().map(|d| d.share).collect::<Vec<_>>()).into(),
        Series::new("Avg Neighbor Vote Share".into(), districts.iter().map(|d| d.avg_share).collect::<Vec<_>>()).into(),
        Series::new("Category".into(), districts.iter().map(|d| engine.classify(d.original_share).as_str()).collect::<Vec<_>>()).into(),
        Series::new("Votes to Share".into(), districts.iter().map(|d| d.capacity).collect::<Vec<_>>()).into(),
        Series::new("Total Votes Shared".into(), districts.iter().map(|d| d.total_shared).collect::<Vec<_>>()).into(),
        Series::new("Is Competitive".into(), districts.iter().map(|d| d.competitive).collect::<Vec<_>>()).into(),
        Series::new("Made Competitive".into(), districts.iter().map(|d| d.made_competitive).collect::<Vec<_>>()).into(),
    ])?)
}
