#![doc = "GEO metric public API"]
mod analysis;
mod config;
mod election;
mod error;
mod geo;
mod graph;
mod io;
mod report;
mod types;

#[doc(inline)]
pub use analysis::GeoAnalysis;

#[doc(inline)]
pub use config::GeoConfig;

#[doc(inline)]
pub use election::{ElectionTable, VoteShareTable};

#[doc(inline)]
pub use error::GeoError;

#[doc(inline)]
pub use geo::{
    Category, Contribution, Deviation, DistrictState, GeoParams, NeighborhoodStats, PartyResult, RunState,
    ShareCapacity, Simulator, Standing, TransferRecord, WINNING_SHARE,
};

#[doc(inline)]
pub use graph::DistrictGraph;

#[doc(inline)]
pub use report::{ReportFiles, audit_frame, console_summary, state_frame, summary_frame};

#[doc(inline)]
pub use types::{DistrictId, Party};
