//! The GEO vote-redistribution pass and its supporting statistics.

mod capacity;
mod neighborhood;
mod params;
mod result;
mod simulator;
mod state;

pub use capacity::{Category, ShareCapacity};
pub use neighborhood::NeighborhoodStats;
pub use params::{Deviation, GeoParams, WINNING_SHARE};
pub use result::{Contribution, PartyResult, Standing, TransferRecord};
pub use simulator::Simulator;
pub use state::{DistrictState, RunState};
