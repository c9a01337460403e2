mod election;
mod vote_share;

pub use election::ElectionTable;
pub use vote_share::VoteShareTable;
