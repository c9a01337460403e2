use crate::types::DistrictId;

/// Structural and configuration failures. All of them are raised before any
/// party is simulated; a district that cannot be made competitive is not an error.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// Election and adjacency inputs disagree on which districts exist, or a
    /// table is malformed.
    #[error("Input shape error: {0}")]
    InputShape(String),

    /// Thresholds outside [0, 1] or `min_cvs > max_cvs`.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vote shares are undefined for a district with no votes cast.
    #[error("Division by zero: district '{district}' has zero total votes")]
    ZeroVotes { district: DistrictId },

    #[error("Unknown party: {0}")]
    UnknownParty(String),
}
