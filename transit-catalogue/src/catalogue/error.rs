//! Catalogue error types.

/// Errors from registering or querying catalogue data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// A bus or distance referenced a stop that was never registered
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Metadata was requested for a bus that does not exist
    #[error("bus not found: {0}")]
    BusNotFound(String),

    /// Metadata was requested for a stop that does not exist
    #[error("stop not found: {0}")]
    StopNotFound(String),

    /// Neither direction of a stop pair has a recorded road distance
    #[error("no distance data between {from} and {to}")]
    NoDistanceData { from: String, to: String },

    /// Road distances must be finite and non-negative
    #[error("invalid distance {meters} from {from} to {to}")]
    InvalidDistance { from: String, to: String, meters: f64 },
}

impl CatalogueError {
    /// Returns true if this is a lookup miss on a bus or stop name.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogueError::BusNotFound(_) | CatalogueError::StopNotFound(_)
        )
    }
}
