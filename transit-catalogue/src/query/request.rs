//! Statistics requests and their answers.

use super::QueryError;
use crate::catalogue::BusStats;
use crate::router::Route;

/// A statistics request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatRequest {
    /// Route statistics for a bus.
    Bus { id: i64, name: String },
    /// Buses serving a stop.
    Stop { id: i64, name: String },
    /// Fastest itinerary between two stops.
    Route { id: i64, from: String, to: String },
    /// Rendered network map.
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// The answer to one [`StatRequest`], carrying the request's id.
#[derive(Debug, Clone, PartialEq)]
pub enum StatResponse {
    Bus { id: i64, stats: BusStats },
    /// Bus names in lexicographic order.
    Stop { id: i64, buses: Vec<String> },
    Route { id: i64, route: Route },
    Map { id: i64, map: String },
    Error { id: i64, error: QueryError },
}

impl StatResponse {
    pub fn id(&self) -> i64 {
        match self {
            StatResponse::Bus { id, .. }
            | StatResponse::Stop { id, .. }
            | StatResponse::Route { id, .. }
            | StatResponse::Map { id, .. }
            | StatResponse::Error { id, .. } => *id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatResponse::Error { .. })
    }
}
