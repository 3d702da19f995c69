//! Data transfer objects for request and response documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::{StatRequest, StatResponse};
use crate::router::{RouteItem, RoutingSettings};

/// A complete request document.
#[derive(Debug, Deserialize)]
pub struct RequestDocument {
    /// Stops and buses, applied before any statistics request
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Required: route times are meaningless without them
    pub routing_settings: RoutingSettings,

    /// Map styling. Accepted so that full documents parse, otherwise unused
    #[serde(default)]
    pub render_settings: Option<serde_json::Value>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequestDto>,
}

/// A network description entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distance in meters from this stop to each named stop
        #[serde(default)]
        road_distances: BTreeMap<String, f64>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// A statistics request as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequestDto {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

/// One element of the response array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponseDto {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Map(MapResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    pub curvature: f64,
    /// Whole meters
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,
    pub buses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    /// Minutes
    pub total_time: f64,
    pub items: Vec<RouteItemDto>,
}

/// An itinerary step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemDto {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    pub request_id: i64,
    pub map: String,
}

/// Error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    /// "not found" for unknown names and unreachable routes
    pub error_message: String,
}

const NOT_FOUND: &str = "not found";

// Conversion implementations

impl From<StatRequestDto> for StatRequest {
    fn from(dto: StatRequestDto) -> Self {
        match dto {
            StatRequestDto::Bus { id, name } => StatRequest::Bus { id, name },
            StatRequestDto::Stop { id, name } => StatRequest::Stop { id, name },
            StatRequestDto::Route { id, from, to } => StatRequest::Route { id, from, to },
            StatRequestDto::Map { id } => StatRequest::Map { id },
        }
    }
}

impl From<RouteItem> for RouteItemDto {
    fn from(item: RouteItem) -> Self {
        match item {
            RouteItem::Wait { stop, time } => RouteItemDto::Wait {
                stop_name: stop,
                time,
            },
            RouteItem::Bus {
                bus,
                span_count,
                time,
            } => RouteItemDto::Bus {
                bus,
                span_count,
                time,
            },
        }
    }
}

impl From<StatResponse> for StatResponseDto {
    fn from(response: StatResponse) -> Self {
        match response {
            StatResponse::Bus { id, stats } => StatResponseDto::Bus(BusResponse {
                request_id: id,
                curvature: stats.curvature,
                // Distances are non-negative, so the cast only drops the fraction
                route_length: stats.route_length as u64,
                stop_count: stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
            }),
            StatResponse::Stop { id, buses } => StatResponseDto::Stop(StopResponse {
                request_id: id,
                buses,
            }),
            StatResponse::Route { id, route } => StatResponseDto::Route(RouteResponse {
                request_id: id,
                total_time: route.total_time,
                items: route.items.into_iter().map(RouteItemDto::from).collect(),
            }),
            StatResponse::Map { id, map } => StatResponseDto::Map(MapResponse {
                request_id: id,
                map,
            }),
            StatResponse::Error { id, error } => StatResponseDto::Error(ErrorResponse {
                request_id: id,
                error_message: if error.is_not_found() {
                    NOT_FOUND.to_string()
                } else {
                    error.to_string()
                },
            }),
        }
    }
}
