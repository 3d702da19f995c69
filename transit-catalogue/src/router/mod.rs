//! Shortest-time routing over the bus network.
//!
//! The catalogue is turned once into a weighted directed graph where boarding
//! costs the wait time and riding costs distance over velocity. A Dijkstra
//! search over that graph answers point-to-point queries with an itinerary of
//! wait and ride items.

mod builder;
mod config;
mod graph;
mod search;


pub use builder::{EdgeLabel, GraphBuilder, StopVertices, TransportGraph};
pub use config::{InvalidRoutingSettings, RoutingSettings};
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use search::{Route, RouteItem, Router, RoutingError};
