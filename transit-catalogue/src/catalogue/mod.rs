//! Transport catalogue.
//!
//! Holds stops, buses and directed road distances, and answers bus and stop
//! metadata queries. The catalogue is filled once and then read by the
//! router and the query engine.

mod error;
mod stats;
mod store;

pub use error::CatalogueError;
pub use stats::BusStats;
pub use store::TransportCatalogue;
