//! Statistics queries against a loaded catalogue.
//!
//! Each request carries a caller-chosen id that is echoed in its response.
//! Lookup misses and unreachable routes are reported per request and never
//! abort a batch.

mod engine;
mod error;
mod request;

pub use engine::{MapRenderer, QueryEngine};
pub use error::QueryError;
pub use request::{StatRequest, StatResponse};
