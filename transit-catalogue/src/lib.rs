//! Transit catalogue.
//!
//! Loads a city bus network (stops, road distances and bus routes), answers
//! bus and stop statistics, and finds minimum-time itineraries that account
//! for boarding waits and ride times.

pub mod catalogue;
pub mod document;
pub mod domain;
pub mod query;
pub mod router;
