//! Domain types for the transit catalogue.
//!
//! Stops, buses and coordinates. Types that carry invariants enforce them at
//! construction time.

mod bus;
mod coordinates;
mod stop;

pub use bus::{Bus, BusId, RouteKind};
pub use coordinates::{Coordinates, InvalidCoordinates};
pub use stop::{Stop, StopId};
