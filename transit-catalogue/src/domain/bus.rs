//! Bus routes and their traversal sequences.

use std::collections::HashSet;
use std::fmt;

use super::StopId;

/// Index of a bus within a catalogue, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a bus covers its stop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Closed loop. The stop list already ends where it starts.
    Circular,
    /// Runs the stop list forward, then returns along the same stops.
    ThereAndBack,
}

impl RouteKind {
    /// Maps the `is_roundtrip` flag of the request document.
    pub fn from_roundtrip(is_roundtrip: bool) -> Self {
        if is_roundtrip {
            RouteKind::Circular
        } else {
            RouteKind::ThereAndBack
        }
    }
}

/// A named bus route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Unique bus name
    pub name: String,
    /// Stops as registered, before any return leg is added
    pub stops: Vec<StopId>,
    /// Loop or there-and-back
    pub kind: RouteKind,
}

impl Bus {
    /// Creates a new bus.
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, kind: RouteKind) -> Self {
        Self {
            name: name.into(),
            stops,
            kind,
        }
    }

    /// Returns true for circular routes.
    pub fn is_roundtrip(&self) -> bool {
        self.kind == RouteKind::Circular
    }

    /// The stops the bus actually passes through, in order.
    ///
    /// For a there-and-back route this is the forward list followed by the
    /// reversed list without its last stop, so `[A, B, C]` becomes
    /// `[A, B, C, B, A]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::domain::{Bus, RouteKind, StopId};
    ///
    /// let bus = Bus::new("635", vec![StopId(0), StopId(1), StopId(2)], RouteKind::ThereAndBack);
    /// let traversal: Vec<_> = bus.traversal().collect();
    /// assert_eq!(traversal, vec![StopId(0), StopId(1), StopId(2), StopId(1), StopId(0)]);
    /// ```
    pub fn traversal(&self) -> impl Iterator<Item = StopId> + '_ {
        let return_leg = match self.kind {
            RouteKind::Circular => &self.stops[..0],
            RouteKind::ThereAndBack => &self.stops[..],
        };
        self.stops
            .iter()
            .chain(return_leg.iter().rev().skip(1))
            .copied()
    }

    /// Length of the traversal sequence.
    pub fn stop_count(&self) -> usize {
        match self.kind {
            RouteKind::Circular => self.stops.len(),
            RouteKind::ThereAndBack => (self.stops.len() * 2).saturating_sub(1),
        }
    }

    /// Number of distinct stops served.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }
}
