//! The transport catalogue: stops, buses and road distances.

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use super::CatalogueError;
use crate::domain::{Bus, BusId, Coordinates, RouteKind, Stop, StopId};

/// In-memory store of the transit network.
///
/// The catalogue is filled during the load phase and then only read.
/// Stops and buses keep their registration order, which downstream graph
/// construction relies on for reproducible results.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,

    buses: Vec<Bus>,
    bus_index: HashMap<String, BusId>,

    /// Directed road distances in meters.
    distances: HashMap<(StopId, StopId), f64>,

    /// Names of the buses serving each stop, indexed by `StopId`.
    buses_at_stop: Vec<BTreeSet<String>>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop, or move an existing one.
    ///
    /// Re-registering a name keeps its id, so distances already recorded for
    /// it stay valid.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> StopId {
        let name = name.into();
        if let Some(&id) = self.stop_index.get(&name) {
            trace!(stop = %name, "updating stop coordinates");
            self.stops[id.0].coordinates = coordinates;
            return id;
        }

        let id = StopId(self.stops.len());
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        self.buses_at_stop.push(BTreeSet::new());
        id
    }

    /// Register a bus over already-registered stops.
    ///
    /// Re-registering a name replaces its stops and kind but keeps its
    /// position in registration order.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        kind: RouteKind,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        let stop_ids = stops
            .iter()
            .map(|s| {
                self.find_stop(s.as_ref())
                    .ok_or_else(|| CatalogueError::UnknownStop(s.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for &stop in &stop_ids {
            self.buses_at_stop[stop.0].insert(name.clone());
        }

        if let Some(&id) = self.bus_index.get(&name) {
            trace!(bus = %name, "replacing bus");
            let previous = std::mem::replace(
                &mut self.buses[id.0],
                Bus::new(name.clone(), stop_ids, kind),
            );
            for stop in previous.stops {
                if !self.buses[id.0].stops.contains(&stop) {
                    self.buses_at_stop[stop.0].remove(&name);
                }
            }
            return Ok(id);
        }

        let id = BusId(self.buses.len());
        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus::new(name, stop_ids, kind));
        Ok(id)
    }

    /// Record the road distance from one stop to another.
    ///
    /// Overwrites any previous value for the same ordered pair.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), CatalogueError> {
        let from_id = self
            .find_stop(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;
        let to_id = self
            .find_stop(to)
            .ok_or_else(|| CatalogueError::UnknownStop(to.to_string()))?;

        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                meters,
            });
        }

        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    /// Road distance between two stops in meters.
    ///
    /// Falls back to the reverse direction when only that one was recorded.
    pub fn distance(&self, from: StopId, to: StopId) -> Result<f64, CatalogueError> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| CatalogueError::NoDistanceData {
                from: self.stops[from.0].name.clone(),
                to: self.stops[to.0].name.clone(),
            })
    }

    /// Road distance between two stops looked up by name.
    pub fn distance_between(&self, from: &str, to: &str) -> Result<f64, CatalogueError> {
        let from_id = self
            .find_stop(from)
            .ok_or_else(|| CatalogueError::StopNotFound(from.to_string()))?;
        let to_id = self
            .find_stop(to)
            .ok_or_else(|| CatalogueError::StopNotFound(to.to_string()))?;
        self.distance(from_id, to_id)
    }

    /// Sorted names of the buses serving a stop.
    ///
    /// A registered stop that no bus serves yields an empty set.
    pub fn stop_info(&self, name: &str) -> Result<&BTreeSet<String>, CatalogueError> {
        self.find_stop(name)
            .map(|id| &self.buses_at_stop[id.0])
            .ok_or_else(|| CatalogueError::StopNotFound(name.to_string()))
    }

    /// Look up a stop id by name.
    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a bus id by name.
    pub fn find_bus(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    /// Returns the stop with the given id.
    ///
    /// Ids are only handed out by this catalogue, so they are always in range.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Returns the bus with the given id.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }

    /// All stops in registration order.
    pub fn stops(&self) -> impl ExactSizeIterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// All buses in registration order.
    pub fn buses(&self) -> impl ExactSizeIterator<Item = (BusId, &Bus)> {
        self.buses.iter().enumerate().map(|(i, b)| (BusId(i), b))
    }

    /// Number of registered stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of registered buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Number of recorded directed distances.
    pub fn distance_count(&self) -> usize {
        self.distances.len()
    }
}
