//! Per-bus route statistics.

use super::{CatalogueError, TransportCatalogue};
use crate::domain::Bus;

/// Summary of a bus route, as reported by a bus metadata query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stops on the full traversal, counting repeats
    pub stop_count: usize,
    /// Distinct stops
    pub unique_stop_count: usize,
    /// Road length of the traversal in meters
    pub route_length: f64,
    /// Road length divided by straight-line geographic length
    pub curvature: f64,
}

impl TransportCatalogue {
    /// Statistics for the named bus.
    ///
    /// Curvature is reported as 0 when every stop of the route shares the
    /// same coordinates.
    pub fn bus_info(&self, name: &str) -> Result<BusStats, CatalogueError> {
        let id = self
            .find_bus(name)
            .ok_or_else(|| CatalogueError::BusNotFound(name.to_string()))?;
        let bus = self.bus(id);

        let route_length = self.route_length(bus)?;
        let geo_length = self.geographic_length(bus);
        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            0.0
        };

        Ok(BusStats {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        })
    }

    /// Sum of road distances along the bus traversal.
    pub fn route_length(&self, bus: &Bus) -> Result<f64, CatalogueError> {
        let traversal: Vec<_> = bus.traversal().collect();
        traversal
            .windows(2)
            .map(|hop| self.distance(hop[0], hop[1]))
            .sum()
    }

    /// Sum of great-circle distances along the bus traversal.
    pub fn geographic_length(&self, bus: &Bus) -> f64 {
        let traversal: Vec<_> = bus.traversal().collect();
        traversal
            .windows(2)
            .map(|hop| {
                let from = &self.stop(hop[0]).coordinates;
                from.distance_to(&self.stop(hop[1]).coordinates)
            })
            .sum()
    }
}
