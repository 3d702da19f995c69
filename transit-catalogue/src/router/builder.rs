//! Construction of the journey graph from a catalogue.
//!
//! Every served stop gets two vertices: a *wait* vertex (standing at the
//! stop) and a *ride* vertex (on board, free to stay or alight). A wait edge
//! from the first to the second costs the boarding wait. For each bus, every
//! pair of traversal positions `i < j` gets a ride edge from the ride vertex
//! of stop `i` to the wait vertex of stop `j`, costing the road time between
//! them. Riding any number of stops therefore pays the wait exactly once.

use rayon::prelude::*;
use tracing::debug;

use super::config::RoutingSettings;
use super::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use super::RoutingError;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, BusId, StopId};

/// The pair of vertices that represent one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    pub wait: VertexId,
    pub ride: VertexId,
}

/// What a graph edge means for an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLabel {
    /// Waiting to board at a stop
    Wait { stop: StopId },
    /// Riding a bus over `span_count` consecutive hops
    Ride { bus: BusId, span_count: usize },
}

/// The built, immutable journey graph with its side tables.
#[derive(Debug, Clone)]
pub struct TransportGraph {
    graph: DirectedWeightedGraph,
    /// Indexed by `EdgeId`
    labels: Vec<EdgeLabel>,
    /// Indexed by `StopId`; `None` for stops no bus serves
    vertices: Vec<Option<StopVertices>>,
}

impl TransportGraph {
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Returns the label of an edge.
    pub fn label(&self, edge: EdgeId) -> EdgeLabel {
        self.labels[edge]
    }

    /// Returns the vertices of a stop, if any bus serves it.
    pub fn vertices(&self, stop: StopId) -> Option<StopVertices> {
        self.vertices.get(stop.0).copied().flatten()
    }
}

/// A ride edge computed for one bus, waiting to be merged into the graph.
struct PendingRide {
    edge: Edge,
    label: EdgeLabel,
}

/// Builds a [`TransportGraph`] from a finished catalogue.
pub struct GraphBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder over a catalogue.
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        Self {
            catalogue,
            settings,
        }
    }

    /// Build the graph.
    ///
    /// Fails if the settings are invalid or a bus needs a road distance that
    /// was never recorded in either direction. Edges are inserted in bus
    /// registration order, then traversal position order; per-bus ride edges
    /// are computed in parallel and merged in that order.
    pub fn build(self) -> Result<TransportGraph, RoutingError> {
        self.settings.validate()?;

        let (vertices, served) = self.allocate_vertices();
        let mut graph = DirectedWeightedGraph::with_vertex_count(served.len() * 2);
        let mut labels = Vec::new();

        let wait = self.settings.wait_minutes();
        for &stop in &served {
            if let Some(v) = vertices[stop.0] {
                graph.add_edge(Edge {
                    from: v.wait,
                    to: v.ride,
                    weight: wait,
                });
                labels.push(EdgeLabel::Wait { stop });
            }
        }

        let buses: Vec<(BusId, &Bus)> = self.catalogue.buses().collect();
        let per_bus: Vec<Result<Vec<PendingRide>, RoutingError>> = buses
            .par_iter()
            .map(|&(id, bus)| self.ride_edges(id, bus, &vertices))
            .collect();

        for rides in per_bus {
            for ride in rides? {
                graph.add_edge(ride.edge);
                labels.push(ride.label);
            }
        }

        debug!(
            stops = served.len(),
            buses = buses.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built journey graph"
        );

        Ok(TransportGraph {
            graph,
            labels,
            vertices,
        })
    }

    /// Give each served stop a vertex pair, in first-appearance order.
    fn allocate_vertices(&self) -> (Vec<Option<StopVertices>>, Vec<StopId>) {
        let mut vertices = vec![None; self.catalogue.stop_count()];
        let mut served = Vec::new();

        for (_, bus) in self.catalogue.buses() {
            for stop in bus.traversal() {
                if vertices[stop.0].is_none() {
                    let base = served.len() * 2;
                    vertices[stop.0] = Some(StopVertices {
                        wait: base,
                        ride: base + 1,
                    });
                    served.push(stop);
                }
            }
        }

        (vertices, served)
    }

    /// All ride edges of one bus, O(k²) in the traversal length.
    fn ride_edges(
        &self,
        id: BusId,
        bus: &Bus,
        vertices: &[Option<StopVertices>],
    ) -> Result<Vec<PendingRide>, RoutingError> {
        let traversal: Vec<StopId> = bus.traversal().collect();

        // prefix[p] is the road distance from position 0 to position p
        let mut prefix = Vec::with_capacity(traversal.len());
        prefix.push(0.0);
        for hop in traversal.windows(2) {
            let meters = self.catalogue.distance(hop[0], hop[1])?;
            prefix.push(prefix[prefix.len() - 1] + meters);
        }

        let mut rides = Vec::with_capacity(traversal.len() * traversal.len().saturating_sub(1) / 2);
        for (i, &from_stop) in traversal.iter().enumerate() {
            let Some(from) = vertices[from_stop.0] else {
                continue;
            };
            for (j, &to_stop) in traversal.iter().enumerate().skip(i + 1) {
                let Some(to) = vertices[to_stop.0] else {
                    continue;
                };
                rides.push(PendingRide {
                    edge: Edge {
                        from: from.ride,
                        to: to.wait,
                        weight: self.settings.ride_minutes(prefix[j] - prefix[i]),
                    },
                    label: EdgeLabel::Ride {
                        bus: id,
                        span_count: j - i,
                    },
                });
            }
        }

        Ok(rides)
    }
}
