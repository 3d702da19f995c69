//! Minimum-time route search over the journey graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::builder::{EdgeLabel, GraphBuilder, TransportGraph};
use super::config::{InvalidRoutingSettings, RoutingSettings};
use super::graph::{EdgeId, VertexId};
use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::StopId;

/// Error from building the router.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    /// Catalogue data needed by the graph is missing
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// Settings would produce invalid edge weights
    #[error(transparent)]
    InvalidSettings(#[from] InvalidRoutingSettings),
}

/// One step of an itinerary. Each item is exactly one graph edge.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    /// Wait at a stop before boarding.
    Wait { stop: String, time: f64 },
    /// Ride a bus for `span_count` hops.
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    /// Minutes spent on this item.
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }
}

/// A minimum-time itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Sum of item times, in path order, in minutes. Not rounded.
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl Route {
    /// The route from a stop to itself.
    pub fn empty() -> Self {
        Self {
            total_time: 0.0,
            items: Vec::new(),
        }
    }
}

/// Priority queue entry. Orders so that `BinaryHeap` pops the smallest
/// time first, and among equal times the entry reached by the earliest
/// inserted edge.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    time: f64,
    via: Option<EdgeId>,
    vertex: VertexId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.via.cmp(&self.via))
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Shortest-time router.
///
/// Owns the journey graph and borrows the catalogue it was built from.
/// Holds no per-query state, so a shared `&Router` can answer queries from
/// any number of threads.
#[derive(Debug)]
pub struct Router<'a> {
    catalogue: &'a TransportCatalogue,
    graph: TransportGraph,
}

impl<'a> Router<'a> {
    /// Build the journey graph for `catalogue` and wrap it in a router.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, RoutingError> {
        let graph = GraphBuilder::new(catalogue, settings).build()?;
        Ok(Self::from_graph(catalogue, graph))
    }

    /// Wrap an already-built graph.
    pub fn from_graph(catalogue: &'a TransportCatalogue, graph: TransportGraph) -> Self {
        Self { catalogue, graph }
    }

    pub fn graph(&self) -> &TransportGraph {
        &self.graph
    }

    pub fn catalogue(&self) -> &'a TransportCatalogue {
        self.catalogue
    }

    /// Minimum-time route between two stops, or `None` if unreachable.
    ///
    /// A stop routes to itself in zero time with no items. A stop that no
    /// bus serves cannot reach or be reached from any other stop.
    pub fn shortest_route(&self, from: StopId, to: StopId) -> Option<Route> {
        if from == to {
            return Some(Route::empty());
        }

        let source = self.graph.vertices(from)?.wait;
        let target = self.graph.vertices(to)?.wait;
        let (total_time, edges) = self.search(source, target)?;

        let items = edges.into_iter().map(|e| self.item(e)).collect();
        Some(Route { total_time, items })
    }

    /// Dijkstra from `source` to `target`, returning the path cost and edges.
    ///
    /// Among equal-cost ways to reach a vertex, the one whose final edge was
    /// inserted first wins.
    fn search(&self, source: VertexId, target: VertexId) -> Option<(f64, Vec<EdgeId>)> {
        let graph = self.graph.graph();
        let n = graph.vertex_count();

        let mut time = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<EdgeId>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut queue = BinaryHeap::new();

        time[source] = 0.0;
        queue.push(QueueEntry {
            time: 0.0,
            via: None,
            vertex: source,
        });

        let mut settled_count = 0usize;
        while let Some(QueueEntry { vertex, .. }) = queue.pop() {
            if settled[vertex] {
                continue;
            }
            settled[vertex] = true;
            settled_count += 1;

            if vertex == target {
                break;
            }

            for &edge_id in graph.incident_edges(vertex) {
                let edge = graph.edge(edge_id);
                if settled[edge.to] {
                    continue;
                }
                let candidate = time[vertex] + edge.weight;
                let better = candidate < time[edge.to]
                    || (candidate == time[edge.to] && prev[edge.to].is_some_and(|p| edge_id < p));
                if better {
                    time[edge.to] = candidate;
                    prev[edge.to] = Some(edge_id);
                    queue.push(QueueEntry {
                        time: candidate,
                        via: Some(edge_id),
                        vertex: edge.to,
                    });
                }
            }
        }

        trace!(source, target, settled = settled_count, "route search finished");

        if !settled[target] {
            return None;
        }

        let mut edges = Vec::new();
        let mut vertex = target;
        while let Some(edge_id) = prev[vertex] {
            edges.push(edge_id);
            vertex = graph.edge(edge_id).from;
        }
        edges.reverse();

        Some((time[target], edges))
    }

    /// Translate a graph edge into an itinerary item.
    fn item(&self, edge_id: EdgeId) -> RouteItem {
        let time = self.graph.graph().edge(edge_id).weight;
        match self.graph.label(edge_id) {
            EdgeLabel::Wait { stop } => RouteItem::Wait {
                stop: self.catalogue.stop(stop).name.clone(),
                time,
            },
            EdgeLabel::Ride { bus, span_count } => RouteItem::Bus {
                bus: self.catalogue.bus(bus).name.clone(),
                span_count,
                time,
            },
        }
    }
}
