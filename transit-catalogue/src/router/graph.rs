//! Directed weighted graph with stable edge ids.

/// Vertex index.
pub type VertexId = usize;

/// Edge index, assigned in insertion order.
pub type EdgeId = usize;

/// A directed edge weighted in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Adjacency-list graph.
///
/// Edge ids are dense and follow insertion order, and each vertex lists its
/// outgoing edges in that same order.
#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge, returning its id.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        debug_assert!(edge.weight >= 0.0, "negative edge weight {}", edge.weight);
        debug_assert!(edge.to < self.incidence.len());

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        id
    }

    /// Returns the edge with the given id.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Outgoing edges of a vertex, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex]
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
