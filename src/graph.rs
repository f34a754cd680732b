//! Core undirected multigraph structure with arena-indexed adjacency.
//!
//! Vertices and edges live in two contiguous vectors; edges reference their
//! endpoints by index into the vertex vector, and each vertex lists its
//! incident edges by index into the edge vector. Cloning the graph therefore
//! copies the two vectors and is alias-free by construction, which is what
//! Karger's repeated throwaway-clone contraction relies on.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use wasm_bindgen::prelude::*;

/// A vertex: a string label plus the indices of its incident edges.
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    incident: Vec<usize>,
}

impl Vertex {
    /// The vertex label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of incident edges (parallel edges counted individually).
    pub fn degree(&self) -> usize {
        self.incident.len()
    }
}

/// An undirected edge between two vertex indices, with an integer weight.
///
/// Endpoint storage order carries no meaning; all queries are symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    initial: usize,
    terminal: usize,
    weight: i64,
}

impl Edge {
    /// Both endpoint indices, in storage order.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.initial, self.terminal)
    }

    /// The edge weight. Negative, zero, and positive weights are all valid.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// True if this edge connects `u` and `v`, in either order.
    pub fn connects(&self, u: usize, v: usize) -> bool {
        (self.initial == u && self.terminal == v) || (self.initial == v && self.terminal == u)
    }

    /// True if both endpoints denote the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.initial == self.terminal
    }

    /// Given one endpoint, returns the other.
    /// For a self-loop both endpoints coincide and `v` itself comes back.
    pub fn other_endpoint(&self, v: usize) -> usize {
        if self.initial == v {
            self.terminal
        } else {
            self.initial
        }
    }
}

/// Serializable graph snapshot for import/export.
#[derive(Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub labels: Vec<String>,
    pub edges: Vec<(usize, usize, i64)>,
    pub allow_parallel_edges: bool,
}

/// Undirected multigraph owning its vertex and edge arenas.
#[wasm_bindgen]
#[derive(Clone)]
pub struct UndirectedGraph {
    /// Vertex arena; edge endpoints index into this.
    vertices: Vec<Vertex>,

    /// Edge arena; incident lists index into this.
    edges: Vec<Edge>,

    /// Reverse lookup: label -> index of its first occurrence.
    label_index: HashMap<String, usize>,

    /// Whether two edges may connect the same unordered vertex pair.
    allow_parallel_edges: bool,
}

#[wasm_bindgen]
impl UndirectedGraph {
    /// Create an empty graph. `allow_parallel_edges` fixes the parallel-edge
    /// policy for the graph's lifetime.
    #[wasm_bindgen(constructor)]
    pub fn new(allow_parallel_edges: bool) -> UndirectedGraph {
        UndirectedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            label_index: HashMap::new(),
            allow_parallel_edges,
        }
    }

    /// Create a graph with pre-allocated capacity.
    #[wasm_bindgen(js_name = withCapacity)]
    pub fn with_capacity(
        vertex_capacity: usize,
        edge_capacity: usize,
        allow_parallel_edges: bool,
    ) -> UndirectedGraph {
        UndirectedGraph {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            label_index: HashMap::with_capacity(vertex_capacity),
            allow_parallel_edges,
        }
    }

    /// Add a vertex, returns its index.
    ///
    /// Without parallel-edge mode this is idempotent: re-adding a label
    /// returns the existing index. With parallel-edge mode duplicate labels
    /// each get their own vertex; the label lookup keeps the first occurrence.
    #[wasm_bindgen(js_name = addVertex)]
    pub fn add_vertex(&mut self, label: &str) -> usize {
        if !self.allow_parallel_edges {
            if let Some(&idx) = self.label_index.get(label) {
                return idx;
            }
        }
        let idx = self.vertices.len();
        self.vertices.push(Vertex {
            label: label.to_string(),
            incident: Vec::new(),
        });
        self.label_index.entry(label.to_string()).or_insert(idx);
        idx
    }

    /// Add an undirected edge between vertex indices `u` and `v`.
    ///
    /// Silently ignored when an index is out of range, when `u == v`
    /// (self-loops arise only from contraction, never from construction), or
    /// when the pair is already connected and parallel edges are disallowed.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) {
        if u >= self.vertices.len() || v >= self.vertices.len() || u == v {
            return;
        }
        if !self.allow_parallel_edges && self.has_edge_between(u, v) {
            return;
        }
        let idx = self.edges.len();
        self.edges.push(Edge {
            initial: u,
            terminal: v,
            weight,
        });
        self.vertices[u].incident.push(idx);
        self.vertices[v].incident.push(idx);
    }

    /// Number of vertices.
    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges (parallel edges counted individually).
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether parallel edges are permitted.
    #[wasm_bindgen(js_name = allowsParallelEdges)]
    pub fn allows_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    /// Get a vertex label by index.
    pub fn label(&self, idx: usize) -> Option<String> {
        self.vertices.get(idx).map(|v| v.label.clone())
    }

    /// Get a vertex index by label (first occurrence).
    #[wasm_bindgen(js_name = vertexIdx)]
    pub fn vertex_idx(&self, label: &str) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    /// Degree of a vertex (parallel edges counted individually).
    pub fn degree(&self, v: usize) -> usize {
        self.vertices.get(v).map_or(0, Vertex::degree)
    }

    /// True if at least one edge connects `u` and `v`, in either order.
    #[wasm_bindgen(js_name = hasEdgeBetween)]
    pub fn has_edge_between(&self, u: usize, v: usize) -> bool {
        self.vertices.get(u).map_or(false, |vert| {
            vert.incident.iter().any(|&e| self.edges[e].connects(u, v))
        })
    }

    /// All vertex labels as a JSON array.
    #[wasm_bindgen(js_name = vertexLabels)]
    pub fn vertex_labels(&self) -> JsValue {
        let labels: Vec<&str> = self.vertices.iter().map(|v| v.label.as_str()).collect();
        serde_wasm_bindgen::to_value(&labels).unwrap_or(JsValue::NULL)
    }

    /// Deep structural copy: fresh vertex and edge arenas, isomorphic to the
    /// original, sharing nothing with it.
    #[wasm_bindgen(js_name = cloneGraph)]
    pub fn clone_graph(&self) -> UndirectedGraph {
        self.clone()
    }

    /// Textual rendering of the full graph (vertex list + edge list).
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        let snapshot = GraphSnapshot {
            labels: self.vertices.iter().map(|v| v.label.clone()).collect(),
            edges: self
                .edges
                .iter()
                .map(|e| (e.initial, e.terminal, e.weight))
                .collect(),
            allow_parallel_edges: self.allow_parallel_edges,
        };
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Import graph from JSON snapshot.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<UndirectedGraph, JsError> {
        let snapshot: GraphSnapshot =
            serde_json::from_str(json).map_err(|e| JsError::new(&e.to_string()))?;

        let mut graph = UndirectedGraph::with_capacity(
            snapshot.labels.len(),
            snapshot.edges.len(),
            snapshot.allow_parallel_edges,
        );
        for label in &snapshot.labels {
            // Bypass label dedup: the snapshot's arena layout is authoritative.
            let idx = graph.vertices.len();
            graph.vertices.push(Vertex {
                label: label.clone(),
                incident: Vec::new(),
            });
            graph.label_index.entry(label.clone()).or_insert(idx);
        }
        for (u, v, weight) in snapshot.edges {
            graph.add_edge(u, v, weight);
        }
        Ok(graph)
    }

}

// Algorithm entry points.
#[cfg(feature = "core")]
#[wasm_bindgen]
impl UndirectedGraph {
    /// Sum of the minimum-spanning-tree edge weights found by Prim's
    /// algorithm, starting from the first vertex added.
    ///
    /// On a disconnected graph this returns the partial sum for the start
    /// vertex's component; see [`crate::algorithms::mst`].
    #[wasm_bindgen(js_name = minimumSpanningTreeWeight)]
    pub fn minimum_spanning_tree_weight(&self) -> i64 {
        crate::algorithms::mst::minimum_spanning_tree_weight(self)
    }

    /// Global minimum cut (in edge count) estimated by Karger's randomized
    /// contraction, with entropy-seeded trials.
    #[wasm_bindgen(js_name = minimumCutValue)]
    pub fn minimum_cut_value(&self) -> usize {
        crate::algorithms::mincut::minimum_cut_value(self)
    }

    /// Same as `minimumCutValue` but with a fixed RNG seed, for reproducible
    /// runs.
    #[wasm_bindgen(js_name = minimumCutValueSeeded)]
    pub fn minimum_cut_value_seeded(&self, seed: u64) -> usize {
        crate::algorithms::mincut::minimum_cut_value_seeded(self, seed)
    }
}

// Internal methods (not exposed to WASM)
impl UndirectedGraph {
    /// Get incident edge indices of a vertex (internal use).
    pub(crate) fn incident_slice(&self, v: usize) -> &[usize] {
        self.vertices
            .get(v)
            .map_or(&[], |vert| vert.incident.as_slice())
    }

    /// Endpoint indices of an edge (internal use).
    pub(crate) fn edge_endpoints(&self, e: usize) -> (usize, usize) {
        self.edges[e].endpoints()
    }

    /// Weight of an edge (internal use).
    pub(crate) fn edge_weight(&self, e: usize) -> i64 {
        self.edges[e].weight
    }

    /// Opposite endpoint of edge `e` as seen from vertex `v` (internal use).
    pub(crate) fn edge_other_endpoint(&self, e: usize, v: usize) -> usize {
        self.edges[e].other_endpoint(v)
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Check if graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Contract the edge at `edge_idx`: the `initial` endpoint absorbs the
    /// `terminal` endpoint.
    ///
    /// Every edge touching the absorbed vertex is redirected to the surviving
    /// one by rebuilding the edge arena (never mutating the list being
    /// scanned); edges that end up connecting the survivor to itself (the
    /// contracted edge and any parallel to it) are dropped, while parallel
    /// edges toward other vertices are all retained. The survivor's label
    /// becomes `"<kept>,<dropped>"` for traceability, and the absorbed vertex
    /// leaves the arena via swap-remove with an index remap.
    pub(crate) fn contract_edge(&mut self, edge_idx: usize) {
        let contracted = self.edges[edge_idx];
        let keep = contracted.initial;
        let dropped = contracted.terminal;

        if keep == dropped {
            // Contracting a self-loop merges nothing: just delete the edge.
            self.edges.swap_remove(edge_idx);
            self.rebuild_incident_lists();
            return;
        }

        let merged_label = format!(
            "{},{}",
            self.vertices[keep].label, self.vertices[dropped].label
        );

        // Redirect-and-filter pass over a fresh edge arena.
        let mut kept_edges = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            let a = if edge.initial == dropped {
                keep
            } else {
                edge.initial
            };
            let b = if edge.terminal == dropped {
                keep
            } else {
                edge.terminal
            };
            if a == keep && b == keep {
                continue;
            }
            kept_edges.push(Edge {
                initial: a,
                terminal: b,
                weight: edge.weight,
            });
        }

        // Swap-remove the absorbed vertex; the vertex that held the last
        // index (if any) moves into its slot, so remap that index.
        let last = self.vertices.len() - 1;
        self.vertices.swap_remove(dropped);
        if dropped != last {
            for edge in &mut kept_edges {
                if edge.initial == last {
                    edge.initial = dropped;
                }
                if edge.terminal == last {
                    edge.terminal = dropped;
                }
            }
        }
        let survivor = if keep == last { dropped } else { keep };
        self.vertices[survivor].label = merged_label;

        self.edges = kept_edges;
        self.rebuild_incident_lists();
        self.rebuild_label_index();
    }

    /// Recompute every incident list from the edge arena.
    /// A self-loop registers once in its vertex's list.
    fn rebuild_incident_lists(&mut self) {
        for vert in &mut self.vertices {
            vert.incident.clear();
        }
        for i in 0..self.edges.len() {
            let (a, b) = self.edges[i].endpoints();
            self.vertices[a].incident.push(i);
            if b != a {
                self.vertices[b].incident.push(i);
            }
        }
    }

    /// Recompute the label lookup (first occurrence wins).
    fn rebuild_label_index(&mut self) {
        self.label_index.clear();
        for (i, vert) in self.vertices.iter().enumerate() {
            self.label_index.entry(vert.label.clone()).or_insert(i);
        }
    }
}

impl Default for UndirectedGraph {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices ({}):", self.vertices.len())?;
        for vert in &self.vertices {
            writeln!(f, "  {}", vert.label)?;
        }
        writeln!(f, "Edges ({}):", self.edges.len())?;
        for edge in &self.edges {
            writeln!(
                f,
                "  {} -- {} ({})",
                self.vertices[edge.initial].label, self.vertices[edge.terminal].label, edge.weight
            )?;
        }
        Ok(())
    }
}
