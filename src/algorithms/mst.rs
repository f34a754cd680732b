//! Prim's minimum spanning tree weight.
//!
//! Grows a tree from an arbitrary start vertex, always taking the cheapest
//! edge crossing the frontier. The heap holds candidate edges only; stale
//! entries (both endpoints absorbed since insertion) are discarded on
//! extraction instead of being updated in place, which also makes parallel
//! edges harmless.
//!
//! The graph is assumed connected. On a disconnected graph the heap drains
//! before the tree spans everything and the partial sum for the start
//! vertex's component is returned as-is; callers that need to distinguish the
//! two cases must check connectivity themselves. Negative, zero, and positive
//! weights are all fine.

use crate::graph::UndirectedGraph;
use crate::heap::MinHeap;

/// Compute the weight sum of a minimum spanning tree using Prim's algorithm,
/// starting from the vertex at index 0.
///
/// # Returns
/// The MST weight sum; 0 for an empty graph; a partial component sum for a
/// disconnected graph.
pub fn minimum_spanning_tree_weight(graph: &UndirectedGraph) -> i64 {
    let n = graph.vertex_count();
    if n == 0 {
        return 0;
    }

    // Frontier set X, seeded with the start vertex.
    let mut in_tree = vec![false; n];
    in_tree[0] = true;
    let mut tree_size = 1;
    let mut total = 0i64;

    // Heap keyed by (weight, edge index): equal weights tie-break
    // arbitrarily on the index.
    let mut heap = MinHeap::with_capacity(graph.edge_count());
    for &e in graph.incident_slice(0) {
        heap.push((graph.edge_weight(e), e));
    }

    while tree_size != n {
        // Extract until an edge crosses the frontier; anything with both
        // endpoints already in the tree is stale and gets dropped here.
        let crossing = loop {
            match heap.pop() {
                Some((_, e)) => {
                    let (a, b) = graph.edge_endpoints(e);
                    if in_tree[a] != in_tree[b] {
                        break Some(e);
                    }
                }
                None => break None,
            }
        };

        // Heap drained without a crossing edge: the remaining vertices are
        // unreachable. Return the sum accumulated so far.
        let Some(e) = crossing else { break };

        let (a, b) = graph.edge_endpoints(e);
        let y = if in_tree[a] { b } else { a };
        in_tree[y] = true;
        tree_size += 1;
        total += graph.edge_weight(e);

        // New candidates: edges from y toward vertices still outside X.
        for &f in graph.incident_slice(y) {
            if !in_tree[graph.edge_other_endpoint(f, y)] {
                heap.push((graph.edge_weight(f), f));
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = UndirectedGraph::new(false);
        assert_eq!(minimum_spanning_tree_weight(&g), 0);
    }

    #[test]
    fn test_single_vertex() {
        let mut g = UndirectedGraph::new(false);
        g.add_vertex("a");
        assert_eq!(minimum_spanning_tree_weight(&g), 0);
    }

    #[test]
    fn test_known_connected_graph() {
        // a-b(1), b-c(2), c-d(1), a-d(4), b-d(3)
        // MST: a-b, b-c, c-d -> weight 4
        let mut g = UndirectedGraph::new(false);
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        let d = g.add_vertex("d");
        g.add_edge(a, b, 1);
        g.add_edge(b, c, 2);
        g.add_edge(c, d, 1);
        g.add_edge(a, d, 4);
        g.add_edge(b, d, 3);

        assert_eq!(minimum_spanning_tree_weight(&g), 4);
    }

    #[test]
    fn test_disconnected_returns_partial_sum() {
        // Components {a-b(1)} and {c-d(1)}: the start vertex is a, so only
        // its component contributes.
        let mut g = UndirectedGraph::new(false);
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        let d = g.add_vertex("d");
        g.add_edge(a, b, 1);
        g.add_edge(c, d, 1);

        assert_eq!(minimum_spanning_tree_weight(&g), 1);
    }

    #[test]
    fn test_isolated_start_vertex() {
        // The start vertex has no incident edges at all.
        let mut g = UndirectedGraph::new(false);
        g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        g.add_edge(b, c, 9);

        assert_eq!(minimum_spanning_tree_weight(&g), 0);
    }

    #[test]
    fn test_negative_weights() {
        // a-b(-2), b-c(3), a-c(0): MST is a-b + a-c = -2
        let mut g = UndirectedGraph::new(false);
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        g.add_edge(a, b, -2);
        g.add_edge(b, c, 3);
        g.add_edge(a, c, 0);

        assert_eq!(minimum_spanning_tree_weight(&g), -2);
    }

    #[test]
    fn test_parallel_edges_pick_cheapest() {
        // Two a--b edges: the 5 gets extracted after the 1 and discarded as
        // stale.
        let mut g = UndirectedGraph::new(true);
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b, 5);
        g.add_edge(a, b, 1);

        assert_eq!(minimum_spanning_tree_weight(&g), 1);
    }

    #[test]
    fn test_dense_graph() {
        // Complete graph on 5 vertices, weight = |i - j|.
        // MST is the path 0-1-2-3-4: weight 4.
        let mut g = UndirectedGraph::new(false);
        for i in 0..5 {
            g.add_vertex(&format!("v{}", i));
        }
        for i in 0..5usize {
            for j in (i + 1)..5 {
                g.add_edge(i, j, (j - i) as i64);
            }
        }

        assert_eq!(minimum_spanning_tree_weight(&g), 4);
    }
}
