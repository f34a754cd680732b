//! WASM smoke tests for the exported graph surface.

#![cfg(target_arch = "wasm32")]

use mincut_graph_wasm::UndirectedGraph;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn build_and_query() {
    let mut g = UndirectedGraph::new(false);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    g.add_edge(a, b, 3);

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge_between(b, a));
    assert_eq!(g.vertex_idx("b"), Some(b));
}

#[wasm_bindgen_test]
fn mst_weight_from_wasm_surface() {
    let mut g = UndirectedGraph::new(false);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    g.add_edge(a, b, 1);
    g.add_edge(b, c, 2);
    g.add_edge(c, a, 5);

    assert_eq!(g.minimum_spanning_tree_weight(), 3);
}

#[wasm_bindgen_test]
fn seeded_min_cut_from_wasm_surface() {
    let mut g = UndirectedGraph::new(true);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    g.add_edge(a, b, 1);
    g.add_edge(b, c, 1);
    g.add_edge(c, a, 1);

    // Every contraction of a triangle yields a cut of 2.
    assert_eq!(g.minimum_cut_value_seeded(9), 2);
    assert_eq!(g.minimum_cut_value_seeded(9), g.minimum_cut_value_seeded(9));
}

#[wasm_bindgen_test]
fn json_roundtrip_preserves_structure() {
    let mut g = UndirectedGraph::new(true);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    g.add_edge(a, b, 1);
    g.add_edge(a, b, 2);

    let restored = UndirectedGraph::from_json(&g.to_json()).unwrap();
    assert_eq!(restored.vertex_count(), 2);
    assert_eq!(restored.edge_count(), 2);
    assert!(restored.allows_parallel_edges());
}
