//! Undirected multigraph algorithms for WASM and native callers.
//!
//! The crate centers on [`UndirectedGraph`], an arena-indexed undirected
//! multigraph, with two algorithm entry points: Prim's minimum-spanning-tree
//! weight and Karger's randomized global minimum cut. The algorithms are
//! backed by a generic binary min-heap ([`MinHeap`]); a standalone
//! disjoint-set structure ([`UnionFind`]) rounds out the toolkit.

pub mod algorithms;
pub mod graph;
pub mod heap;
pub mod union_find;

pub use graph::UndirectedGraph;
pub use heap::MinHeap;
pub use union_find::UnionFind;

use wasm_bindgen::prelude::*;

/// Runs once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
