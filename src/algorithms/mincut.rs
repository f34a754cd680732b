//! Karger's randomized global minimum cut.
//!
//! Repeats the random-contraction experiment `ceil(n^2 * ln n)` times: clone
//! the graph, contract uniformly random edges until two super-vertices
//! remain, and record the surviving edge count as a cut candidate. The best
//! candidate across trials is wrong with probability at most `1/n` (union
//! bound over all minimum cuts), and that guarantee depends on the trial
//! count scaling as n^2 log n.
//!
//! The cut value is measured in edge count, not weight, so parallel edges
//! between two super-vertices all count. The input graph is never mutated;
//! each trial works on its own clone.

use crate::graph::UndirectedGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Estimate the global minimum cut with entropy-seeded trials.
pub fn minimum_cut_value(graph: &UndirectedGraph) -> usize {
    let mut rng = SmallRng::from_entropy();
    minimum_cut_value_with(graph, &mut rng)
}

/// Estimate the global minimum cut with a fixed seed, for reproducible runs.
pub fn minimum_cut_value_seeded(graph: &UndirectedGraph, seed: u64) -> usize {
    let mut rng = SmallRng::seed_from_u64(seed);
    minimum_cut_value_with(graph, &mut rng)
}

/// Estimate the global minimum cut, drawing edge choices from `rng`.
///
/// # Returns
/// The smallest cut candidate observed over `ceil(n^2 * ln n)` contraction
/// trials; 0 for a graph with fewer than two vertices.
pub fn minimum_cut_value_with<R: Rng>(graph: &UndirectedGraph, rng: &mut R) -> usize {
    let n = graph.vertex_count();
    if n < 2 {
        return 0;
    }

    let trials = trial_count(n);
    let mut best: Option<usize> = None;

    for _ in 0..trials {
        let candidate = contraction_trial(graph, rng);
        // Strict comparison: ties keep the first minimum found.
        if best.map_or(true, |b| candidate < b) {
            best = Some(candidate);
        }
    }

    best.unwrap_or(0)
}

/// Trial count `ceil(n^2 * ln n)` for the standard failure bound of 1/n.
pub(crate) fn trial_count(n: usize) -> usize {
    let nf = n as f64;
    (nf * nf * nf.ln()).ceil() as usize
}

/// One contraction experiment on a throwaway clone.
///
/// Stops early when the clone runs out of edges (disconnected input): the
/// remaining cut is 0, which is the correct value for a disconnected graph.
fn contraction_trial<R: Rng>(graph: &UndirectedGraph, rng: &mut R) -> usize {
    let mut clone = graph.clone_graph();
    while clone.vertex_count() > 2 && clone.edge_count() > 0 {
        let pick = rng.gen_range(0..clone.edge_count());
        clone.contract_edge(pick);
    }
    clone.edge_count()
}
