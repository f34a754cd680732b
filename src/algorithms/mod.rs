//! Graph algorithm implementations.
//!
//! The two live entry points: Prim's minimum-spanning-tree weight and
//! Karger's randomized global minimum cut.

#[cfg(feature = "core")]
pub mod mincut;
#[cfg(feature = "core")]
pub mod mst;
