//! The graph contract.
//!
//! [`Graph`] is the complete public surface of the core: six operations
//! plus a deterministic [`std::fmt::Display`] rendering. Implementations
//! are free to choose any internal layout as long as identical operation
//! sequences produce identical answers (iteration order of the returned
//! collections is never significant).

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::GraphResult;

/// A mutable weighted directed graph over `String` vertex labels.
///
/// Vertices have unique membership. Each ordered (source, target) pair
/// carries at most one edge; self-loops are allowed. Edge weights are
/// strictly positive: a weight of zero means the edge does not exist, and
/// negative weights are rejected. Query results are owned snapshots;
/// mutating a returned collection never affects the graph.
pub trait Graph: fmt::Display {
    /// Add a vertex if absent.
    ///
    /// Returns `true` if the vertex was newly added, `false` if it already
    /// existed. Never fails.
    fn add(&mut self, vertex: &str) -> bool;

    /// Create, update, or delete the directed edge from `source` to
    /// `target`.
    ///
    /// Fails with [`GraphError::NegativeWeight`](crate::GraphError) if
    /// `weight < 0`, making no state change. Otherwise both endpoints are
    /// added as vertices if absent, and the edge is created or overwritten
    /// (`weight > 0`) or deleted (`weight == 0`).
    ///
    /// Returns the weight the edge had before this call, 0 if it did not
    /// exist.
    fn set(&mut self, source: &str, target: &str, weight: i32) -> GraphResult<i32>;

    /// Remove a vertex and every edge incident to it, as source or target.
    ///
    /// Returns `true` if the vertex existed, `false` otherwise (no-op).
    fn remove(&mut self, vertex: &str) -> bool;

    /// Snapshot of the current vertex set.
    fn vertices(&self) -> HashSet<String>;

    /// All vertices with a positive-weight edge pointing at `target`,
    /// mapped to that weight. Empty if none, or if `target` is unknown.
    fn sources(&self, target: &str) -> HashMap<String, i32>;

    /// All vertices `source` points at with a positive-weight edge, mapped
    /// to that weight. Empty if none, or if `source` is unknown.
    fn targets(&self, source: &str) -> HashMap<String, i32>;
}
