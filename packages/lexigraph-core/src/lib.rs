//! lexigraph-core: weighted directed graph ADT
//!
//! A mutable weighted directed graph over `String` vertex labels, with two
//! interchangeable internal representations behind one contract.
//!
//! ## Contract
//!
//! [`Graph`] defines the complete public surface: `add`, `set`, `remove`,
//! `vertices`, `sources`, `targets`, plus a deterministic `Display`
//! rendering for diagnostics. Weights are strictly positive on stored
//! edges; setting a weight of zero deletes the edge, and negative weights
//! fail with [`GraphError::NegativeWeight`] before any state change.
//!
//! ## Representations
//!
//! - [`EdgeListGraph`]: vertex set + discrete edge records, O(E) scans.
//!   The simple layout, with one record list to keep consistent.
//! - [`VertexMapGraph`]: label -> per-vertex outgoing adjacency map.
//!   Cheap `targets` lookups, O(V) `sources` and removal sweeps.
//!
//! Both produce identical answers for identical operation sequences; the
//! conformance suite in `tests/unit/` runs every check against both.
//!
//! ## Usage
//!
//! ```rust
//! use lexigraph_core::{EdgeListGraph, Graph};
//!
//! let mut graph = EdgeListGraph::new();
//! graph.add("hello");
//! let previous = graph.set("hello", "goodbye", 1)?;
//! assert_eq!(previous, 0);
//! assert_eq!(graph.targets("hello").get("goodbye"), Some(&1));
//! # Ok::<(), lexigraph_core::GraphError>(())
//! ```

pub mod edge_list;
pub mod error;
pub mod graph;
pub mod vertex_map;

pub use edge_list::EdgeListGraph;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use vertex_map::VertexMapGraph;
