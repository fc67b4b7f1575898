//! lexigraph-poet: graph-backed bridge-word text generation
//!
//! A thin client of the `lexigraph-core` graph contract. The poet ingests
//! a text corpus into a word affinity graph (case-folded words as
//! vertices, adjacency counts as edge weights) and then rewrites input
//! text by inserting a bridge word between adjacent input words wherever
//! the graph offers one.
//!
//! ## Usage
//!
//! ```rust
//! use lexigraph_core::VertexMapGraph;
//! use lexigraph_poet::GraphPoet;
//!
//! let poet = GraphPoet::from_text("the quick brown fox", VertexMapGraph::new())?;
//! assert_eq!(poet.poem("the brown"), "the quick brown");
//! # Ok::<(), lexigraph_poet::PoetError>(())
//! ```

pub mod error;
pub mod poet;
pub mod tokenizer;

pub use error::{PoetError, PoetResult};
pub use poet::GraphPoet;
