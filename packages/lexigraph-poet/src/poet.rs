//! Graph-based poetry generation.
//!
//! `GraphPoet` derives a word affinity graph from a corpus: vertices are
//! case-folded words, and the weight of the edge w1 -> w2 counts how often
//! w2 immediately follows w1 in the corpus. Given input text, it attempts
//! to insert a bridge word between every adjacent pair of input words.
//!
//! The bridge between input words w1 and w2 is the candidate b with the
//! heaviest w1 -> b edge, excluding w2 itself; ties go to the
//! lexicographically smallest candidate so generation is deterministic.
//! Input words keep their original case, bridge words are lower case, and
//! output words are joined by single spaces.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use lexigraph_core::Graph;

use crate::error::{PoetError, PoetResult};
use crate::tokenizer;

/// A poet backed by any [`Graph`] implementation.
pub struct GraphPoet<G: Graph> {
    graph: G,
}

impl<G: Graph> GraphPoet<G> {
    /// Build a poet from a corpus file.
    ///
    /// Fails with [`PoetError::CorpusIo`] if the file cannot be read.
    pub fn from_corpus_file(path: impl AsRef<Path>, graph: G) -> PoetResult<Self> {
        let path = path.as_ref();
        let corpus =
            fs::read_to_string(path).map_err(|source| PoetError::corpus_io(path, source))?;
        Self::from_text(&corpus, graph)
    }

    /// Build a poet from in-memory corpus text.
    ///
    /// Each observed adjacency increments the edge weight by one, through
    /// the graph contract: read the current weight via `targets`, then
    /// `set` the incremented value.
    pub fn from_text(corpus: &str, graph: G) -> PoetResult<Self> {
        let mut graph = graph;
        let words = tokenizer::fold_words(corpus);
        for pair in words.windows(2) {
            let (w1, w2) = (&pair[0], &pair[1]);
            let previous = graph.targets(w1).get(w2).copied().unwrap_or(0);
            graph.set(w1, w2, previous + 1)?;
        }
        info!(
            corpus_words = words.len(),
            vertices = graph.vertices().len(),
            "built affinity graph"
        );
        Ok(Self { graph })
    }

    /// Generate a poem from the input text.
    ///
    /// Empty input yields an empty poem.
    pub fn poem(&self, input: &str) -> String {
        let words = tokenizer::words(input);
        if words.is_empty() {
            return String::new();
        }

        let mut poem = vec![words[0].to_string()];
        for pair in words.windows(2) {
            let w1 = pair[0].to_lowercase();
            let w2 = pair[1].to_lowercase();
            if let Some(bridge) = self.bridge_word(&w1, &w2) {
                debug!(%w1, %w2, %bridge, "inserted bridge word");
                poem.push(bridge);
            }
            poem.push(pair[1].to_string());
        }
        poem.join(" ")
    }

    /// The underlying affinity graph, for diagnostics.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Heaviest first-leg candidate between two case-folded input words,
    /// never the direct neighbor itself.
    fn bridge_word(&self, w1: &str, w2: &str) -> Option<String> {
        let mut best: Option<(String, i32)> = None;
        for (candidate, weight) in self.graph.targets(w1) {
            if candidate == w2 {
                continue;
            }
            let better = match &best {
                None => true,
                Some((best_word, best_weight)) => {
                    weight > *best_weight || (weight == *best_weight && candidate < *best_word)
                }
            };
            if better {
                best = Some((candidate, weight));
            }
        }
        best.map(|(word, _)| word)
    }
}
