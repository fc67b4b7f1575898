//! Typed errors for corpus loading and poem generation.

use std::path::PathBuf;

use thiserror::Error;

use lexigraph_core::GraphError;

/// Errors raised while building or using a poet
#[derive(Error, Debug)]
pub enum PoetError {
    /// Corpus file could not be read
    #[error("Failed to read corpus {}: {source}", path.display())]
    CorpusIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying graph rejected a mutation
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl PoetError {
    /// Create a corpus I/O error carrying the offending path
    pub fn corpus_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CorpusIo {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for poet operations
pub type PoetResult<T> = Result<T, PoetError>;
