//! Errors of the benchmark pipeline.

use oxowl::OwlError;
use std::io;
use std::path::PathBuf;

/// Fatal errors: unreadable inputs and unwritable outputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid benchmark JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Ontology(#[from] OwlError),
}

impl BenchmarkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
