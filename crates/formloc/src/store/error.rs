//! Catalog loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a locale dictionary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a dictionary file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error with location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The document was valid JSON but its root was not an object.
    #[error("{path}: dictionary root must be a JSON object")]
    NotAnObject { path: PathBuf },
}
