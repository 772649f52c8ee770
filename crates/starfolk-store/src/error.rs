//! Error types for loading the character data file.

use std::path::PathBuf;

/// Reasons a data file could not be turned into a collection.
///
/// These never reach an HTTP client: [`load`](crate::load) logs them and
/// falls back to an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid JSON, or an array element is not an object.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("{} does not contain a JSON array (found {found})", path.display())]
    NotAnArray {
        /// Path that was parsed.
        path: PathBuf,
        /// Kind of JSON value found instead.
        found: &'static str,
    },
}
