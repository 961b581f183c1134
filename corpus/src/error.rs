//! Error types for corpus scanning.
//!
//! Covers the failure modes of reading the field corpus: opening files,
//! parsing YAML documents, and walking the directory tree.

use thiserror::Error;

/// Errors that can occur while locating or decoding field files.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file holds no YAML document (empty or comments only).
    #[error("EOF: no YAML document found")]
    EmptyDocument,

    /// Directory traversal failure. Fatal for a scan.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Convenience alias for results with [`CorpusError`].
pub type Result<T> = std::result::Result<T, CorpusError>;
