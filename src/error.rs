//! Error types for loading, validation, and plan handling.
//!
//! Per-check evaluation errors (command failures, timeouts, missing files)
//! are deliberately absent here: the evaluator absorbs them into the
//! verification report so one bad clause never hides the others.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors surfaced to the CLI as non-zero exits.
#[derive(Debug, Error)]
pub enum ManifestoError {
    /// A document could not be parsed. Fatal for the manifesto itself;
    /// individual task files that fail to parse are skipped instead.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser message.
        message: String,
    },

    /// A structural or policy rule was violated. Reported fail-fast with
    /// enough context to fix the first violation.
    #[error("schema violation at {field}: {message}")]
    Schema {
        /// Path of the offending field (e.g. "tasks[2].description").
        field: String,
        /// What was found versus what the rule allows.
        message: String,
    },

    /// The same task ID appeared in two storage locations.
    #[error("duplicate task ID '{id}' in files: {first} and {second}")]
    DuplicateTaskId {
        /// The duplicated ID.
        id: String,
        /// Where the ID was first seen.
        first: String,
        /// Where it was seen again.
        second: String,
    },

    /// A required file or directory does not exist.
    #[error("not found: {0}")]
    Missing(String),

    /// An I/O or serialization failure outside the cases above.
    #[error("{0}")]
    Io(String),
}
