//! # Writer Errors
//!
//! Error types for STL encoding and file output.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for writer operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Errors that can occur while encoding or writing a mesh file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// A face refers to a vertex that does not exist.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        /// Face position in the triangle list.
        face: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices supplied.
        vertex_count: usize,
    },

    /// Binary STL stores the face count as a u32.
    #[error("too many faces for binary STL: {count}")]
    TooManyFaces {
        /// Number of faces supplied.
        count: usize,
    },

    /// Unknown format name.
    #[error("unknown STL format: {name} (expected \"binary\" or \"ascii\")")]
    UnknownFormat {
        /// The unrecognized name.
        name: String,
    },

    /// The temporary file could not be moved onto the target path.
    #[error("failed to persist {path}: {source}")]
    Persist {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
