//! # Tool Errors
//!
//! Errors surfaced by the generate-and-write layer and the CLI.

use std::path::PathBuf;

use primitive_mesh::MeshError;
use stl_writer::WriteError;
use thiserror::Error;

/// Result alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur while generating, writing, or or configuring a batch.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Mesh generation rejected its parameters
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Writing the mesh file failed
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Configuration is structurally valid JSON but semantically wrong
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for a batch
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Output directory could not be created
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
