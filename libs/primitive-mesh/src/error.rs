//! # Mesh Errors
//!
//! Error types for primitive mesh generation and mesh checks.

use thiserror::Error;

/// Result alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur during mesh generation or validation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A radius or height was non-positive, negative, or not finite.
    #[error("Invalid {shape} parameter: {parameter} = {value}")]
    InvalidParameter {
        /// Shape being generated
        shape: &'static str,
        /// Offending parameter name
        parameter: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// A triangle references a vertex that does not exist, or repeats one.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// An edge is not shared by exactly two oppositely wound triangles.
    #[error("Mesh is not closed: {message}")]
    NotClosed { message: String },

    /// Faces wind inward, so the enclosed volume comes out non-positive.
    #[error("Mesh faces point inward: signed volume {volume}")]
    InwardFacing { volume: f64 },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(shape: &'static str, parameter: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            shape,
            parameter,
            value,
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a not-closed error.
    pub fn not_closed(message: impl Into<String>) -> Self {
        Self::NotClosed {
            message: message.into(),
        }
    }
}
