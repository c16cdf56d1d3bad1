//! # Primitives
//!
//! Mesh generation for basic solids: cylinder, sphere, cone, and frustum.
//!
//! Every generator is a pure function from a parameter struct to a closed,
//! outward-wound [`Mesh`](crate::Mesh). Segment counts below 3 are clamped;
//! non-positive or non-finite radii and heights are rejected.

pub mod cone;
pub mod cylinder;
pub mod frustum;
pub mod ring;
pub mod sphere;

#[cfg(test)]
mod tests;

pub use cone::{create_cone, ConeParams};
pub use cylinder::{create_cylinder, CylinderParams};
pub use frustum::{create_frustum, FrustumParams};
pub use ring::{sample_ring, Facing};
pub use sphere::{create_sphere, SphereParams};

use config::constants::MAX_VERTICES;

use crate::error::{MeshError, MeshResult};

/// Returns `value` if it is finite and strictly positive.
pub(crate) fn require_positive(
    shape: &'static str,
    parameter: &'static str,
    value: f64,
) -> MeshResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::invalid_parameter(shape, parameter, value))
    }
}

/// Returns `value` if it is finite and not negative.
pub(crate) fn require_non_negative(
    shape: &'static str,
    parameter: &'static str,
    value: f64,
) -> MeshResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MeshError::invalid_parameter(shape, parameter, value))
    }
}

/// Computes `fixed + rings * segments` and checks it against the vertex
/// limit.
pub(crate) fn vertex_budget(fixed: usize, rings: usize, segments: u32) -> MeshResult<usize> {
    let count = rings
        .checked_mul(segments as usize)
        .and_then(|ring_vertices| ring_vertices.checked_add(fixed))
        .unwrap_or(usize::MAX);

    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }
    Ok(count)
}
