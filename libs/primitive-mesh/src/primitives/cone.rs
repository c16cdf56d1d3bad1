//! # Cone Primitive
//!
//! Capped cone: a base disk at z = 0 closing to an apex at z = h.

use config::constants::{clamp_segments, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SEGMENTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ring::Facing;
use super::{require_positive, vertex_budget};
use crate::error::MeshResult;
use crate::mesh::Mesh;

/// Parameters for a cone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    /// Radius of the base disk
    pub radius: f64,
    /// Apex height above the base
    pub height: f64,
    /// Number of segments around the base (clamped to >= 3)
    pub segments: u32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Creates a capped cone mesh.
///
/// Vertex 0 is the base center, vertex 1 the apex, then the base ring.
/// The base cap comes first (`n` faces), then one side triangle per
/// segment `(ring[i], ring[next(i)], apex)`.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`](crate::MeshError::InvalidParameter)
/// if the radius or height is not a positive finite number.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_cone, ConeParams};
///
/// let mesh = create_cone(&ConeParams { radius: 1.0, height: 1.0, segments: 3 }).unwrap();
/// assert_eq!(mesh.vertex_count(), 5);
/// assert_eq!(mesh.triangle_count(), 6);
/// ```
pub fn create_cone(params: &ConeParams) -> MeshResult<Mesh> {
    let radius = require_positive("cone", "radius", params.radius)?;
    let height = require_positive("cone", "height", params.height)?;
    let segments = clamp_segments(params.segments);
    let vertex_count = vertex_budget(2, 1, segments)?;

    let mut mesh = Mesh::with_capacity(vertex_count, 2 * segments as usize);

    let base_center = mesh.add_vertex(DVec3::ZERO);
    let apex = mesh.add_vertex(DVec3::new(0.0, 0.0, height));
    let base = mesh.add_ring(DVec2::ZERO, radius, 0.0, segments);

    mesh.add_cap_fan(base_center, base, segments, Facing::Down);
    mesh.add_apex_fan(base, apex, segments, Facing::Up);

    debug!(
        radius,
        height,
        segments,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cone"
    );
    Ok(mesh)
}
