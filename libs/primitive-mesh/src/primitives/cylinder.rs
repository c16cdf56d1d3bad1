//! # Cylinder Primitive
//!
//! Capped cylinder centered on the origin, axis along Z.

use config::constants::{clamp_segments, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SEGMENTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ring::Facing;
use super::{require_positive, vertex_budget};
use crate::error::MeshResult;
use crate::mesh::Mesh;

/// Parameters for a cylinder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    /// Radius of both caps
    pub radius: f64,
    /// Height along Z; the cylinder spans `-h/2..h/2`
    pub height: f64,
    /// Number of segments around the circumference (clamped to >= 3)
    pub segments: u32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Creates a capped cylinder mesh.
///
/// # Layout
///
/// - vertex 0: bottom center `(0, 0, -h/2)`
/// - vertex 1: top center `(0, 0, h/2)`
/// - vertices `2..2+n`: bottom ring
/// - vertices `2+n..2+2n`: top ring
///
/// Faces are the bottom cap (n), the top cap (n), then two side triangles
/// per segment, for `4n` in total.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`](crate::MeshError::InvalidParameter)
/// if the radius or height is not a positive finite number.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_cylinder, CylinderParams};
///
/// let params = CylinderParams { radius: 1.0, height: 2.0, segments: 4 };
/// let mesh = create_cylinder(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn create_cylinder(params: &CylinderParams) -> MeshResult<Mesh> {
    let radius = require_positive("cylinder", "radius", params.radius)?;
    let height = require_positive("cylinder", "height", params.height)?;
    let segments = clamp_segments(params.segments);
    let vertex_count = vertex_budget(2, 2, segments)?;

    let half = height / 2.0;
    let mut mesh = Mesh::with_capacity(vertex_count, 4 * segments as usize);

    let bottom_center = mesh.add_vertex(DVec3::new(0.0, 0.0, -half));
    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, half));
    let bottom = mesh.add_ring(DVec2::ZERO, radius, -half, segments);
    let top = mesh.add_ring(DVec2::ZERO, radius, half, segments);

    mesh.add_cap_fan(bottom_center, bottom, segments, Facing::Down);
    mesh.add_cap_fan(top_center, top, segments, Facing::Up);
    mesh.add_side_band(bottom, top, segments);

    debug!(
        radius,
        height,
        segments,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cylinder"
    );
    Ok(mesh)
}
