//! # Sphere Primitive
//!
//! UV-sphere: latitude rings between two pole vertices.

use config::constants::{clamp_segments, DEFAULT_RADIUS, DEFAULT_SEGMENTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use super::ring::Facing;
use super::{require_positive, vertex_budget};
use crate::error::MeshResult;
use crate::mesh::Mesh;

/// Parameters for a UV-sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    /// Sphere radius
    pub radius: f64,
    /// Number of latitude bands from pole to pole (clamped to >= 3)
    pub vertical_segments: u32,
    /// Number of segments around each latitude ring (clamped to >= 3)
    pub horizontal_segments: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            vertical_segments: DEFAULT_SEGMENTS,
            horizontal_segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Creates a UV-sphere mesh centered on the origin.
///
/// # Algorithm
///
/// - vertex 0 is the north pole `(0, 0, r)`
/// - for each band `i` in `1..nv`, a ring of `nh` vertices at polar angle
///   `θ = π·i/nv`, height `r·cos θ`, ring radius `r·sin θ`
/// - the last vertex is the south pole `(0, 0, -r)`
///
/// Faces are the north fan (`nh`), `nv - 2` bands of `2·nh` triangles
/// each, then the south fan (`nh`). Bands are wound lower ring first, the
/// same way as cylinder walls, so every normal points away from the
/// center.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`](crate::MeshError::InvalidParameter)
/// if the radius is not a positive finite number.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_sphere, SphereParams};
///
/// let params = SphereParams { radius: 1.0, vertical_segments: 3, horizontal_segments: 4 };
/// let mesh = create_sphere(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn create_sphere(params: &SphereParams) -> MeshResult<Mesh> {
    let radius = require_positive("sphere", "radius", params.radius)?;
    let vertical = clamp_segments(params.vertical_segments);
    let horizontal = clamp_segments(params.horizontal_segments);
    let ring_count = vertical - 1;
    let vertex_count = vertex_budget(2, ring_count as usize, horizontal)?;
    let triangle_count = 2 * horizontal as usize * (vertical as usize - 1);

    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    let north = mesh.add_vertex(DVec3::new(0.0, 0.0, radius));
    let rings: Vec<u32> = (1..vertical)
        .map(|i| {
            let theta = PI * f64::from(i) / f64::from(vertical);
            mesh.add_ring(
                DVec2::ZERO,
                radius * theta.sin(),
                radius * theta.cos(),
                horizontal,
            )
        })
        .collect();
    let south = mesh.add_vertex(DVec3::new(0.0, 0.0, -radius));

    // Rings run north to south, so each band's lower ring is the later one
    mesh.add_apex_fan(rings[0], north, horizontal, Facing::Up);
    for band in rings.windows(2) {
        mesh.add_side_band(band[1], band[0], horizontal);
    }
    mesh.add_apex_fan(rings[rings.len() - 1], south, horizontal, Facing::Down);

    debug!(
        radius,
        vertical,
        horizontal,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated sphere"
    );
    Ok(mesh)
}
