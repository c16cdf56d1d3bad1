//! # Frustum Primitive
//!
//! Truncated cone: two parallel circular caps of (usually) different radii.

use config::constants::{
    clamp_segments, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SEGMENTS, DEFAULT_TOP_RADIUS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ring::Facing;
use super::{require_non_negative, require_positive, vertex_budget};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Parameters for a frustum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrustumParams {
    /// Radius of the cap at z = 0
    pub bottom_radius: f64,
    /// Radius of the cap at z = h
    pub top_radius: f64,
    /// Distance between the caps
    pub height: f64,
    /// Number of segments around each cap (clamped to >= 3)
    pub segments: u32,
}

impl Default for FrustumParams {
    fn default() -> Self {
        Self {
            bottom_radius: DEFAULT_RADIUS,
            top_radius: DEFAULT_TOP_RADIUS,
            height: DEFAULT_HEIGHT,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Creates a capped frustum mesh.
///
/// Same layout and face order as the cylinder, except the bottom cap sits
/// at z = 0 and the top cap at z = h. Equal radii give a cylinder; a zero
/// radius collapses that ring onto its center (the cone limit). Neither
/// case is special-cased.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] if the height is not positive,
/// a radius is negative or not finite, or both radii are zero (reported
/// as parameter `radii`).
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_frustum, FrustumParams};
///
/// let mesh = create_frustum(&FrustumParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 + 2 * 16);
/// assert_eq!(mesh.triangle_count(), 4 * 16);
/// ```
pub fn create_frustum(params: &FrustumParams) -> MeshResult<Mesh> {
    let bottom_radius = require_non_negative("frustum", "bottom_radius", params.bottom_radius)?;
    let top_radius = require_non_negative("frustum", "top_radius", params.top_radius)?;
    if bottom_radius == 0.0 && top_radius == 0.0 {
        return Err(MeshError::invalid_parameter("frustum", "radii", 0.0));
    }
    let height = require_positive("frustum", "height", params.height)?;
    let segments = clamp_segments(params.segments);
    let vertex_count = vertex_budget(2, 2, segments)?;

    let mut mesh = Mesh::with_capacity(vertex_count, 4 * segments as usize);

    let bottom_center = mesh.add_vertex(DVec3::ZERO);
    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, height));
    let bottom = mesh.add_ring(DVec2::ZERO, bottom_radius, 0.0, segments);
    let top = mesh.add_ring(DVec2::ZERO, top_radius, height, segments);

    mesh.add_cap_fan(bottom_center, bottom, segments, Facing::Down);
    mesh.add_cap_fan(top_center, top, segments, Facing::Up);
    mesh.add_side_band(bottom, top, segments);

    debug!(
        bottom_radius,
        top_radius,
        height,
        segments,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated frustum"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_cylinder, CylinderParams};
    use approx::assert_relative_eq;

    #[test]
    fn test_frustum_counts() {
        let mesh = create_frustum(&FrustumParams {
            segments: 12,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(mesh.vertex_count(), 26);
        assert_eq!(mesh.triangle_count(), 48);
    }

    #[test]
    fn test_frustum_ring_radii() {
        let mesh = create_frustum(&FrustumParams {
            bottom_radius: 0.5,
            top_radius: 0.2,
            height: 1.0,
            segments: 12,
        })
        .unwrap();
        assert_relative_eq!(mesh.vertex(2).x, 0.5);
        assert_relative_eq!(mesh.vertex(2 + 12).x, 0.2);
        assert_relative_eq!(mesh.vertex(2 + 12).z, 1.0);
    }

    #[test]
    fn test_frustum_equal_radii_matches_cylinder() {
        let frustum = create_frustum(&FrustumParams {
            bottom_radius: 1.0,
            top_radius: 1.0,
            height: 2.0,
            segments: 6,
        })
        .unwrap();
        let cylinder = create_cylinder(&CylinderParams {
            radius: 1.0,
            height: 2.0,
            segments: 6,
        })
        .unwrap();

        assert_eq!(frustum.triangles(), cylinder.triangles());
        for (f, c) in frustum.vertices().iter().zip(cylinder.vertices()) {
            assert_relative_eq!(f.x, c.x);
            assert_relative_eq!(f.y, c.y);
            assert_relative_eq!(f.z, c.z + 1.0);
        }
    }

    #[test]
    fn test_frustum_zero_top_radius_is_cone_limit() {
        let mesh = create_frustum(&FrustumParams {
            top_radius: 0.0,
            ..Default::default()
        })
        .unwrap();
        assert!(mesh.check_closed().is_ok());
        assert!(mesh.check_outward().is_ok());
    }

    #[test]
    fn test_frustum_both_radii_zero() {
        let result = create_frustum(&FrustumParams {
            bottom_radius: 0.0,
            top_radius: 0.0,
            ..Default::default()
        });
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidParameter {
                parameter: "radii",
                ..
            }
        ));
        assert_eq!(err.to_string(), "Invalid frustum parameter: radii = 0");
    }

    #[test]
    fn test_frustum_negative_top_radius() {
        let result = create_frustum(&FrustumParams {
            top_radius: -0.1,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter {
                parameter: "top_radius",
                ..
            })
        ));
    }
}
