//! # Diagnostics
//!
//! Observational logging for generated meshes: parameters, counts, and a
//! spot check of cylinder cap normals. Nothing here changes geometry.

use config::constants::{clamp_segments, NORMAL_TOLERANCE};
use glam::DVec3;
use primitive_mesh::{Mesh, Shape};
use tracing::{info, warn};

/// Number of leading faces sampled by [`cylinder_normal_report`].
pub const NORMAL_SAMPLE_COUNT: usize = 4;

/// Cap a sampled face belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    /// Faces `0..n`, expected normal -Z
    Bottom,
    /// Faces `n..2n`, expected normal +Z
    Top,
}

impl Cap {
    /// Expected Z component of the cap's unit normal.
    pub fn expected_z(self) -> f64 {
        match self {
            Cap::Bottom => -1.0,
            Cap::Top => 1.0,
        }
    }
}

/// One sampled face normal.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalSample {
    pub face: usize,
    pub cap: Cap,
    /// Zero when the face is degenerate
    pub normal: DVec3,
    pub matches: bool,
}

/// Samples the normals of the first few cylinder faces and checks each
/// against its cap direction.
///
/// `segments` is the clamped segment count used to build `mesh`; faces
/// `0..segments` are the bottom cap and `segments..2*segments` the top.
pub fn cylinder_normal_report(mesh: &Mesh, segments: u32) -> Vec<NormalSample> {
    let segments = segments as usize;
    let sampled = NORMAL_SAMPLE_COUNT.min(mesh.triangle_count());

    (0..sampled)
        .filter_map(|face| {
            let cap = if face < segments {
                Cap::Bottom
            } else if face < 2 * segments {
                Cap::Top
            } else {
                return None;
            };
            let normal = mesh.face_normal(face);
            let matches = normal
                .map(|n| (n.z - cap.expected_z()).abs() < NORMAL_TOLERANCE)
                .unwrap_or(false);
            Some(NormalSample {
                face,
                cap,
                normal: normal.unwrap_or(DVec3::ZERO),
                matches,
            })
        })
        .collect()
}

/// Logs the shape parameters and resulting counts, plus the cap normal
/// check for cylinders.
pub fn report(shape: &Shape, mesh: &Mesh) {
    info!(
        shape = shape.name(),
        params = ?shape,
        vertices = mesh.vertex_count(),
        faces = mesh.triangle_count(),
        "generated mesh"
    );

    if let Shape::Cylinder(params) = shape {
        let segments = clamp_segments(params.segments);
        for sample in cylinder_normal_report(mesh, segments) {
            let n = sample.normal;
            if sample.matches {
                info!(
                    face = sample.face,
                    cap = ?sample.cap,
                    "normal = [{:.2}, {:.2}, {:.2}]",
                    n.x,
                    n.y,
                    n.z
                );
            } else {
                warn!(
                    face = sample.face,
                    cap = ?sample.cap,
                    expected_z = sample.cap.expected_z(),
                    "normal = [{:.2}, {:.2}, {:.2}] points the wrong way",
                    n.x,
                    n.y,
                    n.z
                );
            }
        }
    }
}
