//! # Primitive Property Tests
//!
//! Properties every generator must satisfy: closure, outward winding,
//! vertex/face count formulas, segment clamping, and determinism.

use super::*;
use crate::mesh::Mesh;

const SEGMENT_COUNTS: [u32; 3] = [3, 4, 16];

fn cylinder(segments: u32) -> Mesh {
    create_cylinder(&CylinderParams {
        radius: 1.0,
        height: 2.0,
        segments,
    })
    .unwrap()
}

fn sphere(vertical_segments: u32, horizontal_segments: u32) -> Mesh {
    create_sphere(&SphereParams {
        radius: 1.0,
        vertical_segments,
        horizontal_segments,
    })
    .unwrap()
}

fn cone(segments: u32) -> Mesh {
    create_cone(&ConeParams {
        radius: 1.0,
        height: 1.0,
        segments,
    })
    .unwrap()
}

fn frustum(segments: u32) -> Mesh {
    create_frustum(&FrustumParams {
        bottom_radius: 0.5,
        top_radius: 0.2,
        height: 1.0,
        segments,
    })
    .unwrap()
}

fn assert_sound(mesh: &Mesh) {
    mesh.validate().unwrap();
    mesh.check_closed().unwrap();
    mesh.check_outward().unwrap();
}

#[test]
fn test_all_shapes_closed_and_outward() {
    for n in SEGMENT_COUNTS {
        assert_sound(&cylinder(n));
        assert_sound(&cone(n));
        assert_sound(&frustum(n));
        for m in SEGMENT_COUNTS {
            assert_sound(&sphere(n, m));
        }
    }
}

#[test]
fn test_default_shapes_closed_and_outward() {
    assert_sound(&create_cylinder(&CylinderParams::default()).unwrap());
    assert_sound(&create_sphere(&SphereParams::default()).unwrap());
    assert_sound(&create_cone(&ConeParams::default()).unwrap());
    assert_sound(&create_frustum(&FrustumParams::default()).unwrap());
}

#[test]
fn test_vertex_and_face_counts() {
    for n in SEGMENT_COUNTS {
        let n_usize = n as usize;

        let mesh = cylinder(n);
        assert_eq!(mesh.vertex_count(), 2 + 2 * n_usize);
        assert_eq!(mesh.triangle_count(), 4 * n_usize);

        let mesh = cone(n);
        assert_eq!(mesh.vertex_count(), 2 + n_usize);
        assert_eq!(mesh.triangle_count(), 2 * n_usize);

        let mesh = frustum(n);
        assert_eq!(mesh.vertex_count(), 2 + 2 * n_usize);
        assert_eq!(mesh.triangle_count(), 4 * n_usize);

        for m in SEGMENT_COUNTS {
            let (nv, nh) = (n as usize, m as usize);
            let mesh = sphere(n, m);
            assert_eq!(mesh.vertex_count(), 2 + (nv - 1) * nh);
            assert_eq!(mesh.triangle_count(), 2 * nh + 2 * nh * (nv - 2));
        }
    }
}

#[test]
fn test_segment_clamp_matches_three() {
    for small in [0, 1, 2] {
        assert_eq!(cylinder(small), cylinder(3));
        assert_eq!(cone(small), cone(3));
        assert_eq!(frustum(small), frustum(3));
        assert_eq!(sphere(small, small), sphere(3, 3));
    }
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(cylinder(20), cylinder(20));
    assert_eq!(sphere(12, 12), sphere(12, 12));
    assert_eq!(cone(12), cone(12));
    assert_eq!(frustum(12), frustum(12));
}

#[test]
fn test_volume_converges() {
    use std::f64::consts::PI;

    // Inscribed polygons undershoot, so volumes approach from below
    let volume = cylinder(256).signed_volume();
    let exact = PI * 2.0;
    assert!(volume < exact && volume > exact * 0.999);

    let volume = cone(256).signed_volume();
    let exact = PI / 3.0;
    assert!(volume < exact && volume > exact * 0.999);
}
