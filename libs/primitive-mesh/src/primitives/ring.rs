//! # Ring Sampler
//!
//! Evenly spaced points on a horizontal circle, and the three ways the
//! generators stitch rings into triangles: cap fans, side bands, and apex
//! fans.
//!
//! Ring points run counter-clockwise seen from +Z. For segment `i`,
//! `next(i) = (i + 1) % n`. Every helper winds its triangles so the normal
//! points out of the solid, and an edge emitted along a ring by one helper
//! is emitted in the opposite direction by whichever helper closes the
//! other side.

use config::constants::clamp_segments;
use glam::{DVec2, DVec3};
use std::f64::consts::PI;

use crate::mesh::Mesh;

/// Which way a cap or apex fan faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Outward normal along +Z: a top cap, or an apex above its ring.
    Up,
    /// Outward normal along -Z: a bottom cap, or an apex below its ring.
    Down,
}

/// Samples `segments` points on a circle of `radius` around `center` at
/// height `z`.
///
/// Point `i` sits at angle `2π·i/n`. Segment counts below 3 are clamped.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::sample_ring;
/// use glam::DVec2;
///
/// let ring = sample_ring(DVec2::ZERO, 2.0, 1.0, 4);
/// assert_eq!(ring.len(), 4);
/// assert!((ring[1].y - 2.0).abs() < 1e-12);
/// assert!(ring.iter().all(|p| p.z == 1.0));
/// ```
pub fn sample_ring(center: DVec2, radius: f64, z: f64, segments: u32) -> Vec<DVec3> {
    let segments = clamp_segments(segments);
    (0..segments)
        .map(|i| {
            let angle = 2.0 * PI * f64::from(i) / f64::from(segments);
            DVec3::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
                z,
            )
        })
        .collect()
}

#[inline]
fn ring_pair(start: u32, i: u32, segments: u32) -> (u32, u32) {
    (start + i, start + (i + 1) % segments)
}

impl Mesh {
    /// Appends a sampled ring and returns the index of its first vertex.
    ///
    /// `segments` must already be clamped so callers index the ring with
    /// the same count.
    pub fn add_ring(&mut self, center: DVec2, radius: f64, z: f64, segments: u32) -> u32 {
        let start = self.vertex_count() as u32;
        for point in sample_ring(center, radius, z, segments) {
            self.add_vertex(point);
        }
        start
    }

    /// Fans a flat cap from `center` to the ring starting at `ring_start`.
    ///
    /// - `Down`: `(center, ring[next(i)], ring[i])`
    /// - `Up`: `(center, ring[i], ring[next(i)])`
    pub fn add_cap_fan(&mut self, center: u32, ring_start: u32, segments: u32, facing: Facing) {
        for i in 0..segments {
            let (current, next) = ring_pair(ring_start, i, segments);
            match facing {
                Facing::Down => self.add_triangle(center, next, current),
                Facing::Up => self.add_triangle(center, current, next),
            }
        }
    }

    /// Joins a lower ring to an upper ring with two triangles per segment:
    /// `(lower[i], lower[next], upper[next])` and
    /// `(lower[i], upper[next], upper[i])`.
    pub fn add_side_band(&mut self, lower_start: u32, upper_start: u32, segments: u32) {
        for i in 0..segments {
            let (lower, lower_next) = ring_pair(lower_start, i, segments);
            let (upper, upper_next) = ring_pair(upper_start, i, segments);
            self.add_triangle(lower, lower_next, upper_next);
            self.add_triangle(lower, upper_next, upper);
        }
    }

    /// Closes a ring onto a single point with one triangle per segment.
    ///
    /// - `Up` (apex above the ring): `(ring[i], ring[next(i)], apex)`
    /// - `Down` (apex below the ring): `(ring[next(i)], ring[i], apex)`
    pub fn add_apex_fan(&mut self, ring_start: u32, apex: u32, segments: u32, facing: Facing) {
        for i in 0..segments {
            let (current, next) = ring_pair(ring_start, i, segments);
            match facing {
                Facing::Up => self.add_triangle(current, next, apex),
                Facing::Down => self.add_triangle(next, current, apex),
            }
        }
    }
}
