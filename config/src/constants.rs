//! # Configuration Constants
//!
//! Centralized constants for primitive mesh generation and STL output.
//!
//! ## Categories
//!
//! - **Precision**: Degenerate-face and normal-check tolerances
//! - **Resolution**: Segment count defaults and minimum
//! - **Shape Defaults**: Default radii and heights for each primitive
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum cross-product length for a face to have a defined normal.
///
/// Faces whose doubled area falls below this are treated as degenerate:
/// the mesh reports no normal for them and the STL writer emits a zero
/// normal.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-15;

/// Tolerance used when checking that a sampled normal points along its
/// expected axis.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_TOLERANCE;
///
/// let normal_z = -0.9999999;
/// assert!((normal_z - -1.0_f64).abs() < NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1e-6;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of segments around any ring.
///
/// Three is the smallest count that closes a ring into a polygon. Smaller
/// requests are clamped up to this value.
pub const MIN_SEGMENTS: u32 = 3;

/// Default number of segments around a ring (and for both sphere
/// directions).
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
///
/// assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 16;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default radius for cylinders, spheres, cones, and frustum bottoms.
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Default height for cylinders, cones, and frustums.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Default top radius of a frustum.
pub const DEFAULT_TOP_RADIUS: f64 = 0.3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated mesh.
///
/// Keeps vertex indices comfortably inside `u32` and bounds memory use.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 2 + 2 * 1024;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Directory the tool writes into when no other is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./stl";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a requested segment count to the valid minimum.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_segments;
///
/// assert_eq!(clamp_segments(0), 3);
/// assert_eq!(clamp_segments(2), 3);
/// assert_eq!(clamp_segments(20), 20);
/// ```
#[inline]
pub fn clamp_segments(segments: u32) -> u32 {
    segments.max(MIN_SEGMENTS)
}
