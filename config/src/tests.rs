//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_degenerate_epsilon_is_tiny() {
    assert!(DEGENERATE_AREA_EPSILON > 0.0);
    assert!(DEGENERATE_AREA_EPSILON < 1e-12);
}

#[test]
fn test_normal_tolerance_is_loose_enough_for_f32() {
    assert!(NORMAL_TOLERANCE > f64::from(f32::EPSILON));
    assert!(NORMAL_TOLERANCE < 1e-3);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_segments_closes_a_ring() {
    assert_eq!(MIN_SEGMENTS, 3);
}

#[test]
fn test_default_segments_matches_tool_default() {
    assert_eq!(DEFAULT_SEGMENTS, 16);
}

#[test]
fn test_clamp_segments_raises_small_counts() {
    for n in 0..MIN_SEGMENTS {
        assert_eq!(clamp_segments(n), MIN_SEGMENTS);
    }
}

#[test]
fn test_clamp_segments_keeps_valid_counts() {
    assert_eq!(clamp_segments(3), 3);
    assert_eq!(clamp_segments(64), 64);
    assert_eq!(clamp_segments(u32::MAX), u32::MAX);
}

// =============================================================================
// SHAPE DEFAULT TESTS
// =============================================================================

#[test]
fn test_shape_defaults_are_positive() {
    assert!(DEFAULT_RADIUS > 0.0);
    assert!(DEFAULT_HEIGHT > 0.0);
    assert!(DEFAULT_TOP_RADIUS > 0.0);
}

#[test]
fn test_default_frustum_narrows_upward() {
    assert!(DEFAULT_TOP_RADIUS < DEFAULT_RADIUS);
}
