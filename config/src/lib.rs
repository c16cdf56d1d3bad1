//! # Config Crate
//!
//! Centralized configuration constants for the primitive mesh pipeline.
//! Default shape parameters, segment limits, and floating-point tolerances
//! are defined here so the generators, the STL writer, and the tool agree
//! on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_segments, DEFAULT_SEGMENTS, MIN_SEGMENTS};
//!
//! // Segment counts below the minimum are raised, never rejected
//! assert_eq!(clamp_segments(1), MIN_SEGMENTS);
//! assert_eq!(clamp_segments(DEFAULT_SEGMENTS), DEFAULT_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Permissive Segments**: Too-small segment counts are clamped
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
