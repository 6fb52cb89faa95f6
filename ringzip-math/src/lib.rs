//! # ringzip-math
//!
//! Angular mapping between byte values and points on the unit circle.
//!
//! A byte `v` in `0..=255` sits at angle `2π · v / 256`. The mapping is
//! monotonic, so angle ordering matches byte ordering, and it never wraps:
//! `255` lands just short of `2π`.
//!
//! **Zero external dependencies**: pure functions and compile-time constants.

pub mod angle;

pub use angle::{from_angle, to_angle};

/// π, as used by the angular mapping.
pub const PI: f64 = std::f64::consts::PI;

/// One full turn of the circle, `2π`.
pub const FULL_TURN: f64 = 2.0 * PI;

/// Number of distinct byte values spread over [`FULL_TURN`].
pub const BYTE_LEVELS: f64 = 256.0;

/// Radius of the circle whose area is 1 (`1/√π`).
///
/// Carried as part of the circle model; no mapping reads it.
pub const RADIUS_SCALE: f64 = 0.564_189_583_547_756_3;

/// Relative tolerance stamped into every partition node.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.1;
