// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived geometry for completed measurements.
//!
//! These are small pure functions that renderers call every frame. Nothing is
//! cached, so there is nothing to invalidate.

#[cfg(not(feature = "std"))]
use libm::round;
use reticle_pose::Pose;

use crate::Segment;

/// Tracker units (meters) to displayed units (centimeters).
pub const CENTIMETERS_PER_UNIT: f64 = 100.0;

/// Length of `segment` in centimeters, rounded to the nearest integer.
///
/// Halves round up; lengths are never negative, so this agrees with
/// round-half-away-from-zero.
pub fn distance(segment: &Segment) -> u32 {
    to_centimeters(segment.start.distance(segment.end))
}

/// Componentwise average of the endpoints of `segment`.
pub fn midpoint(segment: &Segment) -> Pose {
    segment.start.midpoint(segment.end)
}

/// Convert a length in tracker units to whole centimeters.
///
/// Non-finite lengths and lengths beyond `u32::MAX` centimeters saturate
/// (`NaN` becomes zero).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Float-to-int `as` casts saturate, which is the wanted behavior for absurd lengths."
)]
pub fn to_centimeters(length: f64) -> u32 {
    round(length * CENTIMETERS_PER_UNIT) as u32
}

#[cfg(feature = "std")]
#[inline]
fn round(x: f64) -> f64 {
    x.round()
}
