// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement records.

use reticle_pose::Pose;

use crate::geometry;

/// A measurement as it appears in the session's list: a start point and,
/// once completed, an end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Point marked by the select that opened the measurement.
    pub start: Pose,
    /// Point marked by the select that closed it; `None` while in progress.
    pub end: Option<Pose>,
}

impl Measurement {
    /// An in-progress measurement starting at `start`.
    pub const fn open(start: Pose) -> Self {
        Self { start, end: None }
    }

    /// Whether the measurement is still waiting for its end point.
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// The completed segment, or `None` while in progress.
    pub fn segment(&self) -> Option<Segment> {
        self.end.map(|end| Segment::new(self.start, end))
    }
}

impl From<Segment> for Measurement {
    fn from(segment: Segment) -> Self {
        Self {
            start: segment.start,
            end: Some(segment.end),
        }
    }
}

/// A completed measurement, or a live preview segment.
///
/// Both endpoints are always present, so the derived geometry is total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// First marked point.
    pub start: Pose,
    /// Second marked point.
    pub end: Pose,
}

impl Segment {
    /// Create a segment between two poses.
    pub const fn new(start: Pose, end: Pose) -> Self {
        Self { start, end }
    }

    /// Length in centimeters, rounded to the nearest integer.
    ///
    /// Recomputed on every call.
    pub fn distance_cm(&self) -> u32 {
        geometry::distance(self)
    }

    /// Point halfway between the endpoints.
    pub fn midpoint(&self) -> Pose {
        geometry::midpoint(self)
    }

    /// Both endpoints, start first, for line renderers.
    pub fn points(&self) -> [Pose; 2] {
        [self.start, self.end]
    }
}
