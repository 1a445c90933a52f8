// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame render snapshot.
//!
//! A renderer re-queries the session every frame. [`MeasurementSession::frame`]
//! bundles those queries into one value: where to draw the reticle, the live
//! line (if measuring), and a line plus a centered label for every completed
//! measurement. Everything is derived on the spot.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use glam::DVec3;
use reticle_pose::{Pose, PoseSource, Reticle};

use crate::config::{LabelStyle, ReticleStyle};
use crate::{MeasurementSession, Segment};

/// A text label anchored in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Text to draw, e.g. `"42 cm"`.
    pub text: String,
    /// Center of the label.
    pub position: Pose,
    /// Text height in meters.
    pub font_size: f64,
}

impl Label {
    /// The distance label for `segment`: its length in centimeters, centered
    /// above the midpoint.
    pub fn for_segment(segment: &Segment, style: &LabelStyle) -> Self {
        let anchor = segment.midpoint().position + DVec3::new(0.0, style.offset, 0.0);
        Self {
            text: format!("{} cm", segment.distance_cm()),
            position: Pose::from_position(anchor),
            font_size: style.font_size,
        }
    }
}

/// A completed measurement ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletedView {
    /// The measured segment.
    pub segment: Segment,
    /// Its length in centimeters.
    pub distance_cm: u32,
    /// Its distance label.
    pub label: Label,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameView {
    /// Where to place the reticle, or `None` when no surface is detected.
    pub reticle: Option<Reticle>,
    /// Ring and dot dimensions for the reticle mesh.
    pub reticle_style: ReticleStyle,
    /// Line from the open measurement's start to the reticle.
    pub live: Option<Segment>,
    /// Completed measurements in creation order.
    pub completed: Vec<CompletedView>,
}

impl<P: PoseSource> MeasurementSession<P> {
    /// Snapshot everything the renderer draws this frame.
    pub fn frame(&self) -> FrameView {
        let style = &self.config().label;
        FrameView {
            reticle: self.pose_source().reticle(),
            reticle_style: self.config().reticle,
            live: self.live_preview(),
            completed: self
                .completed_measurements()
                .iter()
                .map(|segment| CompletedView {
                    segment: *segment,
                    distance_cm: segment.distance_cm(),
                    label: Label::for_segment(segment, style),
                })
                .collect(),
        }
    }
}
