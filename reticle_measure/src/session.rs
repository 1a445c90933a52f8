// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The select-driven measurement state machine.

use alloc::vec::Vec;

use glam::DMat4;
use reticle_pose::{Pose, PoseSource, PoseTracker};
use tracing::debug;

use crate::config::{MeasureConfig, MeasureMode};
use crate::error::Result;
use crate::{Measurement, Segment};

/// Whether a measurement is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No measurement is open; the next select starts one.
    Idle,
    /// One measurement is open; the next select completes it.
    Measuring,
}

/// What a select event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A new measurement was opened at this position in the list.
    Started {
        /// Index of the new measurement.
        index: usize,
    },
    /// The open measurement was completed.
    Completed {
        /// Index of the completed measurement.
        index: usize,
        /// Its length in centimeters.
        distance_cm: u32,
    },
    /// No surface was under the reticle; nothing changed.
    Dropped,
}

/// The open measurement.
///
/// `last_seen` is only a fallback for the live preview while the pose source
/// reports nothing; the preview otherwise ends at the current pose.
#[derive(Clone, Copy, Debug)]
struct Draft {
    start: Pose,
    last_seen: Pose,
}

/// Owns the measurement list and turns select events into measurements.
///
/// Completed measurements live in an append-only list; at most one open
/// measurement sits after them. Poses come from an injected [`PoseSource`],
/// read at the moment a select arrives.
///
/// The live preview is derived from the source on every query, so it always
/// ends where the reticle is. [`MeasurementSession::on_pose_update`] only
/// remembers the latest pose for when the source later reports none.
#[derive(Clone, Debug)]
pub struct MeasurementSession<P = PoseTracker> {
    poses: P,
    config: MeasureConfig,
    completed: Vec<Segment>,
    open: Option<Draft>,
}

impl<P: PoseSource> MeasurementSession<P> {
    /// Create an idle session with default configuration.
    pub fn new(poses: P) -> Self {
        Self {
            poses,
            config: MeasureConfig::default(),
            completed: Vec::new(),
            open: None,
        }
    }

    /// Create an idle session after validating `config`.
    pub fn with_config(poses: P, config: MeasureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(poses)
        })
    }

    /// Handle a select event (tap, trigger press).
    ///
    /// With a current pose, this opens a measurement when idle or completes
    /// the open one when measuring. Without a current pose the event is
    /// dropped and nothing changes.
    pub fn on_select(&mut self) -> SelectOutcome {
        let Some(pose) = self.poses.current_pose() else {
            debug!(state = ?self.state(), "select dropped: no surface under reticle");
            return SelectOutcome::Dropped;
        };

        match self.open.take() {
            Some(draft) => {
                let segment = Segment::new(draft.start, pose);
                let index = self.completed.len();
                let distance_cm = segment.distance_cm();
                self.completed.push(segment);
                debug!(index, distance_cm, "measurement completed");
                SelectOutcome::Completed { index, distance_cm }
            }
            None => {
                if self.config.mode == MeasureMode::Single && !self.completed.is_empty() {
                    debug!(
                        discarded = self.completed.len(),
                        "single mode: discarding previous measurements"
                    );
                    self.completed.clear();
                }
                let index = self.completed.len();
                self.open = Some(Draft {
                    start: pose,
                    last_seen: pose,
                });
                debug!(
                    index,
                    x = pose.position.x,
                    y = pose.position.y,
                    z = pose.position.z,
                    "measurement started"
                );
                SelectOutcome::Started { index }
            }
        }
    }

    /// Note a pose update and return the live preview.
    ///
    /// While measuring, the current pose is remembered so the preview can keep
    /// its last endpoint if tracking is later cleared. Does nothing when idle.
    /// Never touches the measurement list.
    pub fn on_pose_update(&mut self) -> Option<Segment> {
        let current = self.poses.current_pose();
        let draft = self.open.as_mut()?;
        if let Some(pose) = current {
            draft.last_seen = pose;
        }
        self.live_preview()
    }

    /// [`SessionState::Measuring`] while a measurement is open.
    pub fn state(&self) -> SessionState {
        if self.open.is_some() {
            SessionState::Measuring
        } else {
            SessionState::Idle
        }
    }

    /// The current pose from the injected source.
    pub fn current_pose(&self) -> Option<Pose> {
        self.poses.current_pose()
    }

    /// The in-progress measurement, if any. It is always the last in
    /// [`MeasurementSession::measurements`].
    pub fn open_measurement(&self) -> Option<Measurement> {
        self.open.map(|draft| Measurement::open(draft.start))
    }

    /// Segment from the open measurement's start to the current pose.
    ///
    /// When the source has no pose, the segment ends at the last pose passed
    /// to [`MeasurementSession::on_pose_update`] (or the start).
    pub fn live_preview(&self) -> Option<Segment> {
        let draft = self.open?;
        let end = self.poses.current_pose().unwrap_or(draft.last_seen);
        Some(Segment::new(draft.start, end))
    }

    /// Completed measurements in creation order.
    pub fn completed_measurements(&self) -> &[Segment] {
        &self.completed
    }

    /// Every measurement in creation order, the open one (if any) last.
    pub fn measurements(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.completed
            .iter()
            .copied()
            .map(Measurement::from)
            .chain(self.open_measurement())
    }

    /// Number of measurements, including an open one.
    pub fn len(&self) -> usize {
        self.completed.len() + usize::from(self.open.is_some())
    }

    /// Whether no measurement has been started.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The session's configuration.
    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// The injected pose source.
    pub fn pose_source(&self) -> &P {
        &self.poses
    }

    /// Mutable access to the injected pose source.
    ///
    /// The live preview follows whatever pose the source reports. Call
    /// [`MeasurementSession::on_pose_update`] after feeding it if the preview
    /// should hold that pose through a later [`PoseTracker::clear`].
    pub fn pose_source_mut(&mut self) -> &mut P {
        &mut self.poses
    }
}

impl MeasurementSession<PoseTracker> {
    /// Record a hit-test sample and move the live preview to it.
    pub fn on_hit_test_sample(&mut self, transform: DMat4) -> Pose {
        let pose = self.poses.on_hit_test_sample(transform);
        self.on_pose_update();
        pose
    }
}

impl Default for MeasurementSession<PoseTracker> {
    fn default() -> Self {
        Self::new(PoseTracker::new())
    }
}
