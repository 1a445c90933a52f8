// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Latest-pose tracking over hit-test samples.

use glam::DMat4;
use tracing::{trace, warn};

use crate::{Pose, Reticle};

/// Read access to "the pose under the reticle right now".
///
/// This is the seam between pose tracking and anything that consumes poses.
/// Implementors report the most recent reticle, or `None` when no surface
/// has been detected (or tracking was explicitly cleared).
pub trait PoseSource {
    /// The most recent reticle, if any.
    fn reticle(&self) -> Option<Reticle>;

    /// The most recent pose, if any.
    fn current_pose(&self) -> Option<Pose> {
        self.reticle().map(|r| r.pose())
    }
}

impl<T: PoseSource + ?Sized> PoseSource for &T {
    fn reticle(&self) -> Option<Reticle> {
        (**self).reticle()
    }

    fn current_pose(&self) -> Option<Pose> {
        (**self).current_pose()
    }
}

/// Keeps the latest hit-test sample as the current reticle.
///
/// This is a single slot: every sample overwrites the previous one, and the
/// slot is only emptied by [`PoseTracker::clear`].
#[derive(Clone, Debug, Default)]
pub struct PoseTracker {
    latest: Option<Reticle>,
}

impl PoseTracker {
    /// Create a tracker that has not seen any sample yet.
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Record a hit-test sample.
    ///
    /// The transform is decomposed into position, rotation, and scale and
    /// stored as the current reticle. This never fails; a transform that does
    /// not decompose cleanly is still stored (its translation is what matters
    /// for measuring) and a warning is logged.
    ///
    /// Returns the new current pose.
    pub fn on_hit_test_sample(&mut self, transform: DMat4) -> Pose {
        let reticle = Reticle::from_matrix(&transform);
        if !reticle.is_finite() {
            warn!(
                ?transform,
                "hit-test transform does not decompose to finite values"
            );
        }
        let pose = reticle.pose();
        trace!(
            x = pose.position.x,
            y = pose.position.y,
            z = pose.position.z,
            "hit-test sample"
        );
        self.latest = Some(reticle);
        pose
    }

    /// The most recent pose, or `None` if no sample has arrived.
    pub fn current_pose(&self) -> Option<Pose> {
        self.latest.map(|r| r.pose())
    }

    /// The most recent decomposed reticle, for placing the reticle mesh.
    pub fn reticle(&self) -> Option<Reticle> {
        self.latest
    }

    /// Forget the last known pose, e.g. when the platform reports tracking loss.
    ///
    /// Returns `true` if there was a pose to forget.
    pub fn clear(&mut self) -> bool {
        let had_pose = self.latest.take().is_some();
        if had_pose {
            trace!("pose cleared");
        }
        had_pose
    }

    /// Whether a pose is currently available.
    pub fn has_pose(&self) -> bool {
        self.latest.is_some()
    }
}

impl PoseSource for PoseTracker {
    fn reticle(&self) -> Option<Reticle> {
        self.latest
    }
}
