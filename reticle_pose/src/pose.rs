// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pose and reticle value types.

use glam::{DMat4, DQuat, DVec3};

/// A point on a detected surface, in tracker space.
///
/// Poses are ephemeral: a new one is produced for every hit-test sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Position in tracker space.
    pub position: DVec3,
}

impl Pose {
    /// The tracker-space origin.
    pub const ORIGIN: Self = Self {
        position: DVec3::ZERO,
    };

    /// Create a pose from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
        }
    }

    /// Create a pose from a position vector.
    pub const fn from_position(position: DVec3) -> Self {
        Self { position }
    }

    /// Extract the translation of `transform` as a pose.
    pub fn from_matrix(transform: &DMat4) -> Self {
        Self {
            position: transform.w_axis.truncate(),
        }
    }

    /// Euclidean distance to `other`, in tracker units.
    pub fn distance(self, other: Self) -> f64 {
        self.position.distance(other.position)
    }

    /// Componentwise average of `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            position: (self.position + other.position) * 0.5,
        }
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(self) -> bool {
        self.position.is_finite()
    }
}

impl From<DVec3> for Pose {
    fn from(position: DVec3) -> Self {
        Self { position }
    }
}

impl From<[f64; 3]> for Pose {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Pose> for [f64; 3] {
    fn from(pose: Pose) -> Self {
        pose.position.to_array()
    }
}

/// A decomposed hit-test transform, used to place and orient the reticle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reticle {
    /// Translation of the hit; this is the reticle's [`Pose`].
    pub position: DVec3,
    /// Orientation of the detected surface.
    pub rotation: DQuat,
    /// Scale component. Usually one for platform hit-test results.
    pub scale: DVec3,
}

impl Reticle {
    /// Decompose an affine hit-test transform.
    ///
    /// The transform must not contain a projective part. A degenerate
    /// (zero-determinant) transform yields non-finite rotation components;
    /// see [`Reticle::is_finite`].
    pub fn from_matrix(transform: &DMat4) -> Self {
        let (scale, rotation, position) = transform.to_scale_rotation_translation();
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Reassemble the transform this reticle was decomposed from.
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// The point this reticle marks.
    pub fn pose(&self) -> Pose {
        Pose::from_position(self.position)
    }

    /// Whether position, rotation, and scale are all finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

impl Default for Reticle {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }
}
