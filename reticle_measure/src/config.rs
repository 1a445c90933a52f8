// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session and measurement configuration.
//!
//! [`SessionConfig`] describes what the hosting AR session must provide before
//! any pose sample can arrive. The measurement core never reads these values at
//! runtime; hosts validate them once with [`SessionConfig::validate`] when the
//! session is requested.
//!
//! [`MeasureConfig`] tunes the measurement session and the render snapshot it
//! produces.

use alloc::format;

use crate::error::{ConfigError, Result};

bitflags::bitflags! {
    /// AR session capabilities the measurement core depends on.
    ///
    /// Platforms may report bits this crate does not name; they are kept and
    /// ignored.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        /// Hit-testing against detected real-world surfaces.
        const HIT_TEST = 0b0000_0001;
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::HIT_TEST
    }
}

/// Camera projection parameters for the AR view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Near clip plane distance in meters.
    pub near: f64,
    /// Far clip plane distance in meters.
    pub far: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 70.0,
            near: 0.01,
            far: 20.0,
        }
    }
}

impl CameraConfig {
    /// Check that the projection is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::invalid_camera(format!(
                "fov must be in (0, 180) degrees, got {}",
                self.fov
            )));
        }
        if !(self.near.is_finite() && self.near > 0.0) {
            return Err(ConfigError::invalid_camera(format!(
                "near plane must be positive, got {}",
                self.near
            )));
        }
        if !(self.far.is_finite() && self.far > self.near) {
            return Err(ConfigError::invalid_camera(format!(
                "far plane must be beyond near plane ({}), got {}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

/// Requirements for the hosting AR session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionConfig {
    /// Capabilities the session cannot run without.
    pub required_features: Features,
    /// Camera projection.
    pub camera: CameraConfig,
}

impl SessionConfig {
    /// Add required capabilities on top of the current set.
    #[must_use]
    pub fn with_required_features(mut self, features: Features) -> Self {
        self.required_features |= features;
        self
    }

    /// Replace the camera projection.
    #[must_use]
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    /// Check this configuration against what the platform offers.
    ///
    /// Fails with [`ConfigError::MissingFeatures`] listing every required
    /// capability not in `available`, or with [`ConfigError::InvalidCamera`].
    pub fn validate(&self, available: Features) -> Result<()> {
        let missing = self.required_features.difference(available);
        if !missing.is_empty() {
            return Err(ConfigError::MissingFeatures { missing });
        }
        self.camera.validate()
    }
}

/// What happens to completed measurements when a new one starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// Keep every measurement for the lifetime of the session.
    #[default]
    Accumulate,
    /// Only ever show one measurement: starting a new one discards the others.
    Single,
}

/// Placement of the distance label above a completed measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Text height in meters.
    pub font_size: f64,
    /// Height of the label above the segment midpoint, in meters.
    pub offset: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 0.033,
            offset: 0.033,
        }
    }
}

/// Reticle mesh dimensions: a flat ring with a dot in the middle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReticleStyle {
    /// Inner radius of the ring in meters.
    pub inner_radius: f64,
    /// Outer radius of the ring in meters.
    pub outer_radius: f64,
    /// Radius of the center dot in meters.
    pub dot_radius: f64,
    /// Tessellation of the ring and dot.
    pub segments: u32,
}

impl Default for ReticleStyle {
    fn default() -> Self {
        Self {
            inner_radius: 0.045,
            outer_radius: 0.05,
            dot_radius: 0.005,
            segments: 32,
        }
    }
}

/// Measurement session configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasureConfig {
    /// History policy for completed measurements.
    pub mode: MeasureMode,
    /// Distance label placement.
    pub label: LabelStyle,
    /// Reticle dimensions, handed to the renderer in
    /// [`FrameView::reticle_style`](crate::FrameView::reticle_style).
    pub reticle: ReticleStyle,
}

impl MeasureConfig {
    /// Configuration with the given history policy and default styles.
    pub fn with_mode(mode: MeasureMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Check that label and reticle dimensions are usable.
    pub fn validate(&self) -> Result<()> {
        let label = &self.label;
        if !(label.font_size.is_finite() && label.font_size > 0.0) {
            return Err(ConfigError::invalid_style(format!(
                "label font size must be positive, got {}",
                label.font_size
            )));
        }
        if !label.offset.is_finite() {
            return Err(ConfigError::invalid_style("label offset must be finite"));
        }

        let reticle = &self.reticle;
        if !(reticle.inner_radius.is_finite() && reticle.inner_radius > 0.0) {
            return Err(ConfigError::invalid_style(format!(
                "reticle inner radius must be positive, got {}",
                reticle.inner_radius
            )));
        }
        if !(reticle.outer_radius.is_finite() && reticle.outer_radius > reticle.inner_radius) {
            return Err(ConfigError::invalid_style(format!(
                "reticle outer radius must exceed inner radius ({}), got {}",
                reticle.inner_radius, reticle.outer_radius
            )));
        }
        if !(reticle.dot_radius.is_finite() && reticle.dot_radius > 0.0) {
            return Err(ConfigError::invalid_style(format!(
                "reticle dot radius must be positive, got {}",
                reticle.dot_radius
            )));
        }
        if reticle.segments < 3 {
            return Err(ConfigError::invalid_style(format!(
                "reticle needs at least 3 segments, got {}",
                reticle.segments
            )));
        }
        Ok(())
    }
}
