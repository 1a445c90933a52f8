// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while validating session and measurement configuration.

use alloc::string::String;

use thiserror::Error;

use crate::config::Features;

/// Configuration rejected before a session starts.
///
/// The measurement state machine itself has no error path; see
/// [`SelectOutcome::Dropped`](crate::SelectOutcome::Dropped) for the one
/// abnormal runtime condition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The platform does not offer every required AR capability.
    #[error("missing required AR features: {missing:?}")]
    MissingFeatures {
        /// Required features the platform lacks.
        missing: Features,
    },

    /// Camera projection parameters are out of range.
    #[error("invalid camera configuration: {0}")]
    InvalidCamera(String),

    /// Label or reticle dimensions are out of range.
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

impl ConfigError {
    /// Creates an invalid camera error.
    #[must_use]
    pub fn invalid_camera(reason: impl Into<String>) -> Self {
        Self::InvalidCamera(reason.into())
    }

    /// Creates an invalid style error.
    #[must_use]
    pub fn invalid_style(reason: impl Into<String>) -> Self {
        Self::InvalidStyle(reason.into())
    }
}

/// Result type for configuration validation.
pub type Result<T> = core::result::Result<T, ConfigError>;
