// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Measure: two-point distance measurement on AR hit-test poses.
//!
//! ## Overview
//!
//! The user aims a reticle at a detected surface and taps (a "select" event)
//! to mark points. The first tap opens a measurement at the current pose, the
//! second completes it. [`MeasurementSession`] owns that state machine and the
//! ordered list of measurements it produces; renderers read it back every frame.
//!
//! ```text
//!           select (pose present)
//!   Idle  ────────────────────────▶  Measuring
//!    ▲                                   │
//!    └───────────────────────────────────┘
//!           select (pose present)
//!
//!   select without a pose: dropped, state unchanged
//! ```
//!
//! Poses come from an injected [`PoseSource`](reticle_pose::PoseSource),
//! usually a [`PoseTracker`](reticle_pose::PoseTracker) fed with hit-test
//! samples. A select that arrives while no surface is under the reticle is
//! not an error: it is dropped and reported as [`SelectOutcome::Dropped`].
//!
//! ## Measurements
//!
//! - [`Measurement`]: an entry in the session's list, `end` absent while open.
//! - [`Segment`]: a completed measurement (or the live preview). Only segments
//!   have geometry, so distance and midpoint are never asked of an open
//!   measurement.
//! - [`geometry::distance`] reports centimeters rounded to the nearest integer;
//!   [`geometry::midpoint`] is the componentwise average.
//!
//! The list is append-only: at most one measurement is open and it is always
//! the last. The only exception is [`MeasureMode::Single`], which discards
//! earlier measurements when a new one starts.
//!
//! ## Rendering
//!
//! [`MeasurementSession::frame`] gathers the reticle, the live preview line,
//! and a line plus a `"<n> cm"` [`Label`] for every completed measurement.
//! Nothing is cached between frames.
//!
//! ## Example
//!
//! ```
//! use glam::{DMat4, DVec3};
//! use reticle_measure::{MeasurementSession, SelectOutcome, SessionState};
//! use reticle_pose::PoseTracker;
//!
//! let mut session = MeasurementSession::new(PoseTracker::new());
//!
//! // No surface detected yet: the tap is dropped.
//! assert_eq!(session.on_select(), SelectOutcome::Dropped);
//!
//! session.on_hit_test_sample(DMat4::from_translation(DVec3::ZERO));
//! assert_eq!(session.on_select(), SelectOutcome::Started { index: 0 });
//! assert_eq!(session.state(), SessionState::Measuring);
//!
//! session.on_hit_test_sample(DMat4::from_translation(DVec3::new(0.0, 0.0, 2.0)));
//! assert_eq!(
//!     session.on_select(),
//!     SelectOutcome::Completed { index: 0, distance_cm: 200 }
//! );
//!
//! let frame = session.frame();
//! assert_eq!(frame.completed[0].label.text, "200 cm");
//! ```
//!
//! ## Configuration
//!
//! [`SessionConfig`] lists what the hosting AR session must provide (hit-test
//! support, camera projection) and is validated once up front.
//! [`MeasureConfig`] selects the [`MeasureMode`] and label/reticle styles.
//!
//! ## Threading
//!
//! Everything runs on the host's render/input loop; all mutation goes through
//! `&mut self`. A host that delivers hit-test samples and selects from
//! different threads should put the whole session behind one lock so reading
//! the pose and updating the list stay atomic.
//!
//! ## Features
//!
//! - `std` (default): float math from the standard library.
//! - `libm`: float math from `libm`, for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod frame;
mod measurement;
mod session;

pub mod geometry;

pub use config::{
    CameraConfig, Features, LabelStyle, MeasureConfig, MeasureMode, ReticleStyle, SessionConfig,
};
pub use error::{ConfigError, Result};
pub use frame::{CompletedView, FrameView, Label};
pub use measurement::{Measurement, Segment};
pub use session::{MeasurementSession, SelectOutcome, SessionState};
