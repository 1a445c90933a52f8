// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Pose: turns AR hit-test samples into a current reticle pose.
//!
//! ## Overview
//!
//! The platform runs hit-testing (a ray from the device into the scene) and hands
//! back a 4×4 transform for the nearest detected surface, once per frame, whenever
//! there is one. [`PoseTracker`] decomposes that transform into a [`Reticle`]
//! (position, rotation, scale) and keeps only the latest one.
//! The translation of the latest reticle is the current [`Pose`].
//!
//! No surface under the reticle is a normal, recurring condition rather than an
//! error: the tracker simply keeps reporting the last known pose, or nothing if
//! no sample has arrived yet. A platform that wants "no surface this frame" to
//! mean "no pose" can call [`PoseTracker::clear`].
//!
//! ## Pose sources
//!
//! Consumers such as a measurement session do not read the tracker directly.
//! They hold any [`PoseSource`], so tests and alternative platforms can inject
//! their own.
//!
//! ```
//! use glam::{DMat4, DVec3};
//! use reticle_pose::{Pose, PoseSource, PoseTracker};
//!
//! let mut tracker = PoseTracker::new();
//! assert_eq!(tracker.current_pose(), None);
//!
//! tracker.on_hit_test_sample(DMat4::from_translation(DVec3::new(0.5, 0.0, -1.0)));
//! assert_eq!(tracker.current_pose(), Some(Pose::new(0.5, 0.0, -1.0)));
//!
//! // Anything that is a `PoseSource` can be queried the same way.
//! fn latest(source: &impl PoseSource) -> Option<Pose> {
//!     source.current_pose()
//! }
//! assert_eq!(latest(&tracker), Some(Pose::new(0.5, 0.0, -1.0)));
//! ```
//!
//! Units are whatever the platform uses for tracker space; WebXR and ARCore both
//! use meters.
//!
//! This crate is `no_std`. Enable either the default `std` feature or `libm`
//! for glam's float math.

#![no_std]

mod pose;
mod tracker;

pub use pose::{Pose, Reticle};
pub use tracker::{PoseSource, PoseTracker};
