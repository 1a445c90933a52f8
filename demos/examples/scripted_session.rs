// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted AR measuring session: hit-test samples and taps, no device needed.
//!
//! This example shows how a host loop drives the crates:
//! - validate the session requirements against what the platform offers,
//! - feed one hit-test transform per frame (or none, when no surface is found),
//! - forward taps as select events,
//! - redraw from `MeasurementSession::frame` every frame.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p reticle_demos --example scripted_session`

use glam::{DMat4, DQuat, DVec3};
use reticle_measure::{Features, MeasureConfig, MeasurementSession, SessionConfig};
use reticle_pose::PoseTracker;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// One frame of scripted platform input.
#[derive(Clone, Copy, Debug)]
enum Input {
    /// Hit-test found a surface at this point (a floor, facing up).
    Surface(DVec3),
    /// No surface under the reticle this frame.
    NoSurface,
    /// The user tapped.
    Tap,
}

fn floor_hit(point: DVec3) -> DMat4 {
    DMat4::from_rotation_translation(DQuat::IDENTITY, point)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let session_config = SessionConfig::default();
    session_config.validate(Features::HIT_TEST)?;
    info!(camera = ?session_config.camera, "AR session requirements met");

    let mut session =
        MeasurementSession::with_config(PoseTracker::new(), MeasureConfig::default())?;

    let script = [
        Input::Tap, // nothing detected yet: dropped
        Input::Surface(DVec3::new(0.0, -1.4, -0.5)),
        Input::Tap,
        Input::Surface(DVec3::new(0.3, -1.4, -0.9)),
        Input::Surface(DVec3::new(0.6, -1.4, -1.3)),
        Input::NoSurface,
        Input::Tap, // closes at the last known pose
        Input::Surface(DVec3::new(-0.2, -1.4, -0.6)),
        Input::Tap,
        Input::Surface(DVec3::new(-0.2, -1.4, -1.6)),
    ];

    for (frame_index, input) in script.into_iter().enumerate() {
        match input {
            Input::Surface(point) => {
                session.on_hit_test_sample(floor_hit(point));
            }
            Input::NoSurface => {}
            Input::Tap => {
                let outcome = session.on_select();
                println!("frame {frame_index}: tap -> {outcome:?}");
            }
        }

        let frame = session.frame();
        if let Some(reticle) = frame.reticle {
            let p = reticle.position;
            println!(
                "frame {frame_index}: reticle at ({:.2}, {:.2}, {:.2})",
                p.x, p.y, p.z
            );
        }
        if let Some(live) = frame.live {
            println!(
                "frame {frame_index}:   live line, {} cm so far",
                live.distance_cm()
            );
        }
        for view in &frame.completed {
            let at = view.label.position.position;
            println!(
                "frame {frame_index}:   \"{}\" at ({:.2}, {:.2}, {:.2})",
                view.label.text, at.x, at.y, at.z
            );
        }
    }

    info!(
        measurements = session.len(),
        state = ?session.state(),
        "script finished"
    );
    Ok(())
}
