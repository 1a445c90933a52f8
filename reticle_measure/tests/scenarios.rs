// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end measurement sessions driven the way a host render loop drives them.

use std::cell::Cell;

use glam::{DMat4, DVec3};
use reticle_measure::{
    Measurement, MeasurementSession, SelectOutcome, Segment, SessionState, geometry,
};
use reticle_pose::{Pose, PoseSource, PoseTracker, Reticle};

fn at(x: f64, y: f64, z: f64) -> DMat4 {
    DMat4::from_translation(DVec3::new(x, y, z))
}

/// The list invariants that must hold after every event.
fn assert_list_invariants<P: PoseSource>(session: &MeasurementSession<P>) {
    let list: Vec<Measurement> = session.measurements().collect();
    let open_count = list.iter().filter(|m| m.is_open()).count();
    assert!(open_count <= 1, "more than one open measurement: {list:?}");
    if open_count == 1 {
        assert!(
            list.last().is_some_and(Measurement::is_open),
            "open measurement is not last: {list:?}"
        );
        assert_eq!(session.state(), SessionState::Measuring);
    } else {
        assert_eq!(session.state(), SessionState::Idle);
    }
    assert_eq!(
        session.completed_measurements().len() + usize::from(session.open_measurement().is_some()),
        list.len(),
        "completed + open must cover the whole list"
    );
    assert_eq!(session.len(), list.len());
}

#[test]
fn full_measurement_cycle() {
    let mut session = MeasurementSession::new(PoseTracker::new());

    // No pose yet: dropped.
    assert_eq!(session.on_select(), SelectOutcome::Dropped);
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.is_empty());
    assert_list_invariants(&session);

    session.on_hit_test_sample(at(0.0, 0.0, 0.0));
    assert_eq!(session.on_select(), SelectOutcome::Started { index: 0 });
    assert_eq!(
        session.measurements().collect::<Vec<_>>(),
        vec![Measurement::open(Pose::ORIGIN)]
    );
    assert_list_invariants(&session);

    // Several frames at the far end: preview moves, list does not.
    for _ in 0..5 {
        session.on_hit_test_sample(at(0.0, 0.0, 2.0));
        assert_eq!(
            session.live_preview(),
            Some(Segment::new(Pose::ORIGIN, Pose::new(0.0, 0.0, 2.0)))
        );
        assert_eq!(
            session.measurements().collect::<Vec<_>>(),
            vec![Measurement::open(Pose::ORIGIN)]
        );
    }

    assert_eq!(
        session.on_select(),
        SelectOutcome::Completed {
            index: 0,
            distance_cm: 200
        }
    );
    assert_eq!(session.state(), SessionState::Idle);
    let completed = session.completed_measurements();
    assert_eq!(
        completed,
        &[Segment::new(Pose::ORIGIN, Pose::new(0.0, 0.0, 2.0))]
    );
    assert_eq!(geometry::distance(&completed[0]), 200);
    assert_eq!(session.live_preview(), None);
    assert_list_invariants(&session);
}

#[test]
fn second_measurement_after_first_completes() {
    let mut session = MeasurementSession::new(PoseTracker::new());
    session.on_hit_test_sample(at(0.0, 0.0, 0.0));
    session.on_select();
    session.on_hit_test_sample(at(0.0, 0.0, 2.0));
    session.on_select();
    let first = session.completed_measurements()[0];

    session.on_hit_test_sample(at(1.0, 0.0, 0.0));
    assert_eq!(session.on_select(), SelectOutcome::Started { index: 1 });

    assert_eq!(session.len(), 2);
    assert_eq!(session.completed_measurements(), &[first]);
    assert_eq!(
        session.open_measurement(),
        Some(Measurement::open(Pose::new(1.0, 0.0, 0.0)))
    );
    assert_eq!(
        session.measurements().next(),
        Some(Measurement::from(first)),
        "first measurement untouched"
    );
    assert_list_invariants(&session);
}

#[test]
fn lost_tracking_mid_measurement() {
    let mut session = MeasurementSession::new(PoseTracker::new());
    session.on_hit_test_sample(at(0.0, 0.0, 0.0));
    session.on_select();
    session.on_hit_test_sample(at(0.0, 0.0, 0.75));

    // Samples stop arriving; the session just waits.
    for _ in 0..100 {
        assert_eq!(session.state(), SessionState::Measuring);
        assert_eq!(
            session.live_preview(),
            Some(Segment::new(Pose::ORIGIN, Pose::new(0.0, 0.0, 0.75)))
        );
    }

    // The current pose is the last known one, so the select closes normally.
    assert_eq!(session.current_pose(), Some(Pose::new(0.0, 0.0, 0.75)));
    assert_eq!(
        session.on_select(),
        SelectOutcome::Completed {
            index: 0,
            distance_cm: 75
        }
    );
    assert_list_invariants(&session);
}

#[test]
fn dropped_selects_are_idempotent() {
    let mut session = MeasurementSession::new(PoseTracker::new());
    for _ in 0..10 {
        assert_eq!(session.on_select(), SelectOutcome::Dropped);
    }
    assert!(session.is_empty());
    assert_eq!(session.state(), SessionState::Idle);

    // Same while measuring, once the platform clears tracking.
    session.on_hit_test_sample(at(0.2, 0.0, 0.0));
    session.on_select();
    session.pose_source_mut().clear();
    let before: Vec<_> = session.measurements().collect();
    for _ in 0..10 {
        assert_eq!(session.on_select(), SelectOutcome::Dropped);
        assert_eq!(session.state(), SessionState::Measuring);
        assert_eq!(session.measurements().collect::<Vec<_>>(), before);
    }
}

#[test]
fn reference_distances_and_midpoint() {
    let mut session = MeasurementSession::new(PoseTracker::new());
    for (a, b) in [
        ([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 0.0], [0.0, 0.0, 0.5]),
        ([1.0, 2.0, 3.0], [3.0, 4.0, 5.0]),
    ] {
        session.on_hit_test_sample(at(a[0], a[1], a[2]));
        session.on_select();
        session.on_hit_test_sample(at(b[0], b[1], b[2]));
        session.on_select();
    }

    let completed = session.completed_measurements();
    assert_eq!(completed[0].distance_cm(), 100);
    assert_eq!(completed[1].distance_cm(), 50);
    assert_eq!(completed[2].midpoint(), Pose::new(2.0, 3.0, 4.0));
    assert_eq!(geometry::midpoint(&completed[2]), Pose::new(2.0, 3.0, 4.0));
}

#[test]
fn invariants_hold_over_a_long_mixed_script() {
    let mut session = MeasurementSession::new(PoseTracker::new());
    // Deterministic mix of samples, selects, and tracking loss.
    for step in 0_u32..300 {
        match step % 7 {
            0 | 3 => {
                session.on_select();
            }
            5 if step % 2 == 0 => {
                session.pose_source_mut().clear();
            }
            _ => {
                let t = f64::from(step) * 0.01;
                session.on_hit_test_sample(at(t, 0.0, -t));
            }
        }
        assert_list_invariants(&session);
    }
    assert!(!session.completed_measurements().is_empty());
}

/// A pose source a host controls directly, e.g. from a platform callback.
#[derive(Debug, Default)]
struct ManualSource {
    pose: Cell<Option<Pose>>,
}

impl PoseSource for ManualSource {
    fn reticle(&self) -> Option<Reticle> {
        self.pose.get().map(|pose| Reticle {
            position: pose.position,
            ..Reticle::default()
        })
    }
}

#[test]
fn custom_pose_source_is_read_at_select_time() {
    let source = ManualSource::default();
    let mut session = MeasurementSession::new(&source);

    assert_eq!(session.on_select(), SelectOutcome::Dropped);

    source.pose.set(Some(Pose::new(0.0, 1.0, 0.0)));
    assert_eq!(session.on_select(), SelectOutcome::Started { index: 0 });

    // The preview follows the source with no explicit update.
    source.pose.set(Some(Pose::new(0.0, 1.0, 0.3)));
    assert_eq!(
        session.live_preview(),
        Some(Segment::new(Pose::new(0.0, 1.0, 0.0), Pose::new(0.0, 1.0, 0.3)))
    );
    assert_eq!(session.frame().live, session.live_preview());

    // An update remembers the pose for when the source goes quiet.
    session.on_pose_update();
    source.pose.set(None);
    assert_eq!(
        session.live_preview(),
        Some(Segment::new(Pose::new(0.0, 1.0, 0.0), Pose::new(0.0, 1.0, 0.3)))
    );
    assert_eq!(session.on_select(), SelectOutcome::Dropped);

    // But the select always uses the pose at the moment it arrives.
    source.pose.set(Some(Pose::new(0.0, 1.0, 0.4)));
    assert_eq!(
        session.on_select(),
        SelectOutcome::Completed {
            index: 0,
            distance_cm: 40
        }
    );
    assert_list_invariants(&session);
}
