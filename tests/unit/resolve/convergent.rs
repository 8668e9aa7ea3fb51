use super::*;
use crate::model::path::Checkpoint;
use crate::resolve::tests::{assert_fits, crowded_path};

fn single(time: f64, ease: f64) -> Path {
    let mut path = Path::new(0.0, 0.0, 10.0, 1.0);
    path.checkpoints = vec![Checkpoint::new(time, time / 10.0, ease)];
    path
}

#[test]
fn fitting_checkpoint_keeps_its_request_minus_tolerance() {
    let adjusted = ConvergentLerp.resolve(&single(5.0, 2.0)).unwrap();
    assert!((adjusted.checkpoints[0] - (2.0 - TOLERANCE)).abs() < 1e-12);
    assert_eq!(adjusted.start, 0.0);
    assert_eq!(adjusted.end, 0.0);
}

#[test]
fn oversized_checkpoint_is_truncated_to_its_segments() {
    let path = single(5.0, 30.0);
    let adjusted = ConvergentLerp.resolve(&path).unwrap();
    assert!((adjusted.checkpoints[0] - 2.0 * GUARD * 5.0).abs() < 1e-9);
    assert_fits(&path, &adjusted);
}

#[test]
fn boundaries_take_the_room_checkpoints_leave() {
    let mut path = single(4.0, 6.0);
    path.start_ease_duration = 5.0;
    path.end_ease_duration = 1.0;
    let adjusted = ConvergentLerp.resolve(&path).unwrap();
    let checkpoint = 6.0 - TOLERANCE;
    assert!((adjusted.checkpoints[0] - checkpoint).abs() < 1e-12);
    assert!((adjusted.start - (GUARD * 4.0 - checkpoint / 2.0)).abs() < 1e-9);
    // Plenty of room on the right: the end window keeps its request.
    assert_eq!(adjusted.end, 1.0);
    assert_fits(&path, &adjusted);
}

#[test]
fn zero_requests_stay_zero() {
    let mut path = single(5.0, 0.0);
    path.start_ease_duration = 0.0;
    let adjusted = ConvergentLerp.resolve(&path).unwrap();
    assert_eq!(adjusted.checkpoints[0], 0.0);
    assert_eq!(adjusted.start, 0.0);
}

#[test]
fn crowded_path_settles_without_overlap() {
    let path = crowded_path();
    let adjusted = ConvergentLerp.resolve(&path).unwrap();
    assert_fits(&path, &adjusted);
    let requested = path.requested();
    for idx in 0..adjusted.anchor_count() {
        assert!(adjusted.width(idx) <= requested.width(idx));
    }
    // The first checkpoint has long segments on both sides and keeps almost all of its request.
    assert!(adjusted.checkpoints[0] > 4.99);
    assert_eq!(adjusted.start, 5.0);
}

#[test]
fn runaway_requests_end_in_the_final_snap() {
    let mut path = Path::new(0.0, 0.0, 10.0, 1.0);
    path.checkpoints = vec![
        Checkpoint::new(3.0, 0.3, 1e14),
        Checkpoint::new(6.0, 0.6, 1e14),
    ];
    let requested = path.requested();
    let mut adjusted = requested.clone();

    let (rounds, converged) = relax(&path, &requested, &mut adjusted);
    assert_eq!(rounds, MAX_ROUNDS);
    assert!(!converged);
    // Snapping runs left to right: the first checkpoint still sees its neighbor's huge window,
    // the second then takes all the room the first one left.
    assert_eq!(adjusted.checkpoints[0], 0.0);
    assert_eq!(adjusted.checkpoints[1], 6.0);
    for k in 0..path.segment_count() {
        assert!(adjusted.segment_usage(k) <= path.segment_span(k));
    }

    let resolved = ConvergentLerp.resolve(&path).unwrap();
    assert_fits(&path, &resolved);
}
