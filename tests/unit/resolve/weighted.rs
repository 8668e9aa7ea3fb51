use super::*;
use crate::model::path::Checkpoint;
use crate::resolve::tests::{assert_fits, crowded_path};

#[test]
fn fitting_requests_are_kept() {
    let mut path = Path::new(0.0, 0.0, 10.0, 1.0);
    path.start_ease_duration = 1.0;
    path.end_ease_duration = 1.0;
    path.checkpoints = vec![Checkpoint::new(5.0, 0.5, 2.0)];
    let adjusted = WeightedSinglePass.resolve(&path).unwrap();
    assert_eq!(adjusted, path.requested());
}

#[test]
fn overbooked_segment_is_split_by_weight() {
    let mut path = Path::new(0.0, 0.0, 10.0, 1.0);
    path.start_ease_duration = 2.0;
    path.checkpoints = vec![Checkpoint::new(2.0, 0.2, 4.0)];
    let adjusted = WeightedSinglePass.resolve(&path).unwrap();
    // total weight 1 + 1 + 0.5 over a 2 s span.
    assert!((adjusted.start - 0.8).abs() < 1e-12);
    assert!((adjusted.checkpoints[0] - 0.4).abs() < 1e-12);
    assert_fits(&path, &adjusted);
}

#[test]
fn windows_only_shrink() {
    let path = crowded_path();
    let requested = path.requested();
    let adjusted = WeightedSinglePass.resolve(&path).unwrap();
    for idx in 0..adjusted.anchor_count() {
        assert!(adjusted.width(idx) <= requested.width(idx));
    }
    assert_fits(&path, &adjusted);
}
