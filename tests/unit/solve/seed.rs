use super::*;
use crate::foundation::error::PathError;
use crate::model::dsl::PathBuilder;

#[test]
fn secant_slopes_per_segment() {
    let path = PathBuilder::new(0.0, 0.0)
        .checkpoint(2.0, 0.5, 0.0)
        .checkpoint(6.0, 0.7, 0.0)
        .end(10.0, 1.5)
        .build()
        .unwrap();
    let seeds = seed_velocities(&path).unwrap();
    assert_eq!(seeds.len(), 3);
    assert!((seeds[0] - 0.25).abs() < 1e-15);
    assert!((seeds[1] - 0.05).abs() < 1e-15);
    assert!((seeds[2] - 0.2).abs() < 1e-15);
}

#[test]
fn single_segment_accounts_for_boundary_blends() {
    let path = PathBuilder::new(0.0, 0.0)
        .start_ease(0.2, 2.0)
        .end(10.0, 1.0)
        .end_ease(0.0, 2.0)
        .build()
        .unwrap();
    let seeds = seed_velocities(&path).unwrap();
    assert_eq!(seeds.len(), 1);
    assert!((seeds[0] - 0.1).abs() < 1e-15);
}

#[test]
fn overlapping_windows_are_rejected() {
    let mut path = PathBuilder::new(0.0, 0.0)
        .checkpoint(5.0, 0.5, 4.0)
        .end(10.0, 1.0)
        .build()
        .unwrap();
    path.adjusted_start_ease_duration = 3.0;
    let err = seed_velocities(&path).unwrap_err();
    assert!(matches!(err, PathError::EaseOverlap(_)));
    assert!(err.to_string().contains("start"));
}

#[test]
fn invalid_path_is_rejected_before_seeding() {
    let mut path = Path::new(0.0, 0.0, 10.0, 1.0);
    path.end_progress = -1.0;
    assert!(matches!(
        seed_velocities(&path).unwrap_err(),
        PathError::InvalidPath(_)
    ));
}
