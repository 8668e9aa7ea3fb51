use super::*;
use crate::{animation::ease::EaseInOut, model::dsl::PathBuilder};

fn fixture() -> (Path, SolveResult) {
    let path = PathBuilder::new(1.0, 0.0)
        .start_ease(0.0, 1.0)
        .end(5.0, 2.0)
        .build()
        .unwrap();
    let result = SolveResult {
        velocities: vec![2.0 / 3.5],
        total_error_abs: 0.0,
        ease: EaseInOut::Linear,
    };
    (path, result)
}

#[test]
fn samples_cover_the_path_inclusively() {
    let (path, result) = fixture();
    let lines = sample_polylines(&path, &result, 8).unwrap();
    for line in [&lines.velocity, &lines.progress, &lines.accel] {
        assert_eq!(line.len(), 9);
        assert_eq!(line[0].x, 1.0);
        assert_eq!(line[8].x, 5.0);
        assert!(line.windows(2).all(|w| w[0].x < w[1].x));
    }
    assert_eq!(lines.progress[0].y, 0.0);
    assert!((lines.progress[8].y - 2.0).abs() < 1e-12);
}

#[test]
fn zero_samples_is_rejected() {
    let (path, result) = fixture();
    assert!(sample_polylines(&path, &result, 0).is_err());
}
