use super::*;
use crate::{
    eval::evaluator::progress_at, foundation::error::PathError, model::dsl::PathBuilder,
    resolve::tests::crowded_path,
};

fn assert_round_trip(solution: &Solution, slack: f64) {
    let path = &solution.path;
    for idx in 0..path.anchor_count() {
        let reached = progress_at(path, &solution.result, path.anchor_time(idx)).unwrap();
        let err = (reached - path.anchor_progress(idx)).abs();
        assert!(
            err <= solution.result.total_error_abs + 1e-9 && err <= slack,
            "anchor {idx}: off by {err}"
        );
    }
}

#[test]
fn symmetric_checkpoint_needs_no_correction() {
    let path = PathBuilder::new(0.0, 0.0)
        .checkpoint(5.0, 0.5, 2.0)
        .end(10.0, 1.0)
        .build()
        .unwrap();
    let seeds = seed_velocities(&path).unwrap();
    assert!(seeds.iter().all(|v| (v - 0.1).abs() < 1e-12));

    let solution = solve(&path, EaseInOut::Sine).unwrap();
    assert!(solution.converged());
    assert!(solution.iterations <= 2);
    assert!(solution
        .result
        .velocities
        .iter()
        .all(|v| (v - 0.1).abs() < 1e-9));
    assert_round_trip(&solution, 1e-9);
}

#[test]
fn single_segment_takes_no_corrections() {
    let path = PathBuilder::new(0.0, 0.0)
        .start_ease(0.3, 2.0)
        .end(10.0, 1.0)
        .end_ease(0.0, 3.0)
        .build()
        .unwrap();
    for ease in EaseInOut::ALL {
        let solution = solve(&path, ease).unwrap();
        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.result.velocities.len(), 1);
        assert!(solution.result.total_error_abs < 1e-12);
        assert_round_trip(&solution, 1e-12);
    }
}

#[test]
fn small_paths_pass_through_every_checkpoint() {
    let path = PathBuilder::new(0.0, 0.0)
        .start_ease(0.0, 1.5)
        .checkpoint(3.0, 0.2, 2.0)
        .checkpoint(7.0, 0.9, 3.0)
        .end(10.0, 1.0)
        .end_ease(0.0, 1.5)
        .build()
        .unwrap();
    for ease in EaseInOut::ALL {
        let solution = solve(&path, ease).unwrap();
        assert!(solution.converged(), "{ease:?} did not converge");
        assert_round_trip(&solution, 1e-4);
    }
}

#[test]
fn crowded_path_converges_under_every_strategy() {
    let path = crowded_path();
    let bound = 2.0 * path.segment_count() as f64 * SolveOpts::default().tolerance;
    for strategy in ResolveStrategy::ALL {
        let opts = SolveOpts {
            resolve: Some(strategy),
            ..SolveOpts::default()
        };
        let solution = solve_with_opts(&path, EaseInOut::Sine, &opts).unwrap();
        assert!(solution.converged(), "{strategy:?}");
        assert!(solution.result.total_error_abs <= bound);
        assert_round_trip(&solution, bound);
    }
}

#[test]
fn solving_twice_is_identical() {
    let path = crowded_path();
    let a = solve(&path, EaseInOut::Cubic).unwrap();
    let b = solve(&path, EaseInOut::Cubic).unwrap();
    assert_eq!(a.result.fingerprint(), b.result.fingerprint());
    assert_eq!(a, b);
}

#[test]
fn history_records_every_measurement() {
    let path = crowded_path();
    let opts = SolveOpts {
        keep_history: true,
        ..SolveOpts::default()
    };
    let solution = solve_with_opts(&path, EaseInOut::Linear, &opts).unwrap();
    assert_eq!(solution.history.len(), solution.iterations + 1);
    assert_eq!(solution.history.last(), Some(&solution.result));
    assert!(solve(&path, EaseInOut::Linear).unwrap().history.is_empty());
}

#[test]
fn oversized_checkpoint_ease_is_truncated_before_solving() {
    let path = PathBuilder::new(0.0, 0.0)
        .checkpoint(5.0, 0.5, 30.0)
        .end(10.0, 1.0)
        .build()
        .unwrap();
    let solution = solve(&path, EaseInOut::Sine).unwrap();
    let width = solution.path.checkpoints[0].adjusted_ease_duration;
    assert!((width - 2.0 * crate::foundation::math::GUARD * 5.0).abs() < 1e-9);
    assert!(solution.converged());
}

#[test]
fn unresolved_overlap_is_reported() {
    let path = PathBuilder::new(0.0, 0.0)
        .checkpoint(5.0, 0.5, 30.0)
        .end(10.0, 1.0)
        .build()
        .unwrap();
    let opts = SolveOpts {
        resolve: None,
        ..SolveOpts::default()
    };
    let err = solve_with_opts(&path, EaseInOut::Linear, &opts).unwrap_err();
    assert!(matches!(err, PathError::EaseOverlap(_)));
}

#[test]
fn non_monotonic_paths_are_rejected() {
    let mut path = crowded_path();
    path.checkpoints[2].time = 20.0;
    assert!(matches!(
        solve(&path, EaseInOut::Linear).unwrap_err(),
        PathError::InvalidPath(_)
    ));
}

#[test]
fn iteration_cap_surfaces_through_ensure_converged() {
    let path = crowded_path();
    let opts = SolveOpts {
        max_iterations: 0,
        ..SolveOpts::default()
    };
    let solution = solve_with_opts(&path, EaseInOut::Sine, &opts).unwrap();
    assert_eq!(solution.iterations, 0);
    assert!(!solution.converged());
    assert!(matches!(
        solution.ensure_converged().unwrap_err(),
        PathError::DidNotConverge { .. }
    ));
}

#[test]
fn default_opts() {
    let opts = SolveOpts::default();
    assert_eq!(opts.resolve, Some(ResolveStrategy::ConvergentLerp));
    assert_eq!(opts.tolerance, 1e-5);
    assert_eq!(opts.max_iterations, 10_000);
    assert!(!opts.keep_history);
}
