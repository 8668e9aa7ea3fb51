//! Point queries against a solved profile.
//!
//! Each call rebuilds the piece table; callers issuing many queries for the same result should
//! hold a [`Profile`] instead.

use crate::{
    eval::profile::Profile, foundation::error::PathResult, model::path::Path,
    solve::result::SolveResult,
};

/// Velocity of `result`'s profile at `time`.
///
/// Before `start_time` this is the start velocity, after `end_time` the end velocity.
pub fn velocity_at(path: &Path, result: &SolveResult, time: f64) -> PathResult<f64> {
    Ok(Profile::new(path, result)?.velocity_at(time))
}

/// Acceleration of `result`'s profile at `time` (zero outside `[start_time, end_time]`).
pub fn accel_at(path: &Path, result: &SolveResult, time: f64) -> PathResult<f64> {
    Ok(Profile::new(path, result)?.accel_at(time))
}

/// Accumulated progress of `result`'s profile at `time`.
///
/// Clamped to the start progress before `start_time` and to the progress reached at `end_time`
/// afterwards.
pub fn progress_at(path: &Path, result: &SolveResult, time: f64) -> PathResult<f64> {
    Ok(Profile::new(path, result)?.progress_at(time))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
