use crate::{
    eval::profile::Profile,
    foundation::error::{PathError, PathResult},
    model::path::Path,
    solve::result::SolveResult,
};

/// Uniformly sampled `(time, value)` curves for drawing a solved profile.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polylines {
    /// Velocity against time.
    pub velocity: Vec<kurbo::Point>,
    /// Accumulated progress against time.
    pub progress: Vec<kurbo::Point>,
    /// Acceleration against time.
    pub accel: Vec<kurbo::Point>,
}

/// Sample velocity, progress and acceleration at `samples + 1` evenly spaced times covering
/// `[start_time, end_time]`.
pub fn sample_polylines(
    path: &Path,
    result: &SolveResult,
    samples: usize,
) -> PathResult<Polylines> {
    if samples == 0 {
        return Err(PathError::invalid_path("sample count must be at least 1"));
    }
    let profile = Profile::new(path, result)?;

    let span = path.end_time - path.start_time;
    let mut out = Polylines {
        velocity: Vec::with_capacity(samples + 1),
        progress: Vec::with_capacity(samples + 1),
        accel: Vec::with_capacity(samples + 1),
    };
    for i in 0..=samples {
        let t = if i == samples {
            path.end_time
        } else {
            path.start_time + span * (i as f64) / (samples as f64)
        };
        out.velocity.push(kurbo::Point::new(t, profile.velocity_at(t)));
        out.progress.push(kurbo::Point::new(t, profile.progress_at(t)));
        out.accel.push(kurbo::Point::new(t, profile.accel_at(t)));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sample.rs"]
mod tests;
