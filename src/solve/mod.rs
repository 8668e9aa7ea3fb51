//! Velocity solving: resolve ease windows, seed segment velocities, refine until the profile
//! passes through every checkpoint.

pub(crate) mod refine;
pub(crate) mod result;
pub(crate) mod seed;

use crate::{
    animation::ease::EaseInOut,
    foundation::error::PathResult,
    model::path::Path,
    resolve::{ResolveStrategy, resolve_ease_durations},
};

pub use result::{Convergence, Solution, SolveResult};
pub use seed::seed_velocities;

/// Knobs for [`solve_with_opts`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolveOpts {
    /// Strategy used to resolve ease durations first. `None` solves with the adjusted durations
    /// already stored on the path.
    pub resolve: Option<ResolveStrategy>,
    /// Stop once the total error changes by no more than this between iterations.
    pub tolerance: f64,
    /// Maximum number of velocity corrections.
    pub max_iterations: usize,
    /// Record a snapshot of every iteration in [`Solution::history`].
    pub keep_history: bool,
}

impl Default for SolveOpts {
    fn default() -> Self {
        Self {
            resolve: Some(ResolveStrategy::ConvergentLerp),
            tolerance: 1e-5,
            max_iterations: 10_000,
            keep_history: false,
        }
    }
}

/// Solve `path` with default options.
pub fn solve(path: &Path, ease: EaseInOut) -> PathResult<Solution> {
    solve_with_opts(path, ease, &SolveOpts::default())
}

/// Solve a copy of `path`: resolve its ease durations (unless disabled), seed velocities and
/// refine them.
///
/// Non-convergence is reported through [`Solution::convergence`], not as an error; use
/// [`Solution::ensure_converged`] to make it one.
#[tracing::instrument(skip(path, opts), fields(checkpoints = path.checkpoints.len()))]
pub fn solve_with_opts(path: &Path, ease: EaseInOut, opts: &SolveOpts) -> PathResult<Solution> {
    let mut path = path.clone();
    path.validate()?;
    if let Some(strategy) = opts.resolve {
        resolve_ease_durations(&mut path, strategy)?;
    }

    let seeds = seed_velocities(&path)?;
    let refined = refine::refine(&path, ease, seeds, opts)?;
    tracing::debug!(
        iterations = refined.iterations,
        total_error = refined.result.total_error_abs,
        "solved path"
    );

    Ok(Solution {
        path,
        result: refined.result,
        history: refined.history,
        iterations: refined.iterations,
        convergence: refined.convergence,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/solve/mod.rs"]
mod tests;
