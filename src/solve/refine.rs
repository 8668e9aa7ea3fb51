use crate::{
    animation::ease::EaseInOut,
    eval::profile::Profile,
    foundation::error::PathResult,
    model::path::Path,
    solve::{
        SolveOpts,
        result::{Convergence, SolveResult},
    },
};

pub(crate) struct Refined {
    pub(crate) result: SolveResult,
    pub(crate) history: Vec<SolveResult>,
    pub(crate) iterations: usize,
    pub(crate) convergence: Convergence,
}

/// Signed progress shortfall of every segment: requested delta minus profile delta.
pub(crate) fn segment_residuals(
    path: &Path,
    velocities: &[f64],
    ease: EaseInOut,
) -> PathResult<Vec<f64>> {
    let profile = Profile::build(path, velocities, ease)?;
    let reached: Vec<f64> = (0..path.anchor_count())
        .map(|idx| profile.progress_at(path.anchor_time(idx)))
        .collect();
    Ok((0..path.segment_count())
        .map(|k| {
            let wanted = path.anchor_progress(k + 1) - path.anchor_progress(k);
            wanted - (reached[k + 1] - reached[k])
        })
        .collect())
}

/// Largest residual by magnitude; the earliest segment wins ties.
fn worst(residuals: &[f64]) -> Option<(usize, f64)> {
    let mut out: Option<(usize, f64)> = None;
    for (k, &r) in residuals.iter().enumerate() {
        match out {
            Some((_, w)) if r.abs() <= w.abs() => {}
            _ => out = Some((k, r)),
        }
    }
    out
}

/// Correct one segment per iteration until the total residual settles.
pub(crate) fn refine(
    path: &Path,
    ease: EaseInOut,
    mut velocities: Vec<f64>,
    opts: &SolveOpts,
) -> PathResult<Refined> {
    let mut history = Vec::new();
    let mut best: Option<SolveResult> = None;
    let mut previous_total = 0.0f64;
    let mut iterations = 0usize;

    loop {
        let residuals = segment_residuals(path, &velocities, ease)?;
        let total: f64 = residuals.iter().map(|r| r.abs()).sum();
        let snapshot = SolveResult {
            velocities: velocities.clone(),
            total_error_abs: total,
            ease,
        };
        tracing::trace!(iteration = iterations, total_error = total, "refinement step");
        if opts.keep_history {
            history.push(snapshot.clone());
        }
        if best
            .as_ref()
            .is_none_or(|b| total < b.total_error_abs || b.total_error_abs.is_nan())
        {
            best = Some(snapshot.clone());
        }

        if (total - previous_total).abs() <= opts.tolerance || residuals.len() == 1 {
            return Ok(Refined {
                result: snapshot,
                history,
                iterations,
                convergence: Convergence::Converged,
            });
        }
        if iterations >= opts.max_iterations {
            tracing::warn!(iterations, last_error = total, "refinement did not converge");
            return Ok(Refined {
                result: best.unwrap_or(snapshot),
                history,
                iterations,
                convergence: Convergence::DidNotConverge { last_error: total },
            });
        }

        if let Some((k, r)) = worst(&residuals) {
            velocities[k] += r / path.segment_span(k);
        }
        iterations += 1;
        previous_total = total;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solve/refine.rs"]
mod tests;
