use crate::{
    foundation::{
        error::PathResult,
        math::{GUARD, lerp},
    },
    model::{durations::AdjustedDurations, path::Path},
    resolve::{EaseResolver, enforce_fit, fit_boundaries_only},
};

const MAX_ROUNDS: usize = 250;
const STEP_FRACTION: f64 = 0.1;
const TOLERANCE: f64 = 1e-4;

/// Default strategy: every checkpoint repeatedly moves a fixed fraction toward the largest width
/// its current neighbors allow.
///
/// Boundary windows sit out the rounds and are truncated afterwards to whatever space the
/// checkpoints left at the two ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvergentLerp;

impl EaseResolver for ConvergentLerp {
    fn name(&self) -> &'static str {
        "convergent_lerp"
    }

    fn resolve(&self, path: &Path) -> PathResult<AdjustedDurations> {
        path.validate()?;
        let requested = path.requested();
        let mut adjusted = requested.clone();
        if path.checkpoints.is_empty() {
            fit_boundaries_only(path, &mut adjusted);
            return Ok(adjusted);
        }

        let n = path.checkpoints.len();
        adjusted.start = 0.0;
        adjusted.end = 0.0;

        let (rounds, converged) = relax(path, &requested, &mut adjusted);
        tracing::debug!(rounds, converged, "convergent lerp finished");

        for idx in 1..=n {
            adjusted.set_width(idx, adjusted.width(idx) - TOLERANCE);
        }

        let first_span = path.segment_span(0);
        let last_span = path.segment_span(n);
        adjusted.start = requested
            .start
            .min(GUARD * first_span - adjusted.left_reach(1))
            .max(0.0);
        adjusted.end = requested
            .end
            .min(GUARD * last_span - adjusted.right_reach(n))
            .max(0.0);

        enforce_fit(path, &mut adjusted);
        Ok(adjusted)
    }
}

/// Lerp every checkpoint toward its neighbor bound until the largest change drops below
/// [`TOLERANCE`]. The last allowed round snaps each checkpoint to its bound left to right instead.
///
/// Returns the number of rounds run and whether the lerp settled on its own.
fn relax(
    path: &Path,
    requested: &AdjustedDurations,
    adjusted: &mut AdjustedDurations,
) -> (usize, bool) {
    let n = path.checkpoints.len();
    let mut rounds = 0usize;
    while rounds < MAX_ROUNDS {
        rounds += 1;
        if rounds == MAX_ROUNDS {
            // Snap in place so each bound already sees its left neighbor's final width.
            for idx in 1..=n {
                let bound = neighbor_bound(path, requested, adjusted, idx);
                adjusted.set_width(idx, bound);
            }
            return (rounds, false);
        }

        let prev = adjusted.clone();
        let mut max_change = 0.0f64;
        for idx in 1..=n {
            let bound = neighbor_bound(path, requested, &prev, idx);
            let width = prev.width(idx);
            let next = lerp(width, bound, STEP_FRACTION);
            max_change = max_change.max((next - width).abs());
            adjusted.set_width(idx, next);
        }
        if max_change < TOLERANCE {
            return (rounds, true);
        }
    }
    (rounds, false)
}

/// Largest width checkpoint anchor `idx` can take given its neighbors' current reaches.
fn neighbor_bound(
    path: &Path,
    requested: &AdjustedDurations,
    current: &AdjustedDurations,
    idx: usize,
) -> f64 {
    let left_room = path.segment_span(idx - 1) - current.right_reach(idx - 1);
    let right_room = path.segment_span(idx) - current.left_reach(idx + 1);
    requested
        .width(idx)
        .min(2.0 * left_room)
        .min(2.0 * right_room)
        .max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/convergent.rs"]
mod tests;
