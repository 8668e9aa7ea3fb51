use crate::{
    foundation::{error::PathResult, math::GUARD},
    model::{durations::AdjustedDurations, path::Path},
    resolve::{EaseResolver, fit_boundaries_only, overlap_ratios},
};

/// Global relaxation that shrinks every overlapping segment each round.
///
/// Both windows of an overlapping segment are scaled by `GUARD / ratio`; an anchor touching two
/// overlapping segments takes the stronger factor. The worst ratio is tracked first-wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundRobinAll;

/// Global relaxation that shrinks only the single worst segment each round.
///
/// Ties pick the last segment with the largest ratio, so allocations differ from
/// [`RoundRobinAll`] whenever several segments overlap at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundRobinWorst;

impl EaseResolver for RoundRobinAll {
    fn name(&self) -> &'static str {
        "round_robin_all"
    }

    fn resolve(&self, path: &Path) -> PathResult<AdjustedDurations> {
        path.validate()?;
        let mut adjusted = path.requested();
        if path.checkpoints.is_empty() {
            fit_boundaries_only(path, &mut adjusted);
            return Ok(adjusted);
        }

        let max_rounds = path.checkpoints.len() + 2;
        for round in 0..max_rounds {
            let ratios = overlap_ratios(path, &adjusted);
            let mut worst = 0.0;
            for &r in &ratios {
                if worst < r {
                    worst = r;
                }
            }
            if !is_overlap(worst) {
                tracing::trace!(round, "round robin (all) settled");
                break;
            }

            let mut factors = vec![1.0f64; adjusted.anchor_count()];
            for (k, &r) in ratios.iter().enumerate() {
                if is_overlap(r) {
                    let f = GUARD / r;
                    factors[k] = factors[k].min(f);
                    factors[k + 1] = factors[k + 1].min(f);
                }
            }
            for (idx, f) in factors.into_iter().enumerate() {
                adjusted.set_width(idx, adjusted.width(idx) * f);
            }
        }
        Ok(adjusted)
    }
}

impl EaseResolver for RoundRobinWorst {
    fn name(&self) -> &'static str {
        "round_robin_worst"
    }

    fn resolve(&self, path: &Path) -> PathResult<AdjustedDurations> {
        path.validate()?;
        let mut adjusted = path.requested();
        if path.checkpoints.is_empty() {
            fit_boundaries_only(path, &mut adjusted);
            return Ok(adjusted);
        }

        let max_rounds = path.checkpoints.len() + 2;
        for round in 0..max_rounds {
            let ratios = overlap_ratios(path, &adjusted);
            let mut worst = 0.0;
            let mut worst_idx = 0usize;
            for (k, &r) in ratios.iter().enumerate() {
                if r >= worst {
                    worst = r;
                    worst_idx = k;
                }
            }
            if !is_overlap(worst) {
                tracing::trace!(round, "round robin (worst) settled");
                break;
            }

            let f = GUARD / worst;
            adjusted.set_width(worst_idx, adjusted.width(worst_idx) * f);
            adjusted.set_width(worst_idx + 1, adjusted.width(worst_idx + 1) * f);
        }
        Ok(adjusted)
    }
}

fn is_overlap(ratio: f64) -> bool {
    super::overlaps(ratio, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/round_robin.rs"]
mod tests;
