use crate::{
    foundation::error::PathResult,
    model::{durations::AdjustedDurations, path::Path},
    resolve::{EaseResolver, fit_boundaries_only, overlaps},
};

/// Single left-to-right pass over the anchor chain.
///
/// When a segment is overbooked, each of its two windows is cut to a share of the span
/// proportional to its side weight (1 for a boundary window, 0.5 for a checkpoint half-window)
/// out of `prev_weight + 1 + cur_weight`. Windows are only ever shrunk, so segments already
/// visited stay valid.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedSinglePass;

impl EaseResolver for WeightedSinglePass {
    fn name(&self) -> &'static str {
        "weighted_single_pass"
    }

    fn resolve(&self, path: &Path) -> PathResult<AdjustedDurations> {
        path.validate()?;
        let mut adjusted = path.requested();
        if path.checkpoints.is_empty() {
            fit_boundaries_only(path, &mut adjusted);
            return Ok(adjusted);
        }

        for k in 0..path.segment_count() {
            let span = path.segment_span(k);
            if !overlaps(adjusted.segment_usage(k), span) {
                continue;
            }
            let prev_weight = adjusted.side_weight(k);
            let cur_weight = adjusted.side_weight(k + 1);
            let total_weight = prev_weight + 1.0 + cur_weight;
            let prev = adjusted.width(k).min(span * prev_weight / total_weight);
            let cur = adjusted.width(k + 1).min(span * cur_weight / total_weight);
            adjusted.set_width(k, prev);
            adjusted.set_width(k + 1, cur);
        }
        debug_assert!(
            (0..path.segment_count())
                .all(|k| !overlaps(adjusted.segment_usage(k), path.segment_span(k)))
        );
        Ok(adjusted)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/weighted.rs"]
mod tests;
