//! Ease-duration resolution.
//!
//! Requested ease windows may overlap their neighbors; a resolver produces adjusted widths so
//! that, inside every segment, the windows of its two anchors leave a non-empty constant-velocity
//! plateau. Strategies differ only in how the available time is shared.

pub(crate) mod align;
pub(crate) mod convergent;
pub(crate) mod round_robin;
pub(crate) mod weighted;

use crate::{
    foundation::{error::PathResult, math::GUARD},
    model::{durations::AdjustedDurations, path::Path},
};

pub use align::{align_ease_durations, max_adjusted_ease};
pub use convergent::ConvergentLerp;
pub use round_robin::{RoundRobinAll, RoundRobinWorst};
pub use weighted::WeightedSinglePass;

/// Relative slack under which a segment at exactly `GUARD × span` still counts as fitting.
const OVERLAP_EPS: f64 = 1e-12;

/// A strategy turning requested ease durations into non-overlapping adjusted ones.
pub trait EaseResolver {
    /// Stable strategy name.
    fn name(&self) -> &'static str;

    /// Compute adjusted durations for `path` without modifying it.
    fn resolve(&self, path: &Path) -> PathResult<AdjustedDurations>;
}

/// Selectable resolver strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveStrategy {
    /// One left-to-right pass with a weighted split of each overlapping segment.
    WeightedSinglePass,
    /// Round-robin relaxation shrinking every overlapping segment each round.
    RoundRobinAll,
    /// Round-robin relaxation shrinking only the worst segment each round.
    RoundRobinWorst,
    /// Per-checkpoint convergent lerp toward the neighbor-compatible bound.
    #[default]
    ConvergentLerp,
}

impl ResolveStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [ResolveStrategy; 4] = [
        Self::WeightedSinglePass,
        Self::RoundRobinAll,
        Self::RoundRobinWorst,
        Self::ConvergentLerp,
    ];

    /// The resolver implementing this strategy.
    pub fn resolver(self) -> &'static dyn EaseResolver {
        match self {
            Self::WeightedSinglePass => &WeightedSinglePass,
            Self::RoundRobinAll => &RoundRobinAll,
            Self::RoundRobinWorst => &RoundRobinWorst,
            Self::ConvergentLerp => &ConvergentLerp,
        }
    }
}

/// Resolve `path`'s ease durations with `strategy` and store them in its adjusted fields.
#[tracing::instrument(skip(path), fields(checkpoints = path.checkpoints.len()))]
pub fn resolve_ease_durations(path: &mut Path, strategy: ResolveStrategy) -> PathResult<()> {
    let adjusted = resolve_with(path, strategy.resolver())?;
    adjusted.apply(path);
    Ok(())
}

/// Run `resolver` on `path`, clamp the result to the request and guarantee the no-overlap
/// invariant.
pub fn resolve_with(path: &Path, resolver: &dyn EaseResolver) -> PathResult<AdjustedDurations> {
    path.validate()?;
    let mut adjusted = resolver.resolve(path)?;
    adjusted.clamp_to(&path.requested());
    enforce_fit(path, &mut adjusted);
    tracing::debug!(
        strategy = resolver.name(),
        start = adjusted.start,
        end = adjusted.end,
        "resolved ease durations"
    );
    Ok(adjusted)
}

/// Whether the windows inside a segment of `span` exceed the guarded budget.
pub(crate) fn overlaps(usage: f64, span: f64) -> bool {
    usage - GUARD * span > OVERLAP_EPS * span
}

/// Zero-checkpoint case: both boundary windows share one segment and are scaled uniformly.
pub(crate) fn fit_boundaries_only(path: &Path, adjusted: &mut AdjustedDurations) {
    let span = path.segment_span(0);
    let usage = adjusted.start + adjusted.end;
    if overlaps(usage, span) {
        let factor = GUARD * span / usage;
        adjusted.start *= factor;
        adjusted.end *= factor;
    }
}

/// Shrink-only sweep: scale both windows of any overlapping segment down to the guarded budget.
///
/// Shrinking an anchor never breaks the segment on its other side, so one pass suffices.
pub(crate) fn enforce_fit(path: &Path, adjusted: &mut AdjustedDurations) {
    for k in 0..path.segment_count() {
        let span = path.segment_span(k);
        let usage = adjusted.segment_usage(k);
        if overlaps(usage, span) {
            let factor = GUARD * span / usage;
            adjusted.set_width(k, adjusted.width(k) * factor);
            adjusted.set_width(k + 1, adjusted.width(k + 1) * factor);
        }
    }
}

/// Per-segment `usage / span` ratios.
pub(crate) fn overlap_ratios(path: &Path, adjusted: &AdjustedDurations) -> Vec<f64> {
    (0..path.segment_count())
        .map(|k| adjusted.segment_usage(k) / path.segment_span(k))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/mod.rs"]
pub(crate) mod tests;
