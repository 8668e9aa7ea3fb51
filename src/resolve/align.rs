use crate::{
    foundation::{
        error::{PathError, PathResult},
        math::GUARD,
    },
    model::path::Path,
    resolve::overlaps,
};

/// Map the caller-facing anchor reference to an anchor index.
///
/// `None` is the start anchor, `Some(i)` with `i < checkpoints.len()` is checkpoint `i`, and
/// `Some(checkpoints.len())` is the end anchor.
fn anchor_index(path: &Path, modified: Option<usize>) -> PathResult<usize> {
    match modified {
        None => Ok(0),
        Some(i) if i <= path.checkpoints.len() => Ok(i + 1),
        Some(i) => Err(PathError::invalid_path(format!(
            "anchor {i} is out of range for a path with {} checkpoints",
            path.checkpoints.len()
        ))),
    }
}

/// Largest adjusted width the referenced anchor can take without overlapping its segments on
/// its own (capped by its requested width).
pub fn max_adjusted_ease(path: &Path, modified: Option<usize>) -> PathResult<f64> {
    let idx = anchor_index(path, modified)?;
    let requested = path.requested();
    let n = path.checkpoints.len();
    let geometric = if idx == 0 {
        GUARD * path.segment_span(0)
    } else if idx > n {
        GUARD * path.segment_span(n)
    } else {
        2.0 * GUARD * path.segment_span(idx - 1).min(path.segment_span(idx))
    };
    Ok(requested.width(idx).min(geometric).max(0.0))
}

/// Re-establish the no-overlap invariant after one anchor's adjusted width was edited directly.
///
/// The edited width is clamped to [`max_adjusted_ease`], then the change is pushed outward in a
/// single forward and a single backward sweep. Each sweep shrinks the next window to the room
/// left in its segment and stops at the first segment that already fits, so windows beyond that
/// point keep their current widths.
#[tracing::instrument(skip(path), fields(checkpoints = path.checkpoints.len()))]
pub fn align_ease_durations(path: &mut Path, modified: Option<usize>) -> PathResult<()> {
    path.validate()?;
    let idx = anchor_index(path, modified)?;
    let max = max_adjusted_ease(path, modified)?;
    let mut adjusted = path.adjusted();
    adjusted.set_width(idx, adjusted.width(idx).clamp(0.0, max));

    let mut touched = 0usize;
    for k in idx..path.segment_count() {
        let span = path.segment_span(k);
        if !overlaps(adjusted.segment_usage(k), span) {
            break;
        }
        let room = (GUARD * span - adjusted.right_reach(k)).max(0.0);
        adjusted.set_reach(k + 1, room);
        touched += 1;
    }
    for k in (0..idx).rev() {
        let span = path.segment_span(k);
        if !overlaps(adjusted.segment_usage(k), span) {
            break;
        }
        let room = (GUARD * span - adjusted.left_reach(k + 1)).max(0.0);
        adjusted.set_reach(k, room);
        touched += 1;
    }
    tracing::debug!(anchor = idx, touched, "aligned ease durations");

    adjusted.apply(path);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/align.rs"]
mod tests;
