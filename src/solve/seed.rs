use crate::{foundation::error::PathResult, model::path::Path};

/// Initial per-segment velocities for the refinement loop.
///
/// Fails with [`crate::PathError::EaseOverlap`] unless every segment leaves room between the
/// adjusted windows of its two anchors. With several segments each velocity is the secant slope
/// of its segment. A lone segment solves exactly for the boundary blends: the plateau velocity that,
/// together with the two half-weighted boundary windows, covers the whole progress delta.
pub fn seed_velocities(path: &Path) -> PathResult<Vec<f64>> {
    path.validate()?;
    path.ensure_windows_fit()?;
    let adjusted = path.adjusted();

    if path.checkpoints.is_empty() {
        let dt = path.end_time - path.start_time;
        let dp = path.end_progress - path.start_progress;
        let half_start = 0.5 * adjusted.start;
        let half_end = 0.5 * adjusted.end;
        let v = (dp - path.start_velocity * half_start - path.end_velocity * half_end)
            / (dt - half_start - half_end);
        return Ok(vec![v]);
    }

    Ok((0..path.segment_count())
        .map(|k| {
            let dp = path.anchor_progress(k + 1) - path.anchor_progress(k);
            dp / path.segment_span(k)
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/solve/seed.rs"]
mod tests;
