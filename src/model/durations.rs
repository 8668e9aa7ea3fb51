use crate::model::path::Path;

/// A full set of ease window widths for one path, indexed by anchor.
///
/// Boundary windows lie entirely inside their single adjacent segment; a checkpoint window is
/// centered on the checkpoint and contributes half its width to each neighbor.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdjustedDurations {
    /// Start window width.
    pub start: f64,
    /// Checkpoint window widths, one per checkpoint.
    pub checkpoints: Vec<f64>,
    /// End window width.
    pub end: f64,
}

impl AdjustedDurations {
    /// Durations as requested on the path.
    pub fn requested(path: &Path) -> Self {
        Self {
            start: path.start_ease_duration,
            checkpoints: path.checkpoints.iter().map(|c| c.ease_duration).collect(),
            end: path.end_ease_duration,
        }
    }

    /// Durations currently stored in the path's adjusted fields.
    pub fn current(path: &Path) -> Self {
        Self {
            start: path.adjusted_start_ease_duration,
            checkpoints: path
                .checkpoints
                .iter()
                .map(|c| c.adjusted_ease_duration)
                .collect(),
            end: path.adjusted_end_ease_duration,
        }
    }

    /// Write these durations into the path's adjusted fields.
    pub fn apply(&self, path: &mut Path) {
        path.adjusted_start_ease_duration = self.start;
        path.adjusted_end_ease_duration = self.end;
        for (cp, &d) in path.checkpoints.iter_mut().zip(&self.checkpoints) {
            cp.adjusted_ease_duration = d;
        }
    }

    pub(crate) fn anchor_count(&self) -> usize {
        self.checkpoints.len() + 2
    }

    /// Full width of anchor `idx`'s window.
    pub fn width(&self, idx: usize) -> f64 {
        if idx == 0 {
            self.start
        } else if idx <= self.checkpoints.len() {
            self.checkpoints[idx - 1]
        } else {
            self.end
        }
    }

    pub(crate) fn set_width(&mut self, idx: usize, width: f64) {
        let width = width.max(0.0);
        if idx == 0 {
            self.start = width;
        } else if idx <= self.checkpoints.len() {
            self.checkpoints[idx - 1] = width;
        } else {
            self.end = width;
        }
    }

    /// Share of a window that falls on one side of its anchor (1 for boundaries, 0.5 otherwise).
    pub(crate) fn side_weight(&self, idx: usize) -> f64 {
        if idx == 0 || idx > self.checkpoints.len() {
            1.0
        } else {
            0.5
        }
    }

    /// How far anchor `idx`'s window extends into the segment on its right.
    pub fn right_reach(&self, idx: usize) -> f64 {
        if idx > self.checkpoints.len() {
            0.0
        } else {
            self.width(idx) * self.side_weight(idx)
        }
    }

    /// How far anchor `idx`'s window extends into the segment on its left.
    pub fn left_reach(&self, idx: usize) -> f64 {
        if idx == 0 {
            0.0
        } else {
            self.width(idx) * self.side_weight(idx)
        }
    }

    /// Time consumed by ease windows inside segment `k`.
    pub fn segment_usage(&self, k: usize) -> f64 {
        self.right_reach(k) + self.left_reach(k + 1)
    }

    /// Set anchor `idx`'s width so that its reach on one side equals `reach`.
    pub(crate) fn set_reach(&mut self, idx: usize, reach: f64) {
        self.set_width(idx, reach / self.side_weight(idx));
    }

    /// Clamp every width into `[0, requested]`.
    pub(crate) fn clamp_to(&mut self, requested: &Self) {
        self.start = self.start.clamp(0.0, requested.start);
        self.end = self.end.clamp(0.0, requested.end);
        for (d, &r) in self.checkpoints.iter_mut().zip(&requested.checkpoints) {
            *d = d.clamp(0.0, r);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/durations.rs"]
mod tests;
