use crate::foundation::error::{PathError, PathResult};
use crate::model::durations::AdjustedDurations;

/// Declarative motion description: boundary conditions plus interior checkpoints.
///
/// Anchors are numbered `0` (start), `1..=checkpoints.len()` (checkpoints) and
/// `checkpoints.len() + 1` (end). Segment `k` spans anchors `k` and `k + 1`.
///
/// When deserialized, adjusted durations missing from the input default to the requested ones,
/// matching [`Checkpoint::new`] and the builder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "PathRepr")]
pub struct Path {
    /// Time at which motion starts.
    pub start_time: f64,
    /// Progress at `start_time`.
    pub start_progress: f64,
    /// Velocity held before `start_time`.
    pub start_velocity: f64,
    /// Requested width of the window blending out of `start_velocity`.
    pub start_ease_duration: f64,

    /// Time at which motion ends.
    pub end_time: f64,
    /// Progress at `end_time`.
    pub end_progress: f64,
    /// Velocity held after `end_time`.
    pub end_velocity: f64,
    /// Requested width of the window blending into `end_velocity`.
    pub end_ease_duration: f64,

    /// Resolved start window width (never larger than requested).
    pub adjusted_start_ease_duration: f64,
    /// Resolved end window width (never larger than requested).
    pub adjusted_end_ease_duration: f64,

    /// Interior checkpoints in time order.
    pub checkpoints: Vec<Checkpoint>,
}

/// Interior waypoint the profile must pass through.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "CheckpointRepr")]
pub struct Checkpoint {
    /// Time of the waypoint.
    pub time: f64,
    /// Progress the profile must reach at `time`.
    pub progress: f64,
    /// Requested full width of the smoothing window centered on `time`.
    pub ease_duration: f64,
    /// Resolved window width (never larger than requested).
    pub adjusted_ease_duration: f64,
}

/// Wire form of [`Path`]: optional fields as they may appear in JSON.
#[derive(serde::Deserialize)]
struct PathRepr {
    start_time: f64,
    start_progress: f64,
    #[serde(default)]
    start_velocity: f64,
    #[serde(default)]
    start_ease_duration: f64,
    end_time: f64,
    end_progress: f64,
    #[serde(default)]
    end_velocity: f64,
    #[serde(default)]
    end_ease_duration: f64,
    adjusted_start_ease_duration: Option<f64>,
    adjusted_end_ease_duration: Option<f64>,
    #[serde(default)]
    checkpoints: Vec<Checkpoint>,
}

impl From<PathRepr> for Path {
    fn from(r: PathRepr) -> Self {
        Self {
            start_time: r.start_time,
            start_progress: r.start_progress,
            start_velocity: r.start_velocity,
            start_ease_duration: r.start_ease_duration,
            end_time: r.end_time,
            end_progress: r.end_progress,
            end_velocity: r.end_velocity,
            end_ease_duration: r.end_ease_duration,
            adjusted_start_ease_duration: r
                .adjusted_start_ease_duration
                .unwrap_or(r.start_ease_duration),
            adjusted_end_ease_duration: r
                .adjusted_end_ease_duration
                .unwrap_or(r.end_ease_duration),
            checkpoints: r.checkpoints,
        }
    }
}

#[derive(serde::Deserialize)]
struct CheckpointRepr {
    time: f64,
    progress: f64,
    #[serde(default)]
    ease_duration: f64,
    adjusted_ease_duration: Option<f64>,
}

impl From<CheckpointRepr> for Checkpoint {
    fn from(r: CheckpointRepr) -> Self {
        Self {
            time: r.time,
            progress: r.progress,
            ease_duration: r.ease_duration,
            adjusted_ease_duration: r.adjusted_ease_duration.unwrap_or(r.ease_duration),
        }
    }
}

impl Checkpoint {
    /// Checkpoint with its adjusted duration initialized to the request.
    pub fn new(time: f64, progress: f64, ease_duration: f64) -> Self {
        Self {
            time,
            progress,
            ease_duration,
            adjusted_ease_duration: ease_duration,
        }
    }
}

impl Path {
    /// Path between two boundary anchors, at rest on both ends, with no easing or checkpoints.
    pub fn new(start_time: f64, start_progress: f64, end_time: f64, end_progress: f64) -> Self {
        Self {
            start_time,
            start_progress,
            start_velocity: 0.0,
            start_ease_duration: 0.0,
            end_time,
            end_progress,
            end_velocity: 0.0,
            end_ease_duration: 0.0,
            adjusted_start_ease_duration: 0.0,
            adjusted_end_ease_duration: 0.0,
            checkpoints: Vec::new(),
        }
    }

    /// Parse a path from JSON and validate it.
    pub fn from_json_str(s: &str) -> PathResult<Self> {
        let path: Self = serde_json::from_str(s).map_err(|e| PathError::serde(e.to_string()))?;
        path.validate()?;
        Ok(path)
    }

    /// Serialize this path as pretty-printed JSON.
    pub fn to_json_string(&self) -> PathResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PathError::serde(e.to_string()))
    }

    /// Number of constant-velocity segments (`checkpoints.len() + 1`).
    pub fn segment_count(&self) -> usize {
        self.checkpoints.len() + 1
    }

    /// Number of anchors (`checkpoints.len() + 2`).
    pub fn anchor_count(&self) -> usize {
        self.checkpoints.len() + 2
    }

    /// Time of anchor `idx`.
    pub fn anchor_time(&self, idx: usize) -> f64 {
        if idx == 0 {
            self.start_time
        } else if idx <= self.checkpoints.len() {
            self.checkpoints[idx - 1].time
        } else {
            self.end_time
        }
    }

    /// Target progress of anchor `idx`.
    pub fn anchor_progress(&self, idx: usize) -> f64 {
        if idx == 0 {
            self.start_progress
        } else if idx <= self.checkpoints.len() {
            self.checkpoints[idx - 1].progress
        } else {
            self.end_progress
        }
    }

    /// Time span of segment `k` (between anchors `k` and `k + 1`).
    pub fn segment_span(&self, k: usize) -> f64 {
        self.anchor_time(k + 1) - self.anchor_time(k)
    }

    /// The adjusted ease durations currently stored on the path.
    pub fn adjusted(&self) -> AdjustedDurations {
        AdjustedDurations::current(self)
    }

    /// The requested ease durations.
    pub fn requested(&self) -> AdjustedDurations {
        AdjustedDurations::requested(self)
    }

    /// Check the ordering and finiteness preconditions every solver entry point relies on.
    pub fn validate(&self) -> PathResult<()> {
        let scalars = [
            ("start_time", self.start_time),
            ("start_progress", self.start_progress),
            ("start_velocity", self.start_velocity),
            ("end_time", self.end_time),
            ("end_progress", self.end_progress),
            ("end_velocity", self.end_velocity),
        ];
        for (name, v) in scalars {
            if !v.is_finite() {
                return Err(PathError::invalid_path(format!("{name} must be finite")));
            }
        }

        let durations = [
            ("start_ease_duration", self.start_ease_duration),
            ("end_ease_duration", self.end_ease_duration),
            (
                "adjusted_start_ease_duration",
                self.adjusted_start_ease_duration,
            ),
            ("adjusted_end_ease_duration", self.adjusted_end_ease_duration),
        ];
        for (name, v) in durations {
            if !v.is_finite() || v < 0.0 {
                return Err(PathError::invalid_path(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for (i, cp) in self.checkpoints.iter().enumerate() {
            if !cp.time.is_finite() || !cp.progress.is_finite() {
                return Err(PathError::invalid_path(format!(
                    "checkpoint {i} must have finite time and progress"
                )));
            }
            if !cp.ease_duration.is_finite()
                || cp.ease_duration < 0.0
                || !cp.adjusted_ease_duration.is_finite()
                || cp.adjusted_ease_duration < 0.0
            {
                return Err(PathError::invalid_path(format!(
                    "checkpoint {i} ease durations must be finite and >= 0"
                )));
            }
        }

        for k in 0..self.segment_count() {
            if self.anchor_time(k) >= self.anchor_time(k + 1) {
                return Err(PathError::invalid_path(format!(
                    "{} must come strictly before {} in time",
                    self.anchor_label(k),
                    self.anchor_label(k + 1)
                )));
            }
            if self.anchor_progress(k) >= self.anchor_progress(k + 1) {
                return Err(PathError::invalid_path(format!(
                    "{} must have strictly less progress than {}",
                    self.anchor_label(k),
                    self.anchor_label(k + 1)
                )));
            }
        }
        Ok(())
    }

    /// Check that the adjusted windows of every segment leave room for a plateau.
    pub(crate) fn ensure_windows_fit(&self) -> PathResult<()> {
        let adjusted = self.adjusted();
        for k in 0..self.segment_count() {
            let span = self.segment_span(k);
            let usage = adjusted.segment_usage(k);
            if usage >= span {
                return Err(PathError::ease_overlap(format!(
                    "ease windows between {} and {} use {usage} of a {span} span",
                    self.anchor_label(k),
                    self.anchor_label(k + 1)
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn anchor_label(&self, idx: usize) -> String {
        if idx == 0 {
            "start".to_owned()
        } else if idx <= self.checkpoints.len() {
            format!("checkpoint {}", idx - 1)
        } else {
            "end".to_owned()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/path.rs"]
mod tests;
