use crate::{
    foundation::error::PathResult,
    model::path::{Checkpoint, Path},
};

/// Fluent constructor for [`Path`] that validates on [`PathBuilder::build`].
///
/// Adjusted durations start equal to the requested ones; run a resolver before solving if the
/// requested windows may overlap.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    /// Start a path at `(time, progress)`; the end defaults to one time unit and one progress
    /// unit later.
    pub fn new(start_time: f64, start_progress: f64) -> Self {
        Self {
            path: Path::new(
                start_time,
                start_progress,
                start_time + 1.0,
                start_progress + 1.0,
            ),
        }
    }

    /// Velocity held before the start and the requested start window width.
    pub fn start_ease(mut self, velocity: f64, ease_duration: f64) -> Self {
        self.path.start_velocity = velocity;
        self.path.start_ease_duration = ease_duration;
        self.path.adjusted_start_ease_duration = ease_duration;
        self
    }

    /// Append a checkpoint after the previously added ones.
    pub fn checkpoint(mut self, time: f64, progress: f64, ease_duration: f64) -> Self {
        self.path
            .checkpoints
            .push(Checkpoint::new(time, progress, ease_duration));
        self
    }

    /// End anchor position.
    pub fn end(mut self, time: f64, progress: f64) -> Self {
        self.path.end_time = time;
        self.path.end_progress = progress;
        self
    }

    /// Velocity held after the end and the requested end window width.
    pub fn end_ease(mut self, velocity: f64, ease_duration: f64) -> Self {
        self.path.end_velocity = velocity;
        self.path.end_ease_duration = ease_duration;
        self.path.adjusted_end_ease_duration = ease_duration;
        self
    }

    /// Validate and return the path.
    pub fn build(self) -> PathResult<Path> {
        self.path.validate()?;
        Ok(self.path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/dsl.rs"]
mod tests;
