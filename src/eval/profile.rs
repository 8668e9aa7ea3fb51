use crate::{
    animation::ease::EaseInOut,
    foundation::error::{PathError, PathResult},
    model::path::Path,
    solve::result::SolveResult,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum PieceKind {
    Plateau,
    Blend,
}

/// One contiguous stretch of the velocity profile.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Piece {
    kind: PieceKind,
    t0: f64,
    width: f64,
    from: f64,
    to: f64,
}

impl Piece {
    fn velocity(&self, ease: EaseInOut, tau: f64) -> f64 {
        match self.kind {
            PieceKind::Plateau => self.from,
            PieceKind::Blend => self.from + (self.to - self.from) * ease.value(tau / self.width),
        }
    }

    fn accel(&self, ease: EaseInOut, tau: f64) -> f64 {
        match self.kind {
            PieceKind::Plateau => 0.0,
            PieceKind::Blend => {
                (self.to - self.from) * ease.derivative(tau / self.width) / self.width
            }
        }
    }

    /// Progress gained between the piece start and `tau`.
    fn progress(&self, ease: EaseInOut, tau: f64) -> f64 {
        match self.kind {
            PieceKind::Plateau => self.from * tau,
            PieceKind::Blend => {
                self.from * tau
                    + (self.to - self.from) * self.width * ease.antiderivative(tau / self.width)
            }
        }
    }
}

/// Closed-form velocity profile for one set of segment velocities.
///
/// Pieces tile `[start_time, end_time]` without gaps: start blend, plateau, checkpoint blend, ...,
/// end blend. `prefix[i]` is the progress reached at the start of piece `i`, so every query is a
/// binary search plus one piece evaluation.
#[derive(Clone, Debug)]
pub struct Profile {
    ease: EaseInOut,
    start_time: f64,
    start_progress: f64,
    start_velocity: f64,
    end_time: f64,
    end_velocity: f64,
    pieces: Vec<Piece>,
    prefix: Vec<f64>,
    end_progress: f64,
}

impl Profile {
    /// Profile of `result` over `path`'s adjusted ease windows.
    ///
    /// Fails with [`PathError::InvalidPath`] for a path that does not validate and with
    /// [`PathError::EaseOverlap`] when adjusted windows do not fit their segments.
    pub fn new(path: &Path, result: &SolveResult) -> PathResult<Self> {
        Self::build(path, &result.velocities, result.ease)
    }

    pub(crate) fn build(path: &Path, velocities: &[f64], ease: EaseInOut) -> PathResult<Self> {
        path.validate()?;
        path.ensure_windows_fit()?;
        let segments = path.segment_count();
        if velocities.len() != segments {
            return Err(PathError::invalid_path(format!(
                "expected {segments} segment velocities, got {}",
                velocities.len()
            )));
        }

        let adjusted = path.adjusted();
        let mut pieces = Vec::with_capacity(2 * segments + 1);
        let mut cursor = path.start_time;
        let mut push = |kind, t0: f64, t1: f64, from, to| {
            let width = t1 - t0;
            if width > 0.0 {
                pieces.push(Piece {
                    kind,
                    t0,
                    width,
                    from,
                    to,
                });
            }
        };

        let start_end = path.start_time + adjusted.start;
        push(
            PieceKind::Blend,
            path.start_time,
            start_end,
            path.start_velocity,
            velocities[0],
        );
        cursor = cursor.max(start_end);

        for (k, &v) in velocities.iter().enumerate() {
            let anchor = k + 1;
            let anchor_time = path.anchor_time(anchor);
            let reach = adjusted.left_reach(anchor);
            let blend_start = anchor_time - reach;
            push(PieceKind::Plateau, cursor, blend_start, v, v);

            let (blend_end, next) = if anchor == segments {
                (anchor_time, path.end_velocity)
            } else {
                (anchor_time + reach, velocities[anchor])
            };
            push(PieceKind::Blend, blend_start, blend_end, v, next);
            cursor = cursor.max(blend_end);
        }

        let mut prefix = Vec::with_capacity(pieces.len());
        let mut acc = path.start_progress;
        for p in &pieces {
            prefix.push(acc);
            acc += p.progress(ease, p.width);
        }

        Ok(Self {
            ease,
            start_time: path.start_time,
            start_progress: path.start_progress,
            start_velocity: path.start_velocity,
            end_time: path.end_time,
            end_velocity: path.end_velocity,
            pieces,
            prefix,
            end_progress: acc,
        })
    }

    /// Progress reached at `end_time`.
    pub fn end_progress(&self) -> f64 {
        self.end_progress
    }

    fn locate(&self, t: f64) -> Option<(usize, f64)> {
        let idx = self.pieces.partition_point(|p| p.t0 <= t);
        if idx == 0 {
            return None;
        }
        let p = &self.pieces[idx - 1];
        Some((idx - 1, (t - p.t0).clamp(0.0, p.width)))
    }

    /// Velocity at time `t`.
    pub fn velocity_at(&self, t: f64) -> f64 {
        if t < self.start_time {
            return self.start_velocity;
        }
        if t > self.end_time {
            return self.end_velocity;
        }
        match self.locate(t) {
            Some((i, tau)) => self.pieces[i].velocity(self.ease, tau),
            None => self.start_velocity,
        }
    }

    /// Acceleration at time `t`.
    pub fn accel_at(&self, t: f64) -> f64 {
        if t < self.start_time || t > self.end_time {
            return 0.0;
        }
        match self.locate(t) {
            Some((i, tau)) => self.pieces[i].accel(self.ease, tau),
            None => 0.0,
        }
    }

    /// Accumulated progress at time `t`.
    pub fn progress_at(&self, t: f64) -> f64 {
        if t < self.start_time {
            return self.start_progress;
        }
        if t >= self.end_time {
            return self.end_progress;
        }
        match self.locate(t) {
            Some((i, tau)) => self.prefix[i] + self.pieces[i].progress(self.ease, tau),
            None => self.start_progress,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/profile.rs"]
mod tests;
