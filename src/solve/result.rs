use crate::{
    animation::ease::EaseInOut,
    foundation::{
        error::{PathError, PathResult},
        math::Fnv1a64,
    },
    model::path::Path,
};

/// Per-segment velocities plus the residual they leave.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolveResult {
    /// Constant velocity of each segment, `checkpoints.len() + 1` entries.
    pub velocities: Vec<f64>,
    /// Sum of absolute per-segment progress residuals.
    pub total_error_abs: f64,
    /// Kernel used for every blend window.
    pub ease: EaseInOut,
}

impl SolveResult {
    /// Stable hash over the velocities and error, for determinism checks.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        for &v in &self.velocities {
            h.write_f64(v);
        }
        h.write_f64(self.total_error_abs);
        h.finish()
    }
}

/// How the refinement loop ended.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Convergence {
    /// The total error stopped changing by more than the tolerance.
    Converged,
    /// The iteration cap was hit first.
    DidNotConverge {
        /// Total error at the final measurement.
        last_error: f64,
    },
}

/// Everything `solve` produces.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Solution {
    /// The path that was solved, with the adjusted ease durations actually used.
    pub path: Path,
    /// Final velocities (the best seen if refinement did not converge).
    pub result: SolveResult,
    /// One snapshot per measurement, when history was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<SolveResult>,
    /// Number of velocity corrections applied.
    pub iterations: usize,
    /// Loop outcome.
    pub convergence: Convergence,
}

impl Solution {
    /// Whether refinement converged.
    pub fn converged(&self) -> bool {
        self.convergence == Convergence::Converged
    }

    /// Turn a non-converged solution into [`PathError::DidNotConverge`].
    pub fn ensure_converged(self) -> PathResult<Self> {
        match self.convergence {
            Convergence::Converged => Ok(self),
            Convergence::DidNotConverge { last_error } => {
                Err(PathError::DidNotConverge { last_error })
            }
        }
    }
}
