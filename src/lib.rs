//! easepath computes smooth one-dimensional motion profiles that pass through timed checkpoints.
//!
//! A [`Path`] names a start and end anchor plus interior [`Checkpoint`]s, each with a requested
//! ease window. Solving happens in three stages:
//!
//! 1. **Resolve**: shrink overlapping ease windows ([`resolve_ease_durations`]) so every segment
//!    keeps a constant-velocity plateau.
//! 2. **Seed**: one velocity per segment from secant slopes ([`seed_velocities`]).
//! 3. **Refine**: repeatedly correct the worst segment until the profile's progress at every
//!    anchor matches the request ([`solve`], [`solve_with_opts`]).
//!
//! The resulting [`SolveResult`] is queried with [`velocity_at`], [`accel_at`] and
//! [`progress_at`], or through a prebuilt [`Profile`] when many samples are needed.
//!
//! Everything is deterministic and single-threaded; identical inputs give bit-identical output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod model;
mod resolve;
mod solve;

pub use animation::ease::EaseInOut;
pub use eval::evaluator::{accel_at, progress_at, velocity_at};
pub use eval::profile::Profile;
pub use eval::sample::{Polylines, sample_polylines};
pub use foundation::error::{PathError, PathResult};
pub use foundation::math::GUARD;
pub use model::dsl::PathBuilder;
pub use model::durations::AdjustedDurations;
pub use model::path::{Checkpoint, Path};
pub use resolve::{
    ConvergentLerp, EaseResolver, ResolveStrategy, RoundRobinAll, RoundRobinWorst,
    WeightedSinglePass, align_ease_durations, max_adjusted_ease, resolve_ease_durations,
    resolve_with,
};
pub use solve::{
    Convergence, Solution, SolveOpts, SolveResult, seed_velocities, solve, solve_with_opts,
};
