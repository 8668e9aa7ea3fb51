use easepath::{EaseInOut, PathBuilder, progress_at, solve};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = PathBuilder::new(0.0, 0.0)
        .start_ease(0.0, 2.0)
        .checkpoint(4.0, 0.3, 3.0)
        .checkpoint(6.0, 0.45, 3.0)
        .end(12.0, 1.0)
        .end_ease(0.0, 2.0)
        .build()?;

    let solution = solve(&path, EaseInOut::Sine)?.ensure_converged()?;
    println!(
        "converged after {} corrections, error {:.3e}",
        solution.iterations, solution.result.total_error_abs
    );
    for (k, v) in solution.result.velocities.iter().enumerate() {
        println!("segment {k}: velocity {v:.6}");
    }
    for t in [0.0, 3.0, 4.0, 6.0, 9.0, 12.0] {
        let p = progress_at(&solution.path, &solution.result, t)?;
        println!("t = {t:>5.2}  progress = {p:.6}");
    }
    Ok(())
}
