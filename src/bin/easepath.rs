use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "easepath", version)]
struct Cli {
    /// Log solver progress to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a path and print the solution JSON.
    Solve(SolveArgs),
    /// Resolve ease durations and print the adjusted path JSON.
    Resolve(ResolveArgs),
    /// Solve a path and write sampled velocity/progress/acceleration polylines.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Input path JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Easing kernel for every blend window.
    #[arg(long, value_enum, default_value_t = EaseChoice::Sine)]
    ease: EaseChoice,

    /// Ease-duration resolution strategy.
    #[arg(long, value_enum, default_value_t = StrategyChoice::ConvergentLerp)]
    strategy: StrategyChoice,

    /// Solve with the adjusted durations stored in the input (the requested ones when absent).
    #[arg(long, conflicts_with = "strategy")]
    no_resolve: bool,

    /// Maximum number of velocity corrections.
    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,

    /// Include every refinement step in the output.
    #[arg(long)]
    history: bool,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input path JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Ease-duration resolution strategy.
    #[arg(long, value_enum, default_value_t = StrategyChoice::ConvergentLerp)]
    strategy: StrategyChoice,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input path JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output polylines JSON.
    #[arg(long)]
    out: PathBuf,

    /// Number of sample intervals (each polyline gets one more point).
    #[arg(long, default_value_t = 200)]
    samples: usize,

    /// Easing kernel for every blend window.
    #[arg(long, value_enum, default_value_t = EaseChoice::Sine)]
    ease: EaseChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    Sine,
    Quadratic,
    Cubic,
}

impl From<EaseChoice> for easepath::EaseInOut {
    fn from(choice: EaseChoice) -> Self {
        match choice {
            EaseChoice::Linear => Self::Linear,
            EaseChoice::Sine => Self::Sine,
            EaseChoice::Quadratic => Self::Quadratic,
            EaseChoice::Cubic => Self::Cubic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    WeightedSinglePass,
    RoundRobinAll,
    RoundRobinWorst,
    ConvergentLerp,
}

impl From<StrategyChoice> for easepath::ResolveStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::WeightedSinglePass => Self::WeightedSinglePass,
            StrategyChoice::RoundRobinAll => Self::RoundRobinAll,
            StrategyChoice::RoundRobinWorst => Self::RoundRobinWorst,
            StrategyChoice::ConvergentLerp => Self::ConvergentLerp,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Solve(args) => cmd_solve(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_path_json(path: &Path) -> anyhow::Result<easepath::Path> {
    let f = File::open(path).with_context(|| format!("open path '{}'", path.display()))?;
    let r = BufReader::new(f);
    let p: easepath::Path = serde_json::from_reader(r).with_context(|| "parse path JSON")?;
    p.validate()
        .with_context(|| format!("validate path '{}'", path.display()))?;
    Ok(p)
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let path = read_path_json(&args.in_path)?;
    let opts = easepath::SolveOpts {
        resolve: (!args.no_resolve).then_some(args.strategy.into()),
        max_iterations: args.max_iterations,
        keep_history: args.history,
        ..easepath::SolveOpts::default()
    };
    let solution = easepath::solve_with_opts(&path, args.ease.into(), &opts)?;
    if let easepath::Convergence::DidNotConverge { last_error } = solution.convergence {
        eprintln!(
            "warning: refinement stopped after {} iterations (error {last_error})",
            solution.iterations
        );
    }
    println!("{}", serde_json::to_string_pretty(&solution)?);
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let mut path = read_path_json(&args.in_path)?;
    easepath::resolve_ease_durations(&mut path, args.strategy.into())?;
    println!("{}", path.to_json_string()?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let path = read_path_json(&args.in_path)?;
    let solution = easepath::solve(&path, args.ease.into())?;
    let lines = easepath::sample_polylines(&solution.path, &solution.result, args.samples)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&lines)?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write samples '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
