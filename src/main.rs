use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use farkle::likelihood::{exceedance_curve, sample_turns};
use farkle::report::{DistributionReport, JsonReport, Report, TableReport, render_exceedance};
use farkle::simulate::{DEFAULT_GAMES, DEFAULT_WIN_THRESHOLD};
use farkle::{SimulationConfig, Strategy, sweep};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log per-strategy progress.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare rounds-to-win across strategies.
    Compare(CompareArgs),
    /// Distribution of single-turn scores for one strategy.
    Turns(TurnsArgs),
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Games simulated per strategy.
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    games: usize,

    /// Total score that wins a game.
    #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD)]
    win_threshold: u32,

    /// Give up on a game after this many rounds.
    #[arg(long)]
    max_rounds: Option<u32>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// TARGET:MIN_DICE:DES_DICE, may be repeated. Defaults to a built-in set.
    #[arg(short, long = "strategy")]
    strategies: Vec<Strategy>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Args, Debug)]
struct TurnsArgs {
    /// TARGET:MIN_DICE:DES_DICE
    #[arg(short, long, default_value = "500:2:3")]
    strategy: Strategy,

    #[arg(long, default_value_t = 10_000)]
    turns: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Table,
    Distribution,
    Json,
}

impl Format {
    fn report(self) -> Box<dyn Report> {
        match self {
            Format::Table => Box::new(TableReport),
            Format::Distribution => Box::new(DistributionReport),
            Format::Json => Box::new(JsonReport),
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn compare(args: CompareArgs) -> Result<()> {
    let config = SimulationConfig::new(args.games, args.win_threshold, args.max_rounds, args.seed)
        .context("invalid simulation config")?;
    let strategies = if args.strategies.is_empty() {
        Strategy::defaults()
    } else {
        args.strategies
    };

    info!(
        games = config.games(),
        win_threshold = config.win_threshold(),
        seed = config.seed(),
        strategies = strategies.len(),
        "simulating"
    );
    let start = Instant::now();
    let results = sweep(&strategies, &config).context("simulation failed")?;
    info!(elapsed = ?start.elapsed(), "done");

    let mut out = io::stdout().lock();
    args.format
        .report()
        .render(&mut out, &results)
        .context("failed to write report")?;
    out.flush()?;
    Ok(())
}

fn turns(args: TurnsArgs) -> Result<()> {
    info!(strategy = %args.strategy, turns = args.turns, seed = args.seed, "sampling turns");
    let scores =
        sample_turns(&args.strategy, args.turns, args.seed).context("invalid turn sampling")?;
    let curve = exceedance_curve(&scores);

    let mut out = io::stdout().lock();
    render_exceedance(&mut out, &args.strategy.to_string(), args.turns, &curve)
        .context("failed to write report")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compare(args) => compare(args),
        Command::Turns(args) => turns(args),
    }
}
