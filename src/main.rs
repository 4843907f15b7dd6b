//! `hanoi`: command-line driver for the iterative Tower of Hanoi solver.
//!
//! With no subcommand it runs the demonstration sweep (1 to 5 disks, pole
//! 0 to pole 2). `solve` runs a single puzzle.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hanoi_stack::core::{DemoConfig, SolveConfig};
use hanoi_stack::trace::{JsonLinesSink, WriterSink};
use hanoi_stack::{logging, run_demo, solve_with};

#[derive(Parser)]
#[command(
    name = "hanoi",
    version,
    about = "Iterative Tower of Hanoi solver over three pole stacks"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve for 1, 2, ... up to --max-disks disks, separated by a dashed line.
    Demo {
        /// Largest disk count in the sweep.
        #[arg(long, default_value_t = 5)]
        max_disks: u32,
        /// Source pole label (0-2).
        #[arg(long = "from", default_value_t = 0)]
        source: u8,
        /// Destination pole label (0-2).
        #[arg(long = "to", default_value_t = 2)]
        destination: u8,
    },
    /// Solve a single puzzle.
    Solve {
        /// Number of disks.
        #[arg(short, long)]
        disks: u32,
        /// Source pole label (0-2).
        #[arg(long = "from", default_value_t = 0)]
        source: u8,
        /// Destination pole label (0-2).
        #[arg(long = "to", default_value_t = 2)]
        destination: u8,
        /// Output format for the move trace.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Print a one-line summary to stderr when done.
        #[arg(long)]
        summary: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => cmd_demo(DemoConfig::default()),
        Some(Command::Demo {
            max_disks,
            source,
            destination,
        }) => cmd_demo(
            DemoConfig::default()
                .with_max_disks(max_disks)
                .with_poles(source, destination),
        ),
        Some(Command::Solve {
            disks,
            source,
            destination,
            format,
            summary,
        }) => cmd_solve(SolveConfig::new(disks, source, destination), format, summary),
    }
}

fn cmd_demo(config: DemoConfig) -> Result<()> {
    let stdout = io::stdout();
    run_demo(&config, stdout.lock()).context("run demonstration")?;
    Ok(())
}

fn cmd_solve(config: SolveConfig, format: Format, summary: bool) -> Result<()> {
    let stdout = io::stdout();
    let report = match format {
        Format::Text => solve_with(&config, &mut WriterSink::new(stdout.lock())),
        Format::Json => solve_with(&config, &mut JsonLinesSink::new(stdout.lock())),
    }
    .with_context(|| {
        format!(
            "solve {} disks from pole {} to pole {}",
            config.disks, config.source, config.destination
        )
    })?;

    if summary {
        eprintln!(
            "{} disks moved from pole {} to pole {} in {} moves ({} cycle)",
            report.disks, config.source, config.destination, report.moves, report.parity
        );
    }
    Ok(())
}
