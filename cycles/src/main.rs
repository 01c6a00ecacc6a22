//! Loop exercises on the command line.
//!
//! Each subcommand runs one loop from the `cycles` library and prints its
//! result to stdout. Loop parameters come from `cycles.toml` when present.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use cycles::config::{CONFIG_FILE, LoopConfig, load_config, render_config};
use cycles::report::Report;
use cycles::{do_while_cycle_with, exit_codes, for_cycle, logging, while_cycle_with};

#[derive(Parser)]
#[command(name = "cycles", version, about = "Loop exercises: for, while, do-while")]
struct Cli {
    /// Path to the TOML config file; a missing file means defaults.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Print a JSON object instead of the bare result.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sum the even integers in the inclusive range [START, END].
    For {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
    },
    /// Count divisions of N until it drops below the threshold.
    While {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },
    /// Replace every third character of TEXT with the placeholder.
    DoWhile { text: String },
    /// Print the effective configuration as TOML (or JSON with `--json`).
    Config,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config).context("load config")?;
    debug!(config = %cli.config.display(), ?cfg, "config loaded");

    let report = match cli.command {
        Command::For { start, end } => cmd_for(start, end)?,
        Command::While { n } => cmd_while(n, &cfg)?,
        Command::DoWhile { text } => cmd_do_while(&text, &cfg)?,
        Command::Config => {
            print!("{}", render_config(&cfg, cli.json)?);
            return Ok(());
        }
    };
    println!("{}", report.render(cli.json)?);
    Ok(())
}

fn cmd_for(start: i64, end: i64) -> Result<Report> {
    info!(start, end, "running for cycle");
    let sum = for_cycle(start, end)?;
    Ok(Report::for_cycle(start, end, sum))
}

fn cmd_while(n: f64, cfg: &LoopConfig) -> Result<Report> {
    info!(n, "running while cycle");
    let steps = while_cycle_with(n, cfg)?;
    Ok(Report::while_cycle(n, steps))
}

fn cmd_do_while(text: &str, cfg: &LoopConfig) -> Result<Report> {
    info!(chars = text.chars().count(), "running do-while cycle");
    let replaced = do_while_cycle_with(text, cfg)?;
    Ok(Report::do_while_cycle(text, &replaced))
}
