//! `longhand`: show-your-work solver for arithmetic, equations and areas.

mod commands;
mod config;
mod format;
mod json_types;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::solve::{ArithArgs, EquationArgs, GeometryArgs};
use config::{LonghandConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "longhand", version, about = "Solve math problems and show every step")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Replace ×, ², π and other symbols with ASCII
    #[arg(long, global = true)]
    ascii: bool,

    /// Skip the numbered step listing
    #[arg(long, global = true)]
    no_steps: bool,

    /// Skip the one-line-per-step work summary
    #[arg(long, global = true)]
    no_scratchpad: bool,

    /// Config file (default: $LONGHAND_CONFIG or ./longhand.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through the built-in example problems
    Demo,
    /// Two-number addition, subtraction or multiplication
    Arith(ArithArgs),
    /// Linear equation in x
    Linear(EquationArgs),
    /// Quadratic equation in x, standard form with zero on the right
    Quadratic(EquationArgs),
    /// Area of a triangle or circle
    Geometry(GeometryArgs),
}

impl Cli {
    /// File config with command-line flags layered on top.
    fn effective_config(&self) -> LonghandConfig {
        let mut config = LonghandConfig::load(self.config.as_deref());
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.ascii {
            config.ascii_only = true;
        }
        if self.no_steps {
            config.show_steps = false;
        }
        if self.no_scratchpad {
            config.show_scratchpad = false;
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.effective_config();

    let output = match &cli.command {
        None | Some(Command::Demo) => commands::demo::render(&config)?,
        Some(Command::Arith(args)) => commands::solve::arith(args).render(&config)?,
        Some(Command::Linear(args)) => commands::solve::linear(args).render(&config)?,
        Some(Command::Quadratic(args)) => commands::solve::quadratic(args).render(&config)?,
        Some(Command::Geometry(args)) => commands::solve::geometry(args).render(&config)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}
