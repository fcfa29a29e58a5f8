// Rust guideline compliant 2026-10-14

//! OTC CLI Application
//!
//! Command-line driver for the progress and ETA reporting library.

use clap::Parser;
use otc_cli::commands;
use otc_cli::commands::simulate::SimulateOptions;
use otc_cli::{create_sink, logging};
use otc_progress::ColorChoice;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "otc",
    version,
    about = "OTC: adaptive progress and ETA reporting",
    long_about = "Plans print points for long batch loops, estimates the remaining time and prints compact, colour-coded status lines.",
    after_help = "Examples:\n  otc simulate --events 1000000 --item-ms 2\n  otc simulate --events 5000 --item-ms 10 --real-time\n  otc plan --events 1000 --max-decades 2\n  otc format 4000 --sig-figs 1\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Append JSON diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run a synthetic loop and report its progress
    Simulate {
        /// Number of items in the loop
        #[arg(long)]
        events: u64,

        /// Finest print-point decade (1-9)
        #[arg(long, default_value_t = 6)]
        max_decades: u32,

        /// Duration of one item in milliseconds
        #[arg(long, default_value_t = 1.0)]
        item_ms: f64,

        /// Label shown on each report
        #[arg(long, default_value = "events")]
        label: String,

        /// Sleep for real instead of simulating time
        #[arg(long)]
        real_time: bool,
    },

    /// Show the print points planned for a run
    Plan {
        /// Number of items in the run
        #[arg(long)]
        events: u64,

        /// Finest print-point decade (1-9)
        #[arg(long, default_value_t = 6)]
        max_decades: u32,
    },

    /// Format a duration as an estimate
    Format {
        /// Duration in seconds
        seconds: u64,

        /// Significant figures (1-4)
        #[arg(long, default_value_t = 2)]
        sig_figs: u32,

        /// Append concern markers to very long durations
        #[arg(long)]
        emphasize: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&cli.log_level, cli.log_file.as_deref())?;

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    match cli.command {
        Commands::Simulate {
            events,
            max_decades,
            item_ms,
            label,
            real_time,
        } => {
            let options = SimulateOptions {
                events,
                max_decades,
                item_ms,
                label,
                real_time,
            };
            let sink = create_sink(cli.json, color.resolve());
            commands::simulate::execute(&options, sink)?;
        }
        Commands::Plan {
            events,
            max_decades,
        } => {
            let mut out = io::stdout().lock();
            commands::plan::execute(events, max_decades, cli.json, &mut out)?;
            out.flush()?;
        }
        Commands::Format {
            seconds,
            sig_figs,
            emphasize,
        } => {
            let mut out = io::stdout().lock();
            commands::format::execute(seconds, sig_figs, emphasize, cli.json, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
