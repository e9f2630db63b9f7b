//! linediff: line-oriented LCS diff tool
//!
//! Compares two text files line by line and classifies every line as SAME,
//! ADDED, or REMOVED.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use linediff::{
    cli,
    config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig},
    engine::TieBreak,
    report::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with algorithm info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nAlgorithm:",
        "\n  Classic O(n*m) LCS dynamic program with deterministic backtrace",
        "\n\nOutput Formats:",
        "\n  text, json, summary",
        "\n\nTie-break Modes:",
        "\n  prefer-removed (default), prefer-added"
    )
}

#[derive(Parser)]
#[command(name = "linediff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Line-oriented LCS diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or --fail-on-change not set)
    1  Changes detected with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Diff two files
    linediff diff base.txt changed.txt

    # Prompt interactively for the file paths
    linediff diff

    # Full diff plus the LCS block
    linediff diff base.txt changed.txt --show-lcs

    # CI check: fail when the files differ
    linediff diff base.txt changed.txt -o summary --fail-on-change

    # Export JSON for processing
    linediff diff base.txt changed.txt -o json > diff.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline file (prompted for when omitted)
    old: Option<PathBuf>,

    /// Path to the new file (prompted for when omitted)
    new: Option<PathBuf>,

    /// Output format (auto detects TTY: text if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Backtrace preference when the LCS table admits multiple minimal
    /// edit scripts
    #[arg(long, default_value = "prefer-removed")]
    tie_break: TieBreak,

    /// Append the LCS block (length + common lines) after the diff
    #[arg(long)]
    show_lcs: bool,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two text files line by line
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(cli::exit_codes::ERROR);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Diff(args) => {
            let config = DiffConfig {
                paths: DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                    show_lcs: args.show_lcs,
                },
                behavior: BehaviorConfig {
                    fail_on_change: args.fail_on_change,
                    quiet: cli.quiet,
                },
                tie_break: args.tie_break,
            };

            let exit_code = cli::run_diff(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "linediff", &mut io::stdout());
            Ok(())
        }
    }
}
