//! CLI Adapter.

mod clean;
mod layout;
mod tasks;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::Overrides;
use crate::domain::{AppError, RelativeOffset};

#[derive(Parser)]
#[command(name = "outdir")]
#[command(version)]
#[command(
    about = "Relocate multi-project build outputs into one shared directory",
    long_about = None
)]
struct Cli {
    /// Path to outdir.toml (defaults to ./outdir.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Offset from the root project's default build directory (e.g. ../../build)
    #[arg(long, global = true)]
    offset: Option<RelativeOffset>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the relocated build directory of every project
    #[clap(visible_alias = "l")]
    Layout {
        /// Print the layout as a single-line JSON object
        #[arg(long)]
        json: bool,
    },
    /// Delete the shared build directory
    ///
    /// Deletion runs under an advisory lock on `.<dir>.lock` beside the build
    /// directory; the lock file is left in place.
    #[clap(visible_alias = "c")]
    Clean,
    /// List registered tasks
    Tasks,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let overrides = Overrides { config: cli.config, offset: cli.offset };

    let result: Result<(), AppError> = match cli.command {
        Commands::Layout { json } => layout::run_layout(&overrides, json),
        Commands::Clean => clean::run_clean(&overrides),
        Commands::Tasks => tasks::run_tasks(&overrides),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
