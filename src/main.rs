//! Citadel CLI - inspect the game catalogs and the economy rules.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use citadel::ObjectCategory;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Citadel - catalog and economy rules for a castle-building game
#[derive(Parser, Debug)]
#[command(name = "citadel")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List placeable objects with their attributes
    Objects {
        /// Only list this category (e.g. castle, farms)
        #[arg(short, long)]
        category: Option<ObjectCategory>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Show the build cost of an object
    Cost {
        /// Object id (e.g. object_house)
        #[arg(required = true)]
        id: String,
    },

    /// Check whether a starting profile can afford an object
    Afford {
        /// Object id (e.g. object_castle)
        #[arg(required = true)]
        id: String,

        /// Starting profile name (default: solo)
        #[arg(short, long, default_value = "solo")]
        profile: String,

        /// JSON file with starting profiles (default: built-in profiles)
        #[arg(long)]
        profiles: Option<PathBuf>,
    },

    /// List flammable objects in id order
    Flammable,

    /// Run catalog sanity checks
    Check,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let result = match args.command {
        Commands::Objects { category, format } => cli::catalog::objects(category, format),
        Commands::Cost { id } => cli::catalog::cost(&id),
        Commands::Afford {
            id,
            profile,
            profiles,
        } => cli::afford::execute(&id, &profile, profiles.as_deref()),
        Commands::Flammable => cli::catalog::flammable(),
        Commands::Check => cli::check::execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
