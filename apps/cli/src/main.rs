// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-Lite CLI - outline checking and floor creation.
//!
//! # Commands
//!
//! - `check [FILE]` - Validate that an outline is a closed loop (JSON report)
//! - `create-floor [FILE]` - Validate, then build a floor in a scratch document
//!
//! Without FILE the built-in twelve-line sample is used. Exit code 0 means
//! the outline closed (and the floor was created), 1 means it did not, 2
//! means the input could not be read.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::Config;

const EXIT_INPUT_ERROR: i32 = 2;

/// Outline checker and floor builder
#[derive(Parser)]
#[command(name = "floor-lite")]
#[command(version)]
#[command(about = "Check line outlines for closure and build floors from them")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an outline forms a closed loop
    Check(commands::CheckArgs),
    /// Create a floor from an outline in a scratch document
    CreateFloor(commands::CreateFloorArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::debug!(
        tolerance = config.tolerance,
        level = %config.level_name,
        floor_type = %config.floor_type_name,
        "configuration loaded"
    );

    let result = match cli.command {
        Commands::Check(args) => commands::handle_check(args, &config),
        Commands::CreateFloor(args) => commands::handle_create_floor(args, &config),
    };

    let exit_code = result.unwrap_or_else(|e| {
        tracing::error!("{e:#}");
        eprintln!("error: {e:#}");
        EXIT_INPUT_ERROR
    });

    std::process::exit(exit_code);
}
