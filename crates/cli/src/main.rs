//! fh-telemetry - Forza Horizon telemetry listener
//!
//! Listens for the game's "Data Out" UDP stream, shows the car currently being
//! driven and keeps a local table of known vehicles. A `send` subcommand emits
//! synthetic packets for testing without the game.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{ListenArgs, SendArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "fh-telemetry")]
#[command(about = "Forza Horizon telemetry listener - decode the game's Data Out UDP stream")]
#[command(version)]
#[command(long_about = "
fh-telemetry receives the 311-byte Forza Horizon telemetry packets sent by the
game's Data Out feature, decodes them and displays the car being driven.

Point the game's Data Out IP at this machine and the port at the one shown on
startup. Use --json for one JSON object per frame, suitable for piping.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Listen for telemetry and display the current car
    Listen(ListenArgs),

    /// Send synthetic telemetry packets to a listener
    Send(SendArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so the display on stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "fh_telemetry={log_level},horizon_telemetry_receiver={log_level},horizon_vehicle_db={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = execute_command(&cli).await;

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Listen(args) => commands::listen::execute(args, cli.json).await,
        Commands::Send(args) => commands::send::execute(args, cli.json).await,
    }
}
