//! Listen for telemetry until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use horizon_telemetry_receiver::{BindMode, ReceiverConfig, TelemetryReceiver};
use horizon_vehicle_db::VehicleDb;
use tracing::info;

use crate::commands::ListenArgs;
use crate::config::{default_vehicles_path, prompt_port, resolve_port};
use crate::error::CliError;
use crate::output::{self, ConsoleDisplay};

/// Execute the listen command.
pub async fn execute(args: &ListenArgs, json: bool) -> Result<()> {
    let port = resolve_port(args.port, args.no_prompt || json, prompt_port);
    let vehicles_path = args
        .vehicles
        .clone()
        .unwrap_or_else(default_vehicles_path);
    let vehicles = Arc::new(VehicleDb::open(vehicles_path));

    let config = ReceiverConfig {
        port,
        bind: if args.loopback {
            BindMode::Loopback
        } else {
            BindMode::Any
        },
        ..Default::default()
    };

    let display = Arc::new(ConsoleDisplay::new(Arc::clone(&vehicles), json));
    let handle = TelemetryReceiver::new(config)
        .with_sink(display)
        .start()
        .await
        .map_err(CliError::from)?;

    output::print_banner(handle.local_addr(), &vehicles, json);

    tokio::signal::ctrl_c()
        .await
        .context("Failed to wait for Ctrl-C")?;
    info!("Interrupt received, stopping");

    let stats = handle.stats();
    handle.stop().await.map_err(CliError::from)?;
    output::print_listen_summary(&stats.snapshot(), json);

    vehicles.save().map_err(CliError::from)?;
    Ok(())
}
