//! Output formatting for fh-telemetry

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use colored::*;
use horizon_telemetry_forza::TelemetryFrame;
use horizon_telemetry_receiver::{FrameSink, StatsSnapshot};
use horizon_vehicle_db::{VehicleDb, VehicleRecord};
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error.downcast_ref::<CliError>().map_or("error", CliError::kind)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Startup banner naming the bound address and the vehicle table in use.
pub fn print_banner(local_addr: SocketAddr, vehicles: &VehicleDb, json: bool) {
    let table = vehicles
        .path()
        .map_or_else(|| "(in memory)".to_string(), |p| p.display().to_string());

    if json {
        let banner = json!({
            "event": "listening",
            "address": local_addr.to_string(),
            "vehicle_table": table,
            "known_vehicles": vehicles.len(),
        });
        println!("{banner}");
    } else {
        println!("{}", "Forza Horizon Telemetry".bold());
        println!("  Listening on {}", local_addr.to_string().green());
        println!("  Vehicle table: {} ({} known)", table.dimmed(), vehicles.len());
        println!("  Press Ctrl-C to stop");
        println!();
    }
}

/// `ID: {ordinal}\t{year} {make} {model} [ {class} | {pi} ]`
pub fn format_frame_line(frame: &TelemetryFrame, vehicle: &VehicleRecord) -> String {
    format!(
        "ID: {}\t{} [ {} | {} ]",
        frame.car_ordinal, vehicle, frame.car_class, frame.car_pi
    )
}

/// Per-frame JSON object for `--json` output.
pub fn frame_json(frame: &TelemetryFrame, vehicle: &VehicleRecord) -> serde_json::Value {
    json!({
        "car_ordinal": frame.car_ordinal,
        "vehicle": vehicle,
        "class": frame.car_class.as_str(),
        "pi": frame.car_pi,
        "drivetrain": frame.drivetrain.as_str(),
        "is_race_on": frame.is_race_on,
        "timestamp_ms": frame.timestamp_ms,
        "speed_kmh": frame.speed_kmh(),
        "rpm": frame.engine_current_rpm,
        "gear": frame.gear_label(),
        "lap_number": frame.lap_number,
        "race_position": frame.race_position,
    })
}

/// Display sink: resolves each frame's vehicle and writes it to stdout.
///
/// Human mode rewrites a single status line in place; JSON mode prints one
/// object per line.
pub struct ConsoleDisplay {
    vehicles: Arc<VehicleDb>,
    json: bool,
}

impl ConsoleDisplay {
    pub fn new(vehicles: Arc<VehicleDb>, json: bool) -> Self {
        Self { vehicles, json }
    }

    fn render(&self, frame: &TelemetryFrame) -> String {
        let vehicle = self.vehicles.get_vehicle(frame.car_ordinal);
        if self.json {
            format!("{}\n", frame_json(frame, &vehicle))
        } else {
            format!("\r{}\x1b[K", format_frame_line(frame, &vehicle))
        }
    }
}

impl FrameSink for ConsoleDisplay {
    fn on_frame(&self, frame: &TelemetryFrame) {
        let rendered = self.render(frame);
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
        {
            tracing::debug!(error = %e, "Failed to write telemetry display");
        }
    }
}

/// Shutdown summary with receive counters.
pub fn print_listen_summary(stats: &StatsSnapshot, json: bool) {
    if json {
        let summary = json!({
            "event": "stopped",
            "stats": stats,
        });
        println!("{summary}");
    } else {
        println!();
        println!("{}", "Stopped".bold());
        println!(
            "  Frames: {}  Datagrams: {}  Dropped: {}",
            stats.frames_published.to_string().green(),
            stats.datagrams_received,
            stats.dropped().to_string().yellow()
        );
    }
}

/// Summary for the `send` subcommand.
pub fn print_send_summary(target: SocketAddr, sent: u32, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "target": target.to_string(),
            "packets_sent": sent,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format send summary as JSON: {e}"),
        }
    } else {
        println!("Sent {} packet(s) to {}", sent.to_string().green(), target);
    }
}
