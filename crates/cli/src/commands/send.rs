//! Synthetic packet sender for exercising a listener without the game.

use std::time::Duration;

use anyhow::{Context, Result};
use horizon_telemetry_forza::{PACKET_SIZE, TelemetryFrame, encode};
use tokio::net::UdpSocket;
use tracing::debug;

use crate::commands::SendArgs;
use crate::error::CliError;
use crate::output;

/// Execute the send command.
pub async fn execute(args: &SendArgs, json: bool) -> Result<()> {
    if args.count == 0 {
        return Err(CliError::InvalidConfiguration("--count must be at least 1".to_string()).into());
    }

    let bind_addr = if args.target.is_ipv4() {
        "0.0.0.0:0"
    } else {
        "[::]:0"
    };
    let socket = UdpSocket::bind(bind_addr)
        .await
        .map_err(CliError::from)
        .context("Failed to bind sender socket")?;

    let interval = Duration::from_millis(args.interval_ms);
    for (sequence, frame) in (0..args.count).map(|i| (i, frame_for(args, i))) {
        let packet = encode(&frame);
        debug_assert_eq!(packet.len(), PACKET_SIZE);

        socket
            .send_to(&packet, args.target)
            .await
            .map_err(CliError::from)
            .with_context(|| format!("Failed to send packet to {}", args.target))?;
        debug!(sequence, target = %args.target, "Sent synthetic packet");

        if sequence + 1 < args.count && !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }

    output::print_send_summary(args.target, args.count, json);
    Ok(())
}

/// Frame number `sequence` of a synthetic run: race on, fixed car and speed,
/// timestamp advancing by the send interval.
fn frame_for(args: &SendArgs, sequence: u32) -> TelemetryFrame {
    let step = u32::try_from(args.interval_ms).unwrap_or(u32::MAX);
    TelemetryFrame {
        is_race_on: true,
        timestamp_ms: sequence.wrapping_mul(step),
        car_ordinal: args.car_ordinal,
        speed: args.speed,
        gear: 1,
        ..Default::default()
    }
}
