//! Command implementations for fh-telemetry

pub mod listen;
pub mod send;

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use clap::Args;
use horizon_telemetry_forza::DEFAULT_PORT;

use crate::config::lenient_port;

const DEFAULT_TARGET: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT));

#[derive(Args, Debug)]
pub struct ListenArgs {
    /// UDP port to listen on (prompted for when omitted; invalid values use 9909)
    #[arg(short, long, env = "FH_TELEMETRY_PORT", value_parser = lenient_port)]
    pub port: Option<u16>,

    /// Bind to 127.0.0.1 instead of all interfaces
    #[arg(long)]
    pub loopback: bool,

    /// Vehicle table JSON file (defaults to the user data directory)
    #[arg(long, env = "FH_TELEMETRY_VEHICLES")]
    pub vehicles: Option<PathBuf>,

    /// Never prompt for the port; use the default when --port is absent
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Listener address
    #[arg(short, long, default_value_t = DEFAULT_TARGET)]
    pub target: SocketAddr,

    /// Car ordinal carried in every packet
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub car_ordinal: i32,

    /// Speed in metres per second
    #[arg(long, default_value_t = 0.0)]
    pub speed: f32,

    /// Number of packets to send
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,

    /// Delay between packets in milliseconds
    #[arg(long, default_value_t = 16)]
    pub interval_ms: u64,
}
