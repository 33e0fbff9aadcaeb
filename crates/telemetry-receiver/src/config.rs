//! Receiver configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use horizon_telemetry_forza::{DEFAULT_PORT, PACKET_SIZE};
use serde::{Deserialize, Serialize};

/// Receive buffer size. Larger than any valid packet so oversized datagrams
/// are seen as such instead of being silently truncated to 311 bytes.
pub const MAX_DATAGRAM_SIZE: usize = 2048;

/// Interface the socket binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindMode {
    /// All IPv4 interfaces (`0.0.0.0`).
    #[default]
    Any,
    /// Loopback only (`127.0.0.1`).
    Loopback,
}

impl BindMode {
    pub fn ip(self) -> IpAddr {
        match self {
            BindMode::Any => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            BindMode::Loopback => IpAddr::V4(Ipv4Addr::LOCALHOST),
        }
    }
}

/// Socket settings fixed for the lifetime of one receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverConfig {
    /// UDP port; 0 asks the OS for an ephemeral port.
    pub port: u16,
    pub bind: BindMode,
    /// Bytes reserved per receive. Values at or below the packet size are
    /// raised so oversized datagrams stay detectable.
    pub recv_buffer_size: usize,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: BindMode::Any,
            recv_buffer_size: MAX_DATAGRAM_SIZE,
        }
    }
}

impl ReceiverConfig {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Loopback-only configuration, typically with port 0 in tests.
    pub fn loopback(port: u16) -> Self {
        Self {
            port,
            bind: BindMode::Loopback,
            ..Default::default()
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind.ip(), self.port)
    }

    pub(crate) fn effective_buffer_size(&self) -> usize {
        self.recv_buffer_size.max(PACKET_SIZE + 1)
    }
}

/// Parse an operator-supplied port, falling back to [`DEFAULT_PORT`] on empty
/// or invalid input.
pub fn port_from_input(input: &str) -> u16 {
    input.trim().parse::<u16>().unwrap_or(DEFAULT_PORT)
}
