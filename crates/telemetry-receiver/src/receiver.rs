//! UDP receive loop and its lifecycle handle.

use std::net::SocketAddr;
use std::sync::Arc;

use horizon_telemetry_forza::decode;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use crate::config::ReceiverConfig;
use crate::sink::{FrameSink, NullSink};
use crate::slot::{self, FramePublisher, LatestFrame};
use crate::stats::ReceiverStats;
use crate::{ReceiverError, ReceiverResult};

/// Builder for a telemetry receive loop.
///
/// Consumed by [`start`](Self::start); to listen on another port, build a new
/// receiver.
pub struct TelemetryReceiver {
    config: ReceiverConfig,
    sink: Arc<dyn FrameSink>,
}

impl TelemetryReceiver {
    pub fn new(config: ReceiverConfig) -> Self {
        Self {
            config,
            sink: Arc::new(NullSink),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Consumer called with each published frame.
    pub fn with_sink(mut self, sink: Arc<dyn FrameSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    /// Bind the socket and spawn the receive task.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiverError::Bind`] if the address is unavailable, for
    /// example when another process already holds the port.
    pub async fn start(self) -> ReceiverResult<ReceiverHandle> {
        let addr = self.config.bind_addr();
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| ReceiverError::Bind { addr, source })?;
        let local_addr = socket
            .local_addr()
            .map_err(|source| ReceiverError::Bind { addr, source })?;

        info!(%local_addr, "Forza Horizon telemetry receiver listening");

        let (publisher, latest) = slot::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let stats = Arc::new(ReceiverStats::new());

        let task = tokio::spawn(receive_loop(ReceiveLoop {
            socket,
            buffer_size: self.config.effective_buffer_size(),
            publisher,
            sink: self.sink,
            stats: Arc::clone(&stats),
            shutdown: shutdown_rx,
        }));

        Ok(ReceiverHandle {
            local_addr,
            latest,
            stats,
            shutdown: Some(shutdown_tx),
            task,
        })
    }
}

/// Handle to a running receive loop.
///
/// Dropping the handle also stops the loop, but without waiting for the
/// socket to close; call [`stop`](Self::stop) when the port must be free
/// afterwards.
pub struct ReceiverHandle {
    local_addr: SocketAddr,
    latest: LatestFrame,
    stats: Arc<ReceiverStats>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ReceiverHandle {
    /// Address actually bound, with the OS-assigned port when 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn latest(&self) -> LatestFrame {
        self.latest.clone()
    }

    pub fn stats(&self) -> Arc<ReceiverStats> {
        Arc::clone(&self.stats)
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Signal the loop to exit and wait until the socket is closed.
    ///
    /// No frame is published after this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiverError::Task`] if the receive task panicked.
    pub async fn stop(mut self) -> ReceiverResult<()> {
        if let Some(shutdown) = self.shutdown.take()
            && shutdown.send(()).is_err()
        {
            debug!("Receive loop already exited before stop");
        }
        (&mut self.task).await?;
        info!(local_addr = %self.local_addr, "Forza Horizon telemetry receiver stopped");
        Ok(())
    }
}

struct ReceiveLoop {
    socket: UdpSocket,
    buffer_size: usize,
    publisher: FramePublisher,
    sink: Arc<dyn FrameSink>,
    stats: Arc<ReceiverStats>,
    shutdown: oneshot::Receiver<()>,
}

async fn receive_loop(state: ReceiveLoop) {
    let ReceiveLoop {
        socket,
        buffer_size,
        publisher,
        sink,
        stats,
        mut shutdown,
    } = state;
    let mut buf = vec![0u8; buffer_size];

    loop {
        tokio::select! {
            biased;
            // Resolves on an explicit stop and when the handle is dropped.
            _ = &mut shutdown => break,
            received = socket.recv_from(&mut buf) => match received {
                Ok((len, peer)) => {
                    stats.record_datagram();
                    let Some(payload) = buf.get(..len) else {
                        continue;
                    };
                    match decode(payload) {
                        Ok(frame) => {
                            let frame = Arc::new(frame);
                            publisher.publish(Arc::clone(&frame));
                            stats.record_frame();
                            trace!(
                                car_ordinal = frame.car_ordinal,
                                speed = frame.speed,
                                "Published Forza Horizon frame"
                            );
                            sink.on_frame(&frame);
                        }
                        Err(e) => {
                            stats.record_decode_error(&e);
                            debug!(%peer, len, error = %e, "Dropping Forza Horizon datagram");
                        }
                    }
                }
                Err(e) => {
                    stats.record_recv_error();
                    warn!(error = %e, "Forza Horizon UDP receive error");
                }
            },
        }
    }

    drop(socket);
    debug!("Forza Horizon receive loop exited");
}
