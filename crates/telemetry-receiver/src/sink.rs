//! Frame consumers invoked by the receive loop.

use horizon_telemetry_forza::TelemetryFrame;

/// Consumer notified of every frame the receiver publishes.
///
/// Called on the receive task right after the latest-frame slot is updated,
/// so implementations must return quickly. Anything slow (disk, network,
/// terminal blocking) belongs behind the implementation's own queue.
pub trait FrameSink: Send + Sync {
    fn on_frame(&self, frame: &TelemetryFrame);
}

/// Sink that discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn on_frame(&self, _frame: &TelemetryFrame) {}
}

impl<F> FrameSink for F
where
    F: Fn(&TelemetryFrame) + Send + Sync,
{
    fn on_frame(&self, frame: &TelemetryFrame) {
        self(frame);
    }
}
