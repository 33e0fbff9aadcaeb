//! Single-slot latest-frame publication.
//!
//! The receive task is the only writer. Each publish replaces the whole frame
//! under the channel's lock, so readers see either the previous frame or the
//! new one and never a mix of the two.

use std::sync::Arc;

use horizon_telemetry_forza::TelemetryFrame;
use tokio::sync::watch;

type Slot = Option<Arc<TelemetryFrame>>;

/// Writer half, owned by the receive task.
#[derive(Debug)]
pub(crate) struct FramePublisher {
    tx: watch::Sender<Slot>,
}

impl FramePublisher {
    pub(crate) fn publish(&self, frame: Arc<TelemetryFrame>) {
        self.tx.send_replace(Some(frame));
    }
}

/// Reader view of the most recently published frame.
///
/// Cheap to clone; every clone observes the same slot. The last frame stays
/// readable after the receiver stops.
#[derive(Debug, Clone)]
pub struct LatestFrame {
    rx: watch::Receiver<Slot>,
}

pub(crate) fn channel() -> (FramePublisher, LatestFrame) {
    let (tx, rx) = watch::channel(None);
    (FramePublisher { tx }, LatestFrame { rx })
}

impl LatestFrame {
    /// The newest frame, or `None` if nothing valid has arrived yet.
    pub fn get(&self) -> Option<Arc<TelemetryFrame>> {
        self.rx.borrow().clone()
    }

    /// Wait for the next publish after the last one this view observed.
    ///
    /// Returns `None` once the receiver has stopped.
    pub async fn changed(&mut self) -> Option<Arc<TelemetryFrame>> {
        self.rx.changed().await.ok()?;
        self.rx.borrow_and_update().clone()
    }

    /// Wait until the slot holds a frame matching `predicate`.
    ///
    /// Checks the current frame first. Returns `None` if the receiver stops
    /// before a match is published.
    pub async fn wait_for(
        &mut self,
        mut predicate: impl FnMut(&TelemetryFrame) -> bool,
    ) -> Option<Arc<TelemetryFrame>> {
        let slot = self
            .rx
            .wait_for(|slot| slot.as_deref().is_some_and(&mut predicate))
            .await
            .ok()?;
        Option::clone(&slot)
    }
}
