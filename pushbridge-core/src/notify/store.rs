//! The single pending-batch slot

use tokio::sync::Mutex;

use super::{NotificationStyle, PendingBatch, RenderParams};
use crate::message::Message;

/// Holder of the zero-or-one pending batch
///
/// The slot is the only shared mutable state in the core. Every access goes
/// through one mutex, so a drain triggered by a notification tap can never
/// race with a coalesce triggered by a concurrently arriving message: a
/// message folded before the drain acquires the lock is included in the
/// drained batch, one folded after starts a fresh batch.
#[derive(Debug, Default)]
pub struct PayloadStore {
    slot: Mutex<Option<PendingBatch>>,
}

impl PayloadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot contents wholesale
    pub async fn put(&self, batch: PendingBatch) {
        *self.slot.lock().await = Some(batch);
    }

    /// Take the pending batch and empty the slot in one observable step
    pub async fn drain(&self) -> Option<PendingBatch> {
        self.slot.lock().await.take()
    }

    /// Snapshot the pending batch without consuming it
    pub async fn peek(&self) -> Option<PendingBatch> {
        self.slot.lock().await.clone()
    }

    /// Discard the pending batch without returning it
    pub async fn clear(&self) {
        *self.slot.lock().await = None;
    }

    /// Fold a message into the pending batch, creating the batch if the slot
    /// is empty, and produce the render request for the updated state
    ///
    /// Fold and store happen under a single lock acquisition, so a
    /// concurrent [`drain`](Self::drain) sees either the whole updated batch
    /// or none of it.
    pub async fn coalesce(&self, message: Message, style: &NotificationStyle) -> RenderParams {
        let mut slot = self.slot.lock().await;
        let batch = match slot.take() {
            Some(mut batch) => {
                batch.fold(message);
                batch
            }
            None => PendingBatch::new(message),
        };
        let request = batch.render_params(style);
        *slot = Some(batch);
        request
    }
}
