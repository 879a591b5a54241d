//! The per-process bridge context and its boundary seams

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::notify::{NotificationStyle, PayloadStore, PendingBatch, RenderParams};
use crate::registration::{RegistrationEvent, RegistrationForwarder};
use crate::routing::{DeliveryAction, DeliveryRouter, ForegroundTracker};

/// OS notification surface seam
///
/// Both calls are fire-and-forget from the core's perspective: the surface
/// owns render success and failure, and the core never inspects the result.
#[async_trait]
pub trait RenderSurface: Send + Sync {
    /// Show the coalesced notification, replacing any earlier render with
    /// the same tag
    async fn render(&self, request: RenderParams);

    /// Remove the visible notification, if any
    async fn clear(&self);
}

/// Events on the application-boundary stream, in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// New or rotated registration id for the application to relay to its
    /// server
    Register { registration_id: String },
    /// This instance stopped being a valid push target
    Unregister { registration_id: String },
    /// Registration failure, forwarded verbatim and never retried here
    Error { reason: String },
    /// Payload hand-off; `foreground` tells the application whether the
    /// messages were delivered live or queued while backgrounded
    Push {
        messages: Vec<Message>,
        foreground: bool,
    },
}

impl From<RegistrationEvent> for AppEvent {
    fn from(event: RegistrationEvent) -> Self {
        match event {
            RegistrationEvent::Registered { registration_id } => {
                AppEvent::Register { registration_id }
            }
            RegistrationEvent::Unregistered { registration_id } => {
                AppEvent::Unregister { registration_id }
            }
            RegistrationEvent::Failed { reason } => AppEvent::Error { reason },
        }
    }
}

/// One bridge instance per process
///
/// Owns the foreground tracker, payload store and router, and replaces the
/// original plugin's static mutable state with explicitly injected
/// instances, so tests and hosts control the full lifetime.
pub struct PushBridge {
    foreground: Arc<ForegroundTracker>,
    store: Arc<PayloadStore>,
    router: DeliveryRouter,
    registration: RegistrationForwarder,
    app_tx: mpsc::UnboundedSender<AppEvent>,
    surface: Arc<dyn RenderSurface>,
}

impl PushBridge {
    /// Build a bridge and the receiving end of its application event stream
    pub fn new(
        style: NotificationStyle,
        surface: Arc<dyn RenderSurface>,
    ) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (app_tx, app_rx) = mpsc::unbounded_channel();
        let foreground = Arc::new(ForegroundTracker::new());
        let store = Arc::new(PayloadStore::new());
        let router = DeliveryRouter::new(Arc::clone(&foreground), Arc::clone(&store), style);
        let registration = RegistrationForwarder::new(app_tx.clone());

        let bridge = Self {
            foreground,
            store,
            router,
            registration,
            app_tx,
            surface,
        };
        (bridge, app_rx)
    }

    /// Inbound push from the vendor transport
    ///
    /// Never fails: partial payloads default their missing fields to empty
    /// strings.
    pub async fn on_message(&self, payload: HashMap<String, String>) {
        let message = Message::from_payload(payload);
        match self.router.handle_incoming(message).await {
            DeliveryAction::Deliver(message) => {
                self.send_app_event(AppEvent::Push {
                    messages: vec![message],
                    foreground: true,
                });
            }
            DeliveryAction::Notify(request) => {
                self.surface.render(request).await;
            }
        }
    }

    /// A registration id was issued or rotated
    pub fn on_registered(&self, registration_id: &str) {
        self.forward_registration(RegistrationEvent::Registered {
            registration_id: registration_id.to_string(),
        });
    }

    /// This instance stopped being a valid push target
    pub fn on_unregistered(&self, registration_id: &str) {
        self.forward_registration(RegistrationEvent::Unregistered {
            registration_id: registration_id.to_string(),
        });
    }

    /// The registration handshake failed
    ///
    /// Degrades the push channel for this instance; unrelated message
    /// handling continues.
    pub fn on_registration_error(&self, reason: &str) {
        self.forward_registration(RegistrationEvent::Failed {
            reason: reason.to_string(),
        });
    }

    /// The UI layer entered the foreground
    ///
    /// Anything queued while backgrounded is drained and handed over, so an
    /// app opened directly (not via the notification) still receives its
    /// pending payloads.
    pub async fn on_foreground_enter(&self) {
        self.foreground.set_foreground(true);
        self.deliver_pending().await;
    }

    /// The UI layer left the foreground
    pub fn on_foreground_exit(&self) {
        self.foreground.set_foreground(false);
    }

    /// The user tapped the coalesced notification
    pub async fn on_notification_opened(&self) {
        self.deliver_pending().await;
    }

    /// Snapshot of everything queued, without consuming it
    pub async fn pending(&self) -> Option<PendingBatch> {
        self.store.peek().await
    }

    async fn deliver_pending(&self) {
        if let Some(batch) = self.store.drain().await {
            debug!(count = batch.len(), "handing drained batch to application");
            self.send_app_event(AppEvent::Push {
                messages: batch.into_messages(),
                foreground: false,
            });
            self.surface.clear().await;
        }
    }

    fn forward_registration(&self, event: RegistrationEvent) {
        if self.registration.forward(event).is_err() {
            warn!("dropping registration event, application channel closed");
        }
    }

    fn send_app_event(&self, event: AppEvent) {
        if self.app_tx.send(event).is_err() {
            warn!("dropping app event, application channel closed");
        }
    }
}
