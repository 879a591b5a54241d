//! pushbridge-core: delivery reconciliation for a client-side push bridge
//!
//! This crate is the decision core sitting between a vendor push transport,
//! the OS notification surface and the consuming application:
//!
//! - **Routing** - [`DeliveryRouter`] decides per message between direct
//!   delivery (app foregrounded) and queue-and-notify (app backgrounded)
//! - **Coalescing** - [`PendingBatch`] folds queued messages into one
//!   visible notification instead of stacking one per message
//! - **The slot** - [`PayloadStore`] owns the single pending batch and makes
//!   drain-vs-arrival races safe
//! - **Lifecycle** - [`ForegroundTracker`] records whether the app can take
//!   direct delivery
//! - **Wiring** - [`PushBridge`] is the per-process context the transport,
//!   UI layer and notification surface call into
//!
//! Transport, UI and OS adapters live outside this crate; they appear here
//! only as the [`RenderSurface`] seam and the [`AppEvent`] stream.
//!
//! # Flow
//!
//! ```text
//! vendor transport ──▶ PushBridge::on_message ──▶ DeliveryRouter
//!                                                    │
//!                         foregrounded? ── yes ──▶ AppEvent::Push (live)
//!                                │
//!                                no
//!                                ▼
//!                     PayloadStore::coalesce ──▶ RenderSurface::render
//!                                │
//!       tap / foreground enter ──▶ drain ──▶ AppEvent::Push (queued)
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use pushbridge_core::{NotificationStyle, PushBridge, RenderParams, RenderSurface};
//!
//! struct NoopSurface;
//!
//! #[async_trait::async_trait]
//! impl RenderSurface for NoopSurface {
//!     async fn render(&self, _request: RenderParams) {}
//!     async fn clear(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (bridge, mut app_events) =
//!         PushBridge::new(NotificationStyle::default(), Arc::new(NoopSurface));
//!
//!     bridge.on_foreground_enter().await;
//!     bridge
//!         .on_message(HashMap::from([("message".to_string(), "hi".to_string())]))
//!         .await;
//!
//!     if let Some(event) = app_events.recv().await {
//!         println!("app received: {event:?}");
//!     }
//! }
//! ```

pub mod bridge;
pub mod error;
pub mod message;
pub mod notify;
pub mod registration;
pub mod routing;

// Re-export key types for convenience
pub use bridge::{AppEvent, PushBridge, RenderSurface};
pub use error::DeliveryError;
pub use message::Message;
pub use notify::{NotificationStyle, PayloadStore, PendingBatch, RenderParams};
pub use registration::{RegistrationEvent, RegistrationForwarder};
pub use routing::{DeliveryAction, DeliveryRouter, ForegroundTracker};
