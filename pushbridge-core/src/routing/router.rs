//! Per-message routing between direct delivery and queue-and-notify

use std::sync::Arc;

use tracing::debug;

use super::ForegroundTracker;
use crate::message::Message;
use crate::notify::{NotificationStyle, PayloadStore, RenderParams};

/// Outcome of routing one inbound message
///
/// Exactly one variant's side effect has happened by the time the router
/// returns: either nothing was queued (Deliver) or the message was folded
/// into the pending batch (Notify).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryAction {
    /// Hand the message straight to the foregrounded application
    Deliver(Message),
    /// The message was queued; render this request on the OS surface
    Notify(RenderParams),
}

/// Decides, per inbound message, between direct delivery and coalescing
pub struct DeliveryRouter {
    foreground: Arc<ForegroundTracker>,
    store: Arc<PayloadStore>,
    style: NotificationStyle,
}

impl DeliveryRouter {
    pub fn new(
        foreground: Arc<ForegroundTracker>,
        store: Arc<PayloadStore>,
        style: NotificationStyle,
    ) -> Self {
        Self {
            foreground,
            store,
            style,
        }
    }

    /// Route one message; total over all well-formed input
    pub async fn handle_incoming(&self, message: Message) -> DeliveryAction {
        if self.foreground.is_foreground() {
            debug!(id = %message.id(), "delivering message directly to foregrounded app");
            DeliveryAction::Deliver(message)
        } else {
            debug!(id = %message.id(), "app backgrounded, coalescing message for notification");
            let request = self.store.coalesce(message, &self.style).await;
            DeliveryAction::Notify(request)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::message::{BODY_KEY, MSG_ID_KEY};

    fn message(id: &str, body: &str) -> Message {
        Message::from_payload(HashMap::from([
            (MSG_ID_KEY.to_string(), id.to_string()),
            (BODY_KEY.to_string(), body.to_string()),
        ]))
    }

    fn router() -> (DeliveryRouter, Arc<ForegroundTracker>, Arc<PayloadStore>) {
        let foreground = Arc::new(ForegroundTracker::new());
        let store = Arc::new(PayloadStore::new());
        let router = DeliveryRouter::new(
            Arc::clone(&foreground),
            Arc::clone(&store),
            NotificationStyle::default(),
        );
        (router, foreground, store)
    }

    #[tokio::test]
    async fn foregrounded_app_gets_direct_delivery() {
        let (router, foreground, store) = router();
        foreground.set_foreground(true);

        let action = router.handle_incoming(message("m-1", "A")).await;

        assert!(matches!(action, DeliveryAction::Deliver(m) if m.id() == "m-1"));
        assert!(store.peek().await.is_none(), "store must stay untouched");
    }

    #[tokio::test]
    async fn backgrounded_app_gets_a_notification() {
        let (router, _foreground, store) = router();

        let action = router.handle_incoming(message("m-1", "A")).await;

        match action {
            DeliveryAction::Notify(request) => {
                assert_eq!(request.body, "A");
                assert_eq!(request.tap_payload.len(), 1);
            }
            DeliveryAction::Deliver(_) => panic!("backgrounded message must not be delivered"),
        }
        assert_eq!(store.peek().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn consecutive_background_messages_coalesce() {
        let (router, _foreground, store) = router();

        router.handle_incoming(message("m-1", "A")).await;
        let action = router.handle_incoming(message("m-2", "B")).await;

        match action {
            DeliveryAction::Notify(request) => {
                assert_eq!(request.body, "B", "newest body wins");
                assert_eq!(request.title, "pushbridge (2 new messages)");
            }
            DeliveryAction::Deliver(_) => panic!("backgrounded message must not be delivered"),
        }

        let batch = store.drain().await.unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[tokio::test]
    async fn routing_follows_the_current_foreground_state() {
        let (router, foreground, store) = router();

        router.handle_incoming(message("m-1", "A")).await;
        foreground.set_foreground(true);
        let action = router.handle_incoming(message("m-2", "B")).await;

        // The earlier queued message stays queued; the new one is delivered.
        assert!(matches!(action, DeliveryAction::Deliver(m) if m.id() == "m-2"));
        assert_eq!(store.peek().await.unwrap().len(), 1);
    }
}
