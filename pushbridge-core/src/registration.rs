//! Registration-lifecycle pass-through

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::bridge::AppEvent;
use crate::error::DeliveryError;

/// Registration-lifecycle events from the vendor transport
///
/// Pass-through data: the core stores nothing and retries nothing (the
/// transport owns the registration handshake and its retry policy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistrationEvent {
    /// A registration id was issued or rotated; the application must forward
    /// it to its server
    Registered { registration_id: String },
    /// This instance is no longer a valid push target
    Unregistered { registration_id: String },
    /// The handshake failed; degrades the push channel but nothing else
    Failed { reason: String },
}

/// Relays registration events onto the application event stream, verbatim
/// and in arrival order
pub struct RegistrationForwarder {
    app_tx: mpsc::UnboundedSender<AppEvent>,
}

impl RegistrationForwarder {
    pub fn new(app_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { app_tx }
    }

    pub fn forward(&self, event: RegistrationEvent) -> Result<(), DeliveryError> {
        self.app_tx
            .send(AppEvent::from(event))
            .map_err(|_| DeliveryError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_are_forwarded_in_arrival_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let forwarder = RegistrationForwarder::new(tx);

        forwarder
            .forward(RegistrationEvent::Registered {
                registration_id: "reg-1".into(),
            })
            .unwrap();
        forwarder
            .forward(RegistrationEvent::Failed {
                reason: "quota exceeded".into(),
            })
            .unwrap();
        forwarder
            .forward(RegistrationEvent::Unregistered {
                registration_id: "reg-1".into(),
            })
            .unwrap();

        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::Register { registration_id } if registration_id == "reg-1"
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::Error { reason } if reason == "quota exceeded"
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::Unregister { registration_id } if registration_id == "reg-1"
        ));
    }

    #[tokio::test]
    async fn closed_channel_reports_delivery_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let forwarder = RegistrationForwarder::new(tx);

        let result = forwarder.forward(RegistrationEvent::Failed {
            reason: "gone".into(),
        });
        assert_eq!(result, Err(DeliveryError::ChannelClosed));
    }

    #[test]
    fn registration_event_serializes_tagged() {
        let event = RegistrationEvent::Registered {
            registration_id: "reg-1".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"registered\""));
        assert!(json.contains("reg-1"));
    }
}
