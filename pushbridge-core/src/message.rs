//! Inbound push message payloads

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload key carrying the vendor-assigned message id, when the transport
/// supplies one
pub const MSG_ID_KEY: &str = "msgId";

/// Payload key carrying the display body text
pub const BODY_KEY: &str = "message";

/// One message as delivered by the vendor push transport
///
/// The payload is an opaque string map; the core never interprets it beyond
/// the [`MSG_ID_KEY`] and [`BODY_KEY`] entries. Missing entries read as the
/// empty string, so construction and access are total even for partial
/// payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    data: HashMap<String, String>,
    received_at: DateTime<Utc>,
}

impl Message {
    /// Build a message from a raw transport payload
    ///
    /// Identity is the payload's [`MSG_ID_KEY`] value when present, otherwise
    /// a freshly minted UUID. Vendor redeliveries carry the same id and are
    /// deduplicated when folded into a pending batch; payloads without ids
    /// are never conflated with each other.
    pub fn from_payload(payload: HashMap<String, String>) -> Self {
        let id = payload
            .get(MSG_ID_KEY)
            .cloned()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        Self {
            id,
            data: payload,
            received_at: Utc::now(),
        }
    }

    /// Message identity used for redelivery deduplication
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display body text, empty if the transport omitted it
    pub fn body(&self) -> &str {
        self.get(BODY_KEY)
    }

    /// Look up a payload entry, defaulting missing keys to the empty string
    pub fn get(&self, key: &str) -> &str {
        self.data.get(key).map(String::as_str).unwrap_or("")
    }

    /// The full opaque payload
    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    /// When this message arrived at the bridge
    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}
