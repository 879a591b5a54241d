//! The pending batch and its coalescing fold

use serde::{Deserialize, Serialize};

use super::NotificationStyle;
use crate::message::Message;

/// The accumulated undrained background messages
///
/// At most one batch exists per process, held by the
/// [`PayloadStore`](super::PayloadStore). A batch always contains at least
/// one message: it is created from one and only ever grows until drained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingBatch {
    messages: Vec<Message>,
}

impl PendingBatch {
    /// Start a batch from the first background message
    pub fn new(message: Message) -> Self {
        Self {
            messages: vec![message],
        }
    }

    /// Fold a message into the batch, newest last
    ///
    /// A message whose id is already present (vendor redelivery) is dropped;
    /// returns whether the batch actually grew.
    pub fn fold(&mut self, message: Message) -> bool {
        if self.messages.iter().any(|m| m.id() == message.id()) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Number of distinct messages pending
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All pending messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently folded message, whose body is the displayed summary
    pub fn newest(&self) -> &Message {
        self.messages.last().expect("a batch always holds a message")
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Render request for the current batch state
    ///
    /// The tap payload is the whole batch, so a tap redelivers everything
    /// pending, not just the message that triggered the latest render.
    pub fn render_params(&self, style: &NotificationStyle) -> RenderParams {
        RenderParams {
            title: style.title_for(self.len()),
            body: style.body_for(self.newest()),
            tag: style.notification_tag.clone(),
            tap_payload: self.messages.clone(),
        }
    }
}

/// Parameters for one render request to the OS notification surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    pub title: String,
    pub body: String,
    /// Stable notification identity; renders with the same tag replace the
    /// visible notification instead of stacking
    pub tag: String,
    /// The entire accumulated batch, redelivered on tap
    pub tap_payload: Vec<Message>,
}
