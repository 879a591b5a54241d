//! Styling policy for the coalesced notification

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Wording and display policy for rendered notifications
///
/// The structural rules (newest body wins, count surfaced when more than one
/// message is pending) live in the batch; everything that is merely wording
/// or preference lives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationStyle {
    /// Application name used as the notification title
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Show message text in the notification body; when disabled the
    /// placeholder body is rendered instead
    #[serde(default = "default_true")]
    pub show_message_preview: bool,

    /// Body text rendered when previews are disabled
    #[serde(default = "default_placeholder_body")]
    pub placeholder_body: String,

    /// Stable tag for the visible notification, so re-renders replace it
    /// rather than stacking a new one per message
    #[serde(default = "default_notification_tag")]
    pub notification_tag: String,
}

fn default_app_name() -> String {
    "pushbridge".into()
}

fn default_true() -> bool {
    true
}

fn default_placeholder_body() -> String {
    "You have new messages".into()
}

fn default_notification_tag() -> String {
    "pushbridge-pending".into()
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            show_message_preview: true,
            placeholder_body: default_placeholder_body(),
            notification_tag: default_notification_tag(),
        }
    }
}

impl NotificationStyle {
    /// Title for a batch of `count` pending messages
    pub fn title_for(&self, count: usize) -> String {
        if count > 1 {
            format!("{} ({} new messages)", self.app_name, count)
        } else {
            self.app_name.clone()
        }
    }

    /// Body text for the batch summary, given its newest message
    pub fn body_for(&self, newest: &Message) -> String {
        if self.show_message_preview {
            newest.body().to_string()
        } else {
            self.placeholder_body.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::message::BODY_KEY;

    fn message(body: &str) -> Message {
        Message::from_payload(HashMap::from([(BODY_KEY.to_string(), body.to_string())]))
    }

    #[test]
    fn default_style() {
        let style = NotificationStyle::default();
        assert_eq!(style.app_name, "pushbridge");
        assert!(style.show_message_preview);
    }

    #[test]
    fn single_message_title_is_the_app_name() {
        let style = NotificationStyle::default();
        assert_eq!(style.title_for(1), "pushbridge");
    }

    #[test]
    fn multi_message_title_carries_the_count() {
        let style = NotificationStyle::default();
        assert_eq!(style.title_for(3), "pushbridge (3 new messages)");
    }

    #[test]
    fn preview_body_uses_the_message_text() {
        let style = NotificationStyle::default();
        assert_eq!(style.body_for(&message("hello")), "hello");
    }

    #[test]
    fn placeholder_body_hides_the_message_text() {
        let style = NotificationStyle {
            show_message_preview: false,
            ..NotificationStyle::default()
        };
        assert_eq!(style.body_for(&message("secret")), "You have new messages");
    }

    #[test]
    fn deserialize_toml() {
        let toml = r#"
            app_name = "Chat"
            show_message_preview = false
        "#;
        let style: NotificationStyle = toml::from_str(toml).unwrap();
        assert_eq!(style.app_name, "Chat");
        assert!(!style.show_message_preview);
        assert_eq!(style.placeholder_body, "You have new messages");
    }

    #[test]
    fn deserialize_toml_defaults() {
        let style: NotificationStyle = toml::from_str("").unwrap();
        assert!(style.show_message_preview);
        assert_eq!(style.notification_tag, "pushbridge-pending");
    }
}
