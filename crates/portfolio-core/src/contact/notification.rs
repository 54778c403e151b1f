//! User-visible toast notifications.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::transport::TransportError;

/// Title shown after a message is delivered.
pub const SENT_TITLE: &str = "Message sent!";
/// Body shown after a message is delivered.
pub const SENT_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";
/// Title shown when delivery fails.
pub const FAILED_TITLE: &str = "Message not sent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast raised by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// The delivery confirmation.
    pub fn sent() -> Self {
        Self::new(NotificationKind::Success, SENT_TITLE, SENT_DESCRIPTION)
    }

    /// A delivery failure.
    pub fn failed(err: &TransportError) -> Self {
        Self::new(
            NotificationKind::Error,
            FAILED_TITLE,
            format!("{}. Your message was kept, please try again.", err.user_message()),
        )
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Most notifications a log keeps; older ones are dropped first.
pub const NOTIFICATION_CAPACITY: usize = 50;

/// Recent notifications in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
}

impl NotificationLog {
    /// Appends and returns a reference to the stored notification, dropping
    /// the oldest entry once the log is full.
    pub fn push(&mut self, notification: Notification) -> &Notification {
        if self.entries.len() >= NOTIFICATION_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
        &self.entries[self.entries.len() - 1]
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of success notifications.
    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|n| n.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_notification_text() {
        let n = Notification::sent();
        assert_eq!(n.title, "Message sent!");
        assert_eq!(
            n.description,
            "Thank you for your message. I'll get back to you soon."
        );
        assert!(n.is_success());
    }

    #[test]
    fn test_log_push() {
        let mut log = NotificationLog::default();
        log.push(Notification::sent());
        log.push(Notification::failed(&TransportError::Timeout));

        assert_eq!(log.len(), 2);
        assert_eq!(log.success_count(), 1);
        assert_eq!(log.latest().map(|n| n.kind), Some(NotificationKind::Error));
    }

    #[test]
    fn test_log_drops_oldest_when_full() {
        let mut log = NotificationLog::default();
        log.push(Notification::failed(&TransportError::Timeout));
        for _ in 0..NOTIFICATION_CAPACITY {
            log.push(Notification::sent());
        }

        assert_eq!(log.len(), NOTIFICATION_CAPACITY);
        // the error was the oldest entry
        assert_eq!(log.success_count(), NOTIFICATION_CAPACITY);
        assert!(log.latest().unwrap().is_success());
    }
}
