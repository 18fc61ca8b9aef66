//! Toast notification contract.
//!
//! Fire-and-forget success/error notifications. The cart store and the
//! checkout controller emit already-translated messages; rendering them
//! is the host application's concern.

use std::sync::Mutex;

/// Fire-and-forget notification collaborator.
pub trait Notifier: Send + Sync {
    /// Show a success notification.
    fn notify_success(&self, message: &str);

    /// Show an error notification.
    fn notify_error(&self, message: &str);
}

/// Notifier that discards all notifications.
#[derive(Debug, Clone, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify_success(&self, _message: &str) {}

    fn notify_error(&self, _message: &str) {}
}

/// The kind of a recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Notifier that records every notification, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded notifications in emission order.
    pub fn entries(&self) -> Vec<(NotificationKind, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Recorded success messages.
    pub fn successes(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(kind, _)| *kind == NotificationKind::Success)
            .map(|(_, msg)| msg)
            .collect()
    }

    /// Recorded error messages.
    pub fn errors(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(kind, _)| *kind == NotificationKind::Error)
            .map(|(_, msg)| msg)
            .collect()
    }

    /// Clear recorded notifications.
    pub fn reset(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((NotificationKind::Success, message.to_string()));
        }
    }

    fn notify_error(&self, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((NotificationKind::Error, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify_success("first");
        notifier.notify_error("second");
        notifier.notify_success("third");

        let entries = notifier.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], (NotificationKind::Error, "second".to_string()));
        assert_eq!(notifier.successes(), vec!["first", "third"]);
        assert_eq!(notifier.errors(), vec!["second"]);
    }
}
