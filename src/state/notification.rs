/// Transient user-facing notifications
///
/// Notifications are short, auto-dismissing banners with a severity tag
/// used only for presentation styling. Several may be on screen at once
/// and each dismisses independently after a fixed interval.

use std::time::Duration;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Presentation severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A single transient message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique id used to dismiss exactly this notification later
    pub id: u64,
    /// The message shown to the user
    pub message: String,
    /// Presentation severity
    pub severity: Severity,
}

/// The stack of currently visible notifications
///
/// Ids are allocated from a monotonic counter so a late expiry timer can
/// never dismiss a newer notification that reused a slot.
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    /// Create an empty notification stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new notification and return its id
    ///
    /// The caller is responsible for scheduling the matching dismissal
    /// after `NOTIFICATION_TTL`.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
        });

        id
    }

    /// Remove the notification with the given id
    ///
    /// Dismissing an id that already expired is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notification| notification.id != id);
    }

    /// Currently visible notifications, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Whether anything is on screen
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut notifications = Notifications::new();

        let a = notifications.push(Severity::Info, "first");
        let b = notifications.push(Severity::Error, "second");

        assert!(b > a);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut notifications = Notifications::new();

        let a = notifications.push(Severity::Success, "copied");
        let _b = notifications.push(Severity::Error, "upload failed");

        notifications.dismiss(a);

        let remaining: Vec<_> = notifications.iter().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "upload failed");
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut notifications = Notifications::new();
        notifications.push(Severity::Info, "hello");

        notifications.dismiss(999);

        assert!(!notifications.is_empty());
    }

    #[test]
    fn test_timers_do_not_interfere() {
        // Two notifications pushed together, dismissed in either order,
        // never disturb each other
        let mut notifications = Notifications::new();

        let a = notifications.push(Severity::Info, "one");
        let b = notifications.push(Severity::Info, "two");

        notifications.dismiss(b);
        assert_eq!(notifications.iter().count(), 1);

        notifications.dismiss(a);
        assert!(notifications.is_empty());
    }
}
