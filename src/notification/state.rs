//! Transient notification state.

use std::time::{Duration, Instant};

/// Default lifetime of a notification before it auto-dismisses.
pub const DEFAULT_DISMISS: Duration = Duration::from_millis(3000);

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

/// One transient message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: Level,
    shown_at: Instant,
}

/// Holds at most one notification; a new message replaces the current one.
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    dismiss_after: Duration,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS)
    }
}

impl NotificationState {
    /// Create a notification slot with the given auto-dismiss timeout.
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            current: None,
            dismiss_after,
        }
    }

    /// Show a message, replacing whatever is currently displayed.
    pub fn push(&mut self, message: impl Into<String>, level: Level, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            level,
            shown_at: now,
        });
    }

    /// Auto-dismiss the current message once its lifetime has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notification) = &self.current
            && now.duration_since(notification.shown_at) >= self.dismiss_after
        {
            self.current = None;
        }
    }

    /// Explicitly dismiss the current message.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let state = NotificationState::default();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_push_shows_message() {
        let mut state = NotificationState::default();
        let now = Instant::now();

        state.push("Saved", Level::Success, now);

        let notification = state.current().unwrap();
        assert_eq!(notification.message, "Saved");
        assert_eq!(notification.level, Level::Success);
    }

    #[test]
    fn test_push_replaces_current_message() {
        let mut state = NotificationState::default();
        let now = Instant::now();

        state.push("First", Level::Info, now);
        state.push("Second", Level::Error, now);

        assert_eq!(state.current().unwrap().message, "Second");
    }

    #[test]
    fn test_message_survives_until_timeout() {
        let mut state = NotificationState::new(Duration::from_millis(3000));
        let now = Instant::now();

        state.push("Hold on", Level::Info, now);
        state.tick(now + Duration::from_millis(2999));

        assert!(state.current().is_some());
    }

    #[test]
    fn test_message_auto_dismisses_after_timeout() {
        let mut state = NotificationState::new(Duration::from_millis(3000));
        let now = Instant::now();

        state.push("Going away", Level::Info, now);
        state.tick(now + Duration::from_millis(3000));

        assert!(state.current().is_none());
    }

    #[test]
    fn test_replacement_restarts_lifetime() {
        let mut state = NotificationState::new(Duration::from_millis(3000));
        let now = Instant::now();

        state.push("First", Level::Info, now);
        state.push("Second", Level::Info, now + Duration::from_millis(2000));

        // First message's deadline has passed, second's has not
        state.tick(now + Duration::from_millis(4000));
        assert_eq!(state.current().unwrap().message, "Second");

        state.tick(now + Duration::from_millis(5000));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_explicit_dismiss() {
        let mut state = NotificationState::default();
        state.push("Close me", Level::Error, Instant::now());

        state.dismiss();

        assert!(state.current().is_none());
    }

    #[test]
    fn test_tick_on_empty_state_is_noop() {
        let mut state = NotificationState::default();
        state.tick(Instant::now());
        assert!(state.current().is_none());
    }
}
