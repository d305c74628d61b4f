//! Notification module for kb-client
//!
//! Provides a reusable notification system that displays transient messages.
//! Any component in the application can use this module to show notifications;
//! messages auto-dismiss after a configured timeout.

mod state;

pub use state::{Level, Notification, NotificationState};
