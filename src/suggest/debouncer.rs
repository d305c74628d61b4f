//! Debounce timer slot for the search suggester.
//!
//! At most one deadline is outstanding at a time: arming replaces any pending
//! deadline, cancelling clears it. The owner polls from its event loop; the
//! deadline fires exactly once.

use std::time::{Duration, Instant};

/// One cancellable delay slot.
///
/// Owned exclusively by a single suggester instance. Two deadlines never
/// coexist: [`Debouncer::arm`] overwrites, [`Debouncer::cancel`] clears.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet-period length.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm the timer at `now + delay`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is outstanding.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the deadline if it has elapsed.
    ///
    /// Returns true at most once per arming: firing consumes the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The configured quiet-period length.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
