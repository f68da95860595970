//! Cancellable timer for debouncing search input.
//!
//! The caller supplies the clock: every method takes the current `Instant`,
//! so the timer works with any event loop and can be driven from tests.

use std::time::{Duration, Instant};

/// A single-shot timer that restarts each time it is scheduled.
///
/// Scheduling while a timer is pending cancels it, so at most one deadline
/// is armed at a time and it fires at most once.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use lifeorg::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// let start = Instant::now();
///
/// debouncer.schedule(start);
/// assert!(!debouncer.fire(start + Duration::from_millis(100)));
/// assert!(debouncer.fire(start + Duration::from_millis(300)));
/// assert!(!debouncer.fire(start + Duration::from_millis(400)));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates an idle debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer at `now + delay`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` once when the armed deadline has been reached.
    ///
    /// Firing disarms the timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending deadline, zero if it has passed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
