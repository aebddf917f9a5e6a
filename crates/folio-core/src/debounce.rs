//! Trailing-edge debounce for values that change in bursts.
//!
//! The store keeps two copies of a value: the live one, updated synchronously
//! on every [`Debounced::set`], and the settled one that renderers read. A
//! single deadline is outstanding at any time; each `set` pushes it back by
//! the full delay, and [`Debounced::poll`] publishes the live value once the
//! deadline has passed. Time is always passed in, so the store works the same
//! under a wall clock and a manual test clock.

use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// Delay used when the configuration does not name one.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Convert a configured delay in milliseconds, clamping negatives to zero.
pub fn settle_delay_from_millis(millis: i64) -> Duration {
    if millis < 0 {
        warn!(millis, "Negative settle delay; clamping to zero");
        return Duration::ZERO;
    }
    Duration::from_millis(millis as u64)
}

#[derive(Debug, Clone)]
pub struct Debounced<T> {
    live: T,
    settled: T,
    delay: Duration,
    deadline: Option<Instant>,
}

impl<T: Clone + PartialEq> Debounced<T> {
    /// The settled value starts equal to `initial`, with nothing pending.
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            live: initial.clone(),
            settled: initial,
            delay,
            deadline: None,
        }
    }

    /// Replace the live value and restart the settle window from `now`.
    pub fn set(&mut self, value: T, now: Instant) {
        self.live = value;
        self.deadline = Some(now + self.delay);
        trace!(delay_ms = self.delay.as_millis() as u64, "Debounce window restarted");
    }

    /// Publish the live value if the deadline has passed.
    ///
    /// Returns the newly settled value, or `None` when nothing was due.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.settled = self.live.clone();
        Some(&self.settled)
    }

    /// Drop the pending deadline without publishing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn live(&self) -> &T {
        &self.live
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

}
