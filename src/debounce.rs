//! Time-window debouncing for edge-triggered inputs.

use crate::time::{TimeDuration, TimeInstant};

/// Accepts an event only when enough time has passed since the last accepted one.
///
/// Rejected events do not move the window: a switch that keeps bouncing for
/// longer than the threshold still produces a second accepted event once the
/// threshold has elapsed since the first.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer<I: TimeInstant> {
    last_accepted: Option<I>,
    threshold: I::Duration,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer that has not seen any event yet.
    pub fn new(threshold: I::Duration) -> Self {
        Self {
            last_accepted: None,
            threshold,
        }
    }

    /// Creates a debouncer from a threshold in milliseconds.
    pub fn from_millis(threshold_ms: u64) -> Self {
        Self::new(I::Duration::from_millis(threshold_ms))
    }

    /// Registers an event at `now`, returning `true` if it is accepted.
    ///
    /// The first event is always accepted.
    pub fn accept(&mut self, now: I) -> bool {
        if let Some(last) = self.last_accepted {
            let elapsed = now.duration_since(last);
            if elapsed.as_millis() < self.threshold.as_millis() {
                return false;
            }
        }

        self.last_accepted = Some(now);
        true
    }

    /// Time of the last accepted event.
    #[inline]
    pub fn last_accepted(&self) -> Option<I> {
        self.last_accepted
    }

    /// Minimum spacing between accepted events.
    #[inline]
    pub fn threshold(&self) -> I::Duration {
        self.threshold
    }

    /// Forgets the last accepted event.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
