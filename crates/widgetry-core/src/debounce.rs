//! Debouncing and latest-wins request sequencing.
//!
//! Neither type owns a timer. The caller arms one timer per [`Ticket`] and
//! hands the ticket back to [`Debouncer::settle`] when it fires; only the
//! most recent ticket yields a value. Dropping or clearing superseded timers
//! is an optimisation, not a correctness requirement.

use std::time::Duration;

/// Identifies one [`Debouncer::submit`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Holds the most recent input until a quiet period has elapsed.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    latest: u64,
    pending: Option<T>,
    settled: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// A debouncer whose quiet period is `delay`.
    ///
    /// `initial` counts as already settled, so submitting it again is a no-op.
    pub fn new(delay: Duration, initial: Option<T>) -> Self {
        Self {
            delay,
            latest: 0,
            pending: None,
            settled: initial,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value. Every earlier ticket becomes stale.
    pub fn submit(&mut self, value: T) -> Ticket {
        self.latest += 1;
        self.pending = Some(value);
        Ticket(self.latest)
    }

    /// Called when the timer armed for `ticket` fires.
    ///
    /// Returns the pending value if `ticket` is still the latest and the value
    /// differs from the last settled one.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.latest {
            return None;
        }
        let value = self.pending.take()?;
        if self.settled.as_ref() == Some(&value) {
            return None;
        }
        self.settled = Some(value.clone());
        Some(value)
    }

    /// Drop the pending value; no outstanding ticket will settle.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = None;
    }

    /// The last value that settled (or the initial one).
    pub fn settled(&self) -> Option<&T> {
        self.settled.as_ref()
    }
}

/// Identifies one request started by [`RequestSequence::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Tracks which in-flight request is the newest.
///
/// A response is applied only if its ticket is still the latest, so a slow
/// response can never overwrite the result of a newer request.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
