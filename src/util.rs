// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Small shared utilities: id generation, the event clock, and system
//! gesture timeouts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use instant::Instant;
use once_cell::sync::Lazy;

/// The default tap timeout in milliseconds.
///
/// Two presses of the same button by the same pointer within this window are
/// counted as successive taps.
pub const DEFAULT_TAP_TIMEOUT: u64 = 500;

/// The default long press timeout in milliseconds.
pub const DEFAULT_LONG_PRESS_TIMEOUT: u64 = 500;

/// The tap timeout.
///
/// Platforms usually expose this as a user preference (the double-click
/// interval); without a platform hook this falls back to
/// [`DEFAULT_TAP_TIMEOUT`].
pub fn tap_timeout() -> Duration {
    Duration::from_millis(DEFAULT_TAP_TIMEOUT)
}

/// The long press timeout.
///
/// See [`tap_timeout`] for the relationship to platform preferences.
pub fn long_press_timeout() -> Duration {
    Duration::from_millis(DEFAULT_LONG_PRESS_TIMEOUT)
}

static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Milliseconds elapsed since this clock was first consulted.
///
/// Event timestamps only need to be comparable to each other, so the epoch is
/// arbitrary. The clock is monotonic and works on wasm targets.
pub fn timestamp_millis() -> u64 {
    EPOCH.elapsed().as_millis() as u64
}

/// An incrementing counter for generating unique ids.
///
/// This can be used safely from multiple threads.
///
/// The counter will overflow if `next()` is called 2^64 - 2 times.
/// If this is possible for your application, and reuse would be undesirable,
/// use something else.
pub struct Counter(AtomicU64);

impl Counter {
    /// Create a new counter.
    pub const fn new() -> Counter {
        Counter(AtomicU64::new(1))
    }

    /// Return the next value.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_monotonic() {
        let counter = Counter::new();
        let a = counter.next();
        let b = counter.next();
        assert!(b > a);
    }

    #[test]
    fn clock_does_not_go_backwards() {
        let a = timestamp_millis();
        let b = timestamp_millis();
        assert!(b >= a);
    }

    #[test]
    fn default_timeouts() {
        assert_eq!(tap_timeout(), Duration::from_millis(500));
        assert_eq!(long_press_timeout(), Duration::from_millis(500));
    }
}
