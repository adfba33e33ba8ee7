// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncing on host timestamps.

/// Collapses bursts of values into the last one, released after a quiet period.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    quiet_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    /// Creates an empty debouncer with the given quiet period.
    #[must_use]
    pub const fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Quiet period in milliseconds.
    #[must_use]
    pub const fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    /// Records `value` and restarts the quiet period from `now`.
    ///
    /// Returns `true` if an earlier pending value was superseded.
    pub fn schedule(&mut self, value: T, now: u64) -> bool {
        let due = now.saturating_add(self.quiet_ms);
        self.pending.replace((value, due)).is_some()
    }

    /// Releases the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match self.pending {
            Some((_, due)) if now >= due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Timestamp at which the pending value will be released.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Returns `true` if a value is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
