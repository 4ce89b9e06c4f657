// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit debounce for coalescing modification bursts.

/// Coalesces a burst of change notifications into one recompute.
///
/// The component is clock-agnostic: callers pass their own monotonic
/// millisecond timestamps, so it runs unchanged under a UI timer, a frame
/// loop, or a test that advances time by hand. There is no ambient timer
/// handle anywhere.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Create a debounce with the given settle delay.
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Configured settle delay in milliseconds.
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Schedule (or push back) the deadline to `now_ms + delay`.
    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Drop any pending deadline.
    pub fn cancel_pending(&mut self) {
        self.deadline = None;
    }

    /// True while a deadline is armed.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Returns `true` at most once
    /// per scheduled burst.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
