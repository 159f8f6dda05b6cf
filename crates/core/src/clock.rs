//! Millisecond clocks with an epoch near process start.
//!
//! Expiration arithmetic only has a 31-bit budget, so readings must be
//! relative to a recent epoch rather than the Unix epoch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of elapsed-millisecond readings.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Clock whose epoch is the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    epoch: Instant,
}

impl ProcessClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ProcessClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Manually driven clock for tests and deterministic callers.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(start_ms),
        }
    }

    /// Move the clock forward, returning the new reading. Saturates at
    /// `u64::MAX` instead of wrapping.
    pub fn advance(&self, delta_ms: u64) -> u64 {
        let prev = self
            .now_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| {
                Some(v.saturating_add(delta_ms))
            })
            .unwrap_or_else(|v| v);
        prev.saturating_add(delta_ms)
    }

    /// Set an absolute reading. May move the clock backwards.
    pub fn set(&self, ms: u64) {
        self.now_ms.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
