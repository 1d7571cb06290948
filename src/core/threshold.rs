//! Shared severity threshold
//!
//! A single atomic scalar consulted on every log call. Loggers derived
//! via `with()` share one instance by `Arc`; mutation through any of them
//! is immediately visible to the whole lineage. The read path takes no
//! lock and allocates nothing.

use super::level::Level;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug)]
pub struct Threshold {
    level: AtomicU8,
}

impl Threshold {
    pub fn new(level: Level) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    pub fn set(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn get(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// True iff records at `level` pass the gate.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 >= self.level.load(Ordering::Relaxed)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}
