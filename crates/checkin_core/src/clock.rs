//! Injected date capability.
//!
//! # Responsibility
//! - Supply the day key (`YYYY-MM-DD`, device-local timezone) that rollover
//!   decisions compare against.
//!
//! # Invariants
//! - Rollover logic never reads the system clock directly; it always goes
//!   through this trait so tests can simulate date changes.

use chrono::Local;
use std::cell::RefCell;

/// Source of the current day key.
pub trait Clock {
    /// Returns today's key as `YYYY-MM-DD` in the local timezone.
    fn today_key(&self) -> String;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today_key(&self) -> String {
        (**self).today_key()
    }
}

/// Real clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_key(&self) -> String {
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    }
}

/// Settable clock for tests and simulated rollover scenarios.
#[derive(Debug)]
pub struct FixedClock {
    key: RefCell<String>,
}

impl FixedClock {
    pub fn new(day_key: impl Into<String>) -> Self {
        Self {
            key: RefCell::new(day_key.into()),
        }
    }

    /// Moves the simulated date; the next `today_key` call sees the new day.
    pub fn set(&self, day_key: impl Into<String>) {
        *self.key.borrow_mut() = day_key.into();
    }
}

impl Clock for FixedClock {
    fn today_key(&self) -> String {
        self.key.borrow().clone()
    }
}
