//! Source of the current year for the birth-year rule

use chrono::Datelike;
use std::fmt::Debug;

/// Supplies the calendar year the year rule is evaluated against.
pub trait Clock: Debug {
    fn current_year(&self) -> i32;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
