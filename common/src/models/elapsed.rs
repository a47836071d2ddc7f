//! # Elapsed Time
//!
//! Whole seconds as reported to the operator.

use std::fmt;

pub const SECS_IN_MIN: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElapsedTime(u64);

impl ElapsedTime {
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Whole minutes, rounded down.
    pub fn minutes(&self) -> u64 {
        self.0 / SECS_IN_MIN
    }

    /// Seconds left over after [`ElapsedTime::minutes`].
    pub fn seconds(&self) -> u64 {
        self.0 % SECS_IN_MIN
    }
}

impl fmt::Display for ElapsedTime {
    /// Renders `N seconds` below a minute, `N minutes` on a whole minute,
    /// and `M minutes and S seconds` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < SECS_IN_MIN {
            write!(f, "{} seconds", self.0)
        } else if self.seconds() == 0 {
            write!(f, "{} minutes", self.minutes())
        } else {
            write!(f, "{} minutes and {} seconds", self.minutes(), self.seconds())
        }
    }
}
