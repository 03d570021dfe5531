//! Clock abstraction for payload timestamps
//!
//! Payloads carry a `createdAt` stamp taken at construction time. Going through
//! a `Clock` lets tests pin that stamp.

use chrono::{DateTime, SecondsFormat, Utc};

/// Trait for getting the current time
pub trait Clock: Send + Sync {
    /// Returns the current time
    fn now(&self) -> DateTime<Utc>;
}

/// System clock that returns the actual current time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formats a timestamp the way the activity API expects it
///
/// Millisecond precision with a `Z` suffix, e.g. `2024-06-15T12:00:00.000Z`.
pub fn to_iso_millis(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fixed clock for testing - always returns the same time
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
impl FixedClock {
    /// Creates a new fixed clock at the given time
    pub fn new(time: DateTime<Utc>) -> Self {
        Self(time)
    }
}
