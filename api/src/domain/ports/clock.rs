//! Clock port
//!
//! Wall-clock time is read through this trait so cooldowns and tenure can be
//! driven deterministically in tests.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date (UTC)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
