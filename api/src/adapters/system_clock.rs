//! System clock adapter

use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

/// Clock backed by the host's wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
