//! Salary adjustment cooldown gate
//!
//! Remembers, per department, when the last bulk salary adjustment was
//! accepted. State lives for the process lifetime only; a restart clears every
//! cooldown.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::DepartmentId;
use crate::domain::ports::Clock;

/// Default cooldown between two adjustments of the same department
pub const ADJUSTMENT_COOLDOWN_SECS: i64 = 1800;

/// Process-wide gate allowing at most one adjustment per department per cooldown
pub struct IdempotencyGuard<C>
where
    C: Clock,
{
    clock: Arc<C>,
    cooldown: Duration,
    last_adjusted: Mutex<HashMap<DepartmentId, DateTime<Utc>>>,
}

impl<C> IdempotencyGuard<C>
where
    C: Clock,
{
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_cooldown(clock, Duration::seconds(ADJUSTMENT_COOLDOWN_SECS))
    }

    pub fn with_cooldown(clock: Arc<C>, cooldown: Duration) -> Self {
        Self {
            clock,
            cooldown,
            last_adjusted: Mutex::new(HashMap::new()),
        }
    }

    /// Cooldown enforced between two accepted adjustments
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Try to claim the adjustment slot for a department
    ///
    /// Returns `true` and records the current time when the department has no
    /// record or its record is older than the cooldown. Otherwise returns
    /// `false` and leaves the record untouched. The check and the write happen
    /// under one lock acquisition.
    pub fn try_acquire(&self, department_id: &DepartmentId) -> bool {
        let now = self.clock.now();
        let mut last_adjusted = self
            .last_adjusted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match last_adjusted.get(department_id) {
            Some(last) if now <= *last + self.cooldown => false,
            _ => {
                last_adjusted.insert(*department_id, now);
                true
            }
        }
    }
}
