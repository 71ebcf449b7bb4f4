use chrono::{Local, NaiveDateTime};

/// Source of the current time for lifecycle validation and scheduling.
///
/// Injected into the lifecycle and the watcher so temporal invariants
/// (reminder-in-past checks, the overdue cutoff) can be exercised in tests
/// with a fixed clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time, matching the timestamps stored by SQLite.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
