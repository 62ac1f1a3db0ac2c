//! Clock port - wall-clock time for message timestamps

use chrono::{DateTime, Utc};

/// Source of "now". Timestamps are advisory only; message order is the log order.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
