//! System clock adapter

use chrono::{DateTime, Utc};

use crate::ports::outbound::ClockPort;

/// `ClockPort` backed by the host clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
