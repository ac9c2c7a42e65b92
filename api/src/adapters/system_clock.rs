//! System clock adapter
//!
//! Reads today's date from the host clock in the configured timezone.

use chrono::{Local, NaiveDate, Utc};

use crate::config::ReferenceTimezone;
use crate::domain::ports::Clock;

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: ReferenceTimezone,
}

impl SystemClock {
    pub fn new(timezone: ReferenceTimezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.timezone {
            ReferenceTimezone::Local => Local::now().date_naive(),
            ReferenceTimezone::Utc => Utc::now().date_naive(),
        }
    }
}
