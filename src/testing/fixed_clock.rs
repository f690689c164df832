use chrono::{DateTime, FixedOffset, TimeZone};

use crate::ports::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// 2014-03-09T07:05:01.000+0000
    pub fn utc_sample() -> Self {
        let utc = FixedOffset::east_opt(0).expect("zero offset is valid");
        Self(utc.with_ymd_and_hms(2014, 3, 9, 7, 5, 1).single().expect("valid timestamp"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
