use chrono::{DateTime, FixedOffset};

/// Port for reading the current time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}
