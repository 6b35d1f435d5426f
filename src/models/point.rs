use chrono::{DateTime, Utc};

/// The four text fields of one input line, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub device_id: String,
    pub lat: String,
    pub lon: String,
    pub timestamp: String,
}

/// A validated location observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub device_id: String,
    pub lat: f64,
    pub lon: f64,
    /// Timestamp text as it appeared in the input.
    pub timestamp: String,
    pub instant: DateTime<Utc>,
}

impl Point {
    /// Seconds elapsed from `earlier` to `self`, at millisecond precision.
    pub fn seconds_since(&self, earlier: &Point) -> f64 {
        (self.instant - earlier.instant).num_milliseconds() as f64 / 1000.0
    }
}
