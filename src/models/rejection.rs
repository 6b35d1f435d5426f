use std::fmt;
use thiserror::Error;

/// Why an input line could not become a point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("insufficient columns")]
    InsufficientColumns,
    #[error("Invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error("Invalid timestamp \"{0}\"")]
    InvalidTimestamp(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub line: usize,
    pub reason: String,
    pub raw: String,
}

impl Rejection {
    pub fn new(line: usize, error: &RecordError, raw: &str) -> Self {
        Self {
            line,
            reason: error.to_string(),
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} | {}", self.line, self.reason, self.raw)
    }
}
