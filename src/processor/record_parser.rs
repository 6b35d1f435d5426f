use crate::models::{Point, RawRecord, RecordError};
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use csv::ReaderBuilder;
use regex::Regex;
use std::sync::LazyLock;

static TIMESTAMP_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}")
        .expect("timestamp prefix pattern is valid")
});

/// Classifies one raw input line as a point or a rejection reason.
pub fn parse_line(line: &str) -> Result<Point, RecordError> {
    let record = split_record(line)?;

    let lat = parse_coordinate(&record.lat);
    let lon = parse_coordinate(&record.lon);
    if !valid_coordinates(lat, lon) {
        return Err(RecordError::InvalidCoordinates { lat, lon });
    }

    let instant = parse_timestamp(&record.timestamp)
        .ok_or_else(|| RecordError::InvalidTimestamp(record.timestamp.clone()))?;

    Ok(Point {
        device_id: record.device_id,
        lat,
        lon,
        timestamp: record.timestamp,
        instant,
    })
}

fn split_record(line: &str) -> Result<RawRecord, RecordError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .buffer_capacity(line.len() + 1)
        .from_reader(line.as_bytes());

    let fields = match reader.records().next() {
        Some(Ok(record)) => record,
        _ => return Err(RecordError::InsufficientColumns),
    };
    if fields.len() < 4 {
        return Err(RecordError::InsufficientColumns);
    }

    Ok(RawRecord {
        device_id: clean_field(&fields[0]),
        lat: clean_field(&fields[1]),
        lon: clean_field(&fields[2]),
        timestamp: clean_field(&fields[3]),
    })
}

fn clean_field(field: &str) -> String {
    field.trim().trim_matches('"').trim().to_string()
}

fn parse_coordinate(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// (0, 0) is what devices report without a fix.
pub fn valid_coordinates(lat: f64, lon: f64) -> bool {
    lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon)
        && !(lat == 0.0 && lon == 0.0)
}

/// Accepts `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds and zone
/// offset. Timestamps without an offset are read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if !TIMESTAMP_PREFIX.is_match(text) {
        return None;
    }

    let instant = match DateTime::parse_from_rfc3339(text) {
        Ok(t) => t.with_timezone(&Utc),
        Err(_) => match DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
            Ok(t) => t.with_timezone(&Utc),
            Err(_) => match NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
                Ok(t) => t.and_utc(),
                Err(_) => return None,
            },
        },
    };

    // chrono admits a :60 leap second, the calendar does not
    if instant.nanosecond() >= 1_000_000_000 {
        return None;
    }

    Some(instant)
}
