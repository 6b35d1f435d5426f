use crate::models::Point;
use chrono::{TimeZone, Utc};

/// Kilometres per degree of latitude on the haversine sphere.
pub(crate) const KM_PER_DEGREE: f64 = 6371.0 * std::f64::consts::PI / 180.0;

/// A point `km_north` of (20, -100), `minutes` after 2025-01-01 00:00 UTC.
pub(crate) fn point_at(minutes: i64, km_north: f64) -> Point {
    let instant =
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(minutes);
    Point {
        device_id: "dev".to_string(),
        lat: 20.0 + km_north / KM_PER_DEGREE,
        lon: -100.0,
        timestamp: instant.format("%Y-%m-%dT%H:%M:%S").to_string(),
        instant,
    }
}
