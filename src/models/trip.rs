use super::point::Point;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub trip_id: String, // trip_1, trip_2, ... in emission order
    pub points: Vec<Point>, // always at least 2
}

impl Trip {
    pub fn new(sequence: usize, points: Vec<Point>) -> Self {
        Self {
            trip_id: format!("trip_{}", sequence),
            points,
        }
    }

    pub fn first(&self) -> &Point {
        &self.points[0]
    }

    pub fn last(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }
}

/// Movement aggregates for one trip, already rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripStats {
    /// km, 2 decimals
    pub total_distance: f64,
    /// minutes, 1 decimal
    pub duration: f64,
    /// km/h, 2 decimals
    pub avg_speed: f64,
    /// km/h, 2 decimals
    pub max_speed: f64,
}
