use crate::geo::distance_km;
use crate::models::{Point, Trip};
use tracing::debug;

/// Idle time after which the next point opens a new trip (25 minutes).
pub const MAX_GAP_SECONDS: f64 = 1500.0;
/// Jump after which the next point opens a new trip.
pub const MAX_GAP_KM: f64 = 2.0;

/// Splits a chronological point stream into trips.
///
/// Keeps a single candidate buffer. A gap longer than [`MAX_GAP_SECONDS`] or
/// [`MAX_GAP_KM`] closes the candidate; candidates with fewer than two points
/// are dropped without consuming a trip id.
#[derive(Debug, Default)]
pub struct TripSegmenter {
    current: Vec<Point>,
    trips: Vec<Trip>,
}

impl TripSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        if let Some(last) = self.current.last() {
            let time_diff = point.seconds_since(last);
            let dist = distance_km(last.lat, last.lon, point.lat, point.lon);

            if time_diff > MAX_GAP_SECONDS || dist > MAX_GAP_KM {
                self.close_candidate();
            }
        }
        self.current.push(point);
    }

    pub fn finish(mut self) -> Vec<Trip> {
        self.close_candidate();
        self.trips
    }

    fn close_candidate(&mut self) {
        let candidate = std::mem::take(&mut self.current);
        match candidate.len() {
            0 => {}
            1 => debug!("Discarded lone point at {}", candidate[0].timestamp),
            _ => {
                let trip = Trip::new(self.trips.len() + 1, candidate);
                debug!("Closed {} with {} points", trip.trip_id, trip.points.len());
                self.trips.push(trip);
            }
        }
    }
}

pub fn segment_trips(points: impl IntoIterator<Item = Point>) -> Vec<Trip> {
    let mut segmenter = TripSegmenter::new();
    for point in points {
        segmenter.push(point);
    }
    segmenter.finish()
}
