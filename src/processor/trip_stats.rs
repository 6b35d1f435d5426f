use crate::geo::distance_km;
use crate::models::{Trip, TripStats};

pub fn compute_stats(trip: &Trip) -> TripStats {
    let mut total_distance = 0.0;
    let mut max_speed: f64 = 0.0;

    for leg in trip.points.windows(2) {
        let (from, to) = (&leg[0], &leg[1]);
        let leg_distance = distance_km(from.lat, from.lon, to.lat, to.lon);
        total_distance += leg_distance;

        // Legs without elapsed time count toward distance only
        let hours = to.seconds_since(from) / 3600.0;
        if hours > 0.0 {
            max_speed = max_speed.max(leg_distance / hours);
        }
    }

    let duration = trip.last().seconds_since(trip.first()) / 60.0;
    let avg_speed = if duration > 0.0 {
        total_distance / (duration / 60.0)
    } else {
        0.0
    };

    TripStats {
        total_distance: round_to(total_distance, 2),
        duration: round_to(duration, 1),
        avg_speed: round_to(avg_speed, 2),
        max_speed: round_to(max_speed, 2),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
