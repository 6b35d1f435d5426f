use crate::output::color::trip_color;
use crate::processor::PipelineOutcome;

/// Console report lines for a finished run.
pub fn summary_lines(outcome: &PipelineOutcome) -> Vec<String> {
    let mut lines = vec![
        format!("Valid points: {}", outcome.valid_points),
        format!("Rejected rows: {}", outcome.rejections.len()),
        format!("Trips: {}", outcome.trips.len()),
    ];

    for (index, (trip, stats)) in outcome.trips.iter().enumerate() {
        lines.push(format!(
            "  {} [{}] points={} distance={:.2} km duration={:.1} min avg={:.2} km/h max={:.2} km/h",
            trip.trip_id,
            trip_color(index),
            trip.points.len(),
            stats.total_distance,
            stats.duration,
            stats.avg_speed,
            stats.max_speed,
        ));
    }

    lines
}
