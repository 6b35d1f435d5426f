use crate::models::{Rejection, Trip, TripStats};
use crate::processor::{orderer, record_parser, segmenter, trip_stats};
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct PipelineOutcome {
    pub valid_points: usize,
    pub rejections: Vec<Rejection>,
    pub trips: Vec<(Trip, TripStats)>,
}

/// Runs validation, ordering, segmentation and statistics over numbered lines.
pub fn run_pipeline<'a, I>(lines: I) -> PipelineOutcome
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut points = Vec::new();
    let mut rejections = Vec::new();

    for (line_number, line) in lines {
        match record_parser::parse_line(line) {
            Ok(point) => points.push(point),
            Err(e) => {
                warn!("Rejected line {}: {}", line_number, e);
                rejections.push(Rejection::new(line_number, &e, line));
            }
        }
    }

    let valid_points = points.len();
    let ordered = orderer::sort_chronologically(points);
    let trips: Vec<_> = segmenter::segment_trips(ordered)
        .into_iter()
        .map(|trip| {
            let stats = trip_stats::compute_stats(&trip);
            (trip, stats)
        })
        .collect();

    info!(
        "Processed {} valid points, {} rejected rows, {} trips",
        valid_points,
        rejections.len(),
        trips.len()
    );

    PipelineOutcome {
        valid_points,
        rejections,
        trips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
dev1,20.6500,-100.3900,2025-11-29T06:20:00
dev1,20.6510,-100.3900,2025-11-29T06:25:00
dev1,20.6520,-100.3900,2025-11-29T06:30:00
bad row
dev1,0,0,2025-11-29T06:31:00
dev1,20.6530,-100.3900,2025-11-29T25:00:00
dev1,20.6490,-100.3900,2025-11-29T06:15:00
dev1,20.7000,-100.3900,2025-11-29T09:00:00
dev1,20.7005,-100.3900,2025-11-29T09:04:00";

    fn numbered(input: &str) -> Vec<(usize, &str)> {
        input.lines().enumerate().map(|(i, l)| (i + 1, l)).collect()
    }

    #[test]
    fn test_full_pipeline() {
        let outcome = run_pipeline(numbered(INPUT));

        assert_eq!(outcome.valid_points, 6);

        let lines: Vec<_> = outcome.rejections.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![4, 5, 6]);
        assert!(outcome.rejections[0].reason.contains("insufficient columns"));
        assert!(outcome.rejections[1].reason.contains("Invalid coordinates"));
        assert!(outcome.rejections[2].reason.contains("Invalid timestamp"));
        assert_eq!(outcome.rejections[0].raw, "bad row");

        assert_eq!(outcome.trips.len(), 2);
        let (first, stats) = &outcome.trips[0];
        assert_eq!(first.trip_id, "trip_1");
        // out-of-order line 7 leads the first trip after sorting
        assert_eq!(first.first().timestamp, "2025-11-29T06:15:00");
        assert_eq!(first.points.len(), 4);
        assert_eq!(stats.duration, 15.0);

        assert_eq!(outcome.trips[1].0.trip_id, "trip_2");
        assert_eq!(outcome.trips[1].0.points.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let outcome = run_pipeline(Vec::<(usize, &str)>::new());
        assert_eq!(outcome.valid_points, 0);
        assert!(outcome.rejections.is_empty());
        assert!(outcome.trips.is_empty());
    }
}
