use crate::models::Point;

/// Stable: points sharing an instant keep their input order.
pub fn sort_chronologically(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by_key(|p| p.instant);
    points
}
