const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres (haversine).
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` just outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_distance_same_point() {
        assert_eq!(distance_km(20.652494, -100.391404, 20.652494, -100.391404), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        let back = distance_km(48.8566, 2.3522, 51.5074, -0.1278);
        assert_eq!(there, back);
    }

    #[test]
    fn test_distance_known_value() {
        // London to Paris is roughly 344 km
        let dist = distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!(approx_eq(dist, 343.5, 5.0));
    }

    #[test]
    fn test_distance_antipodal_is_finite() {
        let dist = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!(dist.is_finite());
        assert!(approx_eq(dist, std::f64::consts::PI * EARTH_RADIUS_KM, 1e-6));

        let poles = distance_km(90.0, 0.0, -90.0, 0.0);
        assert!(approx_eq(poles, std::f64::consts::PI * EARTH_RADIUS_KM, 1e-6));
    }
}
