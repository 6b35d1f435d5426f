const GOLDEN_ANGLE_DEG: f64 = 137.5;

pub fn trip_hue(index: usize) -> f64 {
    (index as f64 * GOLDEN_ANGLE_DEG) % 360.0
}

/// Display colour of the `index`-th emitted trip (0-based).
pub fn trip_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", trip_hue(index))
}
