//! Coordinate quantization.

use plotkit_core::Polyline;

/// Largest scaled magnitude whose round trip through `/ scale * scale`
/// lands back on the same integer.
const EXACT_SCALED_LIMIT: f64 = (1u64 << 50) as f64;

/// Rounds `value` to `precision` decimal places.
///
/// Values whose scaled form reaches [`EXACT_SCALED_LIMIT`] already carry
/// fewer fractional digits than requested and are returned unchanged, so
/// quantizing twice gives the same result as quantizing once.
pub fn quantize(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= EXACT_SCALED_LIMIT {
        return value;
    }
    scaled.round() / scale
}

/// Quantizes every coordinate of every polyline in place.
pub fn round_paths(paths: &mut [Polyline], precision: u32) {
    for path in paths {
        for point in path.points_mut() {
            point.x = quantize(point.x, precision);
            point.y = quantize(point.y, precision);
        }
    }
}
