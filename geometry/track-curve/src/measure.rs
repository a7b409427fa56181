//! Measurements on closed polylines.

use nalgebra::Point2;

use crate::turning_angle;

/// Length of a closed polyline, including the segment from the last point
/// back to the first.
///
/// # Example
///
/// ```
/// use track_curve::closed_length;
/// use nalgebra::Point2;
///
/// let unit_square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert!((closed_length(&unit_square) - 4.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn closed_length(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }

    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// Largest turning angle (radians) between consecutive chords of a closed
/// polyline.
///
/// Sharp turns relative to the track width are where the offset edges start
/// to fold over themselves.
#[must_use]
pub fn max_turning_angle(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    (0..n)
        .map(|i| {
            let incoming = points[i] - points[(i + n - 1) % n];
            let outgoing = points[(i + 1) % n] - points[i];
            turning_angle(incoming, outgoing)
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_length_degenerate() {
        assert_eq!(closed_length(&[]), 0.0);
        assert_eq!(closed_length(&[Point2::new(1.0, 1.0)]), 0.0);

        // Two points form a closed loop there and back
        let pair = [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)];
        assert_relative_eq!(closed_length(&pair), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_length_and_turn() {
        let n = 360;
        let circle: Vec<_> = (0..n)
            .map(|i| {
                let a = TAU * i as f64 / n as f64;
                Point2::new(a.cos(), a.sin())
            })
            .collect();

        assert_relative_eq!(closed_length(&circle), TAU, epsilon = 1e-4);
        assert_relative_eq!(max_turning_angle(&circle), TAU / n as f64, epsilon = 1e-9);
    }

    #[test]
    fn test_square_turns() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert_relative_eq!(max_turning_angle(&square), FRAC_PI_2, epsilon = 1e-12);
    }
}
