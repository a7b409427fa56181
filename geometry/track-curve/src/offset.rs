//! Offset curves for the two edges of the track.
//!
//! Each sampled centerline point is pushed sideways along the perpendicular
//! of its forward chord (the direction toward the next point, wrapping at the
//! end). The forward difference is kept on purpose: it reproduces the corner
//! shape of existing tracks exactly, including the slight lag at sharp bends.

use nalgebra::{Point2, Vector2};

use crate::{CurveError, Result};

/// Vectors shorter than this are left unnormalized.
pub const TANGENT_EPSILON: f64 = 1e-4;

/// Minimum number of centerline points to offset.
pub const MIN_OFFSET_POINTS: usize = 2;

/// Inner and outer edges of the track, index-aligned with the centerline.
///
/// "Inner" is displaced to the right of the direction of travel and "outer"
/// to the left, so for a clockwise centerline the inner edge faces the
/// enclosed area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetCurves {
    /// Points at `-perpendicular * width / 2`.
    pub inner: Vec<Point2<f64>>,
    /// Points at `+perpendicular * width / 2`.
    pub outer: Vec<Point2<f64>>,
}

impl OffsetCurves {
    /// Number of points on each edge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if both edges are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty() && self.outer.is_empty()
    }

    /// Remove all points from both edges.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.outer.clear();
    }
}

/// Perpendicular of the chord from `p1` to `p2`, rotated 90° counter-clockwise.
///
/// The chord is normalized first unless it is shorter than
/// [`TANGENT_EPSILON`], in which case the short vector is rotated as-is.
///
/// # Example
///
/// ```
/// use track_curve::forward_perpendicular;
/// use nalgebra::Point2;
///
/// let perp = forward_perpendicular(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0));
/// assert!((perp.x - 0.0).abs() < 1e-12);
/// assert!((perp.y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn forward_perpendicular(p1: Point2<f64>, p2: Point2<f64>) -> Vector2<f64> {
    let mut tangent = p2 - p1;

    let length = tangent.norm();
    if length > TANGENT_EPSILON {
        tangent /= length;
    }

    Vector2::new(-tangent.y, tangent.x)
}

/// Unsigned angle in radians between two direction vectors.
///
/// Returns `0.0` if either vector is shorter than [`TANGENT_EPSILON`].
#[must_use]
pub fn turning_angle(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    let len1 = v1.norm();
    let len2 = v2.norm();

    if len1 < TANGENT_EPSILON || len2 < TANGENT_EPSILON {
        return 0.0;
    }

    let cos = (v1.dot(&v2) / (len1 * len2)).clamp(-1.0, 1.0);
    cos.acos()
}

/// Offset a closed centerline by half the track width on each side.
///
/// For point `i` the perpendicular comes from the chord toward point
/// `(i + 1) mod L`. Inner points are `curve[i] - perp * width / 2`, outer
/// points `curve[i] + perp * width / 2`.
///
/// # Errors
///
/// Returns error if:
/// - Fewer than 2 centerline points are given
/// - `track_width` is negative or not finite
///
/// # Example
///
/// ```
/// use track_curve::offset_closed;
/// use nalgebra::Point2;
///
/// let line = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
/// let edges = offset_closed(&line, 0.5).unwrap();
///
/// assert_eq!(edges.inner.len(), 2);
/// assert!((edges.inner[0].y + 0.25).abs() < 1e-12);
/// assert!((edges.outer[0].y - 0.25).abs() < 1e-12);
/// ```
pub fn offset_closed(curve: &[Point2<f64>], track_width: f64) -> Result<OffsetCurves> {
    if curve.len() < MIN_OFFSET_POINTS {
        return Err(CurveError::insufficient_points(
            MIN_OFFSET_POINTS,
            curve.len(),
        ));
    }

    if !track_width.is_finite() || track_width < 0.0 {
        return Err(CurveError::InvalidWidth(track_width));
    }

    let half_width = track_width / 2.0;
    let n = curve.len();
    let mut edges = OffsetCurves {
        inner: Vec::with_capacity(n),
        outer: Vec::with_capacity(n),
    };

    for (i, &current) in curve.iter().enumerate() {
        let next = curve[(i + 1) % n];
        let perpendicular = forward_perpendicular(current, next);

        edges.inner.push(current - perpendicular * half_width);
        edges.outer.push(current + perpendicular * half_width);
    }

    Ok(edges)
}
