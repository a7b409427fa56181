//! Closed (periodic) uniform B-spline curves.
//!
//! The control polygon wraps around, so segment `i` blends control points
//! `i, i+1, ..., i+degree` modulo the point count and the curve has no
//! start or end.

use nalgebra::{Point2, Vector2};

use crate::{BasisEvaluation, CurveError, Result};

/// Minimum number of control points for a closed track curve.
pub const MIN_CONTROL_POINTS: usize = 4;

/// Upper bound on the number of points a single [`ClosedBSpline::sample`]
/// call may produce.
pub const MAX_SAMPLES: usize = 1 << 24;

/// A closed uniform B-spline in the plane.
///
/// The curve has one segment per control point. Segment `i` is evaluated at a
/// local parameter `u ∈ [0, 1]`; the global parameter `t = i + u` runs over
/// `[0, N)` and wraps.
///
/// # Example
///
/// ```
/// use track_curve::ClosedBSpline;
/// use nalgebra::Point2;
///
/// let square = vec![
///     Point2::new(-2.0, -2.0),
///     Point2::new(2.0, -2.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(-2.0, 2.0),
/// ];
///
/// let spline = ClosedBSpline::cubic(square).unwrap();
/// let samples = spline.sample(10).unwrap();
/// assert_eq!(samples.len(), 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedBSpline {
    /// Control points, in insertion order.
    control_points: Vec<Point2<f64>>,
    /// Basis evaluation policy.
    basis: BasisEvaluation,
}

impl ClosedBSpline {
    /// Create a closed B-spline evaluated with the given basis policy.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The policy degree is out of range
    /// - Fewer than [`MIN_CONTROL_POINTS`] (or `degree + 1`, whichever is
    ///   larger) control points are given
    pub fn new(control_points: Vec<Point2<f64>>, basis: BasisEvaluation) -> Result<Self> {
        basis.validate()?;

        let required = MIN_CONTROL_POINTS.max(basis.span());
        if control_points.len() < required {
            return Err(CurveError::insufficient_points(
                required,
                control_points.len(),
            ));
        }

        Ok(Self {
            control_points,
            basis,
        })
    }

    /// Create a closed uniform cubic B-spline using the closed-form weights.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 4 control points are given.
    pub fn cubic(control_points: Vec<Point2<f64>>) -> Result<Self> {
        Self::new(control_points, BasisEvaluation::ClosedForm)
    }

    /// Get the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point2<f64>] {
        &self.control_points
    }

    /// Get the basis evaluation policy.
    #[must_use]
    pub fn basis(&self) -> BasisEvaluation {
        self.basis
    }

    /// Number of segments, equal to the number of control points.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.control_points.len()
    }

    /// Evaluate segment `segment` at local parameter `u ∈ [0, 1]`.
    ///
    /// The segment index wraps modulo the segment count. `u = 1` is accepted
    /// and lands on the start of the next segment.
    #[must_use]
    pub fn segment_point(&self, segment: usize, u: f64) -> Point2<f64> {
        let n = self.control_points.len();
        let weights = self.basis.weights(u);

        let mut point = Vector2::zeros();
        for (m, weight) in weights.iter().enumerate() {
            point += self.control_points[(segment + m) % n].coords * *weight;
        }

        Point2::from(point)
    }

    /// Evaluate the curve at the periodic global parameter `t`.
    ///
    /// The segment is `⌊t⌋ mod N` and the local parameter is the fractional
    /// part of `t`, so `point_at(t) == point_at(t + N)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        let n = self.control_points.len() as f64;
        let wrapped = t.rem_euclid(n);
        let segment = wrapped.floor();
        self.segment_point(segment as usize, wrapped - segment)
    }

    /// Sample the curve with `resolution` equally spaced points per segment.
    ///
    /// Points are ordered segment-major: all samples of segment 0 at
    /// `u = 0, 1/R, ..., (R-1)/R`, then segment 1, and so on. The result has
    /// exactly `N * resolution` points and does not repeat the first point
    /// at the end.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidResolution`] if `resolution` is zero or
    /// if `N * resolution` exceeds [`MAX_SAMPLES`].
    pub fn sample(&self, resolution: usize) -> Result<Vec<Point2<f64>>> {
        if resolution == 0 {
            return Err(CurveError::InvalidResolution(resolution));
        }
        let total = self
            .segment_count()
            .checked_mul(resolution)
            .filter(|&total| total <= MAX_SAMPLES)
            .ok_or(CurveError::InvalidResolution(resolution))?;

        let mut samples = Vec::with_capacity(total);
        for segment in 0..self.segment_count() {
            for j in 0..resolution {
                let u = j as f64 / resolution as f64;
                samples.push(self.segment_point(segment, u));
            }
        }

        Ok(samples)
    }
}
