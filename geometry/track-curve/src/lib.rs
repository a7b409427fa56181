//! Closed centerline curves for race tracks.
//!
//! This crate holds the planar math of the track pipeline:
//!
//! - [`ClosedBSpline`] - Periodic uniform B-spline through user control points
//! - [`BasisEvaluation`] - Basis policy: closed-form cubic or recursive Cox-de Boor
//! - [`offset_closed`] - Inner and outer track edges at ± half width
//! - [`closed_length`], [`max_turning_angle`] - Polyline measurements
//!
//! # Example
//!
//! ```
//! use track_curve::{ClosedBSpline, offset_closed};
//! use nalgebra::Point2;
//!
//! let control = vec![
//!     Point2::new(-2.0, -2.0),
//!     Point2::new(2.0, -2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(-2.0, 2.0),
//! ];
//!
//! let centerline = ClosedBSpline::cubic(control).unwrap().sample(10).unwrap();
//! let edges = offset_closed(&centerline, 1.0).unwrap();
//!
//! assert_eq!(centerline.len(), 40);
//! assert_eq!(edges.inner.len(), 40);
//! assert_eq!(edges.outer.len(), 40);
//! ```
//!
//! # Coordinate System
//!
//! All points live in the XY plane. Perpendiculars are obtained by rotating a
//! direction 90° counter-clockwise: `(x, y) -> (-y, x)`.
//!
//! # Feature Flags
//!
//! - `serde`: Serialize/deserialize [`BasisEvaluation`]

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::cast_precision_loss,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod basis;
mod closed;
mod error;
mod measure;
mod offset;

pub use basis::{BasisEvaluation, CUBIC_DEGREE, MAX_DEGREE, cox_de_boor, uniform_cubic_weights};
pub use closed::{ClosedBSpline, MAX_SAMPLES, MIN_CONTROL_POINTS};
pub use error::CurveError;
pub use measure::{closed_length, max_turning_angle};
pub use offset::{
    MIN_OFFSET_POINTS, OffsetCurves, TANGENT_EPSILON, forward_perpendicular, offset_closed,
    turning_angle,
};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

/// Result type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Offsets of a sampled spline stay index-aligned and at half width.
    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_spline_then_offset() {
        let control = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 3.0),
            Point2::new(1.0, 4.0),
            Point2::new(-1.0, 2.0),
        ];
        let centerline = ClosedBSpline::cubic(control).unwrap().sample(25).unwrap();
        let edges = offset_closed(&centerline, 0.8).unwrap();

        assert_eq!(centerline.len(), 125);
        assert_eq!(edges.len(), centerline.len());

        for ((c, inner), outer) in centerline.iter().zip(&edges.inner).zip(&edges.outer) {
            assert_relative_eq!((inner - c).norm(), 0.4, epsilon = 1e-9);
            assert_relative_eq!((outer - c).norm(), 0.4, epsilon = 1e-9);
            // Edges are mirror images through the centerline point
            assert_relative_eq!(
                (inner.coords + outer.coords) / 2.0,
                c.coords,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_sampled_curve_is_smooth() {
        let control = vec![
            Point2::new(-2.0, -2.0),
            Point2::new(2.0, -2.0),
            Point2::new(2.0, 2.0),
            Point2::new(-2.0, 2.0),
        ];
        let centerline = ClosedBSpline::cubic(control.clone()).unwrap().sample(40).unwrap();

        // Dense sampling of a C2 curve turns much less than the control polygon
        assert!(max_turning_angle(&centerline) < max_turning_angle(&control) / 10.0);
        assert!(closed_length(&centerline) < closed_length(&control));
    }
}
