//! Resolved triangle corners.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three corner positions of one mesh face, in face order.
///
/// Obtained from [`MeshTopology::triangle`](crate::MeshTopology::triangle).
/// Normals follow the right-hand rule over the corner order.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(0.0, 2.0, 0.0),
/// );
///
/// assert!((tri.area() - 2.0).abs() < 1e-12);
/// assert!((tri.scaled_normal().z - 4.0).abs() < 1e-12);
/// assert!(!tri.faces_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First corner.
    pub v0: Point3<f64>,
    /// Second corner.
    pub v1: Point3<f64>,
    /// Third corner.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three corners.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Face normal `(v1 - v0) × (v2 - v0)`, not normalized.
    ///
    /// Its length is twice the area, so summing these over the faces around
    /// a vertex weights each face by its area.
    #[inline]
    #[must_use]
    pub fn scaled_normal(&self) -> Vector3<f64> {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }

    /// Triangle area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.scaled_normal().norm() * 0.5
    }

    /// Whether the corners wind clockwise seen from `+Z`.
    ///
    /// Ribbons built on a counter-clockwise loop face down, away from a
    /// viewer looking at the drawing plane.
    #[inline]
    #[must_use]
    pub fn faces_down(&self) -> bool {
        self.scaled_normal().z < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winding_sets_normal_sign() {
        let ccw = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let cw = Triangle::new(ccw.v0, ccw.v2, ccw.v1);

        assert!(!ccw.faces_down());
        assert!(cw.faces_down());
        assert_eq!(ccw.scaled_normal(), -cw.scaled_normal());
    }

    #[test]
    fn collinear_corners_have_no_area() {
        let flat = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(flat.scaled_normal(), Vector3::zeros());
        assert!(flat.area().abs() < f64::EPSILON);
    }

    #[test]
    fn area_of_tilted_triangle() {
        let tri = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        assert!((tri.area() - 3.0_f64.sqrt() / 2.0).abs() < 1e-12);
    }
}
