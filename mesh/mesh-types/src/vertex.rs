//! Vertex type.

use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh vertex with position, normal and texture coordinate.
///
/// Every vertex of a track surface carries all three attributes. Until
/// normals are computed the normal holds a placeholder (`+Z`, facing out of
/// the drawing plane).
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point2, Point3};
///
/// let v = Vertex::new(Point3::new(1.0, 2.0, 0.0), Point2::new(0.0, 0.5));
/// assert_eq!(v.position.x, 1.0);
/// assert_eq!(v.normal.z, 1.0);
/// assert_eq!(v.uv.y, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Vertex normal. Unit length once computed, except at degenerate vertices.
    pub normal: Vector3<f64>,

    /// Texture coordinates (U, V).
    pub uv: Point2<f64>,
}

impl Vertex {
    /// Placeholder normal assigned before normals are computed.
    pub const PLACEHOLDER_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];

    /// Create a vertex with a placeholder normal.
    #[inline]
    #[must_use]
    pub fn new(position: Point3<f64>, uv: Point2<f64>) -> Self {
        let [x, y, z] = Self::PLACEHOLDER_NORMAL;
        Self {
            position,
            normal: Vector3::new(x, y, z),
            uv,
        }
    }

    /// Create a vertex on the `z = 0` plane from planar coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Vertex, Point2};
    ///
    /// let v = Vertex::planar(Point2::new(3.0, -1.0), Point2::new(1.0, 0.25));
    /// assert_eq!(v.position.z, 0.0);
    /// assert_eq!(v.position.y, -1.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn planar(position: Point2<f64>, uv: Point2<f64>) -> Self {
        Self::new(Point3::new(position.x, position.y, 0.0), uv)
    }

    /// Create a vertex with every attribute given.
    #[inline]
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>, uv: Point2<f64>) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_placeholder_normal() {
        let v = Vertex::new(Point3::origin(), Point2::origin());
        assert_eq!(v.normal, Vector3::z());
    }

    #[test]
    fn vertex_planar() {
        let v = Vertex::planar(Point2::new(1.5, 2.5), Point2::new(0.0, 0.1));
        assert!((v.position.x - 1.5).abs() < f64::EPSILON);
        assert!((v.position.y - 2.5).abs() < f64::EPSILON);
        assert!(v.position.z.abs() < f64::EPSILON);
        assert!((v.uv.y - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn vertex_with_normal() {
        let v = Vertex::with_normal(Point3::origin(), -Vector3::z(), Point2::new(1.0, 0.0));
        assert_eq!(v.normal, -Vector3::z());
        assert_eq!(v.uv, Point2::new(1.0, 0.0));
    }
}
