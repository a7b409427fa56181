//! Indexed triangle mesh.

use crate::{MeshTopology, Triangle, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices by
/// index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Positions, normals and texture coordinates
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Winding Order
///
/// Face winding is significant: vertex normals are accumulated from
/// `(v1 - v0) × (v2 - v0)` over each face, so reversing a face flips its
/// contribution.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, Point2, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::planar(Point2::new(0.0, 0.0), Point2::new(0.0, 0.0)));
/// mesh.vertices.push(Vertex::planar(Point2::new(1.0, 0.0), Point2::new(1.0, 0.0)));
/// mesh.vertices.push(Vertex::planar(Point2::new(0.0, 1.0), Point2::new(0.0, 1.0)));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Remove all vertices and faces.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }

    /// Check that every face index refers to an existing vertex.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Vertex, Point3, Point2};
    ///
    /// let v = Vertex::new(Point3::origin(), Point2::origin());
    /// let mesh = IndexedMesh::from_parts(vec![v; 3], vec![[0, 1, 3]]);
    /// assert!(!mesh.has_valid_indices());
    /// ```
    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.vertices.len();
        self.faces
            .iter()
            .all(|face| face.iter().all(|&i| (i as usize) < n))
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        (0..self.faces.len())
            .filter_map(|i| self.triangle(i))
            .map(|tri| tri.area())
            .sum()
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let [i0, i1, i2] = *self.faces.get(face_index)?;
        let corner = |i: u32| self.vertices.get(i as usize).map(|v| v.position);
        Some(Triangle::new(corner(i0)?, corner(i1)?, corner(i2)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    /// Unit square split into two triangles.
    fn quad() -> IndexedMesh {
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let vertices = corners
            .iter()
            .map(|&(x, y)| Vertex::planar(Point2::new(x, y), Point2::new(x, y)))
            .collect();
        IndexedMesh::from_parts(vertices, vec![[0, 1, 2], [0, 2, 3]])
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);

        // Vertices without faces still count as empty
        let mut mesh = quad();
        mesh.faces.clear();
        assert!(mesh.is_empty());
    }

    #[test]
    fn mesh_clear() {
        let mut mesh = quad();
        assert!(!mesh.is_empty());
        mesh.clear();
        assert_eq!(mesh, IndexedMesh::new());
    }

    #[test]
    fn mesh_surface_area() {
        let mesh = quad();
        assert!((mesh.surface_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mesh_triangle_lookup() {
        let mesh = quad();
        let tri = mesh.triangle(1);
        assert_eq!(
            tri.map(|t| t.v2),
            Some(Point3::new(0.0, 1.0, 0.0))
        );
        assert!(mesh.triangle(2).is_none());
    }

    #[test]
    fn mesh_out_of_range_index() {
        let mut mesh = quad();
        assert!(mesh.has_valid_indices());
        mesh.faces.push([0, 1, 4]);
        assert!(!mesh.has_valid_indices());
        assert!(mesh.triangle(2).is_none());
    }
}
