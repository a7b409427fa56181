//! Read-only mesh access.

use crate::Triangle;

/// Read access shared by the ribbon builder, the exporters and tests.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangles.
    fn face_count(&self) -> usize;

    /// A mesh without vertices or without faces has nothing to shade or
    /// export.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Corner positions of a face.
    ///
    /// `None` if the face, or any index it holds, is out of range.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;
}
