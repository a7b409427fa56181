//! Smooth vertex normals by face-normal accumulation.

use mesh_types::{IndexedMesh, MeshTopology};
use nalgebra::Vector3;
use tracing::debug;

use crate::error::{RibbonError, RibbonResult};

/// Accumulated normals shorter than this are left unnormalized.
pub const NORMAL_EPSILON: f64 = 1e-4;

/// Recompute every vertex normal from the faces that reference it.
///
/// All normals are zeroed, then each face adds its un-normalized normal
/// `(v1 - v0) × (v2 - v0)` to each of its three vertices. A vertex therefore
/// gets area-weighted contributions, counted once per incident face. Finally
/// each sum is normalized unless it is shorter than [`NORMAL_EPSILON`], in
/// which case the short vector is kept as-is.
///
/// Faces with out-of-range indices are skipped.
///
/// # Errors
///
/// Returns [`RibbonError::EmptyMesh`] without touching the mesh if it has no
/// vertices or no faces.
///
/// # Example
///
/// ```
/// use mesh_ribbon::{compute_vertex_normals, ribbon_from_offsets};
/// use nalgebra::Point2;
///
/// let inner = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
/// let outer = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0), Point2::new(2.0, 1.0)];
///
/// let mut mesh = ribbon_from_offsets(&inner, &outer).unwrap();
/// compute_vertex_normals(&mut mesh).unwrap();
///
/// for vertex in &mesh.vertices {
///     assert!((vertex.normal.norm() - 1.0).abs() < 1e-9);
/// }
/// ```
pub fn compute_vertex_normals(mesh: &mut IndexedMesh) -> RibbonResult<()> {
    if mesh.is_empty() {
        return Err(RibbonError::EmptyMesh);
    }

    let mut accumulated = vec![Vector3::zeros(); mesh.vertices.len()];

    for face_index in 0..mesh.face_count() {
        let Some(triangle) = mesh.triangle(face_index) else {
            continue;
        };
        let face_normal = triangle.scaled_normal();

        for &i in &mesh.faces[face_index] {
            accumulated[i as usize] += face_normal;
        }
    }

    let mut degenerate = 0_usize;
    for (vertex, normal) in mesh.vertices.iter_mut().zip(accumulated) {
        let length = normal.norm();
        if length > NORMAL_EPSILON {
            vertex.normal = normal / length;
        } else {
            vertex.normal = normal;
            degenerate += 1;
        }
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        degenerate,
        "Computed vertex normals"
    );

    Ok(())
}
