//! Closed ribbon triangulation.
//!
//! Connects two index-aligned edge curves into a closed strip. Vertices are
//! interleaved (`2i` inner, `2i + 1` outer) and each span between index `i`
//! and `(i + 1) mod n` becomes one quad split into two triangles, so the last
//! span closes the loop.

use mesh_types::{IndexedMesh, Vertex};
use nalgebra::Point2;
use tracing::debug;

use crate::error::{RibbonError, RibbonResult};

/// Minimum number of points on each edge.
pub const MIN_RIBBON_POINTS: usize = 2;

/// Maximum number of points on each edge. Interleaved vertex indices must
/// fit in `u32`.
pub const MAX_RIBBON_POINTS: usize = u32::MAX as usize / 2;

/// Triangulate the closed ribbon between an inner and an outer edge.
///
/// For each index `i` the inner vertex is emitted first, then the outer one.
/// Texture coordinates are `(0, i / n)` on the inner edge and `(1, i / n)` on
/// the outer edge. Normals hold the placeholder until
/// [`compute_vertex_normals`](crate::compute_vertex_normals) runs.
///
/// Each span produces the triangles
///
/// ```text
/// (inner[i], outer[i], inner[next])
/// (outer[i], outer[next], inner[next])
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than 2 points are given per edge
/// - The edges have different lengths
/// - More than [`MAX_RIBBON_POINTS`] points are given per edge
///
/// # Example
///
/// ```
/// use mesh_ribbon::ribbon_from_offsets;
/// use mesh_types::MeshTopology;
/// use nalgebra::Point2;
///
/// let inner = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)];
/// let outer = vec![Point2::new(0.0, -1.0), Point2::new(2.0, -1.0), Point2::new(2.0, 2.0)];
///
/// let mesh = ribbon_from_offsets(&inner, &outer).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn ribbon_from_offsets(
    inner: &[Point2<f64>],
    outer: &[Point2<f64>],
) -> RibbonResult<IndexedMesh> {
    let n = inner.len();
    if n < MIN_RIBBON_POINTS {
        return Err(RibbonError::TooFewPoints {
            min: MIN_RIBBON_POINTS,
            actual: n,
        });
    }

    if outer.len() != n {
        return Err(RibbonError::MismatchedSides {
            inner: n,
            outer: outer.len(),
        });
    }

    let vertex_count = interleaved_vertex_count(n)?;
    let mut mesh = IndexedMesh::with_capacity(2 * n, 2 * n);

    for (i, (inner_pt, outer_pt)) in inner.iter().zip(outer.iter()).enumerate() {
        let v = i as f64 / n as f64;
        mesh.vertices.push(Vertex::planar(*inner_pt, Point2::new(0.0, v)));
        mesh.vertices.push(Vertex::planar(*outer_pt, Point2::new(1.0, v)));
    }

    for current in (0..vertex_count).step_by(2) {
        let next = (current + 2) % vertex_count;

        mesh.faces.push([current, current + 1, next]);
        mesh.faces.push([current + 1, next + 1, next]);
    }

    debug!(
        points = n,
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Triangulated ribbon"
    );

    Ok(mesh)
}

/// Vertex count for `n` points per edge, as a `u32` index bound.
fn interleaved_vertex_count(n: usize) -> RibbonResult<u32> {
    n.checked_mul(2)
        .and_then(|count| u32::try_from(count).ok())
        .ok_or(RibbonError::TooManyPoints {
            max: MAX_RIBBON_POINTS,
            actual: n,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::MeshTopology;

    /// Concentric squares, `n = 4`.
    fn square_edges() -> (Vec<Point2<f64>>, Vec<Point2<f64>>) {
        let unit = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
        let inner = unit.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let outer = unit
            .iter()
            .map(|&(x, y)| Point2::new(2.0 * x, 2.0 * y))
            .collect();
        (inner, outer)
    }

    #[test]
    fn ribbon_counts() {
        let (inner, outer) = square_edges();
        let mesh = ribbon_from_offsets(&inner, &outer).expect("mesh");

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 8);
        assert!(mesh.has_valid_indices());
    }

    #[test]
    fn ribbon_vertices_are_interleaved() {
        let (inner, outer) = square_edges();
        let mesh = ribbon_from_offsets(&inner, &outer).expect("mesh");

        for i in 0..4 {
            let vi = &mesh.vertices[2 * i];
            let vo = &mesh.vertices[2 * i + 1];
            assert_eq!(vi.position.xy(), inner[i]);
            assert_eq!(vo.position.xy(), outer[i]);
            assert!(vi.position.z.abs() < f64::EPSILON);

            let v = i as f64 / 4.0;
            assert_eq!(vi.uv, Point2::new(0.0, v));
            assert_eq!(vo.uv, Point2::new(1.0, v));
        }
    }

    #[test]
    fn ribbon_face_pattern_wraps() {
        let (inner, outer) = square_edges();
        let mesh = ribbon_from_offsets(&inner, &outer).expect("mesh");

        assert_eq!(mesh.faces[0], [0, 1, 2]);
        assert_eq!(mesh.faces[1], [1, 3, 2]);

        // Closing span connects the last pair back to the first
        assert_eq!(mesh.faces[6], [6, 7, 0]);
        assert_eq!(mesh.faces[7], [7, 1, 0]);
    }

    #[test]
    fn ribbon_uv_v_below_one() {
        let (inner, outer) = square_edges();
        let mesh = ribbon_from_offsets(&inner, &outer).expect("mesh");
        assert!(mesh.vertices.iter().all(|v| (0.0..1.0).contains(&v.uv.y)));
    }

    #[test]
    fn ribbon_two_points() {
        let inner = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let outer = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)];
        let mesh = ribbon_from_offsets(&inner, &outer).expect("mesh");
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
    }

    #[test]
    fn ribbon_too_few_points() {
        let single = vec![Point2::origin()];
        assert_eq!(
            ribbon_from_offsets(&single, &single),
            Err(RibbonError::TooFewPoints { min: 2, actual: 1 })
        );
        assert!(ribbon_from_offsets(&[], &[]).is_err());
    }

    #[test]
    fn ribbon_mismatched_sides() {
        let (inner, mut outer) = square_edges();
        outer.pop();
        assert_eq!(
            ribbon_from_offsets(&inner, &outer),
            Err(RibbonError::MismatchedSides { inner: 4, outer: 3 })
        );
    }

    #[test]
    fn ribbon_index_bound() {
        assert_eq!(interleaved_vertex_count(4), Ok(8));
        assert_eq!(interleaved_vertex_count(MAX_RIBBON_POINTS), Ok(u32::MAX - 1));

        for n in [MAX_RIBBON_POINTS + 1, usize::MAX / 2 + 1] {
            assert_eq!(
                interleaved_vertex_count(n),
                Err(RibbonError::TooManyPoints {
                    max: MAX_RIBBON_POINTS,
                    actual: n,
                })
            );
        }
    }
}
