//! Core mesh types for track surfaces.
//!
//! This crate provides the types shared by the mesh builder and the
//! exporters:
//!
//! - [`Vertex`] - Position, normal and texture coordinate
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`MeshTopology`] - Read-only access used by writers and tests
//!
//! # Coordinate System
//!
//! Track meshes are built in the XY plane with `z = 0`; the drawing plane's
//! normal is `+Z`. Exporters remap axes for viewers that use a Y-up ground
//! plane.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Vertex, IndexedMesh, Point2, MeshTopology};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::planar(Point2::new(0.0, 0.0), Point2::new(0.0, 0.0)));
//! mesh.vertices.push(Vertex::planar(Point2::new(1.0, 0.0), Point2::new(1.0, 0.0)));
//! mesh.vertices.push(Vertex::planar(Point2::new(0.5, 1.0), Point2::new(0.5, 1.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod traits;
mod triangle;
mod vertex;

// Re-export core types
pub use mesh::IndexedMesh;
pub use traits::MeshTopology;
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
