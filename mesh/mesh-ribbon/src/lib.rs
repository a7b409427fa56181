//! Generate closed ribbon meshes from a pair of edge curves.
//!
//! A track surface is the strip between its inner and outer edges. This
//! crate triangulates that strip and shades it:
//!
//! - **Ribbon triangulation**: interleaved inner/outer vertices, two
//!   triangles per span, closing span included
//! - **Smooth normals**: face normals accumulated per vertex, then normalized
//!
//! # Quick Start
//!
//! ```
//! use mesh_ribbon::{compute_vertex_normals, ribbon_from_offsets};
//! use mesh_types::MeshTopology;
//! use nalgebra::Point2;
//!
//! let inner = vec![
//!     Point2::new(-1.0, -1.0),
//!     Point2::new(1.0, -1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(-1.0, 1.0),
//! ];
//! let outer: Vec<_> = inner.iter().map(|p| p * 2.0).collect();
//!
//! let mut mesh = ribbon_from_offsets(&inner, &outer).unwrap();
//! compute_vertex_normals(&mut mesh).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.face_count(), 8);
//! ```

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

mod error;
mod normals;
mod ribbon;

pub use error::{RibbonError, RibbonResult};
pub use normals::{NORMAL_EPSILON, compute_vertex_normals};
pub use ribbon::{MAX_RIBBON_POINTS, MIN_RIBBON_POINTS, ribbon_from_offsets};
