//! File I/O for track meshes and centerlines.
//!
//! This crate writes the artifacts a track build produces and reads them
//! back for verification:
//!
//! - **OBJ** (Wavefront) - Positions, texture coordinates and normals with
//!   the ground plane remapped to Y-up
//! - **MTL** - The asphalt material library referenced by the mesh
//! - **Centerline** - Plain-text `x 0 y` rows for animation paths
//!
//! Writers refuse empty input before touching the filesystem, so a failed
//! export never leaves a truncated file behind.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_obj, material_path_for, save_mtl, save_obj, Material};
//!
//! let mesh = load_obj("models/track.obj").unwrap();
//!
//! save_obj(&mesh, "out/track.obj").unwrap();
//! save_mtl(&Material::default(), material_path_for("out/track.obj")).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod centerline;
mod error;
mod mtl;
mod obj;

pub use centerline::{load_centerline, read_centerline, save_centerline, write_centerline};
pub use error::{IoError, IoResult};
pub use mtl::{Material, TRACK_MATERIAL, TRACK_TEXTURE, material_path_for, save_mtl, write_mtl};
pub use obj::{load_obj, read_obj, save_obj, write_obj};
