//! Interactive race-track construction, from sketched points to an
//! exported mesh.
//!
//! A [`TrackEditor`] owns the control points a user places around a loop
//! and everything derived from them:
//!
//! - A closed uniform B-spline centerline ([`track_curve`])
//! - Inner and outer edges at half the track width
//! - A closed ribbon mesh with smooth normals ([`mesh_ribbon`])
//! - OBJ, MTL and centerline exports ([`mesh_io`])
//!
//! Stages are regenerated explicitly. Failures come back as [`TrackError`],
//! whose [`code`](TrackError::code) gives hosts a flat [`ReasonCode`], and are
//! also logged through `tracing`.
//!
//! # Example
//!
//! ```no_run
//! use track_editor::{TrackConfig, TrackEditor, TrackLayout};
//!
//! let config = TrackConfig::default();
//! let mut editor = TrackEditor::from_layout(&TrackLayout::square(2.0));
//!
//! editor.rebuild(&config).unwrap();
//! editor.export(&config.export).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod editor;
mod error;
mod layout;

pub use config::{DEFAULT_RESOLUTION, DEFAULT_TRACK_WIDTH, ExportConfig, TrackConfig};
pub use editor::TrackEditor;
pub use error::{ReasonCode, TrackError, TrackResult};
pub use layout::TrackLayout;

// Re-export the types hosts need to drive the editor
pub use nalgebra::Point2;
pub use track_curve::BasisEvaluation;
