//! Error types for ribbon mesh operations.

use thiserror::Error;

/// Result type for ribbon mesh operations.
pub type RibbonResult<T> = Result<T, RibbonError>;

/// Errors that can occur while building or shading a ribbon mesh.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RibbonError {
    /// Edge curves have too few points.
    #[error("ribbon needs at least {min} points per edge, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Inner and outer edges are not index-aligned.
    #[error("inner edge has {inner} points but outer edge has {outer}")]
    MismatchedSides {
        /// Inner edge point count.
        inner: usize,
        /// Outer edge point count.
        outer: usize,
    },

    /// Edge curves have more points than `u32` vertex indices can address.
    #[error("ribbon supports at most {max} points per edge, got {actual}")]
    TooManyPoints {
        /// Maximum supported points.
        max: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Normals were requested for a mesh without vertices or faces.
    #[error("mesh has no vertices or faces")]
    EmptyMesh,
}
