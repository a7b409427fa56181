//! Error types for the track pipeline.

use mesh_io::IoError;
use mesh_ribbon::RibbonError;
use thiserror::Error;
use track_curve::CurveError;

/// Result type for track pipeline operations.
pub type TrackResult<T> = Result<T, TrackError>;

/// Flat classification of a pipeline failure.
///
/// Hosts match on this instead of parsing error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// Fewer control points than the curve needs.
    InsufficientControlPoints,
    /// Fewer sampled or offset points than the next stage needs.
    InsufficientSamples,
    /// A resolution, width, degree or config value is out of range.
    InvalidParameter,
    /// Inner and outer curves differ in length.
    MismatchedOffsets,
    /// No mesh to shade or export.
    EmptyMesh,
    /// No sampled curve to export.
    EmptyCurve,
    /// A file could not be opened, read or written.
    Io,
    /// A mesh, curve, layout or config document could not be parsed.
    InvalidDocument,
}

/// Errors from the track pipeline.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Curve generation failed.
    #[error("curve generation failed: {0}")]
    Curve(#[from] CurveError),

    /// Offset generation failed.
    #[error("offset generation failed: {0}")]
    Offset(CurveError),

    /// Triangulation or normal computation failed.
    #[error("mesh generation failed: {0}")]
    Ribbon(#[from] RibbonError),

    /// Export or import failed.
    #[error("file I/O failed: {0}")]
    Io(#[from] IoError),

    /// A configuration value is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON document could not be parsed or produced.
    #[error("invalid document: {0}")]
    Document(#[from] serde_json::Error),
}

impl TrackError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// The reason code for this error.
    #[must_use]
    pub fn code(&self) -> ReasonCode {
        match self {
            Self::Curve(CurveError::InsufficientPoints { .. }) => {
                ReasonCode::InsufficientControlPoints
            }
            Self::Offset(CurveError::InsufficientPoints { .. })
            | Self::Ribbon(RibbonError::TooFewPoints { .. }) => ReasonCode::InsufficientSamples,
            Self::Curve(_)
            | Self::Offset(_)
            | Self::Ribbon(RibbonError::TooManyPoints { .. })
            | Self::InvalidConfig(_) => ReasonCode::InvalidParameter,
            Self::Ribbon(RibbonError::MismatchedSides { .. }) => ReasonCode::MismatchedOffsets,
            Self::Ribbon(RibbonError::EmptyMesh) | Self::Io(IoError::EmptyMesh) => {
                ReasonCode::EmptyMesh
            }
            Self::Io(IoError::EmptyCurve) => ReasonCode::EmptyCurve,
            Self::Io(IoError::Io(_)) => ReasonCode::Io,
            Self::Io(_) | Self::Document(_) => ReasonCode::InvalidDocument,
        }
    }

    /// Check if this error came from a missing or too-short input stage.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.code(),
            ReasonCode::InsufficientControlPoints
                | ReasonCode::InsufficientSamples
                | ReasonCode::MismatchedOffsets
                | ReasonCode::EmptyMesh
                | ReasonCode::EmptyCurve
        )
    }
}
