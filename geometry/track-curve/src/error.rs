//! Error types for curve operations.

use thiserror::Error;

/// Errors that can occur while evaluating or offsetting a track curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// Insufficient points to define the curve.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// Samples per segment must be positive and keep the total sample
    /// count within [`crate::MAX_SAMPLES`].
    #[error("invalid resolution {0}: must be at least 1 and within the sample limit")]
    InvalidResolution(usize),

    /// Invalid degree for the basis evaluation policy.
    #[error("invalid degree {degree}: must be between {min} and {max}")]
    InvalidDegree {
        /// Specified degree.
        degree: usize,
        /// Minimum allowed degree.
        min: usize,
        /// Maximum allowed degree.
        max: usize,
    },

    /// Track width must be finite and non-negative.
    #[error("invalid track width: {0} (must be finite and non-negative)")]
    InvalidWidth(f64),
}

impl CurveError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Check if this is an insufficient points error.
    #[must_use]
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }

    /// Check if this error rejects a caller-supplied parameter
    /// (resolution, degree or width) rather than the point data.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidResolution(_) | Self::InvalidDegree { .. } | Self::InvalidWidth(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::insufficient_points(4, 2);
        assert!(err.to_string().contains("need at least 4"));
        assert!(err.to_string().contains("got 2"));

        let err = CurveError::InvalidWidth(-1.5);
        assert!(err.to_string().contains("-1.5"));

        let err = CurveError::InvalidResolution(0);
        assert!(err.to_string().contains("resolution 0"));
    }

    #[test]
    fn test_error_predicates() {
        let err = CurveError::insufficient_points(4, 1);
        assert!(err.is_insufficient_points());
        assert!(!err.is_invalid_parameter());

        let err = CurveError::InvalidDegree {
            degree: 12,
            min: 0,
            max: 7,
        };
        assert!(err.is_invalid_parameter());
        assert!(!err.is_insufficient_points());
    }
}
