//! Control-point layout documents.

use std::fs;
use std::path::Path;

use mesh_io::IoError;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::TrackResult;

/// The user-picked control points of a track, as stored on disk.
///
/// Stored as JSON: `{ "control_points": [[x, y], ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    /// Control points in insertion order.
    pub control_points: Vec<[f64; 2]>,
}

impl TrackLayout {
    /// Create a layout from points.
    #[must_use]
    pub fn from_points(points: &[Point2<f64>]) -> Self {
        Self {
            control_points: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    /// A square loop centered on the origin.
    ///
    /// ```
    /// use track_editor::TrackLayout;
    ///
    /// let layout = TrackLayout::square(2.0);
    /// assert_eq!(layout.control_points[0], [-2.0, -2.0]);
    /// assert_eq!(layout.len(), 4);
    /// ```
    #[must_use]
    pub fn square(half_extent: f64) -> Self {
        let h = half_extent;
        Self {
            control_points: vec![[-h, -h], [h, -h], [h, h], [-h, h]],
        }
    }

    /// The control points as nalgebra points.
    #[must_use]
    pub fn points(&self) -> Vec<Point2<f64>> {
        self.control_points
            .iter()
            .map(|&[x, y]| Point2::new(x, y))
            .collect()
    }

    /// Number of control points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    /// Whether the layout has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Parse a layout from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid layout document.
    pub fn from_json(text: &str) -> TrackResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> TrackResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a layout file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackResult<Self> {
        let text = fs::read_to_string(path).map_err(IoError::from)?;
        Self::from_json(&text)
    }

    /// Save to a layout file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TrackResult<()> {
        fs::write(path, self.to_json()?).map_err(IoError::from)?;
        Ok(())
    }
}
