//! Pipeline configuration.

use std::fs;
use std::path::{Path, PathBuf};

use mesh_io::IoError;
use serde::{Deserialize, Serialize};
use track_curve::BasisEvaluation;

use crate::error::{TrackError, TrackResult};

/// Default samples per control-point segment.
pub const DEFAULT_RESOLUTION: usize = 20;

/// Default full ribbon width.
pub const DEFAULT_TRACK_WIDTH: f64 = 0.4;

/// Configuration for a full track build.
///
/// Missing fields take their defaults when read from JSON.
///
/// # Example
///
/// ```
/// use track_editor::TrackConfig;
///
/// let config = TrackConfig::default().with_resolution(10).with_track_width(1.0);
/// assert_eq!(config.resolution, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Samples per control-point segment.
    pub resolution: usize,

    /// Full ribbon width; each edge sits half of it from the centerline.
    pub track_width: f64,

    /// How spline basis weights are evaluated.
    pub basis: BasisEvaluation,

    /// Export destinations.
    pub export: ExportConfig,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            track_width: DEFAULT_TRACK_WIDTH,
            basis: BasisEvaluation::ClosedForm,
            export: ExportConfig::default(),
        }
    }
}

impl TrackConfig {
    /// Sets the samples per segment.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the track width.
    #[must_use]
    pub const fn with_track_width(mut self, track_width: f64) -> Self {
        self.track_width = track_width;
        self
    }

    /// Sets the basis evaluation policy.
    #[must_use]
    pub const fn with_basis(mut self, basis: BasisEvaluation) -> Self {
        self.basis = basis;
        self
    }

    /// Sets the export destinations.
    #[must_use]
    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    /// Check every value before a build starts.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero resolution, a negative or non-finite
    /// width, or a basis degree outside the supported range.
    pub fn validate(&self) -> TrackResult<()> {
        if self.resolution == 0 {
            return Err(TrackError::invalid_config("resolution must be at least 1"));
        }
        if !self.track_width.is_finite() || self.track_width < 0.0 {
            return Err(TrackError::invalid_config(format!(
                "track width {} must be finite and non-negative",
                self.track_width
            )));
        }
        self.basis.validate()?;
        Ok(())
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration document.
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

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackResult<Self> {
        let text = fs::read_to_string(path).map_err(IoError::from)?;
        Self::from_json(&text)
    }

    /// Save to a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TrackResult<()> {
        fs::write(path, self.to_json()?).map_err(IoError::from)?;
        Ok(())
    }
}

/// Where a build writes its artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// OBJ mesh destination.
    pub mesh_path: PathBuf,

    /// Centerline text destination.
    pub curve_path: PathBuf,

    /// Write `<stem>.mtl` next to the mesh.
    pub write_material: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            mesh_path: PathBuf::from("models/track.obj"),
            curve_path: PathBuf::from("models/track_curve.txt"),
            write_material: true,
        }
    }
}

impl ExportConfig {
    /// Sets the mesh destination.
    #[must_use]
    pub fn with_mesh_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mesh_path = path.into();
        self
    }

    /// Sets the centerline destination.
    #[must_use]
    pub fn with_curve_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.curve_path = path.into();
        self
    }

    /// Skip the material library.
    #[must_use]
    pub const fn without_material(mut self) -> Self {
        self.write_material = false;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::ReasonCode;

    #[test]
    fn defaults_match_editor_defaults() {
        let config = TrackConfig::default();
        assert_eq!(config.resolution, 20);
        assert_eq!(config.track_width, 0.4);
        assert_eq!(config.basis, BasisEvaluation::ClosedForm);
        assert_eq!(config.export.mesh_path, Path::new("models/track.obj"));
        assert_eq!(config.export.curve_path, Path::new("models/track_curve.txt"));
        assert!(config.export.write_material);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero = TrackConfig::default().with_resolution(0);
        assert_eq!(zero.validate().unwrap_err().code(), ReasonCode::InvalidParameter);

        assert!(TrackConfig::default().with_track_width(-0.1).validate().is_err());
        assert!(TrackConfig::default().with_track_width(f64::INFINITY).validate().is_err());
        assert!(TrackConfig::default().with_track_width(0.0).validate().is_ok());

        let basis = BasisEvaluation::CoxDeBoor { degree: 12 };
        let err = TrackConfig::default().with_basis(basis).validate().unwrap_err();
        assert_eq!(err.code(), ReasonCode::InvalidParameter);
    }

    #[test]
    fn partial_json_takes_defaults() {
        let config = TrackConfig::from_json(r#"{ "track_width": 1.5 }"#).unwrap();
        assert_eq!(config.track_width, 1.5);
        assert_eq!(config.resolution, 20);

        let config =
            TrackConfig::from_json(r#"{ "export": { "write_material": false } }"#).unwrap();
        assert!(!config.export.write_material);
        assert_eq!(config.export.mesh_path, Path::new("models/track.obj"));
    }

    #[test]
    fn json_roundtrip() {
        let config = TrackConfig::default()
            .with_resolution(8)
            .with_basis(BasisEvaluation::CoxDeBoor { degree: 3 })
            .with_export(ExportConfig::default().with_mesh_path("out/a.obj").without_material());

        let parsed = TrackConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn malformed_json_is_document_error() {
        let err = TrackConfig::from_json("{ resolution: 3 ").unwrap_err();
        assert_eq!(err.code(), ReasonCode::InvalidDocument);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.json");
        let config = TrackConfig::default().with_track_width(0.75);

        config.save(&path).unwrap();
        assert_eq!(TrackConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TrackConfig::load("does/not/exist.json").unwrap_err();
        assert_eq!(err.code(), ReasonCode::Io);
    }
}
