//! The track editing pipeline.
//!
//! Five stages run strictly forward:
//!
//! 1. Control points (the only mutable input)
//! 2. Sampled centerline
//! 3. Inner and outer edges
//! 4. Ribbon mesh and its normals
//! 5. Export
//!
//! Nothing is re-derived automatically. Editing the control points clears
//! stages 2 to 4, and regenerating a stage clears every stage after it, so
//! the accessors never show results built from stale input.

use std::path::Path;

use mesh_io::{Material, material_path_for, save_centerline, save_mtl, save_obj};
use mesh_ribbon::{compute_vertex_normals, ribbon_from_offsets};
use mesh_types::{IndexedMesh, Vertex};
use nalgebra::Point2;
use tracing::{debug, info, warn};
use track_curve::{
    BasisEvaluation, ClosedBSpline, OffsetCurves, closed_length, max_turning_angle,
    offset_closed,
};

use crate::config::{ExportConfig, TrackConfig};
use crate::error::{TrackError, TrackResult};
use crate::layout::TrackLayout;

/// First stage cleared by an invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Curve,
    Offsets,
    Mesh,
}

/// Owns a track's control points and everything derived from them.
///
/// # Example
///
/// ```
/// use track_editor::TrackEditor;
/// use nalgebra::Point2;
///
/// let mut editor = TrackEditor::new();
/// for (x, y) in [(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)] {
///     editor.add_control_point(Point2::new(x, y));
/// }
///
/// editor.generate_curve(10).unwrap();
/// editor.compute_offsets(1.0).unwrap();
/// editor.triangulate().unwrap();
/// editor.compute_normals().unwrap();
///
/// assert_eq!(editor.sampled_curve().len(), 40);
/// assert_eq!(editor.vertices().len(), 80);
/// assert_eq!(editor.triangles().len(), 80);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackEditor {
    control_points: Vec<Point2<f64>>,
    basis: BasisEvaluation,
    sampled_curve: Vec<Point2<f64>>,
    offsets: OffsetCurves,
    mesh: IndexedMesh,
}

impl TrackEditor {
    /// Create an empty editor using closed-form cubic weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty editor using the given basis policy.
    #[must_use]
    pub fn with_basis(basis: BasisEvaluation) -> Self {
        Self {
            basis,
            ..Self::default()
        }
    }

    /// Create an editor holding a layout's control points.
    #[must_use]
    pub fn from_layout(layout: &TrackLayout) -> Self {
        Self {
            control_points: layout.points(),
            ..Self::default()
        }
    }

    /// The current control points as a layout document.
    #[must_use]
    pub fn layout(&self) -> TrackLayout {
        TrackLayout::from_points(&self.control_points)
    }

    // ==================== Control points ====================

    /// Append a control point to the end of the loop.
    ///
    /// Clears the sampled curve, the edges and the mesh.
    pub fn add_control_point(&mut self, point: Point2<f64>) {
        self.control_points.push(point);
        self.invalidate_from(Stage::Curve);
        debug!(
            x = point.x,
            y = point.y,
            count = self.control_points.len(),
            "Added control point"
        );
    }

    /// Remove the most recently added control point.
    ///
    /// Returns `None` and changes nothing if there are no control points.
    /// Otherwise clears the sampled curve, the edges and the mesh.
    pub fn remove_last_control_point(&mut self) -> Option<Point2<f64>> {
        let removed = self.control_points.pop()?;
        self.invalidate_from(Stage::Curve);
        debug!(
            x = removed.x,
            y = removed.y,
            count = self.control_points.len(),
            "Removed last control point"
        );
        Some(removed)
    }

    /// Remove every control point and all derived data.
    pub fn clear(&mut self) {
        self.control_points.clear();
        self.invalidate_from(Stage::Curve);
        debug!("Cleared track");
    }

    /// Change the basis policy used by [`generate_curve`](Self::generate_curve).
    ///
    /// Clears derived data when the policy actually changes.
    pub fn set_basis(&mut self, basis: BasisEvaluation) {
        if self.basis != basis {
            self.basis = basis;
            self.invalidate_from(Stage::Curve);
            debug!(%basis, "Changed basis policy");
        }
    }

    // ==================== Generation ====================

    /// Sample the closed B-spline through the control points.
    ///
    /// Produces `control_points().len() * resolution` points. Clears the
    /// edges and the mesh whether or not it succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the sampled curve empty, if:
    /// - Fewer than 4 control points exist (more for high-degree policies)
    /// - `resolution` is zero
    pub fn generate_curve(&mut self, resolution: usize) -> TrackResult<()> {
        self.invalidate_from(Stage::Curve);

        let sampled = ClosedBSpline::new(self.control_points.clone(), self.basis)
            .and_then(|spline| spline.sample(resolution));

        match sampled {
            Ok(points) => {
                self.sampled_curve = points;
                info!(
                    points = self.control_points.len(),
                    samples = self.sampled_curve.len(),
                    length = format!("{:.3}", closed_length(&self.sampled_curve)),
                    max_turn = format!("{:.3}", max_turning_angle(&self.sampled_curve)),
                    "Generated centerline"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    points = self.control_points.len(),
                    resolution,
                    "Cannot generate centerline: {err}"
                );
                Err(TrackError::Curve(err))
            }
        }
    }

    /// Offset the sampled curve by half the track width on each side.
    ///
    /// Clears the mesh whether or not it succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving both edges empty, if:
    /// - Fewer than 2 sampled points exist
    /// - `track_width` is negative or not finite
    pub fn compute_offsets(&mut self, track_width: f64) -> TrackResult<()> {
        self.invalidate_from(Stage::Offsets);

        match offset_closed(&self.sampled_curve, track_width) {
            Ok(edges) => {
                self.offsets = edges;
                info!(
                    points = self.offsets.len(),
                    track_width,
                    inner_length = format!("{:.3}", closed_length(&self.offsets.inner)),
                    outer_length = format!("{:.3}", closed_length(&self.offsets.outer)),
                    "Computed track edges"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    samples = self.sampled_curve.len(),
                    track_width,
                    "Cannot compute track edges: {err}"
                );
                Err(TrackError::Offset(err))
            }
        }
    }

    /// Build the closed ribbon mesh between the edges.
    ///
    /// Vertices carry placeholder normals until
    /// [`compute_normals`](Self::compute_normals) runs.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the mesh empty, if the edges have fewer than
    /// 2 points or differ in length.
    pub fn triangulate(&mut self) -> TrackResult<()> {
        self.invalidate_from(Stage::Mesh);

        match ribbon_from_offsets(&self.offsets.inner, &self.offsets.outer) {
            Ok(mesh) => {
                self.mesh = mesh;
                info!(
                    vertices = self.mesh.vertices.len(),
                    triangles = self.mesh.faces.len(),
                    area = format!("{:.3}", self.mesh.surface_area()),
                    "Triangulated track"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    inner = self.offsets.inner.len(),
                    outer = self.offsets.outer.len(),
                    "Cannot triangulate track: {err}"
                );
                Err(err.into())
            }
        }
    }

    /// Replace every vertex normal with the normalized sum of its face normals.
    ///
    /// # Errors
    ///
    /// Returns an error, changing nothing, if there is no mesh.
    pub fn compute_normals(&mut self) -> TrackResult<()> {
        compute_vertex_normals(&mut self.mesh).map_err(|err| {
            warn!("Cannot compute normals: {err}");
            TrackError::from(err)
        })?;
        info!(vertices = self.mesh.vertices.len(), "Computed normals");
        Ok(())
    }

    /// Run generation stages 2 to 4 with one configuration.
    ///
    /// Adopts the configured basis policy, then stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the configuration error or the first failing stage's error.
    pub fn rebuild(&mut self, config: &TrackConfig) -> TrackResult<()> {
        config.validate()?;
        self.set_basis(config.basis);

        self.generate_curve(config.resolution)?;
        self.compute_offsets(config.track_width)?;
        self.triangulate()?;
        self.compute_normals()
    }

    // ==================== Export ====================

    /// Write the mesh as OBJ plus its material library.
    ///
    /// The material library goes next to the mesh as `<stem>.mtl`. A failure
    /// to write it is logged and does not fail the export.
    ///
    /// # Errors
    ///
    /// Returns an error, creating no file, if there is no mesh, or if the
    /// mesh file cannot be written.
    pub fn export_mesh<P: AsRef<Path>>(&self, path: P) -> TrackResult<()> {
        self.write_mesh(path.as_ref(), true)
    }

    /// Write the sampled centerline as text.
    ///
    /// # Errors
    ///
    /// Returns an error, creating no file, if there is no sampled curve, or if
    /// the file cannot be written.
    pub fn export_curve<P: AsRef<Path>>(&self, path: P) -> TrackResult<()> {
        let path = path.as_ref();
        save_centerline(&self.sampled_curve, path).map_err(|err| {
            warn!(path = %path.display(), "Cannot export centerline: {err}");
            TrackError::from(err)
        })?;
        info!(
            path = %path.display(),
            points = self.sampled_curve.len(),
            "Exported centerline"
        );
        Ok(())
    }

    /// Write mesh, material and centerline to the configured destinations.
    ///
    /// # Errors
    ///
    /// Returns the first export error.
    pub fn export(&self, export: &ExportConfig) -> TrackResult<()> {
        self.write_mesh(&export.mesh_path, export.write_material)?;
        self.export_curve(&export.curve_path)
    }

    fn write_mesh(&self, path: &Path, with_material: bool) -> TrackResult<()> {
        save_obj(&self.mesh, path).map_err(|err| {
            warn!(path = %path.display(), "Cannot export mesh: {err}");
            TrackError::from(err)
        })?;
        info!(
            path = %path.display(),
            vertices = self.mesh.vertices.len(),
            triangles = self.mesh.faces.len(),
            "Exported mesh"
        );

        if with_material {
            let material_path = material_path_for(path);
            match save_mtl(&Material::default(), &material_path) {
                Ok(()) => debug!(path = %material_path.display(), "Exported material"),
                Err(err) => warn!(
                    path = %material_path.display(),
                    "Cannot export material: {err}"
                ),
            }
        }

        Ok(())
    }

    // ==================== Accessors ====================

    /// Control points in insertion order.
    #[must_use]
    pub fn control_points(&self) -> &[Point2<f64>] {
        &self.control_points
    }

    /// Basis policy used for curve generation.
    #[must_use]
    pub const fn basis(&self) -> BasisEvaluation {
        self.basis
    }

    /// Sampled centerline, empty until generated.
    #[must_use]
    pub fn sampled_curve(&self) -> &[Point2<f64>] {
        &self.sampled_curve
    }

    /// Inner edge, to the right of the direction of travel.
    #[must_use]
    pub fn inner_curve(&self) -> &[Point2<f64>] {
        &self.offsets.inner
    }

    /// Outer edge, to the left of the direction of travel.
    #[must_use]
    pub fn outer_curve(&self) -> &[Point2<f64>] {
        &self.offsets.outer
    }

    /// Both edges.
    #[must_use]
    pub const fn offsets(&self) -> &OffsetCurves {
        &self.offsets
    }

    /// Mesh vertices, inner and outer interleaved.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.mesh.vertices
    }

    /// Mesh triangles as vertex index triples.
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.mesh.faces
    }

    /// The whole mesh.
    #[must_use]
    pub const fn mesh(&self) -> &IndexedMesh {
        &self.mesh
    }

    fn invalidate_from(&mut self, stage: Stage) {
        if stage <= Stage::Curve {
            self.sampled_curve.clear();
        }
        if stage <= Stage::Offsets {
            self.offsets.clear();
        }
        self.mesh.clear();
    }
}
