//! `trackgen build`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use track_editor::{TrackConfig, TrackEditor, TrackLayout};
use tracing::info;

/// Options for a build run.
#[derive(Args)]
pub struct BuildArgs {
    /// Control-point layout (JSON)
    #[arg(name = "LAYOUT")]
    pub layout: PathBuf,

    /// Pipeline configuration (JSON); defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Samples per control-point segment
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Full track width
    #[arg(long)]
    pub width: Option<f64>,

    /// Mesh destination (OBJ)
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// Centerline destination
    #[arg(long)]
    pub curve: Option<PathBuf>,

    /// Do not write the material library
    #[arg(long)]
    pub no_material: bool,
}

/// Load the configuration and apply command-line overrides.
fn resolve_config(args: &BuildArgs) -> Result<TrackConfig> {
    let mut config = match &args.config {
        Some(path) => TrackConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TrackConfig::default(),
    };

    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    if let Some(width) = args.width {
        config.track_width = width;
    }
    if let Some(mesh) = &args.mesh {
        config.export.mesh_path.clone_from(mesh);
    }
    if let Some(curve) = &args.curve {
        config.export.curve_path.clone_from(curve);
    }
    if args.no_material {
        config.export.write_material = false;
    }

    Ok(config)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

pub fn run(args: &BuildArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let layout = TrackLayout::load(&args.layout)
        .with_context(|| format!("Failed to load layout {}", args.layout.display()))?;

    let mut editor = TrackEditor::from_layout(&layout);
    editor
        .rebuild(&config)
        .map_err(|err| anyhow!("Track generation failed [{:?}]: {err}", err.code()))?;

    ensure_parent(&config.export.mesh_path)?;
    ensure_parent(&config.export.curve_path)?;
    editor
        .export(&config.export)
        .map_err(|err| anyhow!("Export failed [{:?}]: {err}", err.code()))?;

    info!(
        control_points = editor.control_points().len(),
        samples = editor.sampled_curve().len(),
        triangles = editor.triangles().len(),
        mesh = %config.export.mesh_path.display(),
        curve = %config.export.curve_path.display(),
        "Track built"
    );
    Ok(())
}
