//! `trackgen init`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use track_editor::TrackLayout;
use tracing::info;

pub fn run(path: &Path, half_extent: f64, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (pass --force to overwrite)", path.display());
    }
    if !half_extent.is_finite() || half_extent <= 0.0 {
        bail!("half extent must be positive, got {half_extent}");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let layout = TrackLayout::square(half_extent);
    layout
        .save(path)
        .with_context(|| format!("Failed to write layout {}", path.display()))?;

    info!(path = %path.display(), points = layout.len(), "Wrote layout");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_square_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layouts").join("square.json");

        run(&path, 3.0, false).unwrap();
        assert_eq!(TrackLayout::load(&path).unwrap(), TrackLayout::square(3.0));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, "{}").unwrap();

        assert!(run(&path, 2.0, false).is_err());
        run(&path, 2.0, true).unwrap();
        assert_eq!(TrackLayout::load(&path).unwrap().len(), 4);
    }

    #[test]
    fn rejects_non_positive_extent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("a.json"), 0.0, false).is_err());
    }
}
