//! Wavefront MTL material library.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::IoResult;

/// Name of the material every track mesh uses.
pub const TRACK_MATERIAL: &str = "track_material";

/// Diffuse texture applied to the track surface.
pub const TRACK_TEXTURE: &str = "textures/asfalto.jpg";

/// A single Phong material.
///
/// [`Material::default`] is the asphalt material referenced by exported
/// track meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name (`newmtl`).
    pub name: String,
    /// Ambient color (`Ka`).
    pub ambient: [f64; 3],
    /// Diffuse color (`Kd`).
    pub diffuse: [f64; 3],
    /// Specular color (`Ks`).
    pub specular: [f64; 3],
    /// Specular exponent (`Ns`).
    pub shininess: f64,
    /// Diffuse texture map (`map_Kd`), relative to the library.
    pub diffuse_map: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: TRACK_MATERIAL.to_string(),
            ambient: [1.0, 1.0, 1.0],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.3, 0.3, 0.3],
            shininess: 32.0,
            diffuse_map: Some(TRACK_TEXTURE.to_string()),
        }
    }
}

/// Path of the material library that belongs to a mesh file.
///
/// ```
/// use mesh_io::material_path_for;
/// use std::path::Path;
///
/// assert_eq!(material_path_for("models/track.obj"), Path::new("models/track.mtl"));
/// ```
#[must_use]
pub fn material_path_for<P: AsRef<Path>>(mesh_path: P) -> PathBuf {
    mesh_path.as_ref().with_extension("mtl")
}

/// File name written on the `mtllib` line of a mesh file.
pub(crate) fn material_library_name(mesh_path: &Path) -> String {
    material_path_for(mesh_path)
        .file_name()
        .map_or_else(|| "track.mtl".to_string(), |name| name.to_string_lossy().into_owned())
}

/// Save a material library containing one material.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_mtl<P: AsRef<Path>>(material: &Material, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_mtl(material, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a material library to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_mtl<W: Write>(material: &Material, writer: &mut W) -> IoResult<()> {
    let [ka_r, ka_g, ka_b] = material.ambient;
    let [kd_r, kd_g, kd_b] = material.diffuse;
    let [ks_r, ks_g, ks_b] = material.specular;

    writeln!(writer, "# Track Material")?;
    writeln!(writer, "newmtl {}", material.name)?;
    writeln!(writer, "Ka {ka_r:?} {ka_g:?} {ka_b:?}")?;
    writeln!(writer, "Kd {kd_r:?} {kd_g:?} {kd_b:?}")?;
    writeln!(writer, "Ks {ks_r:?} {ks_g:?} {ks_b:?}")?;
    writeln!(writer, "Ns {}", material.shininess)?;
    if let Some(map) = &material.diffuse_map {
        writeln!(writer, "map_Kd {map}")?;
    }
    Ok(())
}
