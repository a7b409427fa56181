//! Wavefront OBJ format support.
//!
//! Track meshes are built in the XY plane. OBJ viewers expect Y up, so the
//! writer emits `(x, z, y)` for positions and normals and the reader swaps
//! them back. Every vertex carries a texture coordinate and a normal under
//! the same index, so faces are written as `f a/a/a b/b/b c/c/c`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, MeshTopology, Vertex};
use nalgebra::{Point2, Point3, Vector3};

use crate::error::{IoError, IoResult};
use crate::mtl::{TRACK_MATERIAL, material_library_name};

/// Save a mesh to an OBJ file.
///
/// The `mtllib` line names `<stem>.mtl` next to `path`; writing that file is
/// up to the caller (see [`save_mtl`](crate::save_mtl)).
///
/// # Errors
///
/// Returns [`IoError::EmptyMesh`] before creating the file if the mesh has no
/// vertices or faces, or an I/O error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::save_obj;
/// use mesh_types::IndexedMesh;
///
/// # fn build() -> IndexedMesh { IndexedMesh::new() }
/// let mesh = build();
/// save_obj(&mesh, "models/track.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    if mesh.is_empty() {
        return Err(IoError::EmptyMesh);
    }

    let path = path.as_ref();
    let library = material_library_name(path);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer, &library)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh in OBJ format to any writer.
///
/// # Errors
///
/// Returns [`IoError::EmptyMesh`] if the mesh has no vertices or faces, or an
/// I/O error if writing fails.
pub fn write_obj<W: Write>(
    mesh: &IndexedMesh,
    writer: &mut W,
    material_library: &str,
) -> IoResult<()> {
    if mesh.is_empty() {
        return Err(IoError::EmptyMesh);
    }

    writeln!(writer, "# Track mesh")?;
    writeln!(writer, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(writer, "# Faces: {}", mesh.face_count())?;
    writeln!(writer)?;
    writeln!(writer, "mtllib {material_library}")?;
    writeln!(writer, "usemtl {TRACK_MATERIAL}")?;
    writeln!(writer)?;

    for vertex in &mesh.vertices {
        let p = vertex.position;
        writeln!(writer, "v {} {} {}", p.x, p.z, p.y)?;
    }
    writeln!(writer)?;

    for vertex in &mesh.vertices {
        writeln!(writer, "vt {} {}", vertex.uv.x, vertex.uv.y)?;
    }
    writeln!(writer)?;

    for vertex in &mesh.vertices {
        let n = vertex.normal;
        writeln!(writer, "vn {} {} {}", n.x, n.z, n.y)?;
    }
    writeln!(writer)?;

    for face in &mesh.faces {
        let [a, b, c] = face.map(|i| u64::from(i) + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid OBJ.
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

/// One face corner: position index plus optional texture and normal indices,
/// all resolved to 0-based.
#[derive(Debug, Clone, Copy)]
struct Corner {
    position: usize,
    uv: Option<usize>,
    normal: Option<usize>,
}

/// Read an OBJ mesh from any buffered reader.
///
/// Understands `v`, `vt`, `vn` and `f`; other statements (`mtllib`,
/// `usemtl`, groups, smoothing) are ignored. Face corners may be written as
/// `a`, `a/b`, `a//c` or `a/b/c`, with negative indices counting back from
/// the latest element. Polygons are fan-triangulated.
///
/// Texture coordinates and normals are attached to the position referenced
/// by the same corner. Vertices that no face references keep a placeholder
/// normal and a zero texture coordinate.
///
/// # Errors
///
/// Returns an error on malformed numbers, faces with fewer than three
/// corners, or indices that point outside the declared elements.
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut positions: Vec<Point3<f64>> = Vec::new();
    let mut uvs: Vec<Point2<f64>> = Vec::new();
    let mut normals: Vec<Vector3<f64>> = Vec::new();
    let mut faces: Vec<(usize, [Corner; 3])> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let [x, y, z] = parse_floats(&mut tokens, line_no)?;
                positions.push(Point3::new(x, z, y));
            }
            Some("vt") => {
                let [u, v] = parse_floats(&mut tokens, line_no)?;
                uvs.push(Point2::new(u, v));
            }
            Some("vn") => {
                let [x, y, z] = parse_floats(&mut tokens, line_no)?;
                normals.push(Vector3::new(x, z, y));
            }
            Some("f") => {
                let counts = (positions.len(), uvs.len(), normals.len());
                let corners = tokens
                    .map(|token| parse_corner(token, counts, line_no))
                    .collect::<IoResult<Vec<_>>>()?;
                if corners.len() < 3 {
                    return Err(IoError::invalid_content(
                        line_no,
                        format!("face needs at least 3 corners, got {}", corners.len()),
                    ));
                }
                for k in 1..corners.len() - 1 {
                    faces.push((line_no, [corners[0], corners[k], corners[k + 1]]));
                }
            }
            _ => {}
        }
    }

    let mut mesh = IndexedMesh::with_capacity(positions.len(), faces.len());
    mesh.vertices.extend(positions.iter().map(|&p| Vertex::new(p, Point2::origin())));

    for (line_no, corners) in faces {
        let mut face = [0_u32; 3];
        for (slot, corner) in face.iter_mut().zip(corners) {
            let vertex = mesh.vertices.get_mut(corner.position).ok_or_else(|| {
                IoError::invalid_content(line_no, "vertex index out of range")
            })?;
            if let Some(t) = corner.uv {
                vertex.uv = *uvs.get(t).ok_or_else(|| {
                    IoError::invalid_content(line_no, "texture index out of range")
                })?;
            }
            if let Some(n) = corner.normal {
                vertex.normal = *normals.get(n).ok_or_else(|| {
                    IoError::invalid_content(line_no, "normal index out of range")
                })?;
            }
            *slot = u32::try_from(corner.position)
                .map_err(|_| IoError::invalid_content(line_no, "vertex index too large"))?;
        }
        mesh.faces.push(face);
    }

    Ok(mesh)
}

fn parse_floats<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
) -> IoResult<[f64; N]> {
    let mut values = [0.0; N];
    for value in &mut values {
        let token = tokens.next().ok_or_else(|| {
            IoError::invalid_content(line_no, format!("expected {N} coordinates"))
        })?;
        *value = token.parse()?;
    }
    Ok(values)
}

fn parse_corner(
    token: &str,
    (positions, uvs, normals): (usize, usize, usize),
    line_no: usize,
) -> IoResult<Corner> {
    let mut parts = token.split('/');
    let position = match parts.next() {
        Some(raw) if !raw.is_empty() => resolve_index(raw, positions, line_no)?,
        _ => return Err(IoError::invalid_content(line_no, "missing vertex index")),
    };
    let uv = match parts.next() {
        Some(raw) if !raw.is_empty() => Some(resolve_index(raw, uvs, line_no)?),
        _ => None,
    };
    let normal = match parts.next() {
        Some(raw) if !raw.is_empty() => Some(resolve_index(raw, normals, line_no)?),
        _ => None,
    };

    Ok(Corner {
        position,
        uv,
        normal,
    })
}

/// Turn a 1-based (or negative, relative) OBJ index into a 0-based one.
fn resolve_index(raw: &str, count: usize, line_no: usize) -> IoResult<usize> {
    let index: i64 = raw.parse()?;
    let resolved = match index {
        0 => None,
        i if i > 0 => usize::try_from(i - 1).ok(),
        i => usize::try_from(i.unsigned_abs())
            .ok()
            .and_then(|back| count.checked_sub(back)),
    };
    resolved.ok_or_else(|| IoError::invalid_content(line_no, format!("invalid index {index}")))
}
