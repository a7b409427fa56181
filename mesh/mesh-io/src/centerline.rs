//! Centerline text files for camera and vehicle animation.
//!
//! The format is a two-line comment header, a blank line, then one
//! `x 0 y` triple per sampled point. The drawing plane maps to the ground
//! plane of a Y-up scene, so the middle coordinate is always zero.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point2;

use crate::error::{IoError, IoResult};

/// Save a sampled centerline.
///
/// # Errors
///
/// Returns [`IoError::EmptyCurve`] before creating the file if there are no
/// points, or an I/O error if the file cannot be written.
pub fn save_centerline<P: AsRef<Path>>(points: &[Point2<f64>], path: P) -> IoResult<()> {
    if points.is_empty() {
        return Err(IoError::EmptyCurve);
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_centerline(points, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a sampled centerline to any writer.
///
/// # Errors
///
/// Returns [`IoError::EmptyCurve`] if there are no points, or an I/O error if
/// writing fails.
pub fn write_centerline<W: Write>(points: &[Point2<f64>], writer: &mut W) -> IoResult<()> {
    if points.is_empty() {
        return Err(IoError::EmptyCurve);
    }

    writeln!(writer, "# Track Animation Curve")?;
    writeln!(writer, "# Total points: {}", points.len())?;
    writeln!(writer)?;
    for p in points {
        writeln!(writer, "{} 0 {}", p.x, p.y)?;
    }
    Ok(())
}

/// Load a centerline file back into planar points.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a data line does not hold
/// three numbers.
pub fn load_centerline<P: AsRef<Path>>(path: P) -> IoResult<Vec<Point2<f64>>> {
    let file = File::open(path)?;
    read_centerline(BufReader::new(file))
}

/// Read a centerline from any buffered reader.
///
/// Comment and blank lines are skipped; the middle coordinate is ignored.
///
/// # Errors
///
/// Returns an error if a data line does not hold three numbers.
pub fn read_centerline<R: BufRead>(reader: R) -> IoResult<Vec<Point2<f64>>> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()?;
        let [x, _, y] = values[..] else {
            return Err(IoError::invalid_content(
                index + 1,
                format!("expected 3 values, got {}", values.len()),
            ));
        };
        points.push(Point2::new(x, y));
    }

    Ok(points)
}
