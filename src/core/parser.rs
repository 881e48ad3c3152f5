//! Point loaders
//!
//! Text input is one `x,y,z` triple per line; fields may be separated by
//! commas, whitespace, or both. Blank lines and `#` comments are skipped.
//! JSON input is an array of coordinate arrays.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info, trace};

use super::data::{Point3D, PointCollection};
use crate::error::{InvalidPointKind, PlotError};

/// On-disk point list format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputFormat {
    #[default]
    Text,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Parse a single `x,y,z` triple. `index` is only used for error reporting.
pub fn parse_point(line: &str, index: usize) -> Result<Point3D, PlotError> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    if fields.len() != 3 {
        return Err(PlotError::invalid_point(
            index,
            InvalidPointKind::WrongArity(fields.len()),
        ));
    }

    let mut components = [0.0; 3];
    for (slot, field) in components.iter_mut().zip(&fields) {
        let value: f64 = field.parse().map_err(|_| {
            PlotError::invalid_point(index, InvalidPointKind::NotANumber(field.to_string()))
        })?;
        if !value.is_finite() {
            return Err(PlotError::invalid_point(index, InvalidPointKind::NonFinite));
        }
        *slot = value;
    }

    Ok(Point3D::from(components))
}

/// Parse line-based text. Errors carry the 1-based line number.
pub fn parse_text(input: &str) -> Result<PointCollection, PlotError> {
    let mut points = PointCollection::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let point = parse_point(line, line_no + 1)?;
        trace!(line = line_no + 1, ?point, "Parsed point");
        points.add_point(point.x, point.y, point.z);
    }

    debug!(points = points.len(), "Parsed text input");
    Ok(points)
}

/// Parse a JSON array of `[x, y, z]` arrays. Errors carry the 0-based
/// array index.
pub fn parse_json(input: &str) -> Result<PointCollection, PlotError> {
    let raw: Vec<Vec<f64>> = serde_json::from_str(input)?;

    let points = raw
        .iter()
        .enumerate()
        .map(|(index, components)| Point3D::from_components(index, components))
        .collect::<Result<PointCollection, _>>()?;

    debug!(points = points.len(), "Parsed JSON input");
    Ok(points)
}

pub fn parse(input: &str, format: InputFormat) -> Result<PointCollection, PlotError> {
    match format {
        InputFormat::Text => parse_text(input),
        InputFormat::Json => parse_json(input),
    }
}

/// Load points from a file, or from stdin when `path` is `-`
pub fn load_points(path: &Path, format: InputFormat) -> Result<PointCollection, PlotError> {
    let io_err = |source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let input = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_err)?
    };

    let points = parse(&input, format)?;
    info!(path = %path.display(), ?format, points = points.len(), "Loaded points");
    Ok(points)
}
