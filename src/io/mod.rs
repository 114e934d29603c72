//! Instance loading and solution writing.
//!
//! Instances use a TSPLIB-style coordinate section: lines up to and
//! including `NODE_COORD_SECTION` are header, then each line holds
//! `id x y` until `EOF`, a blank line, or end of input. Solutions are
//! written as two lines: the integer tour length, then the
//! comma-separated vertex ids in tour order.

mod error;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::geometry::Point;
use crate::instance::{Instance, VertexId};

pub use error::IoError;

/// Reads an instance file.
///
/// Rejects instances with fewer than 2 vertices or duplicate ids, so
/// every instance handed to a solver is valid by construction.
pub fn read_instance(path: &Path) -> Result<Instance, IoError> {
    let content = fs::read_to_string(path)?;
    parse_instance(&content, path)
}

/// Parses instance content; `path` is only used for error reporting.
pub fn parse_instance(content: &str, path: &Path) -> Result<Instance, IoError> {
    let mut vertices: Vec<(VertexId, Point)> = Vec::new();
    let mut in_coord_section = false;

    for (line_num, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if !in_coord_section {
            if line.starts_with("NODE_COORD_SECTION") {
                in_coord_section = true;
            }
            continue;
        }
        if line == "EOF" || line.is_empty() {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        let parse_err = |what: &str, token: &str| IoError::Parse {
            file: path.to_path_buf(),
            line: line_num + 1,
            cause: format!("invalid {what}: {token}"),
        };
        let id: VertexId = parts[0].parse().map_err(|_| parse_err("vertex id", parts[0]))?;
        let x: f64 = parts[1].parse().map_err(|_| parse_err("x coordinate", parts[1]))?;
        let y: f64 = parts[2].parse().map_err(|_| parse_err("y coordinate", parts[2]))?;
        vertices.push((id, Point::new(x, y)));
    }

    if vertices.len() < 2 {
        return Err(IoError::InvalidInstance(format!(
            "need at least 2 vertices, found {}",
            vertices.len()
        )));
    }
    let mut ids: Vec<VertexId> = vertices.iter().map(|&(id, _)| id).collect();
    ids.sort_unstable();
    if let Some(dup) = ids.windows(2).find(|w| w[0] == w[1]) {
        return Err(IoError::InvalidInstance(format!(
            "duplicate vertex id {}",
            dup[0]
        )));
    }

    Ok(Instance::new(vertices))
}

/// Writes a solution file: the length, then the tour ids joined by commas.
pub fn write_solution(path: &Path, length: i64, tour: &[VertexId]) -> Result<(), IoError> {
    let mut out = format!("{length}\n");
    for (i, id) in tour.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{id}");
    }
    fs::write(path, out)?;
    Ok(())
}
