use std::io::Write;

use regex::Regex;

use crate::error::{ExportError, Result};
use crate::math::Point2;
use crate::pipeline::ProjectionResult;

/// Pattern matching one `x: <float>, y: <float>` record anywhere in a line.
pub const POINT_PATTERN: &str =
    r"x:\s*([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?),\s*y:\s*([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?)";

/// Number formatting for point records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat {
    /// Fixed number of decimals, or `None` for the shortest representation
    /// that parses back to the same `f64`.
    pub precision: Option<usize>,
}

impl TextFormat {
    /// Shortest round-trip formatting.
    #[must_use]
    pub fn exact() -> Self {
        Self { precision: None }
    }

    /// Fixed-decimal formatting.
    #[must_use]
    pub fn fixed(decimals: usize) -> Self {
        Self {
            precision: Some(decimals),
        }
    }
}

/// Formats a point as `x: <v>, y: <v>`.
#[must_use]
pub fn format_point(p: &Point2, fmt: TextFormat) -> String {
    match fmt.precision {
        Some(decimals) => format!("x: {:.*}, y: {:.*}", decimals, p.x, decimals, p.y),
        None => format!("x: {}, y: {}", p.x, p.y),
    }
}

/// Writes every profile of `result` as a titled block of point records.
///
/// Each block is a blank line, `<PLANE> Projection Points:`, then one line
/// per point.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_projections<W: Write>(
    result: &ProjectionResult,
    fmt: TextFormat,
    writer: &mut W,
) -> Result<()> {
    for (plane, points) in result.iter() {
        writeln!(writer).map_err(ExportError::from)?;
        writeln!(writer, "{plane} Projection Points:").map_err(ExportError::from)?;
        for p in points {
            writeln!(writer, "{}", format_point(p, fmt)).map_err(ExportError::from)?;
        }
    }
    Ok(())
}

/// Extracts point records from log or export text.
#[derive(Debug, Clone)]
pub struct PointParser {
    pattern: Regex,
}

impl PointParser {
    /// Compiles the point pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(POINT_PATTERN).map_err(ExportError::from)?;
        Ok(Self { pattern })
    }

    /// Parses the first record on `line`, ignoring any surrounding text.
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Option<Point2> {
        let caps = self.pattern.captures(line)?;
        let x = caps.get(1)?.as_str().parse().ok()?;
        let y = caps.get(2)?.as_str().parse().ok()?;
        Some(Point2::new(x, y))
    }

    /// Parses one record per line, skipping lines without one.
    #[must_use]
    pub fn parse_points(&self, text: &str) -> Vec<Point2> {
        text.lines().filter_map(|line| self.parse_line(line)).collect()
    }

    /// Parses one record per non-blank line.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Malformed` for the first non-blank line that
    /// holds no record. Line numbers start at 1.
    pub fn parse_points_strict(&self, text: &str) -> Result<Vec<Point2>> {
        let mut points = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let p = self.parse_line(line).ok_or_else(|| ExportError::Malformed {
                line: idx + 1,
                text: line.to_owned(),
            })?;
            points.push(p);
        }
        Ok(points)
    }
}
