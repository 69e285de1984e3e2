//! `TYPE:ID:NAME:COORDS` records.
//!
//! - TYPE is `RECTANGLE` (8 numbers → 4 planar points) or `TETRAHEDRON`
//!   (12 numbers → 4 vertices). Extra numbers are ignored.
//! - COORDS is whitespace-separated; each number matches `-?digits(.digits)?`.
//! - Blank lines and lines starting with `#` carry no record.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use shapecalc::Point;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeKind {
    Rectangle,
    Tetrahedron,
}

impl ShapeKind {
    /// Numbers consumed from COORDS.
    pub fn coordinate_count(self) -> usize {
        match self {
            ShapeKind::Rectangle => 8,
            ShapeKind::Tetrahedron => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::Tetrahedron => "TETRAHEDRON",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECTANGLE" => Ok(ShapeKind::Rectangle),
            "TETRAHEDRON" => Ok(ShapeKind::Tetrahedron),
            other => Err(RecordError::UnknownType(other.to_string())),
        }
    }
}

/// One parsed record.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub id: String,
    pub name: String,
    pub points: Vec<Point>,
}

impl Shape {
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

/// Why a line could not become a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Fewer than four `:`-separated fields.
    Format,
    UnknownType(String),
    InvalidNumber(String),
    TooFewCoordinates {
        kind: ShapeKind,
        needed: usize,
        got: usize,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Format => {
                write!(f, "invalid line format, expected TYPE:ID:NAME:COORDINATES")
            }
            RecordError::UnknownType(t) => write!(f, "unknown shape type: {t}"),
            RecordError::InvalidNumber(s) => write!(f, "invalid number format: {s:?}"),
            RecordError::TooFewCoordinates { kind, needed, got } => {
                write!(f, "{kind} requires {needed} coordinates, got {got}")
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Strict decimal: optional `-`, digits, optional `.digits`.
pub fn parse_number(s: &str) -> Result<f64, RecordError> {
    let bad = || RecordError::InvalidNumber(s.to_string());
    let body = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || frac.is_some_and(|f| !digits(f)) {
        return Err(bad());
    }
    let v: f64 = s.parse().map_err(|_| bad())?;
    if !v.is_finite() {
        return Err(bad());
    }
    Ok(v)
}

/// Parse one line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Shape>, RecordError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut fields = line.split(':');
    let (Some(kind), Some(id), Some(name), Some(coords)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(RecordError::Format);
    };
    let kind: ShapeKind = kind.parse()?;
    let tokens: Vec<&str> = coords.split_whitespace().collect();
    let needed = kind.coordinate_count();
    if tokens.len() < needed {
        return Err(RecordError::TooFewCoordinates {
            kind,
            needed,
            got: tokens.len(),
        });
    }
    let nums = tokens[..needed]
        .iter()
        .map(|t| parse_number(t))
        .collect::<Result<Vec<f64>, _>>()?;
    let points = match kind {
        ShapeKind::Rectangle => nums.chunks(2).map(|c| Point::xy(c[0], c[1])).collect(),
        ShapeKind::Tetrahedron => nums
            .chunks(3)
            .map(|c| Point::new(c[0], c[1], c[2]))
            .collect(),
    };
    Ok(Some(Shape {
        kind,
        id: id.to_string(),
        name: name.to_string(),
        points,
    }))
}

/// Shapes and per-line failures from one input.
#[derive(Debug, Default)]
pub struct Ingest {
    pub shapes: Vec<Shape>,
    /// `"line N: message"`, N counted from 1 over the raw input.
    pub errors: Vec<String>,
}

/// Parse every line of `text`; failures are collected, not fatal.
pub fn parse_all(text: &str) -> Ingest {
    let mut out = Ingest::default();
    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        match parse_line(line) {
            Ok(Some(shape)) => {
                debug!(line = lineno, kind = %shape.kind, name = %shape.name, "parsed");
                out.shapes.push(shape);
            }
            Ok(None) => debug!(line = lineno, "skipping empty or comment line"),
            Err(e) => {
                warn!(line = lineno, error = %e, "rejected");
                out.errors.push(format!("line {lineno}: {e}"));
            }
        }
    }
    out
}

/// Read and parse a record file.
pub fn read_records(path: &Path) -> Result<Ingest> {
    info!(path = %path.display(), "processing file");
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let ingest = parse_all(&text);
    info!(
        shapes = ingest.shapes.len(),
        errors = ingest.errors.len(),
        "file parsed"
    );
    Ok(ingest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn numbers_follow_the_strict_pattern() {
        assert_eq!(parse_number("3"), Ok(3.0));
        assert_eq!(parse_number("-2.5"), Ok(-2.5));
        for bad in ["", "-", "1.", ".5", "1e3", "+1", "0x10", "1.2.3", "abc", "NaN"] {
            assert!(parse_number(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rectangle_record() {
        let s = parse_line("RECTANGLE:1:Rect A:0 0 0 3 4 3 4 0")
            .unwrap()
            .unwrap();
        assert_eq!(s.kind, ShapeKind::Rectangle);
        assert_eq!(s.id, "1");
        assert_eq!(s.name, "Rect A");
        assert_eq!(s.points[2], Point::xy(4.0, 3.0));
        assert_eq!(s.points.len(), 4);
    }

    #[test]
    fn tetrahedron_record_ignores_extra_numbers() {
        let s = parse_line("TETRAHEDRON:7:T:0 0 0 1 0 0 0 1 0 0 0 1 9 9")
            .unwrap()
            .unwrap();
        assert_eq!(s.kind, ShapeKind::Tetrahedron);
        assert_eq!(s.points[3], Point::new(0.0, 0.0, 1.0));
        assert_eq!(s.points.len(), 4);
    }

    #[test]
    fn comments_and_blanks_carry_nothing() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# RECTANGLE:1:x:0 0"), Ok(None));
    }

    #[test]
    fn malformed_records() {
        assert_eq!(parse_line("RECTANGLE:1:x"), Err(RecordError::Format));
        assert_eq!(
            parse_line("CIRCLE:1:x:0 0 1"),
            Err(RecordError::UnknownType("CIRCLE".into()))
        );
        assert_eq!(
            parse_line("RECTANGLE:1:x:0 0 0 3 4 3 4"),
            Err(RecordError::TooFewCoordinates {
                kind: ShapeKind::Rectangle,
                needed: 8,
                got: 7
            })
        );
        assert_eq!(
            parse_line("RECTANGLE:1:x:0 0 0 3 4 3 4 abc"),
            Err(RecordError::InvalidNumber("abc".into()))
        );
    }

    #[test]
    fn parse_all_counts_lines_from_one() {
        let text = "# header\nRECTANGLE:1:a:0 0 0 1 1 1 1 0\n\nBOGUS\nTETRAHEDRON:2:b:0 0 0 1 0 0 0 1 0 0 0 1\n";
        let ingest = parse_all(text);
        assert_eq!(ingest.shapes.len(), 2);
        assert_eq!(ingest.errors.len(), 1);
        assert!(ingest.errors[0].starts_with("line 4:"));
    }

    #[test]
    fn read_records_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "RECTANGLE:1:a:0 0 0 1 1 1 1 0\n").unwrap();
        let ingest = read_records(&path).unwrap();
        assert_eq!(ingest.shapes.len(), 1);
        assert!(read_records(&dir.path().join("missing.txt")).is_err());
    }
}
