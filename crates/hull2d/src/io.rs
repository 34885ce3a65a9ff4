//! Point files: one `"<x> <y>"` row per point.
//!
//! - `read_points` is strict: access, format and empty-input failures abort the run.
//! - `write_hull` is lenient: it never errors, it logs and returns a `HullWrite` outcome.
//! - Files are closed when the reader or writer goes out of scope, on every path.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::hull::MIN_POINTS;
use crate::point::Point;

/// Errors surfaced by the point-set reader.
#[derive(Debug)]
pub enum ReadError {
    /// The source could not be opened or read.
    Access { path: PathBuf, source: io::Error },
    /// A non-blank line is not exactly two integers. `line` is 1-based.
    Format { line: usize, content: String },
    /// No points at all.
    Empty { path: PathBuf },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Access { path, source } => {
                write!(f, "cannot open file {}: {source}", path.display())
            }
            ReadError::Format { line, content } => write!(
                f,
                "invalid data in file at line {line} ({content:?}); each line must contain two integers"
            ),
            ReadError::Empty { path } => write!(f, "input file {} is empty", path.display()),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Access { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read every point from the file at `path`, in file order.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Access {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(BufReader::new(file), path)
}

/// Parse points from any buffered source. `origin` names the source in errors.
pub fn parse_points<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Point>, ReadError> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(ReadError::Format {
                    line: idx + 1,
                    content: "<invalid utf-8>".to_string(),
                })
            }
            Err(source) => {
                return Err(ReadError::Access {
                    path: origin.to_path_buf(),
                    source,
                })
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let p = Point::parse_line(&line).ok_or_else(|| ReadError::Format {
            line: idx + 1,
            content: line.trim().to_string(),
        })?;
        points.push(p);
    }
    if points.is_empty() {
        return Err(ReadError::Empty {
            path: origin.to_path_buf(),
        });
    }
    Ok(points)
}

/// Write `points` as rows, creating or truncating `path`.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_rows(&mut out, points)?;
    out.flush()
}

fn write_rows<W: Write>(out: &mut W, points: &[Point]) -> io::Result<()> {
    for p in points {
        writeln!(out, "{p}")?;
    }
    Ok(())
}

/// Outcome of persisting a hull. Only `Written` produced a file.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullWrite {
    /// `rows` includes the closing point.
    Written { rows: usize },
    /// Fewer than 3 vertices; nothing was created.
    TooFewVertices { count: usize },
    /// The destination could not be created or written.
    Unwritable { reason: String },
}

impl HullWrite {
    #[inline]
    pub fn is_written(&self) -> bool {
        matches!(self, HullWrite::Written { .. })
    }
}

/// Persist `hull` followed by its first vertex again. Failures are warnings.
pub fn write_hull<P: AsRef<Path>>(path: P, hull: &[Point]) -> HullWrite {
    let path = path.as_ref();
    if hull.len() < MIN_POINTS {
        tracing::warn!(
            count = hull.len(),
            path = %path.display(),
            "convex hull must contain at least {MIN_POINTS} points; not writing"
        );
        return HullWrite::TooFewVertices { count: hull.len() };
    }
    let closed: Vec<Point> = hull.iter().chain(hull.first()).copied().collect();
    match write_points(path, &closed) {
        Ok(()) => HullWrite::Written { rows: closed.len() },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot write hull file");
            HullWrite::Unwritable {
                reason: e.to_string(),
            }
        }
    }
}
