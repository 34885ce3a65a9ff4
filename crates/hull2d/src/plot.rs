//! Gnuplot script for the input points and the closed hull.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Image the script renders to unless told otherwise.
pub const DEFAULT_IMAGE: &str = "convex_hull.png";

/// Errors surfaced by the script generator.
#[derive(Debug)]
pub enum PlotError {
    Access { path: PathBuf, source: io::Error },
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Access { path, source } => {
                write!(f, "cannot write plot script {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Access { source, .. } => Some(source),
        }
    }
}

/// Inputs of one plot: raw points as markers, hull as a closed line.
#[derive(Clone, Debug)]
pub struct PlotScript<'a> {
    pub image: &'a str,
    pub points_file: &'a Path,
    pub hull_file: &'a Path,
}

impl PlotScript<'_> {
    /// Script text. Columns 1:2 of each file are x and y.
    pub fn render(&self) -> String {
        format!(
            "set terminal png\n\
             set output {image}\n\
             plot {points} using 1:2 title 'Points' with points pointtype 7, \\\n     \
             {hull} using 1:2 title 'Convex Hull' with linespoints pointtype 5\n",
            image = quote(self.image),
            points = quote(&self.points_file.to_string_lossy()),
            hull = quote(&self.hull_file.to_string_lossy()),
        )
    }
}

/// Single-quoted gnuplot string; `'` is escaped by doubling.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Write the script for `points_file` and `hull_file` to `script_file`.
pub fn write_script(
    script_file: &Path,
    points_file: &Path,
    hull_file: &Path,
    image: &str,
) -> Result<(), PlotError> {
    let script = PlotScript {
        image,
        points_file,
        hull_file,
    };
    fs::write(script_file, script.render()).map_err(|source| PlotError::Access {
        path: script_file.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn script_layout() {
        let script = PlotScript {
            image: DEFAULT_IMAGE,
            points_file: Path::new("points.txt"),
            hull_file: Path::new("hull.txt"),
        };
        assert_eq!(
            script.render(),
            "set terminal png\n\
             set output 'convex_hull.png'\n\
             plot 'points.txt' using 1:2 title 'Points' with points pointtype 7, \\\n     \
             'hull.txt' using 1:2 title 'Convex Hull' with linespoints pointtype 5\n"
        );
    }

    #[test]
    fn quotes_are_doubled() {
        let script = PlotScript {
            image: DEFAULT_IMAGE,
            points_file: Path::new("it's.txt"),
            hull_file: Path::new("hull.txt"),
        };
        assert!(script.render().contains("plot 'it''s.txt' using 1:2"));
    }

    #[test]
    fn writes_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("plot.gp");
        write_script(&dest, Path::new("a.txt"), Path::new("b.txt"), "out.png").unwrap();
        let text = fs::read_to_string(&dest).unwrap();
        assert!(text.starts_with("set terminal png\nset output 'out.png'\n"));
        assert_eq!(text.matches("using 1:2").count(), 2);
    }

    #[test]
    fn unwritable_destination_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("no-such-dir").join("plot.gp");
        let err = write_script(&dest, Path::new("a"), Path::new("b"), DEFAULT_IMAGE).unwrap_err();
        assert!(matches!(err, PlotError::Access { .. }));
    }
}
