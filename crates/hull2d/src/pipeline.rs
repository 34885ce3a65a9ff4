//! End-to-end run: read → hull → write → script → render.
//!
//! Only reading and hull construction can fail the run. Everything after that is
//! recorded in `PipelineReport` and logged where it happens.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::hull::{convex_hull, HullError};
use crate::io::{read_points, write_hull, HullWrite, ReadError};
use crate::plot::{write_script, PlotError, DEFAULT_IMAGE};
use crate::point::Point;
use crate::render::{Render, RenderStatus};

/// Script written next to the working directory unless overridden.
pub const DEFAULT_SCRIPT: &str = "plot_convex_hull.gp";

/// File locations for one run.
#[derive(Clone, Debug)]
pub struct PipelineCfg {
    pub input: PathBuf,
    pub output: PathBuf,
    pub script: PathBuf,
    pub image: String,
}

impl PipelineCfg {
    /// Default script and image names.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            script: PathBuf::from(DEFAULT_SCRIPT),
            image: DEFAULT_IMAGE.to_string(),
        }
    }
}

/// Fatal failures: the run stops and nothing after the failing stage happens.
#[derive(Debug)]
pub enum PipelineError {
    Read(ReadError),
    Hull(HullError),
}

impl From<ReadError> for PipelineError {
    fn from(e: ReadError) -> Self {
        PipelineError::Read(e)
    }
}

impl From<HullError> for PipelineError {
    fn from(e: HullError) -> Self {
        PipelineError::Hull(e)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Read(e) => write!(f, "reading points failed: {e}"),
            PipelineError::Hull(e) => write!(f, "building hull failed: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Read(e) => Some(e),
            PipelineError::Hull(e) => Some(e),
        }
    }
}

/// What each non-fatal stage did.
#[derive(Debug)]
pub struct PipelineReport {
    /// Number of points read.
    pub points: usize,
    /// Open hull, CCW from the smallest point.
    pub hull: Vec<Point>,
    pub hull_file: HullWrite,
    pub script: Result<PathBuf, PlotError>,
    pub render: RenderStatus,
}

impl PipelineReport {
    /// Hull file, script and image were all produced.
    pub fn is_complete(&self) -> bool {
        self.hull_file.is_written() && self.script.is_ok() && self.render.is_rendered()
    }
}

/// Run every stage for `cfg`, rendering through `renderer`.
pub fn run_pipeline(
    cfg: &PipelineCfg,
    renderer: &dyn Render,
) -> Result<PipelineReport, PipelineError> {
    let mut points = read_points(&cfg.input)?;
    let count = points.len();
    tracing::info!(input = %cfg.input.display(), points = count, "read points");

    let hull = convex_hull(&mut points)?;
    drop(points);
    tracing::info!(vertices = hull.len(), "built convex hull");

    let hull_file = write_hull(&cfg.output, &hull);
    if let HullWrite::Written { rows } = hull_file {
        tracing::info!(output = %cfg.output.display(), rows, "wrote hull file");
    }

    let script = write_script(&cfg.script, &cfg.input, &cfg.output, &cfg.image)
        .map(|()| cfg.script.clone());
    let render = match &script {
        Ok(path) => render_script(renderer, path),
        Err(e) => {
            tracing::error!(error = %e, "plot script not written; skipping render");
            RenderStatus::Skipped
        }
    };

    Ok(PipelineReport {
        points: count,
        hull,
        hull_file,
        script,
        render,
    })
}

fn render_script(renderer: &dyn Render, script: &Path) -> RenderStatus {
    let status = renderer.render(script);
    match &status {
        RenderStatus::Rendered => tracing::info!(script = %script.display(), "rendered plot"),
        RenderStatus::Skipped => tracing::info!("render skipped"),
        RenderStatus::Failed { code } => {
            tracing::warn!(code = ?code, script = %script.display(), "renderer exited unsuccessfully")
        }
        RenderStatus::Unavailable { reason } => {
            tracing::warn!(reason = %reason, "renderer unavailable")
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    /// Records the scripts it was asked to render.
    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<PathBuf>>,
    }

    impl Render for Recorder {
        fn render(&self, script: &Path) -> RenderStatus {
            self.seen.borrow_mut().push(script.to_path_buf());
            RenderStatus::Rendered
        }
    }

    fn cfg_in(dir: &Path, input_text: &str) -> PipelineCfg {
        let input = dir.join("points.txt");
        fs::write(&input, input_text).unwrap();
        let mut cfg = PipelineCfg::new(input, dir.join("hull.txt"));
        cfg.script = dir.join(DEFAULT_SCRIPT);
        cfg
    }

    #[test]
    fn defaults_match_fixed_names() {
        let cfg = PipelineCfg::new("in.txt", "out.txt");
        assert_eq!(cfg.script, PathBuf::from("plot_convex_hull.gp"));
        assert_eq!(cfg.image, "convex_hull.png");
    }

    #[test]
    fn square_runs_every_stage() {
        let dir = tempdir().unwrap();
        let cfg = cfg_in(dir.path(), "0 0\n4 0\n4 4\n0 4\n2 2\n");
        let rec = Recorder::default();
        let report = run_pipeline(&cfg, &rec).unwrap();
        assert_eq!(report.points, 5);
        assert_eq!(report.hull.len(), 4);
        assert_eq!(report.hull_file, HullWrite::Written { rows: 5 });
        assert!(report.is_complete());
        assert_eq!(rec.seen.borrow().as_slice(), &[cfg.script.clone()]);
        assert_eq!(
            fs::read_to_string(&cfg.output).unwrap(),
            "0 0\n4 0\n4 4\n0 4\n0 0\n"
        );
        let script = fs::read_to_string(&cfg.script).unwrap();
        assert!(script.contains(&*cfg.input.to_string_lossy()));
        assert!(script.contains(&*cfg.output.to_string_lossy()));
    }

    #[test]
    fn collinear_input_skips_hull_file_but_succeeds() {
        let dir = tempdir().unwrap();
        let cfg = cfg_in(dir.path(), "0 0\n1 1\n2 2\n3 3\n");
        let report = run_pipeline(&cfg, &crate::render::NoRender).unwrap();
        assert_eq!(report.hull, vec![Point::new(0, 0), Point::new(3, 3)]);
        assert_eq!(report.hull_file, HullWrite::TooFewVertices { count: 2 });
        assert!(!cfg.output.exists());
        assert!(cfg.script.exists());
        assert_eq!(report.render, RenderStatus::Skipped);
        assert!(!report.is_complete());
    }

    #[test]
    fn malformed_input_aborts_before_any_output() {
        let dir = tempdir().unwrap();
        let cfg = cfg_in(dir.path(), "0 0\n1 a\n2 2\n");
        let rec = Recorder::default();
        let err = run_pipeline(&cfg, &rec).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Read(ReadError::Format { line: 2, .. })
        ));
        assert!(!cfg.output.exists());
        assert!(!cfg.script.exists());
        assert!(rec.seen.borrow().is_empty());
    }

    #[test]
    fn two_points_abort_with_hull_error() {
        let dir = tempdir().unwrap();
        let cfg = cfg_in(dir.path(), "0 0\n5 5\n");
        let err = run_pipeline(&cfg, &crate::render::NoRender).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Hull(HullError::InsufficientPoints { count: 2 })
        ));
    }

    #[test]
    fn missing_input_aborts() {
        let dir = tempdir().unwrap();
        let cfg = PipelineCfg::new(dir.path().join("absent.txt"), dir.path().join("hull.txt"));
        let err = run_pipeline(&cfg, &crate::render::NoRender).unwrap_err();
        assert!(matches!(err, PipelineError::Read(ReadError::Access { .. })));
        assert!(err.to_string().starts_with("reading points failed"));
    }

    #[test]
    fn script_failure_is_reported_not_fatal() {
        let dir = tempdir().unwrap();
        let mut cfg = cfg_in(dir.path(), "0 0\n4 0\n0 4\n");
        cfg.script = dir.path().join("missing").join("plot.gp");
        let rec = Recorder::default();
        let report = run_pipeline(&cfg, &rec).unwrap();
        assert!(report.hull_file.is_written());
        assert!(matches!(report.script, Err(PlotError::Access { .. })));
        assert_eq!(report.render, RenderStatus::Skipped);
        assert!(rec.seen.borrow().is_empty());
    }
}
