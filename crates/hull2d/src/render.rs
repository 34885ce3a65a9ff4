//! External rendering of a plot script.
//!
//! The pipeline only sees `Render`; tests inject their own implementation so no
//! plotting tool has to be installed. The subprocess call blocks until it exits.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of one render attempt. Never affects the persisted files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    Rendered,
    /// The tool ran and exited unsuccessfully; `code` is `None` when killed by a signal.
    Failed { code: Option<i32> },
    /// The tool could not be started.
    Unavailable { reason: String },
    Skipped,
}

impl RenderStatus {
    #[inline]
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderStatus::Rendered)
    }
}

/// Capability: turn a script file into an image.
pub trait Render {
    fn render(&self, script: &Path) -> RenderStatus;
}

/// Runs `<program> <script>` in the current directory.
#[derive(Clone, Debug)]
pub struct Gnuplot {
    pub program: OsString,
}

impl Default for Gnuplot {
    fn default() -> Self {
        Self {
            program: OsString::from("gnuplot"),
        }
    }
}

impl Render for Gnuplot {
    fn render(&self, script: &Path) -> RenderStatus {
        let status = Command::new(&self.program)
            .arg(script)
            .stdin(Stdio::null())
            .status();
        match status {
            Ok(s) if s.success() => RenderStatus::Rendered,
            Ok(s) => RenderStatus::Failed { code: s.code() },
            Err(e) => RenderStatus::Unavailable {
                reason: format!("{}: {e}", self.program.to_string_lossy()),
            },
        }
    }
}

/// Leaves the script alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRender;

impl Render for NoRender {
    fn render(&self, _script: &Path) -> RenderStatus {
        RenderStatus::Skipped
    }
}
