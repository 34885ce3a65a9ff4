//! Convex hulls of integer point sets in the plane.
//!
//! Pipeline
//! - `io::read_points` parses a whitespace-separated point file.
//! - `hull::convex_hull` sorts and sweeps (monotone chain) into a CCW hull.
//! - `io::write_hull` persists the hull with a closing point.
//! - `plot::write_script` emits a gnuplot script; `render::Render` runs it.
//! - `pipeline::run_pipeline` wires the stages end-to-end.
//!
//! Error classes
//! - Reading and hull construction fail with typed errors that abort the run.
//! - Output failures (hull file, script) are logged and reported, never unwound.

pub mod hull;
pub mod io;
pub mod orient;
pub mod pipeline;
pub mod plot;
pub mod point;
pub mod rand;
pub mod render;

pub use hull::{convex_hull, convex_hull_of, encloses, is_strictly_convex, HullError};
pub use io::{read_points, write_hull, write_points, HullWrite, ReadError};
pub use orient::{orientation, Orientation};
pub use pipeline::{run_pipeline, PipelineCfg, PipelineError, PipelineReport};
pub use plot::{write_script, PlotError, PlotScript};
pub use point::Point;
pub use render::{Gnuplot, NoRender, Render, RenderStatus};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{convex_hull, convex_hull_of, HullError};
    pub use crate::io::{read_points, write_hull, HullWrite, ReadError};
    pub use crate::orient::{orientation, Orientation};
    pub use crate::pipeline::{run_pipeline, PipelineCfg, PipelineReport};
    pub use crate::point::Point;
    pub use crate::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
    pub use crate::render::{Gnuplot, NoRender, Render, RenderStatus};
}
