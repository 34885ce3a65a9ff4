use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2d::pipeline::DEFAULT_SCRIPT;
use hull2d::plot::DEFAULT_IMAGE;
use hull2d::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull of integer points, saved and plotted with gnuplot")]
struct Cmd {
    /// Without a subcommand the input and output file names are prompted for.
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Read points, write the closed hull, generate and render the plot script
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = DEFAULT_SCRIPT)]
        script: PathBuf,
        #[arg(long, default_value = DEFAULT_IMAGE)]
        image: String,
        /// Write the script but do not invoke the plotting tool
        #[arg(long)]
        no_render: bool,
        #[arg(long, default_value = "gnuplot")]
        gnuplot: OsString,
        /// Write `<out-stem>.provenance.json` next to the hull file
        #[arg(long)]
        provenance: bool,
    },
    /// Write a reproducible random point file
    Gen {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 1000)]
        spread: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Sample inside the inscribed disc instead of the square
        #[arg(long)]
        disc: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        None => interactive(),
        Some(Action::Run {
            input,
            out,
            script,
            image,
            no_render,
            gnuplot,
            provenance,
        }) => {
            let cfg = PipelineCfg {
                input,
                output: out,
                script,
                image,
            };
            if no_render {
                run(&cfg, &NoRender, provenance)
            } else {
                run(&cfg, &Gnuplot { program: gnuplot }, provenance)
            }
        }
        Some(Action::Gen {
            out,
            count,
            spread,
            seed,
            index,
            disc,
        }) => {
            let shape = if disc {
                CloudShape::Disc
            } else {
                CloudShape::Square
            };
            generate(
                &out,
                CloudCfg {
                    count,
                    spread,
                    shape,
                },
                ReplayToken { seed, index },
            )
        }
        Some(Action::Report) => report(),
    }
}

fn interactive() -> Result<()> {
    let stdin = io::stdin();
    let (input, out) = prompt_paths(stdin.lock(), io::stdout())?;
    run(&PipelineCfg::new(input, out), &Gnuplot::default(), false)
}

/// Ask for the input and output file names; tokens may share a line.
fn prompt_paths<R: BufRead, W: Write>(reader: R, mut out: W) -> Result<(String, String)> {
    let mut tokens = Tokens::new(reader);
    write!(out, "Enter the name of the input file: ")?;
    out.flush()?;
    let input = tokens.next_token()?.context("no input file name given")?;
    write!(out, "Enter the name of the output file: ")?;
    out.flush()?;
    let output = tokens.next_token()?.context("no output file name given")?;
    Ok((input, output))
}

/// Whitespace-delimited tokens over a line reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Ok(Some(t));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[derive(Serialize)]
struct RunSummary<'a> {
    input: &'a Path,
    output: &'a Path,
    script: &'a Path,
    image: &'a str,
    points: usize,
    hull: Vec<[i32; 2]>,
}

fn run(cfg: &PipelineCfg, renderer: &dyn Render, with_provenance: bool) -> Result<()> {
    tracing::info!(
        input = %cfg.input.display(),
        out = %cfg.output.display(),
        "run"
    );
    let report = run_pipeline(cfg, renderer)?;

    if report.hull_file.is_written() {
        println!("Convex hull saved to {}", cfg.output.display());
    }
    if report.render.is_rendered() {
        println!("Visualization saved as {}", cfg.image);
    }

    if with_provenance && report.hull_file.is_written() {
        let summary = RunSummary {
            input: &cfg.input,
            output: &cfg.output,
            script: &cfg.script,
            image: &cfg.image,
            points: report.points,
            hull: report.hull.iter().map(|p| [p.x, p.y]).collect(),
        };
        let mut payload = provenance::Payload::new(serde_json::to_value(&summary)?);
        if report.script.is_ok() {
            payload.extra_outputs.push(cfg.script.clone());
        }
        let path = provenance::write_sidecar(&cfg.output, payload)?;
        tracing::info!(path = %path.display(), "provenance");
    }
    Ok(())
}

fn generate(out: &Path, cfg: CloudCfg, tok: ReplayToken) -> Result<()> {
    tracing::info!(
        out = %out.display(),
        count = cfg.count,
        spread = cfg.spread,
        seed = tok.seed,
        index = tok.index,
        "generate"
    );
    let points = draw_points(cfg, tok);
    hull2d::write_points(out, &points)
        .with_context(|| format!("writing points to {}", out.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": hull2d::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
