use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollreveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scene's scroll script and print one JSON line per ticked frame.
    Simulate(SimulateArgs),
    /// Print the SVG path data of a generated rope.
    Rope(RopeArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Animation frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Seconds to keep ticking after the last scroll keyframe.
    #[arg(long, default_value_t = 2.0)]
    settle: f64,

    /// Print only the final summary.
    #[arg(long)]
    summary: bool,

    /// Keep opacity fades but drop translation, scale and rotation.
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct RopeArgs {
    /// Corner mode (`tl-br`, `tr-bl`, `bl-tr`, `br-tl`).
    #[arg(long, default_value = "tl-br")]
    corners: scrollreveal::RopeCorners,

    /// Box width.
    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    /// Box height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Meander amplitude multiplier.
    #[arg(long, default_value_t = scrollreveal::DEFAULT_ROPE_WAVINESS)]
    waviness: f64,

    /// Number of meander segments.
    #[arg(long, default_value_t = scrollreveal::DEFAULT_ROPE_SEGMENTS)]
    segments: usize,

    /// Draw a closed circular rope of this size instead.
    #[arg(long)]
    circle: Option<f64>,

    /// Stroke width used to inset the circular rope.
    #[arg(long, default_value_t = 3.0)]
    stroke_width: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Rope(args) => cmd_rope(args),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scene = scrollreveal::Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    let opts = scrollreveal::SimulateOptions {
        fps: args.fps,
        settle: args.settle,
        reduced_motion: args.reduced_motion,
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = scrollreveal::simulate(&scene, opts, |frame| {
        if !args.summary {
            serde_json::to_writer(&mut out, frame)?;
            writeln!(out).map_err(anyhow::Error::from)?;
        }
        Ok(())
    })?;
    serde_json::to_writer(&mut out, &summary).context("write summary")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn cmd_rope(args: RopeArgs) -> anyhow::Result<()> {
    let path = match args.circle {
        Some(size) => scrollreveal::circular_rope(size, args.stroke_width)?,
        None => scrollreveal::corner_rope(
            args.corners,
            scrollreveal::Size::new(args.width, args.height),
            args.waviness,
            args.segments,
        )?,
    };
    let length = scrollreveal::PathMetrics::new(&path).total_length();
    println!("{}", path.to_svg());
    eprintln!("length: {length:.3}");
    Ok(())
}
