use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ricochet", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default scene derived from a video size.
    Init(InitArgs),
    /// Print one evaluated frame as JSON.
    Frame(FrameArgs),
    /// Print one JSON line per frame of a range.
    Range(RangeArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Video width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Video height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON; the 1080p default scene when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct RangeArgs {
    /// Input scene JSON; the 1080p default scene when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive).
    #[arg(long)]
    end: u64,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(serde::Serialize)]
struct RangeLine {
    frame: u64,
    bounces: u64,
    just_collided: bool,
    hue_deg: f64,
    fingerprint: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Init(args) => cmd_init(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Range(args) => cmd_range(args),
    }
}

fn load_scene(path: Option<&PathBuf>) -> anyhow::Result<ricochet::Scene> {
    let cfg = match path {
        Some(p) => ricochet::SceneConfig::from_path(p)
            .with_context(|| format!("load scene '{}'", p.display()))?,
        None => ricochet::SceneConfig::default(),
    };
    Ok(ricochet::Scene::new(&cfg))
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let cfg = ricochet::SceneConfig::for_video(&ricochet::VideoConfig {
        width: args.width,
        height: args.height,
        fps: args.fps,
    });
    let json = serde_json::to_string_pretty(&cfg).context("serialize scene")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json + "\n")
                .with_context(|| format!("write scene '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_ref())?;
    let frame = ricochet::Evaluator::eval_frame(&scene, ricochet::FrameIndex(args.frame));
    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)
    } else {
        serde_json::to_string(&frame)
    }
    .context("serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_range(args: RangeArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_ref())?;
    let range = ricochet::FrameRange::new(
        ricochet::FrameIndex(args.start),
        ricochet::FrameIndex(args.end),
    )?;
    let threading = ricochet::EvalThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let frames = ricochet::Evaluator::eval_range(&scene, range, &threading)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for f in &frames {
        let line = RangeLine {
            frame: f.frame.0,
            bounces: f.collision.total_bounces,
            just_collided: f.collision.just_collided,
            hue_deg: f.color.hue_deg,
            fingerprint: ricochet::fingerprint_layers(&f.layers).to_string(),
        };
        serde_json::to_writer(&mut out, &line).context("serialize range line")?;
        writeln!(out).context("write range line")?;
    }
    Ok(())
}
