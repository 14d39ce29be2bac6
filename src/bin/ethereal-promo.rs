use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use ethereal_promo::{
    DEFAULT_SETTLE_THRESHOLD, Fps, FrameIndex, FrameRange, JsonLinesSink, Registry, RenderSession,
    RenderSessionOpts, SpringConfig, Theme, ensure_parent_dir, measure_spring,
};

#[derive(Parser, Debug)]
#[command(name = "ethereal-promo", version, about = "Sample EtherealSearch promo compositions")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Write one frame's snapshot as pretty JSON.
    Frame(FrameArgs),
    /// Write a frame range as JSON lines.
    Render(RenderArgs),
    /// Print the scene windows of a sequenced composition.
    Timeline(TimelineArgs),
    /// Print the frame at which a spring settles.
    Spring(SpringArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Theme override JSON.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Output path; stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); composition end when absent.
    #[arg(long)]
    end: Option<u64>,

    /// Sample frames on a rayon pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Write short repeat records for frames identical to their predecessor.
    #[arg(long)]
    static_frame_elision: bool,

    /// Theme override JSON.
    #[arg(long)]
    theme: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,
}

#[derive(Parser, Debug)]
struct SpringArgs {
    #[arg(long)]
    damping: f64,

    #[arg(long, default_value_t = 1.0)]
    mass: f64,

    #[arg(long, default_value_t = 100.0)]
    stiffness: f64,

    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Spring(args) => cmd_spring(args),
    }
}

fn load_theme(path: Option<&Path>) -> anyhow::Result<Theme> {
    match path {
        Some(p) => Theme::from_path(p).with_context(|| format!("load theme '{}'", p.display())),
        None => Ok(Theme::default()),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    let registry = Registry::builtin()?;
    let mut out = std::io::stdout().lock();
    for e in registry.iter() {
        let s = &e.spec;
        writeln!(
            out,
            "{}\t{} frames\t{} fps\t{}x{}",
            s.id,
            s.duration_frames,
            s.fps.as_f64(),
            s.canvas.width,
            s.canvas.height
        )?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let registry = Registry::builtin()?;
    let theme = load_theme(args.theme.as_deref())?;
    let session = RenderSession::new(&registry, &args.comp, theme, RenderSessionOpts::default())?;
    let snapshot = session.render_frame(FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&snapshot).context("encode snapshot")?;

    match args.out {
        Some(path) => {
            ensure_parent_dir(&path)?;
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("write snapshot '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => writeln!(std::io::stdout().lock(), "{json}")?,
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let registry = Registry::builtin()?;
    let theme = load_theme(args.theme.as_deref())?;
    let opts = RenderSessionOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };
    let session = RenderSession::new(&registry, &args.comp, theme, opts)?;
    let end = args.end.unwrap_or(session.spec().duration_frames);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let mut sink = JsonLinesSink::new(&args.out);
    let stats = session.render_range(range, &mut sink)?;
    eprintln!(
        "wrote {} ({} frames, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let registry = Registry::builtin()?;
    let entry = registry.get(&args.comp)?;
    let rows = entry
        .scene
        .timeline()
        .with_context(|| format!("composition '{}' is not a sequence", args.comp))?;

    let mut out = std::io::stdout().lock();
    for row in rows {
        writeln!(
            out,
            "{}\t{}\t{}..{}\t{:.1}s",
            row.index,
            row.name,
            row.window.start.0,
            row.window.end.0,
            entry.spec.fps.frames_to_secs(row.window.len_frames())
        )?;
    }
    Ok(())
}

fn cmd_spring(args: SpringArgs) -> anyhow::Result<()> {
    let fps = Fps::integer(args.fps)?;
    let config = SpringConfig {
        damping: args.damping,
        mass: args.mass,
        stiffness: args.stiffness,
        ..SpringConfig::default()
    };
    let frames = measure_spring(fps, config, DEFAULT_SETTLE_THRESHOLD)?;
    writeln!(
        std::io::stdout().lock(),
        "{frames} frames ({:.2}s)",
        fps.frames_to_secs(frames)
    )?;
    Ok(())
}
