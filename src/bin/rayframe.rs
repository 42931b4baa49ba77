use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rayframe", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one scene JSON document per frame.
    Generate(GenerateArgs),
    /// Turn rendered frame images into a video (requires `ffmpeg` on PATH).
    Video(VideoArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `NNNNN.json` documents.
    #[arg(long)]
    out: PathBuf,

    /// First frame to write (overrides the project file).
    #[arg(long)]
    start: Option<u64>,

    /// Number of frames to tick (overrides the project file).
    #[arg(long)]
    frames: Option<u64>,

    /// Write documents in parallel chunks.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel writes.
    #[arg(long)]
    threads: Option<usize>,

    /// Documents per parallel chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct VideoArgs {
    /// Directory holding the rendered frame images.
    #[arg(long)]
    frames_dir: PathBuf,

    /// Output video path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 25)]
    fps: u32,

    /// Image-sequence pattern inside `--frames-dir`.
    #[arg(long, default_value = "%05d.png")]
    pattern: String,

    /// Replace an existing output file.
    #[arg(long)]
    overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Video(args) => cmd_video(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let project = rayframe::ProjectFile::from_path(&args.in_path)?;
    let base_dir = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let mut ctx = project
        .build(base_dir)
        .with_context(|| format!("build project '{}'", args.in_path.display()))?;

    let mut opts = project.driver_opts();
    if let Some(start) = args.start {
        opts.output_start = rayframe::FrameIndex(start);
    }
    if let Some(frames) = args.frames {
        opts.frame_count = frames;
    }

    let mut sink = rayframe::JsonDirSink::new(rayframe::JsonDirOpts {
        parallel: args.parallel,
        threads: args.threads,
        chunk_size: args.chunk_size,
        ..rayframe::JsonDirOpts::new(&args.out)
    });

    let stats = ctx.run(opts, &mut sink).map_err(|e| {
        tracing::debug!(cause = %e.root_cause(), "generation failed");
        e
    })?;

    eprintln!(
        "wrote {} of {} frames to {}",
        stats.frames_written,
        stats.frames_total,
        args.out.display()
    );
    Ok(())
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    let cfg = rayframe::VideoConfig {
        fps: args.fps,
        pattern: args.pattern,
        overwrite: args.overwrite,
        ..rayframe::VideoConfig::new(&args.frames_dir, &args.out)
    };
    rayframe::render_video(&cfg)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
