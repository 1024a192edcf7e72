use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "handoff", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sampled timing curve as JSON.
    Curve(CurveArgs),
    /// Render every frame of a gallery/viewer transition as PNG.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct CurveArgs {
    /// Timing JSON (missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of evenly spaced samples, endpoints included.
    #[arg(long, default_value_t = 21)]
    samples: usize,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Timing JSON (missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Gallery index of the photo to open (0-based).
    #[arg(long, default_value_t = 0)]
    select: usize,

    /// Render the dismissal back to the gallery instead of the presentation.
    #[arg(long)]
    dismiss: bool,

    /// Report the rendered transition as cancelled.
    #[arg(long)]
    cancel: bool,

    /// Directory with `1.jpg`..`14.jpg`; synthetic photos are used when absent.
    #[arg(long)]
    photos: Option<PathBuf>,

    #[arg(long, default_value_t = 320)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Curve(args) => cmd_curve(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_timing(path: Option<&Path>) -> anyhow::Result<handoff::TransitionTiming> {
    match path {
        Some(p) => Ok(handoff::TransitionTiming::from_path(p)?),
        None => Ok(handoff::TransitionTiming::default()),
    }
}

fn cmd_curve(args: CurveArgs) -> anyhow::Result<()> {
    let timing = read_timing(args.config.as_deref())?;
    let samples = timing.samples(args.samples);
    let json = serde_json::to_string_pretty(&samples).context("serialize curve samples")?;
    println!("{json}");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let timing = read_timing(args.config.as_deref())?;
    let fps = handoff::Fps::new(args.fps, 1)?;

    let library = match &args.photos {
        Some(dir) => handoff::PhotoLibrary::from_dir(dir, handoff::PhotoLibrary::DEFAULT_COUNT)?,
        None => handoff::PhotoLibrary::numbered(handoff::PhotoLibrary::DEFAULT_COUNT, 640, 427),
    };
    let screen = handoff::Rect::new(0.0, 0.0, f64::from(args.width), f64::from(args.height));
    let mut app = handoff::PhotoApp::new(library, screen, timing)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let opts = handoff::TransitionOptions {
        fps,
        cancel: args.cancel,
    };
    let out = args.out.as_path();
    let write_frame = |idx: handoff::FrameIndex, host: &mut handoff::HeadlessHost| {
        save_frame(out, idx, host)
    };

    let report = if args.dismiss {
        // Open the viewer without writing frames, then record the way back.
        let present = handoff::TransitionOptions {
            cancel: false,
            ..opts
        };
        app.present(args.select, present, |_, _| Ok(()))?;
        app.dismiss(opts, write_frame)?
    } else {
        app.present(args.select, opts, write_frame)?
    };

    let json = serde_json::to_string_pretty(&report).context("serialize transition report")?;
    println!("{json}");
    eprintln!("wrote {} frames to {}", report.frames, args.out.display());
    Ok(())
}

fn save_frame(
    dir: &Path,
    idx: handoff::FrameIndex,
    host: &mut handoff::HeadlessHost,
) -> handoff::HandoffResult<()> {
    let frame = host.render_frame()?;
    let img = frame
        .to_rgba_image()
        .ok_or_else(|| handoff::HandoffError::render("frame buffer size mismatch"))?;
    let path = dir.join(format!("frame_{:04}.png", idx.0));
    img.save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
