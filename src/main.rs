//! trackbench: compare OpenCV trackers on a video, dump frames, play them back.
//!
//! Usage:
//!   trackbench compare --video clip.mp4 --seed 665,270,760,340 --skip 4
//!   trackbench capture --video vtest.avi --out data/
//!   trackbench playback --dir data/ --hold-ms 100

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use trackbench::integration::{
    FrameDirWriter, HighGuiWindow, ImageDirSource, OpenCvTracker, VideoFileSource,
};
use trackbench::{
    ComparisonBuilder, ComparisonConfig, FrameSink, NullSink, Rect, TrackerKind, relay,
};

const WINDOW_NAME: &str = "trackbench";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run trackers side by side from one seed region and report their update time
    Compare(CompareArgs),
    /// Write every frame of a video to numbered JPEG files
    Capture {
        #[arg(long)]
        video: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        max_frames: Option<usize>,
    },
    /// Show the images of a folder one after another
    Playback {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long, default_value_t = 100)]
        hold_ms: u64,
    },
}

#[derive(Args, Debug)]
struct CompareArgs {
    #[arg(long)]
    video: PathBuf,

    /// Seed region corners on the seed frame: x1,y1,x2,y2
    #[arg(long)]
    seed: Rect,

    /// Frames to discard before the seed frame
    #[arg(long, default_value_t = 0)]
    skip: usize,

    #[arg(long, value_delimiter = ',', default_values_t = TrackerKind::ALL)]
    trackers: Vec<TrackerKind>,

    #[arg(long, default_value_t = 1500)]
    seed_hold_ms: u64,

    #[arg(long, default_value_t = 10)]
    frame_hold_ms: u64,

    /// Stop after this many frames past the seed frame
    #[arg(long)]
    max_frames: Option<usize>,

    /// Fail if the seed does not fit inside the seed frame
    #[arg(long)]
    strict_seed: bool,

    /// Time the trackers without opening a window
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compare(args) => compare(args),
        Command::Capture {
            video,
            out,
            max_frames,
        } => {
            let source = VideoFileSource::open(&video)
                .with_context(|| format!("opening {}", video.display()))?;
            let mut writer = FrameDirWriter::create(&out)
                .with_context(|| format!("creating {}", out.display()))?;
            relay(source, &mut writer, Duration::ZERO, max_frames)?;
            println!("{} frames written to {}", writer.written(), out.display());
            Ok(())
        }
        Command::Playback { dir, hold_ms } => {
            let source = ImageDirSource::open(&dir)
                .with_context(|| format!("listing {}", dir.display()))?;
            let total = source.remaining();
            let window = HighGuiWindow::new(WINDOW_NAME)?;
            let shown = relay(source, window, Duration::from_millis(hold_ms), None)?;
            println!("{} of {} images shown", shown, total);
            Ok(())
        }
    }
}

fn compare(args: CompareArgs) -> Result<()> {
    let source = VideoFileSource::open(&args.video)
        .with_context(|| format!("opening {}", args.video.display()))?;

    let sink: Box<dyn FrameSink> = if args.headless {
        Box::new(NullSink)
    } else {
        Box::new(HighGuiWindow::new(WINDOW_NAME)?)
    };

    let config = ComparisonConfig {
        skip_frames: args.skip,
        seed_hold: Duration::from_millis(args.seed_hold_ms),
        frame_hold: Duration::from_millis(args.frame_hold_ms),
        validate_seed: args.strict_seed,
        max_frames: args.max_frames,
        ..Default::default()
    };

    let mut builder = ComparisonBuilder::new(source).seed(args.seed).config(config);
    for kind in args.trackers {
        let tracker = OpenCvTracker::new(kind)
            .with_context(|| format!("creating {kind} tracker"))?;
        builder = builder.tracker(kind.name(), kind.overlay_color(), Box::new(tracker));
    }

    let comparison = builder
        .sink(sink)
        .build()
        .context("initializing trackers on the seed frame")?;
    let report = comparison.run()?;

    if let Some(reason) = report.stopped_by {
        println!("{reason}");
    }
    println!("{report}");
    if let Some(ratio) = report.relative_cost(TrackerKind::Csrt.name(), TrackerKind::Kcf.name()) {
        println!("CSRT/KCF cost ratio: {ratio:.1}x");
    }
    Ok(())
}
