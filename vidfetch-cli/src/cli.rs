// vidfetch-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

use vidfetch_core::frames::{FrameDensity, DEFAULT_FRAME_COUNT};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "vidfetch: Download and inspect video files from direct URLs",
    long_about = "Downloads a video from a direct URL, reports its metadata via ffprobe, \
                  and optionally extracts still frames via ffmpeg for analysis."
)]
pub struct Cli {
    /// Direct URL to the video file (must start with http:// or https://)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output directory (default: $VIDFETCH_OUTPUT_DIR, then the downloads
    /// directory if writable, then the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Custom filename (without extension)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Extract frames for analysis after downloading
    #[arg(short = 'f', long)]
    pub frames: bool,

    /// Report remote video info only; nothing is downloaded
    #[arg(short = 'i', long)]
    pub info: bool,

    /// Number of frames to extract, spread evenly across the clip
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_FRAME_COUNT)]
    pub num_frames: usize,

    /// Sample frames at this rate (frames per second) instead of a fixed count
    #[arg(long, value_name = "FPS", conflicts_with = "num_frames")]
    pub fps: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The frame-extraction density selected by the flags.
    pub fn frame_density(&self) -> FrameDensity {
        match self.fps {
            Some(fps) => FrameDensity::Rate(fps),
            None => FrameDensity::Count(self.num_frames),
        }
    }
}
