//! Still-frame extraction via the external ffmpeg tool.
//!
//! Two extraction modes: a fixed number of frames spaced evenly across the
//! interior of the clip (one ffmpeg invocation per timestamp), or a fixed
//! sampling rate over the whole clip (a single invocation with an fps
//! filter). Frames land in a `<stem>_frames` subdirectory next to the video.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::command::{is_tool_available, run_command_with_timeout};
use crate::error::{CoreError, CoreResult};

/// Default number of frames for fixed-count extraction.
pub const DEFAULT_FRAME_COUNT: usize = 5;

/// Suffix appended to the video's file stem to name the frames directory.
const FRAMES_DIR_SUFFIX: &str = "_frames";

/// How densely to sample frames from the clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameDensity {
    /// Extract exactly this many frames, spread across the clip
    Count(usize),
    /// Sample continuously at this many frames per second
    Rate(f64),
}

impl Default for FrameDensity {
    fn default() -> Self {
        FrameDensity::Count(DEFAULT_FRAME_COUNT)
    }
}

/// Compute `count` timestamps spaced evenly across the interior of a clip of
/// `duration` seconds: for N frames the positions are D/(N+1), 2D/(N+1), …,
/// N·D/(N+1), so none falls on the very start or end.
pub fn frame_timestamps(duration: f64, count: usize) -> Vec<f64> {
    if duration <= 0.0 || count == 0 {
        return Vec::new();
    }

    let interval = duration / (count as f64 + 1.0);
    (1..=count).map(|i| interval * i as f64).collect()
}

/// Directory the frames for `video_path` are written into.
pub fn frames_dir_for(video_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = video_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());
    output_dir.join(format!("{stem}{FRAMES_DIR_SUFFIX}"))
}

/// Extract still frames from a downloaded video.
///
/// In fixed-count mode each timestamp is its own ffmpeg invocation; a
/// failure or timeout on one timestamp is logged and skipped without
/// aborting the rest. In rate mode a single invocation samples the whole
/// clip. Returns the paths of the frames actually written, in order.
///
/// A missing ffmpeg is not an error: a warning naming the install remedy is
/// logged and the result is empty.
pub fn extract_frames(
    video_path: &Path,
    output_dir: &Path,
    density: FrameDensity,
    duration: Option<f64>,
    timeout: Duration,
) -> CoreResult<Vec<PathBuf>> {
    if !is_tool_available("ffmpeg") {
        warn!("ffmpeg not found. Install ffmpeg to extract frames.");
        warn!("  Ubuntu/Debian: sudo apt-get install ffmpeg");
        warn!("  macOS: brew install ffmpeg");
        return Ok(Vec::new());
    }

    let frames_dir = frames_dir_for(video_path, output_dir);
    fs::create_dir_all(&frames_dir)?;

    match density {
        FrameDensity::Count(count) => {
            extract_counted(video_path, &frames_dir, count, duration, timeout)
        }
        FrameDensity::Rate(fps) => extract_at_rate(video_path, &frames_dir, fps, timeout),
    }
}

fn extract_counted(
    video_path: &Path,
    frames_dir: &Path,
    count: usize,
    duration: Option<f64>,
    timeout: Duration,
) -> CoreResult<Vec<PathBuf>> {
    let timestamps = match duration {
        Some(duration) if duration > 0.0 => frame_timestamps(duration, count),
        _ => {
            warn!("Could not determine video duration. Extracting first frame only.");
            vec![0.0]
        }
    };

    info!("Extracting {} frame(s)...", timestamps.len());

    let mut extracted = Vec::new();

    for (i, timestamp) in timestamps.iter().enumerate() {
        let output_file = frames_dir.join(format!("frame_{:03}.jpg", i + 1));

        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-ss")
            .arg(format!("{timestamp}"))
            .arg("-i")
            .arg(video_path)
            .args(["-vframes", "1", "-q:v", "2", "-y"])
            .arg(&output_file);

        match run_command_with_timeout(&mut cmd, timeout) {
            Ok(_) if output_file.exists() => {
                info!("  Extracted: {} (at {:.1}s)", output_file.display(), timestamp);
                extracted.push(output_file);
            }
            Ok(_) => {
                warn!("  Failed to extract frame at {:.1}s", timestamp);
            }
            Err(CoreError::CommandTimeout(secs)) => {
                warn!(
                    "  Timeout ({}s) extracting frame at {:.1}s",
                    secs, timestamp
                );
            }
            Err(e) => {
                warn!("  Error extracting frame at {:.1}s: {}", timestamp, e);
            }
        }
    }

    Ok(extracted)
}

fn extract_at_rate(
    video_path: &Path,
    frames_dir: &Path,
    fps: f64,
    timeout: Duration,
) -> CoreResult<Vec<PathBuf>> {
    info!("Extracting frames at {} fps...", fps);

    let pattern = frames_dir.join("frame_%04d.png");

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-i")
        .arg(video_path)
        .arg("-vf")
        .arg(format!("fps={fps}"))
        .arg("-y")
        .arg(&pattern);

    run_command_with_timeout(&mut cmd, timeout)?;

    // ffmpeg numbers the files itself; collect what actually landed on disk.
    let mut frames: Vec<PathBuf> = fs::read_dir(frames_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("frame_") && n.ends_with(".png"))
                .unwrap_or(false)
        })
        .collect();
    frames.sort();

    Ok(frames)
}
