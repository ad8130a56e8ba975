use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreResult;

use super::exec::FFprobe;

/// Flat metadata record for a downloaded video.
///
/// Every field beyond `filename` and `file_size` is optional: the probing
/// tool may be absent, or the container may lack a stream of that kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoMetadata {
    /// Base name of the probed file
    pub filename: String,
    /// Size of the file on disk, in bytes
    pub file_size: u64,
    /// Container duration in seconds
    pub duration: Option<f64>,
    /// Container format name (e.g. "mov,mp4,m4a,3gp,3g2,mj2")
    pub format_name: Option<String>,
    /// Overall bitrate in bits per second
    pub bitrate: Option<u64>,
    /// Width of the first video stream, in pixels
    pub width: Option<u32>,
    /// Height of the first video stream, in pixels
    pub height: Option<u32>,
    /// Codec name of the first video stream
    pub video_codec: Option<String>,
    /// Frame rate of the first video stream, as a ratio string (e.g. "30/1")
    pub frame_rate: Option<String>,
    /// Codec name of the first audio stream
    pub audio_codec: Option<String>,
    /// Channel count of the first audio stream
    pub audio_channels: Option<u32>,
    /// Sample rate of the first audio stream, in Hz
    pub sample_rate: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    channels: Option<u32>,
    sample_rate: Option<String>,
}

// ffprobe emits numeric format fields as JSON strings
#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
    format_name: Option<String>,
    bit_rate: Option<String>,
    size: Option<String>,
}

impl VideoMetadata {
    /// Probe a file with ffprobe and build the metadata record.
    ///
    /// When ffprobe is not installed, logs a warning and returns a degraded
    /// record carrying only the filename and file size. A probe that fails,
    /// times out, or produces unparseable output is an error, left to the
    /// caller to report.
    pub fn from_path<P: AsRef<Path>>(path: P, timeout: Duration) -> CoreResult<Self> {
        let path = path.as_ref();

        if !FFprobe::is_available() {
            warn!("ffprobe not found. Install ffmpeg for detailed video info.");
            return Self::basic(path);
        }

        debug!("Probing media file: {}", path.display());
        let json = FFprobe::execute(path, timeout)?;
        let fallback_size = fs::metadata(path)?.len();
        Ok(Self::from_json(file_name_of(path), fallback_size, &json))
    }

    /// Degraded record for when the probing tool is missing: filename and
    /// file size only.
    pub fn basic(path: &Path) -> CoreResult<Self> {
        let file_size = fs::metadata(path)?.len();
        Ok(Self {
            filename: file_name_of(path),
            file_size,
            ..Self::default()
        })
    }

    /// Build the record from ffprobe JSON output.
    ///
    /// Video fields come from the first stream whose `codec_type` is
    /// "video", audio fields from the first "audio" stream; a missing stream
    /// kind leaves the corresponding fields unset. The declared format size
    /// is preferred over `fallback_size` when present and parseable.
    pub fn from_json(filename: String, fallback_size: u64, json: &Value) -> Self {
        let parsed: ProbeOutput = match serde_json::from_value(json.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Unexpected ffprobe output shape: {}", e);
                return Self {
                    filename,
                    file_size: fallback_size,
                    ..Self::default()
                };
            }
        };

        let mut info = Self {
            filename,
            file_size: fallback_size,
            ..Self::default()
        };

        if let Some(format) = parsed.format {
            info.duration = format.duration.as_deref().and_then(|d| d.parse().ok());
            info.format_name = format.format_name;
            info.bitrate = format.bit_rate.as_deref().and_then(|b| b.parse().ok());
            if let Some(size) = format.size.as_deref().and_then(|s| s.parse().ok()) {
                info.file_size = size;
            }
        }

        if let Some(video) = parsed
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"))
        {
            info.width = video.width;
            info.height = video.height;
            info.video_codec = video.codec_name.clone();
            info.frame_rate = video.r_frame_rate.clone();
        }

        if let Some(audio) = parsed
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("audio"))
        {
            info.audio_codec = audio.codec_name.clone();
            info.audio_channels = audio.channels;
            info.sample_rate = audio.sample_rate.as_deref().and_then(|r| r.parse().ok());
        }

        info
    }

    /// Width and height of the first video stream, when both are known.
    pub fn resolution(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
