//! Core library for fetching videos from direct URLs and inspecting them
//! with ffprobe and ffmpeg.
//!
//! This crate provides the three sequential stages behind the vidfetch CLI:
//! a streaming HTTP fetcher with progress reporting, a metadata prober that
//! wraps ffprobe, and a still-frame extractor that wraps ffmpeg.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use vidfetch_core::{CoreConfig, VideoMetadata};
//!
//! let mut config = CoreConfig::new("https://example.com/video.mp4");
//! config.output_dir = vidfetch_core::resolve_output_dir(None);
//! config.validate().unwrap();
//!
//! let video_path = vidfetch_core::fetch::download(&config).unwrap();
//! let metadata =
//!     VideoMetadata::from_path(&video_path, Duration::from_secs(30)).unwrap();
//! println!("{:?}", metadata.duration);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod fetch;
pub mod ffprobe;
pub mod frames;
pub mod logging;
pub mod utils;

// Re-exports for public API
pub use config::{resolve_output_dir, CoreConfig};
pub use error::{CoreError, CoreResult};
pub use fetch::{RemoteInfo, FALLBACK_FILENAME};
pub use ffprobe::{FFprobe, VideoMetadata};
pub use frames::{extract_frames, FrameDensity, DEFAULT_FRAME_COUNT};
pub use utils::{format_bytes, format_duration_seconds, format_megabytes};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
