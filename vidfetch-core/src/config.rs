use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::frames::FrameDensity;

/// Environment variable consulted when no output directory is given explicitly.
pub const OUTPUT_DIR_ENV: &str = "VIDFETCH_OUTPUT_DIR";

/// Configuration for a vidfetch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Direct URL to the video file
    pub url: String,

    /// Directory where the video (and any frames) will be saved
    pub output_dir: PathBuf,

    /// Custom base filename (without extension)
    pub custom_name: Option<String>,

    /// Extract still frames after downloading
    #[serde(default)]
    pub extract_frames: bool,

    /// Frame extraction density (fixed count or frames per second)
    #[serde(default)]
    pub frame_density: FrameDensity,

    /// Report remote info only; nothing is written to disk
    #[serde(default)]
    pub info_only: bool,

    /// Connection timeout for HTTP requests, in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Read timeout for HTTP requests, in seconds
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,

    /// Wall-clock timeout for each external tool invocation, in seconds
    #[serde(default = "default_tool_timeout")]
    pub tool_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_read_timeout() -> u64 {
    30
}

fn default_tool_timeout() -> u64 {
    30
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            output_dir: PathBuf::new(),
            custom_name: None,
            extract_frames: false,
            frame_density: FrameDensity::default(),
            info_only: false,
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            tool_timeout_secs: default_tool_timeout(),
        }
    }
}

impl CoreConfig {
    /// Create a configuration for the given URL with default settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::CoreResult<()> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| crate::error::CoreError::InvalidUrl(format!("{}: {}", self.url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(crate::error::CoreError::InvalidUrl(format!(
                "URL must start with http:// or https://, got scheme '{}'",
                parsed.scheme()
            )));
        }

        if let FrameDensity::Count(count) = self.frame_density {
            if count == 0 {
                return Err(crate::error::CoreError::Config(
                    "Frame count must be at least 1".to_string(),
                ));
            }
        }

        if let FrameDensity::Rate(fps) = self.frame_density {
            if !(fps > 0.0) {
                return Err(crate::error::CoreError::Config(format!(
                    "Frame rate must be positive, got {}",
                    fps
                )));
            }
        }

        if self.read_timeout_secs == 0 || self.tool_timeout_secs == 0 {
            return Err(crate::error::CoreError::Config(
                "Timeouts must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

/// Resolve the output directory from an optional explicit choice.
///
/// Precedence: explicit directory, then the `VIDFETCH_OUTPUT_DIR` environment
/// variable, then the user's downloads directory when it exists and is
/// writable, then the current working directory.
pub fn resolve_output_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    if let Some(dir) = env::var_os(OUTPUT_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(downloads) = dirs::download_dir() {
        if is_writable_dir(&downloads) {
            return downloads;
        }
    }

    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn is_writable_dir(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.is_dir() && !m.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = CoreConfig::new("ftp://host/video.mp4");
        assert!(config.validate().is_err());

        let config = CoreConfig::new("not a url at all");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(CoreConfig::new("http://host/video.mp4").validate().is_ok());
        assert!(CoreConfig::new("https://host/video.mp4").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_frame_count() {
        let mut config = CoreConfig::new("https://host/video.mp4");
        config.frame_density = FrameDensity::Count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_rate() {
        let mut config = CoreConfig::new("https://host/video.mp4");
        config.frame_density = FrameDensity::Rate(0.0);
        assert!(config.validate().is_err());
        config.frame_density = FrameDensity::Rate(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_output_dir_wins() {
        let dir = resolve_output_dir(Some(PathBuf::from("/tmp/somewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }
}
