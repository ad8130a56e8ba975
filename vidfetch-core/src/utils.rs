//! Utility functions for formatting and filename inspection.
//!
//! General-purpose helpers used throughout the vidfetch-core library:
//! byte and duration formatting plus the recognized-extension check shared
//! by the fetcher's filename resolution.

/// Video file extensions the fetcher recognizes (lowercase, no dot).
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["mp4", "webm", "mkv", "avi", "mov", "m4v", "wmv", "flv"];

/// Checks if the given extension (without dot) is a recognized video format.
#[must_use]
pub fn is_supported_video_ext(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|s| ext.eq_ignore_ascii_case(s))
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats bytes as a fixed megabyte string (e.g., "12.34 MB"), the unit the
/// summary output uses for file sizes.
#[must_use]
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Formats a duration in seconds as M:SS, or H:MM:SS for durations of an
/// hour or more. Returns "?:??" for invalid inputs.
#[must_use]
pub fn format_duration_seconds(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "?:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
