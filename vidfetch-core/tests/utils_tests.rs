// vidfetch-core/tests/utils_tests.rs

use vidfetch_core::utils::{
    format_bytes, format_duration_seconds, format_megabytes, is_supported_video_ext,
};

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.00 KiB");
    assert_eq!(format_bytes(1536), "1.50 KiB");
    assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
    assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GiB");
}

#[test]
fn test_format_megabytes() {
    assert_eq!(format_megabytes(0), "0.00 MB");
    assert_eq!(format_megabytes(1024 * 1024), "1.00 MB");
    assert_eq!(format_megabytes(1024 * 1024 * 5 / 2), "2.50 MB");
}

#[test]
fn test_format_duration_seconds() {
    assert_eq!(format_duration_seconds(0.0), "0:00");
    assert_eq!(format_duration_seconds(59.9), "0:59");
    assert_eq!(format_duration_seconds(60.0), "1:00");
    assert_eq!(format_duration_seconds(185.2), "3:05");
    assert_eq!(format_duration_seconds(3600.0), "1:00:00");
    assert_eq!(format_duration_seconds(3725.0), "1:02:05");
}

#[test]
fn test_format_duration_seconds_invalid() {
    assert_eq!(format_duration_seconds(-1.0), "?:??");
    assert_eq!(format_duration_seconds(f64::NAN), "?:??");
    assert_eq!(format_duration_seconds(f64::INFINITY), "?:??");
}

#[test]
fn test_is_supported_video_ext() {
    for ext in ["mp4", "webm", "mkv", "avi", "mov", "m4v", "wmv", "flv"] {
        assert!(is_supported_video_ext(ext), "{ext} should be supported");
    }
    assert!(is_supported_video_ext("MP4")); // Case insensitive
    assert!(!is_supported_video_ext("txt"));
    assert!(!is_supported_video_ext("jpg"));
    assert!(!is_supported_video_ext(""));
}
