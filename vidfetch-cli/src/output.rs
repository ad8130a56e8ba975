//! Styled terminal output for the vidfetch CLI.

use std::fmt::Display;

use colored::*;

use vidfetch_core::fetch::RemoteInfo;
use vidfetch_core::utils::{format_duration_seconds, format_megabytes};
use vidfetch_core::VideoMetadata;

/// Print a section heading with colored styling
pub fn print_section(text: &str) {
    let section = format!(" {} ", text).bold().white();
    let line = "-".repeat(40).blue();

    println!("\n{}", line);
    println!("{}", section);
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print an error message with red styling
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bold().bright_red(), message);
}

/// Print a success message with green styling and a checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✅".green(), message);
}

/// Print a warning message with yellow styling
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message.yellow());
}

/// Print the metadata summary block for a downloaded video.
///
/// Lines for optional fields appear only when the probe produced them; a
/// degraded record prints just the filename and size.
pub fn print_video_info(info: &VideoMetadata) {
    print_section("Video Information");

    print_info("Filename", &info.filename);
    print_info("File Size", format_megabytes(info.file_size));

    if let Some(duration) = info.duration {
        print_info("Duration", format_duration_seconds(duration));
    }

    if let Some((width, height)) = info.resolution() {
        print_info("Resolution", format!("{}x{}", width, height));
    }

    if let Some(codec) = &info.video_codec {
        print_info("Video Codec", codec);
    }

    if let Some(frame_rate) = &info.frame_rate {
        print_info("Frame Rate", frame_rate);
    }

    if let Some(codec) = &info.audio_codec {
        let detail = match (info.audio_channels, info.sample_rate) {
            (Some(channels), Some(rate)) => format!("{codec} ({channels} ch, {rate} Hz)"),
            (Some(channels), None) => format!("{codec} ({channels} ch)"),
            _ => codec.clone(),
        };
        print_info("Audio Codec", detail);
    }

    if let Some(bitrate) = info.bitrate {
        print_info("Bitrate", format!("{} kbps", bitrate / 1000));
    }

    println!();
}

/// Print the result of an info-only HEAD request.
pub fn print_remote_info(info: &RemoteInfo) {
    print_section("Remote Video Information");

    print_info("File", &info.filename);

    match info.content_length {
        Some(size) => print_info("Size", format_megabytes(size)),
        None => print_info("Size", "Unknown (server did not provide Content-Length)"),
    }

    if let Some(content_type) = &info.content_type {
        print_info("Type", content_type);
    }

    println!();
}
