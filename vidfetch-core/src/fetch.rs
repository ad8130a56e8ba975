//! Streaming HTTP fetcher.
//!
//! Downloads a video from a direct URL to disk in fixed-size chunks with a
//! terminal progress indicator, and answers info-only requests with a HEAD
//! probe. Filename resolution follows a fixed order: an explicit custom name
//! (extension inferred from the URL path, then the response content type,
//! then `.mp4`), the URL path basename when it carries a recognized video
//! extension, and finally a fixed fallback name.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use url::Url;

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::utils::is_supported_video_ext;

/// Name used when neither the URL nor the response offers anything better.
pub const FALLBACK_FILENAME: &str = "video.mp4";

/// Read size for the streaming copy. Each chunk is written immediately, so
/// memory use stays bounded regardless of file size.
const CHUNK_SIZE: usize = 8192;

/// Result of an info-only HEAD request against the remote resource.
#[derive(Debug, Clone)]
pub struct RemoteInfo {
    pub filename: String,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
}

/// Last non-empty path segment of the URL, if any.
fn url_basename(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|s| !s.is_empty())
        .last()
        .map(ToString::to_string)
}

/// Extension taken from the URL path suffix, when it is a recognized video
/// format (lowercased, without the dot).
pub fn extension_from_url(url: &Url) -> Option<String> {
    let name = url_basename(url)?;
    let (_, ext) = name.rsplit_once('.')?;
    if is_supported_video_ext(ext) {
        Some(ext.to_ascii_lowercase())
    } else {
        None
    }
}

/// Extension inferred from an HTTP Content-Type header value.
pub fn extension_from_content_type(content_type: &str) -> Option<&'static str> {
    let ct = content_type.to_ascii_lowercase();
    if ct.contains("mp4") {
        Some("mp4")
    } else if ct.contains("webm") {
        Some("webm")
    } else if ct.contains("matroska") || ct.contains("mkv") {
        Some("mkv")
    } else if ct.contains("avi") {
        Some("avi")
    } else if ct.contains("quicktime") || ct.contains("mov") {
        Some("mov")
    } else {
        None
    }
}

/// Infer a file extension for the download: URL path suffix first, then the
/// response content type, defaulting to mp4.
pub fn infer_extension(url: &Url, content_type: Option<&str>) -> String {
    if let Some(ext) = extension_from_url(url) {
        return ext;
    }

    if let Some(ext) = content_type.and_then(extension_from_content_type) {
        return ext.to_string();
    }

    "mp4".to_string()
}

/// Resolve the final filename for the download.
pub fn resolve_filename(url: &Url, custom_name: Option<&str>, content_type: Option<&str>) -> String {
    if let Some(name) = custom_name {
        // A custom name that already carries a recognized extension is kept
        // verbatim; otherwise one is inferred.
        if name
            .rsplit_once('.')
            .map(|(_, ext)| is_supported_video_ext(ext))
            .unwrap_or(false)
        {
            return name.to_string();
        }
        return format!("{}.{}", name, infer_extension(url, content_type));
    }

    if let Some(name) = url_basename(url) {
        if name
            .rsplit_once('.')
            .map(|(_, ext)| is_supported_video_ext(ext))
            .unwrap_or(false)
        {
            return name;
        }
    }

    FALLBACK_FILENAME.to_string()
}

/// Copy `reader` to `writer` in fixed-size chunks, invoking `on_chunk` with
/// each chunk's length. Returns the total number of bytes written.
pub fn copy_with_progress<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    mut on_chunk: impl FnMut(u64),
) -> CoreResult<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        total += n as u64;
        on_chunk(n as u64);
    }

    writer.flush()?;
    Ok(total)
}

fn http_client(config: &CoreConfig) -> CoreResult<reqwest::blocking::Client> {
    // For the blocking client, `timeout` bounds individual connect/read/write
    // operations, so a stalled transfer fails while a long healthy download
    // does not.
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.read_timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch remote resource information with a HEAD request, without
/// downloading the body. Redirects are followed.
pub fn remote_info(config: &CoreConfig) -> CoreResult<RemoteInfo> {
    let url = Url::parse(&config.url)
        .map_err(|e| CoreError::InvalidUrl(format!("{}: {}", config.url, e)))?;

    let client = http_client(config)?;
    let response = client.head(url.clone()).send()?;

    if !response.status().is_success() {
        return Err(CoreError::HttpStatus(
            response.status().as_u16(),
            config.url.clone(),
        ));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let content_length = response
        .headers()
        .get(reqwest::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let filename = resolve_filename(&url, config.custom_name.as_deref(), content_type.as_deref());

    Ok(RemoteInfo {
        filename,
        content_type,
        content_length,
    })
}

fn download_progress_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} {msg} [{bar:40.cyan/blue}] {percent}% ({bytes}/{total_bytes})",
                    )
                    .unwrap()
                    .progress_chars("█▓▒░ "),
            );
            pb
        }
        None => {
            // No Content-Length: report raw bytes transferred, no percentage.
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg} {bytes}")
                    .unwrap(),
            );
            pb
        }
    }
}

/// Download the configured URL into the output directory, streaming the body
/// to disk with progress indication. Returns the path of the written file.
///
/// The output directory is created (with parents) if absent and an existing
/// destination file is overwritten. Any transport error or non-success
/// status aborts the download; a partial file may be left behind.
pub fn download(config: &CoreConfig) -> CoreResult<PathBuf> {
    let url = Url::parse(&config.url)
        .map_err(|e| CoreError::InvalidUrl(format!("{}: {}", config.url, e)))?;

    info!("Downloading video from: {}", url);

    let client = http_client(config)?;
    let mut response = client.get(url.clone()).send()?;

    if !response.status().is_success() {
        return Err(CoreError::HttpStatus(
            response.status().as_u16(),
            config.url.clone(),
        ));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let total_size = response.content_length();

    let filename = resolve_filename(&url, config.custom_name.as_deref(), content_type.as_deref());

    fs::create_dir_all(&config.output_dir)?;
    let output_path = config.output_dir.join(&filename);

    debug!("Saving to: {}", output_path.display());

    let file = File::create(&output_path)?;
    let mut writer = BufWriter::new(file);

    let pb = download_progress_bar(total_size);
    pb.set_message(filename.clone());

    let downloaded = copy_with_progress(&mut response, &mut writer, |n| pb.inc(n))?;
    pb.finish_and_clear();

    info!(
        "Downloaded {} byte(s) to {}",
        downloaded,
        output_path.display()
    );

    Ok(output_path)
}
