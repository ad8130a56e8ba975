// vidfetch-cli/src/main.rs
//
// Command-line entry point for vidfetch. Parses arguments, sets up logging,
// and runs the three stages in order: fetch, probe, frame extraction.
// Fetch and validation failures are fatal; probe and extraction problems
// degrade to warnings per the tool's best-effort contract.

use std::process;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};

use vidfetch_core::config::resolve_output_dir;
use vidfetch_core::error::CoreResult;
use vidfetch_core::frames::frames_dir_for;
use vidfetch_core::{fetch, frames, CoreConfig, VideoMetadata};

mod cli;
mod output;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    vidfetch_core::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        process::exit(1);
    }
}

fn run(cli: Cli) -> CoreResult<()> {
    info!("vidfetch v{} starting up", vidfetch_core::VERSION);

    let mut config = CoreConfig::new(cli.url.as_str());
    config.frame_density = cli.frame_density();
    config.output_dir = resolve_output_dir(cli.output);
    config.custom_name = cli.name;
    config.extract_frames = cli.frames;
    config.info_only = cli.info;

    config.validate()?;
    debug!("Configuration: {:?}", config);

    // Info-only mode probes the remote resource with a HEAD request and
    // writes nothing to disk.
    if config.info_only {
        let info = fetch::remote_info(&config)?;
        output::print_remote_info(&info);
        return Ok(());
    }

    let tool_timeout = Duration::from_secs(config.tool_timeout_secs);

    // Stage 1: download. Any failure here is fatal.
    let video_path = fetch::download(&config)?;
    output::print_success(&format!("Video downloaded: {}", video_path.display()));

    // Stage 2: probe. A missing ffprobe yields a degraded record inside the
    // core; a failed probe is reported and the run continues without one.
    let metadata = match VideoMetadata::from_path(&video_path, tool_timeout) {
        Ok(metadata) => {
            output::print_video_info(&metadata);
            Some(metadata)
        }
        Err(e) => {
            output::print_warning(&format!("Could not read video metadata: {}", e));
            None
        }
    };

    // Stage 3: frame extraction, only on request.
    if config.extract_frames {
        let duration = metadata.as_ref().and_then(|m| m.duration);
        match frames::extract_frames(
            &video_path,
            &config.output_dir,
            config.frame_density,
            duration,
            tool_timeout,
        ) {
            Ok(extracted) if extracted.is_empty() => {
                output::print_warning("No frames were extracted.");
            }
            Ok(extracted) => {
                let frames_dir = frames_dir_for(&video_path, &config.output_dir);
                output::print_success(&format!(
                    "Extracted {} frame(s) to: {}",
                    extracted.len(),
                    frames_dir.display()
                ));
            }
            Err(e) => {
                output::print_warning(&format!("Frame extraction failed: {}", e));
            }
        }
    }

    output::print_info("Video saved to", video_path.display());
    info!("vidfetch completed successfully");

    Ok(())
}
