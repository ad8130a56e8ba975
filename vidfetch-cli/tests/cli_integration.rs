use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn vidfetch_cmd() -> Command {
    Command::cargo_bin("vidfetch").expect("Failed to find vidfetch binary")
}

#[test]
fn test_help_lists_flags() -> Result<(), Box<dyn Error>> {
    vidfetch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--output"))
        .stdout(contains("--name"))
        .stdout(contains("--frames"))
        .stdout(contains("--num-frames"))
        .stdout(contains("--fps"))
        .stdout(contains("--info"));

    Ok(())
}

#[test]
fn test_missing_url_fails() -> Result<(), Box<dyn Error>> {
    vidfetch_cmd().assert().failure();
    Ok(())
}

#[test]
fn test_rejects_unsupported_scheme() -> Result<(), Box<dyn Error>> {
    // Validation happens before any network access, so this fails fast.
    vidfetch_cmd()
        .arg("ftp://host/video.mp4")
        .assert()
        .failure()
        .stderr(contains("http"));

    Ok(())
}

#[test]
fn test_rejects_garbage_url() -> Result<(), Box<dyn Error>> {
    vidfetch_cmd()
        .arg("not a url at all")
        .assert()
        .failure()
        .stderr(contains("Invalid URL"));

    Ok(())
}

#[test]
fn test_unreachable_server_is_fatal() -> Result<(), Box<dyn Error>> {
    let output_dir = tempdir()?;

    // Port 9 (discard) refuses the connection immediately; no network needed.
    vidfetch_cmd()
        .arg("http://127.0.0.1:9/video.mp4")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .failure();

    // A failed fetch writes nothing into the output directory.
    assert!(std::fs::read_dir(output_dir.path())?.next().is_none());

    Ok(())
}

#[test]
fn test_fps_and_num_frames_conflict() -> Result<(), Box<dyn Error>> {
    vidfetch_cmd()
        .args(["https://host/video.mp4", "--fps", "2", "--num-frames", "3"])
        .assert()
        .failure();

    Ok(())
}
