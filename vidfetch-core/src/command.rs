//! External command plumbing shared by the prober and the frame extractor.

use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

use log::error;

use crate::error::{CoreError, CoreResult};
use crate::logging;

/// Check if an external command is available on this system.
///
/// Runs `<name> -version` and discards all output; a command that cannot be
/// started counts as unavailable.
pub fn is_tool_available(name: &str) -> bool {
    Command::new(name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Execute a command with a wall-clock timeout.
///
/// The child is killed when the timeout expires. stdout and stderr are
/// drained on separate threads so a chatty child cannot block on a full pipe.
pub fn run_command_with_timeout(cmd: &mut Command, timeout: Duration) -> CoreResult<Output> {
    logging::log_command(cmd);

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            error!("Failed to spawn command: {}", e);
            CoreError::CommandExecution(format!("Failed to spawn command: {}", e))
        })?;

    let mut stdout_pipe = child.stdout.take();
    let mut stderr_pipe = child.stderr.take();

    let stdout_handle = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(pipe) = stdout_pipe.as_mut() {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    });
    let stderr_handle = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(pipe) = stderr_pipe.as_mut() {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    });

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CoreError::CommandTimeout(timeout.as_secs()));
                }
                std::thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                return Err(CoreError::CommandExecution(format!(
                    "Error waiting for process: {}",
                    e
                )));
            }
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    let output = Output {
        status,
        stdout,
        stderr,
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!(
            "Command failed with exit code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr
        );

        return Err(CoreError::CommandExecution(format!(
            "Command failed with exit code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr
        )));
    }

    Ok(output)
}
