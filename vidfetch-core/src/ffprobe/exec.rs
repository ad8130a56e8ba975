use std::path::Path;
use std::process::Command;
use std::time::Duration;

use serde_json::Value;

use crate::command::{is_tool_available, run_command_with_timeout};
use crate::error::{CoreError, CoreResult};

/// FFprobe command executor
pub struct FFprobe;

impl FFprobe {
    /// Execute ffprobe against a file and return its JSON output.
    ///
    /// Requests quiet, JSON-formatted format and stream information. The
    /// invocation is bounded by `timeout`; a hung probe is killed.
    pub fn execute<P: AsRef<Path>>(input_path: P, timeout: Duration) -> CoreResult<Value> {
        let path = input_path.as_ref();

        if !path.exists() {
            return Err(CoreError::MediaFile(format!("File not found: {:?}", path)));
        }

        let mut cmd = Command::new("ffprobe");
        cmd.args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path);

        let output = run_command_with_timeout(&mut cmd, timeout)?;

        serde_json::from_slice(&output.stdout)
            .map_err(|e| CoreError::JsonParse(format!("Failed to parse ffprobe output: {}", e)))
    }

    /// Check if ffprobe is available on the system
    pub fn is_available() -> bool {
        is_tool_available("ffprobe")
    }
}
