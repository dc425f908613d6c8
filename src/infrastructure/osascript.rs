//! Shared osascript invocation helper

use std::process::Stdio;

use tokio::process::Command;

/// Error from invoking osascript
#[derive(Debug)]
pub(crate) enum OsascriptError {
    NotFound,
    Failed(String),
}

/// Run an AppleScript snippet and return its stdout
pub(crate) async fn run(script: &str) -> Result<String, OsascriptError> {
    let output = Command::new("osascript")
        .args(["-e", script])
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OsascriptError::NotFound
            } else {
                OsascriptError::Failed(e.to_string())
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("osascript exited with status: {}", output.status)
        } else {
            stderr
        };
        return Err(OsascriptError::Failed(message));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Escape a string for embedding in a double-quoted AppleScript literal
pub(crate) fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
