//! pgrep process inspector adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ProcessInspector, ProcessQueryError};

/// Process inspector backed by `pgrep -x`
pub struct PgrepProcessInspector;

impl PgrepProcessInspector {
    /// Create a new pgrep process inspector
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgrepProcessInspector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessInspector for PgrepProcessInspector {
    async fn is_running(&self, process_name: &str) -> Result<bool, ProcessQueryError> {
        let status = Command::new("pgrep")
            .args(["-x", process_name])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ProcessQueryError::ToolNotFound
                } else {
                    ProcessQueryError::QueryFailed(e.to_string())
                }
            })?;

        // pgrep exits 0 on a match, 1 on no match; anything else is an error
        match status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(ProcessQueryError::QueryFailed(format!(
                "pgrep exited with status: {}",
                status
            ))),
        }
    }
}
