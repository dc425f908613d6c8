//! Window inspector port interface

use async_trait::async_trait;
use thiserror::Error;

/// Window query errors
#[derive(Debug, Clone, Error)]
pub enum WindowQueryError {
    #[error("osascript not found. Window inspection requires macOS.")]
    ToolNotFound,

    #[error("Failed to list windows of {process}: {message}")]
    QueryFailed { process: String, message: String },
}

/// Port for enumerating the top-level window titles of a running process
#[async_trait]
pub trait WindowInspector: Send + Sync {
    /// Return the titles of every top-level window owned by the process.
    ///
    /// The process is expected to be running; callers check with a
    /// [`ProcessInspector`](super::ProcessInspector) first.
    async fn window_titles(&self, process_name: &str) -> Result<Vec<String>, WindowQueryError>;
}
