//! Process inspector port interface

use async_trait::async_trait;
use thiserror::Error;

/// Process query errors
#[derive(Debug, Clone, Error)]
pub enum ProcessQueryError {
    #[error("pgrep not found. Please install procps.")]
    ToolNotFound,

    #[error("Failed to query processes: {0}")]
    QueryFailed(String),
}

/// Port for asking whether a named process is running
#[async_trait]
pub trait ProcessInspector: Send + Sync {
    /// Answer whether a process with this exact name is currently running.
    async fn is_running(&self, process_name: &str) -> Result<bool, ProcessQueryError>;
}
