//! Browser tab inspector port interface

use async_trait::async_trait;
use thiserror::Error;

/// One open browser tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserTab {
    pub url: String,
    pub title: String,
}

impl BrowserTab {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Tab query errors
#[derive(Debug, Clone, Error)]
pub enum TabQueryError {
    #[error("osascript not found. Tab inspection requires macOS.")]
    ToolNotFound,

    #[error("Failed to list tabs of {app}: {message}")]
    QueryFailed { app: String, message: String },
}

/// Port for enumerating open browser tabs across every window
#[async_trait]
pub trait TabInspector: Send + Sync {
    /// Return (URL, title) for every open tab of the browser.
    ///
    /// The browser is expected to be running; callers check with a
    /// [`ProcessInspector`](super::ProcessInspector) first, since scripting
    /// a browser that is not running may launch it.
    async fn tabs(&self, app_name: &str) -> Result<Vec<BrowserTab>, TabQueryError>;
}
