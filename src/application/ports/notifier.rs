//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification icons for meeting transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    MeetingStarted,
    MeetingEnded,
}

impl NotificationIcon {
    /// Freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::MeetingStarted => "media-record",
            Self::MeetingEnded => "media-playback-stop",
        }
    }
}

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to send notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError>;
}
