//! Input tool factory with automatic detection

use std::fmt;
use std::process::Stdio;
use std::str::FromStr;

use tokio::process::Command;

use crate::application::ports::{InputError, InputSender};

use super::enigo::EnigoInputSender;
use super::osascript::OsascriptInputSender;

/// Available input tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTool {
    /// macOS System Events key-code events
    Osascript,
    /// Cross-platform enigo library
    Enigo,
}

impl fmt::Display for InputTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputTool::Osascript => write!(f, "osascript"),
            InputTool::Enigo => write!(f, "enigo"),
        }
    }
}

/// User preference for input tool selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputToolPreference {
    /// Auto-detect: osascript on macOS when available, enigo otherwise
    #[default]
    Auto,
    /// Use osascript (macOS only)
    Osascript,
    /// Use the cross-platform enigo library
    Enigo,
}

impl fmt::Display for InputToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputToolPreference::Auto => write!(f, "auto"),
            InputToolPreference::Osascript => write!(f, "osascript"),
            InputToolPreference::Enigo => write!(f, "enigo"),
        }
    }
}

/// Error type for parsing input tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseInputToolError {
    pub value: String,
}

impl fmt::Display for ParseInputToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid input tool '{}'. Valid options: auto, osascript, enigo",
            self.value
        )
    }
}

impl std::error::Error for ParseInputToolError {}

impl FromStr for InputToolPreference {
    type Err = ParseInputToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(InputToolPreference::Auto),
            "osascript" => Ok(InputToolPreference::Osascript),
            "enigo" => Ok(InputToolPreference::Enigo),
            _ => Err(ParseInputToolError {
                value: s.to_string(),
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create an input sender using the specified preference.
///
/// Returns the adapter and the selected tool, or an error if the requested
/// tool is unavailable.
pub async fn create_input_sender(
    preference: InputToolPreference,
) -> Result<(Box<dyn InputSender>, InputTool), InputError> {
    match preference {
        InputToolPreference::Auto => {
            if cfg!(target_os = "macos") && is_tool_available("osascript").await {
                Ok((
                    Box::new(OsascriptInputSender::new()) as Box<dyn InputSender>,
                    InputTool::Osascript,
                ))
            } else {
                Ok((
                    Box::new(EnigoInputSender::new()) as Box<dyn InputSender>,
                    InputTool::Enigo,
                ))
            }
        }
        InputToolPreference::Osascript => {
            if is_tool_available("osascript").await {
                Ok((
                    Box::new(OsascriptInputSender::new()) as Box<dyn InputSender>,
                    InputTool::Osascript,
                ))
            } else {
                Err(InputError::ToolNotFound("osascript".to_string()))
            }
        }
        InputToolPreference::Enigo => Ok((
            Box::new(EnigoInputSender::new()) as Box<dyn InputSender>,
            InputTool::Enigo,
        )),
    }
}
