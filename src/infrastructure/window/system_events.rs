//! System Events window inspector adapter
//!
//! Enumerates a process's window titles via the macOS Accessibility
//! scripting interface. Requires the Accessibility permission.

use async_trait::async_trait;

use crate::application::ports::{WindowInspector, WindowQueryError};
use crate::infrastructure::osascript::{self, OsascriptError};

/// Window inspector backed by `osascript` + System Events
pub struct SystemEventsWindowInspector;

impl SystemEventsWindowInspector {
    /// Create a new System Events window inspector
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemEventsWindowInspector {
    fn default() -> Self {
        Self::new()
    }
}

/// One window title per line; blank lines are windows without a name
fn parse_titles(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[async_trait]
impl WindowInspector for SystemEventsWindowInspector {
    async fn window_titles(&self, process_name: &str) -> Result<Vec<String>, WindowQueryError> {
        let name = osascript::escape(process_name);
        let script = format!(
            r#"tell application "System Events"
	if not (exists process "{name}") then return ""
	tell process "{name}"
		set out to ""
		repeat with w in windows
			set out to out & (name of w) & linefeed
		end repeat
		return out
	end tell
end tell"#
        );

        let output = osascript::run(&script).await.map_err(|e| match e {
            OsascriptError::NotFound => WindowQueryError::ToolNotFound,
            OsascriptError::Failed(message) => WindowQueryError::QueryFailed {
                process: process_name.to_string(),
                message,
            },
        })?;

        Ok(parse_titles(&output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_titles_splits_lines() {
        let titles = parse_titles("Zoom\nZoom Meeting\n");
        assert_eq!(titles, vec!["Zoom", "Zoom Meeting"]);
    }

    #[test]
    fn parse_titles_skips_blank_lines() {
        let titles = parse_titles("Zoom\n\n\nZoom Meeting\n");
        assert_eq!(titles, vec!["Zoom", "Zoom Meeting"]);
    }

    #[test]
    fn parse_titles_empty_output() {
        assert!(parse_titles("").is_empty());
        assert!(parse_titles("\n").is_empty());
    }

    #[test]
    fn parse_titles_strips_carriage_returns() {
        let titles = parse_titles("Zoom Meeting\r\n");
        assert_eq!(titles, vec!["Zoom Meeting"]);
    }
}
