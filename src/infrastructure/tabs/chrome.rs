//! Google Chrome tab inspector adapter
//!
//! Enumerates (URL, title) for every tab across every Chrome window via
//! Chrome's AppleScript dictionary. Telling Chrome anything while it is not
//! running would launch it, so callers must verify the browser process is
//! running first.

use async_trait::async_trait;

use crate::application::ports::{BrowserTab, TabInspector, TabQueryError};
use crate::infrastructure::osascript::{self, OsascriptError};

/// Tab inspector backed by `osascript` + the Chrome scripting dictionary
pub struct ChromeTabInspector;

impl ChromeTabInspector {
    /// Create a new Chrome tab inspector
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChromeTabInspector {
    fn default() -> Self {
        Self::new()
    }
}

/// One tab per line, URL and title separated by a tab character
fn parse_tabs(output: &str) -> Vec<BrowserTab> {
    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((url, title)) => BrowserTab::new(url, title),
            None => BrowserTab::new(line, ""),
        })
        .collect()
}

#[async_trait]
impl TabInspector for ChromeTabInspector {
    async fn tabs(&self, app_name: &str) -> Result<Vec<BrowserTab>, TabQueryError> {
        let app = osascript::escape(app_name);
        let script = format!(
            r#"tell application "{app}"
	set out to ""
	repeat with w in windows
		repeat with t in tabs of w
			set out to out & (URL of t) & tab & (title of t) & linefeed
		end repeat
	end repeat
	return out
end tell"#
        );

        let output = osascript::run(&script).await.map_err(|e| match e {
            OsascriptError::NotFound => TabQueryError::ToolNotFound,
            OsascriptError::Failed(message) => TabQueryError::QueryFailed {
                app: app_name.to_string(),
                message,
            },
        })?;

        Ok(parse_tabs(&output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tabs_splits_url_and_title() {
        let tabs = parse_tabs("https://meet.google.com/abc-defg-hij\tStandup\n");
        assert_eq!(
            tabs,
            vec![BrowserTab::new("https://meet.google.com/abc-defg-hij", "Standup")]
        );
    }

    #[test]
    fn parse_tabs_multiple_lines() {
        let tabs = parse_tabs("https://a.example/\tA\nhttps://b.example/\tB\n");
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[1].title, "B");
    }

    #[test]
    fn parse_tabs_without_title() {
        let tabs = parse_tabs("https://a.example/\n");
        assert_eq!(tabs, vec![BrowserTab::new("https://a.example/", "")]);
    }

    #[test]
    fn parse_tabs_empty_output() {
        assert!(parse_tabs("").is_empty());
    }

    #[test]
    fn parse_tabs_title_containing_tab_character() {
        let tabs = parse_tabs("https://a.example/\tleft\tright\n");
        assert_eq!(tabs[0].url, "https://a.example/");
        assert_eq!(tabs[0].title, "left\tright");
    }
}
