//! CLI argument definitions using Clap

use clap::Parser;

use crate::domain::monitor::Interval;
use crate::infrastructure::InputToolPreference;

/// Meetwatch - auto-trigger screen recording when a meeting starts
#[derive(Parser, Debug)]
#[command(name = "meetwatch")]
#[command(version)]
#[command(about = "Auto-trigger a screen recorder hotkey when a Zoom or Google Meet meeting starts")]
#[command(long_about = None)]
pub struct Cli {
    /// Polling interval between detection ticks (e.g., 2s, 30s, 1m)
    #[arg(short = 'i', long, value_name = "TIME")]
    pub interval: Option<String>,

    /// Delay after detection before the shortcut is sent
    #[arg(short = 's', long, value_name = "TIME")]
    pub settle: Option<String>,

    /// Show desktop notifications on meeting transitions
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Log transitions without sending any keystroke
    #[arg(long)]
    pub dry_run: bool,

    /// Input tool to use (auto, osascript, enigo)
    #[arg(long, value_name = "TOOL")]
    pub input_tool: Option<String>,
}

/// Parsed monitor options
#[derive(Debug, Clone)]
pub struct MonitorOptions {
    pub poll_interval: Interval,
    pub settle_delay: Interval,
    pub notify: bool,
    pub dry_run: bool,
    pub input_tool: InputToolPreference,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["meetwatch"]);
        assert!(cli.interval.is_none());
        assert!(cli.settle.is_none());
        assert!(!cli.notify);
        assert!(!cli.dry_run);
        assert!(cli.input_tool.is_none());
    }

    #[test]
    fn cli_parses_interval() {
        let cli = Cli::parse_from(["meetwatch", "-i", "5s"]);
        assert_eq!(cli.interval, Some("5s".to_string()));
    }

    #[test]
    fn cli_parses_settle() {
        let cli = Cli::parse_from(["meetwatch", "--settle", "3s"]);
        assert_eq!(cli.settle, Some("3s".to_string()));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["meetwatch", "-n", "--dry-run"]);
        assert!(cli.notify);
        assert!(cli.dry_run);
    }

    #[test]
    fn cli_parses_input_tool() {
        let cli = Cli::parse_from(["meetwatch", "--input-tool", "enigo"]);
        assert_eq!(cli.input_tool, Some("enigo".to_string()));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
