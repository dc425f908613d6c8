//! Interval value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::IntervalParseError;

/// Default polling interval between detection ticks (2 seconds)
pub const DEFAULT_POLL_SECS: u64 = 2;

/// Default settle delay between detection and the shortcut send (2 seconds)
pub const DEFAULT_SETTLE_SECS: u64 = 2;

/// Value object representing a time interval.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    milliseconds: u64,
}

impl Interval {
    /// Create an Interval from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create an Interval from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    /// Default polling interval (2 seconds)
    pub const fn default_poll() -> Self {
        Self::from_secs(DEFAULT_POLL_SECS)
    }

    /// Default settle delay (2 seconds)
    pub const fn default_settle() -> Self {
        Self::from_secs(DEFAULT_SETTLE_SECS)
    }

    /// Get interval in seconds
    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / 1000
    }

    /// Get interval in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    /// Parse an interval string into an Interval value object.
    /// Supported formats: "2s", "1m", "1m30s", "90s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();

        let mut minutes: u64 = 0;
        let mut seconds: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
            } else if ch == 'm' && !current_num.is_empty() {
                minutes = current_num.parse().map_err(|_| IntervalParseError {
                    input: s.to_string(),
                })?;
                current_num.clear();
                found_any = true;
            } else if ch == 's' && !current_num.is_empty() {
                seconds = current_num.parse().map_err(|_| IntervalParseError {
                    input: s.to_string(),
                })?;
                current_num.clear();
                found_any = true;
            } else {
                return Err(IntervalParseError {
                    input: s.to_string(),
                });
            }
        }

        // Leftover digits without a unit suffix are invalid
        if !current_num.is_empty() || !found_any {
            return Err(IntervalParseError {
                input: s.to_string(),
            });
        }

        let total_ms = (minutes * 60 + seconds) * 1000;

        if total_ms == 0 {
            return Err(IntervalParseError {
                input: s.to_string(),
            });
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes == 0 {
            write!(f, "{}s", seconds)
        } else if seconds == 0 {
            write!(f, "{}m", minutes)
        } else {
            write!(f, "{}m{}s", minutes, seconds)
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::default_poll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seconds_only() {
        let i: Interval = "30s".parse().unwrap();
        assert_eq!(i.as_secs(), 30);
        assert_eq!(i.as_millis(), 30000);
    }

    #[test]
    fn parse_minutes_only() {
        let i: Interval = "2m".parse().unwrap();
        assert_eq!(i.as_secs(), 120);
    }

    #[test]
    fn parse_minutes_and_seconds() {
        let i: Interval = "1m30s".parse().unwrap();
        assert_eq!(i.as_secs(), 90);
    }

    #[test]
    fn parse_case_insensitive() {
        let i: Interval = "1M30S".parse().unwrap();
        assert_eq!(i.as_secs(), 90);
    }

    #[test]
    fn parse_with_whitespace() {
        let i: Interval = "  2s  ".parse().unwrap();
        assert_eq!(i.as_secs(), 2);
    }

    #[test]
    fn parse_invalid_empty() {
        assert!("".parse::<Interval>().is_err());
    }

    #[test]
    fn parse_invalid_zero() {
        assert!("0s".parse::<Interval>().is_err());
        assert!("0m0s".parse::<Interval>().is_err());
    }

    #[test]
    fn parse_invalid_format() {
        assert!("2".parse::<Interval>().is_err());
        assert!("abc".parse::<Interval>().is_err());
        assert!("2x".parse::<Interval>().is_err());
    }

    #[test]
    fn display_seconds_only() {
        assert_eq!(Interval::from_secs(2).to_string(), "2s");
    }

    #[test]
    fn display_minutes_only() {
        assert_eq!(Interval::from_secs(120).to_string(), "2m");
    }

    #[test]
    fn display_minutes_and_seconds() {
        assert_eq!(Interval::from_secs(90).to_string(), "1m30s");
    }

    #[test]
    fn as_std_duration() {
        assert_eq!(Interval::from_secs(2).as_std(), StdDuration::from_secs(2));
    }

    #[test]
    fn default_values() {
        assert_eq!(Interval::default_poll().as_secs(), 2);
        assert_eq!(Interval::default_settle().as_secs(), 2);
    }
}
