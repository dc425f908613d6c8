//! Meeting kinds and per-source detection reports

use std::fmt;

/// The conferencing backends the monitor knows how to detect.
/// Adding a backend means adding a variant here plus one detection source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingKind {
    Zoom,
    GoogleMeet,
}

impl MeetingKind {
    /// Get the display name for the meeting backend
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Zoom => "Zoom",
            Self::GoogleMeet => "Google Meet",
        }
    }
}

impl fmt::Display for MeetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A positive detection: which backend, and a human-readable label
/// (window title or tab title) for what was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMeeting {
    pub kind: MeetingKind,
    pub label: String,
}

impl ActiveMeeting {
    pub fn new(kind: MeetingKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}

impl fmt::Display for ActiveMeeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} ({})", self.kind, self.label)
        }
    }
}

/// What a single detection source observed on one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceReport {
    /// Host application running and an active meeting window/tab found
    Active(ActiveMeeting),
    /// Host application running, no meeting
    Idle,
    /// Host application not running at all
    HostAbsent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(MeetingKind::Zoom.display_name(), "Zoom");
        assert_eq!(MeetingKind::GoogleMeet.display_name(), "Google Meet");
    }

    #[test]
    fn active_meeting_display_with_label() {
        let m = ActiveMeeting::new(MeetingKind::Zoom, "Zoom Meeting");
        assert_eq!(m.to_string(), "Zoom (Zoom Meeting)");
    }

    #[test]
    fn active_meeting_display_without_label() {
        let m = ActiveMeeting::new(MeetingKind::GoogleMeet, "");
        assert_eq!(m.to_string(), "Google Meet");
    }

    #[test]
    fn source_report_equality() {
        assert_eq!(SourceReport::Idle, SourceReport::Idle);
        assert_ne!(SourceReport::Idle, SourceReport::HostAbsent);
    }
}
