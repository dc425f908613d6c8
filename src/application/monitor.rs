//! Meeting monitor use case

use crate::domain::detection::url::{EXCLUDED_MEET_PATHS, MEET_URL_MARKER};
use crate::domain::monitor::{step, Interval, MonitorState, Transition};
use crate::domain::{ActiveMeeting, MeetingKind};

use super::ports::{InputError, InputSender, Modifier, NotificationIcon, Notifier, Shortcut};
use super::sources::{DetectionError, MeetingDetector};

/// Exact process name of the Zoom client
pub const ZOOM_PROCESS_NAME: &str = "zoom.us";

/// Window-title substrings (lowercase) that indicate an active Zoom meeting
pub const ZOOM_MEETING_MARKERS: &[&str] = &["zoom meeting", "meeting"];

/// Window names (lowercase) of the Zoom client when no meeting is running
pub const ZOOM_IDLE_WINDOWS: &[&str] = &["zoom", "zoom workplace"];

/// Browser application inspected for Google Meet tabs
pub const BROWSER_APP_NAME: &str = "Google Chrome";

/// Configuration for the monitor loop.
///
/// There is no configuration file; these are the recognized options with
/// their fixed defaults. The CLI overrides only the two timing options.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Interval between detection ticks
    pub poll_interval: Interval,
    /// Delay between a start detection and the shortcut send, so the
    /// meeting window can finish loading
    pub settle_delay: Interval,
    /// Exact Zoom process name
    pub zoom_process_name: String,
    /// Zoom window-title markers indicating a meeting
    pub zoom_meeting_markers: Vec<String>,
    /// Zoom window names that mean "no meeting"
    pub zoom_idle_windows: Vec<String>,
    /// Browser application name for tab inspection
    pub browser_app_name: String,
    /// URL markers identifying a meeting page
    pub meeting_url_markers: Vec<String>,
    /// Path segments after a URL marker that are not meeting rooms
    pub excluded_url_markers: Vec<String>,
    /// The third-party recorder's shortcut
    pub shortcut: Shortcut,
    /// Whether to show desktop notifications on transitions
    pub enable_notify: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Interval::default_poll(),
            settle_delay: Interval::default_settle(),
            zoom_process_name: ZOOM_PROCESS_NAME.to_string(),
            zoom_meeting_markers: ZOOM_MEETING_MARKERS.iter().map(|s| s.to_string()).collect(),
            zoom_idle_windows: ZOOM_IDLE_WINDOWS.iter().map(|s| s.to_string()).collect(),
            browser_app_name: BROWSER_APP_NAME.to_string(),
            meeting_url_markers: vec![MEET_URL_MARKER.to_string()],
            excluded_url_markers: EXCLUDED_MEET_PATHS.iter().map(|s| s.to_string()).collect(),
            shortcut: Shortcut::new('z', vec![Modifier::Command, Modifier::Shift]),
            enable_notify: false,
        }
    }
}

/// Callbacks fired during a tick, in order of occurrence
#[derive(Default)]
pub struct MonitorCallbacks {
    /// A source probe failed this tick (treated as "not active")
    pub on_source_error: Option<Box<dyn Fn(MeetingKind, &DetectionError) + Send + Sync>>,
    /// A meeting start was detected; the settle delay follows
    pub on_meeting_detected: Option<Box<dyn Fn(&ActiveMeeting) + Send + Sync>>,
    /// The recorder shortcut was delivered
    pub on_shortcut_sent: Option<Box<dyn Fn(&Shortcut) + Send + Sync>>,
    /// Shortcut delivery failed; the monitor proceeds as if it succeeded
    pub on_send_failed: Option<Box<dyn Fn(&InputError) + Send + Sync>>,
    /// A meeting ended while its host kept running (true stop edge)
    pub on_meeting_ended: Option<Box<dyn Fn(&ActiveMeeting) + Send + Sync>>,
    /// The host application behind the recording vanished; state was reset
    pub on_state_reset: Option<Box<dyn Fn(MeetingKind) + Send + Sync>>,
}

/// Meeting monitor use case.
///
/// Owns the monitor state and advances it one tick at a time. Each tick
/// probes the detection sources, applies the pure transition function, and
/// fires the recorder shortcut on a start edge.
pub struct MonitorUseCase<I, N>
where
    I: InputSender,
    N: Notifier,
{
    detector: MeetingDetector,
    input: I,
    notifier: N,
    config: MonitorConfig,
    state: MonitorState,
}

impl<I, N> MonitorUseCase<I, N>
where
    I: InputSender,
    N: Notifier,
{
    /// Create a new monitor use case in the not-recording state
    pub fn new(detector: MeetingDetector, input: I, notifier: N, config: MonitorConfig) -> Self {
        Self {
            detector,
            input,
            notifier,
            config,
            state: MonitorState::new(),
        }
    }

    /// The monitor configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Whether the monitor currently believes recording is active
    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// Run one detection tick.
    ///
    /// On a start edge this waits the settle delay and attempts the
    /// shortcut send before committing the new state; a delivery failure is
    /// reported through the callbacks but does not roll the state back.
    /// Returns the transition for this tick, if any.
    pub async fn tick(&mut self, callbacks: &MonitorCallbacks) -> Option<Transition> {
        let observation = self.detector.observe().await;

        for failure in &observation.failures {
            if let Some(cb) = &callbacks.on_source_error {
                cb(failure.kind, &failure.error);
            }
        }

        let (next, transition) = step(&self.state, &observation.tick);

        match &transition {
            Some(Transition::Started(meeting)) => {
                if let Some(cb) = &callbacks.on_meeting_detected {
                    cb(meeting);
                }

                // Let the meeting window finish loading before firing
                tokio::time::sleep(self.config.settle_delay.as_std()).await;

                match self.input.send(&self.config.shortcut).await {
                    Ok(()) => {
                        if let Some(cb) = &callbacks.on_shortcut_sent {
                            cb(&self.config.shortcut);
                        }
                    }
                    Err(error) => {
                        // Best effort: assume it took effect, no retry
                        if let Some(cb) = &callbacks.on_send_failed {
                            cb(&error);
                        }
                    }
                }

                if self.config.enable_notify {
                    let _ = self
                        .notifier
                        .notify(
                            "Meetwatch",
                            &format!("Meeting started: {}", meeting),
                            NotificationIcon::MeetingStarted,
                        )
                        .await;
                }
            }
            Some(Transition::Stopped(meeting)) => {
                if let Some(cb) = &callbacks.on_meeting_ended {
                    cb(meeting);
                }

                if self.config.enable_notify {
                    let _ = self
                        .notifier
                        .notify(
                            "Meetwatch",
                            &format!("Meeting ended: {}", meeting),
                            NotificationIcon::MeetingEnded,
                        )
                        .await;
                }
            }
            Some(Transition::Reset(kind)) => {
                if let Some(cb) = &callbacks.on_state_reset {
                    cb(*kind);
                }
            }
            None => {}
        }

        self.state = next;
        transition
    }
}
