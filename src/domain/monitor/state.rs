//! Monitor state and the tick transition function
//!
//! The monitor's whole state is one owned value threaded through the loop.
//! Each tick the caller builds a [`TickObservation`] from the detection
//! sources and hands it to [`step`], which is pure: no I/O, no clocks.

use crate::domain::detection::{ActiveMeeting, MeetingKind};

/// State owned by the monitor loop.
///
/// `recording` is `Some` while the monitor believes the third-party recorder
/// was started for a meeting, carrying the meeting that backed the start.
/// Never persisted; initialized to not-recording at process start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorState {
    recording: Option<ActiveMeeting>,
}

impl MonitorState {
    /// Create a fresh not-recording state
    pub fn new() -> Self {
        Self { recording: None }
    }

    /// Whether the monitor currently believes recording is active
    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    /// The meeting backing the current recording, if any
    pub fn recording(&self) -> Option<&ActiveMeeting> {
        self.recording.as_ref()
    }
}

/// Everything the transition function needs to know about one tick
#[derive(Debug, Clone, Default)]
pub struct TickObservation {
    /// The first active meeting reported by the sources in priority order
    pub detected: Option<ActiveMeeting>,
    /// Backends whose host application was not running at all this tick
    pub absent_hosts: Vec<MeetingKind>,
}

impl TickObservation {
    /// Observation with no meeting and all hosts running
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Observation with an active meeting
    pub fn active(meeting: ActiveMeeting) -> Self {
        Self {
            detected: Some(meeting),
            absent_hosts: Vec::new(),
        }
    }
}

/// Edge produced by one tick, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A meeting just started; the recorder shortcut should be sent
    /// after the settle delay.
    Started(ActiveMeeting),
    /// A meeting just ended while its host application kept running;
    /// a stop notification is emitted, no keystroke is sent.
    Stopped(ActiveMeeting),
    /// The host application behind the current recording disappeared.
    /// State is forced back to not-recording with no stop notification;
    /// this is a reset, not an edge.
    Reset(MeetingKind),
}

/// Compute the next state and the transition (if any) for one tick.
///
/// Detection is boolean-edge-triggered: while recording, any active
/// detection keeps the state, even if the meeting kind changed; the stored
/// meeting is refreshed so a later stop names the meeting that actually
/// ended. On `Started`, the caller commits the returned state only after
/// attempting the shortcut send.
pub fn step(state: &MonitorState, observation: &TickObservation) -> (MonitorState, Option<Transition>) {
    match (state.recording(), &observation.detected) {
        // Not recording, meeting appeared: start edge
        (None, Some(meeting)) => (
            MonitorState {
                recording: Some(meeting.clone()),
            },
            Some(Transition::Started(meeting.clone())),
        ),

        // Recording and something is still active: refresh, no edge
        (Some(_), Some(meeting)) => (
            MonitorState {
                recording: Some(meeting.clone()),
            },
            None,
        ),

        // Recording and nothing detected: either a true end edge, or a
        // forced reset when the backing host application vanished
        (Some(active), None) => {
            if observation.absent_hosts.contains(&active.kind) {
                (MonitorState { recording: None }, Some(Transition::Reset(active.kind)))
            } else {
                (
                    MonitorState { recording: None },
                    Some(Transition::Stopped(active.clone())),
                )
            }
        }

        // Nothing before, nothing now
        (None, None) => (MonitorState { recording: None }, None),
    }
}
