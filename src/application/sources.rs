//! Detection sources and the priority-ordered meeting detector
//!
//! Each conferencing backend is one source implementing [`MeetingSource`].
//! The detector probes them in priority order; the first active source wins
//! and supplies the label for what was detected.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::detection::{is_meeting_room_url, ActiveMeeting, MeetingKind, SourceReport};

use super::ports::{
    ProcessInspector, ProcessQueryError, TabInspector, TabQueryError, WindowInspector,
    WindowQueryError,
};

/// Errors from probing a detection source
#[derive(Debug, Clone, Error)]
pub enum DetectionError {
    #[error(transparent)]
    Process(#[from] ProcessQueryError),

    #[error(transparent)]
    Window(#[from] WindowQueryError),

    #[error(transparent)]
    Tabs(#[from] TabQueryError),
}

/// A single detection backend
#[async_trait]
pub trait MeetingSource: Send + Sync {
    /// Which backend this source detects
    fn kind(&self) -> MeetingKind;

    /// Observe the desktop once and report what this source sees
    async fn probe(&self) -> Result<SourceReport, DetectionError>;
}

/// Zoom detection via the client's window titles.
///
/// Zoom keeps running between meetings, so a running process alone is not a
/// meeting. A window title containing a meeting marker is; so is any window
/// whose name is not one of the known idle names (the home window is titled
/// just "Zoom" or "Zoom Workplace").
pub struct ZoomWindowSource<P, W> {
    process: P,
    windows: W,
    process_name: String,
    meeting_markers: Vec<String>,
    idle_windows: Vec<String>,
}

impl<P, W> ZoomWindowSource<P, W> {
    pub fn new(
        process: P,
        windows: W,
        process_name: impl Into<String>,
        meeting_markers: Vec<String>,
        idle_windows: Vec<String>,
    ) -> Self {
        Self {
            process,
            windows,
            process_name: process_name.into(),
            meeting_markers,
            idle_windows,
        }
    }
}

#[async_trait]
impl<P, W> MeetingSource for ZoomWindowSource<P, W>
where
    P: ProcessInspector,
    W: WindowInspector,
{
    fn kind(&self) -> MeetingKind {
        MeetingKind::Zoom
    }

    async fn probe(&self) -> Result<SourceReport, DetectionError> {
        if !self.process.is_running(&self.process_name).await? {
            return Ok(SourceReport::HostAbsent);
        }

        let titles = self.windows.window_titles(&self.process_name).await?;

        for title in &titles {
            let lower = title.to_lowercase();
            if self.meeting_markers.iter().any(|m| lower.contains(m)) {
                return Ok(SourceReport::Active(ActiveMeeting::new(
                    MeetingKind::Zoom,
                    title.clone(),
                )));
            }
        }

        // No marker hit: a window that is not the idle/home window still
        // indicates a meeting
        for title in &titles {
            let lower = title.to_lowercase();
            if !lower.is_empty() && !self.idle_windows.iter().any(|w| *w == lower) {
                return Ok(SourceReport::Active(ActiveMeeting::new(
                    MeetingKind::Zoom,
                    title.clone(),
                )));
            }
        }

        Ok(SourceReport::Idle)
    }
}

/// Google Meet detection via browser tab URLs.
///
/// A Meet tab counts only when its URL is a meeting room; the landing page,
/// the "create new meeting" flow, and the lookup page do not.
pub struct MeetTabSource<P, T> {
    process: P,
    tabs: T,
    browser_app_name: String,
    url_markers: Vec<String>,
    excluded_paths: Vec<String>,
}

impl<P, T> MeetTabSource<P, T> {
    pub fn new(
        process: P,
        tabs: T,
        browser_app_name: impl Into<String>,
        url_markers: Vec<String>,
        excluded_paths: Vec<String>,
    ) -> Self {
        Self {
            process,
            tabs,
            browser_app_name: browser_app_name.into(),
            url_markers,
            excluded_paths,
        }
    }
}

#[async_trait]
impl<P, T> MeetingSource for MeetTabSource<P, T>
where
    P: ProcessInspector,
    T: TabInspector,
{
    fn kind(&self) -> MeetingKind {
        MeetingKind::GoogleMeet
    }

    async fn probe(&self) -> Result<SourceReport, DetectionError> {
        // Probing tabs of a browser that is not running would launch it
        if !self.process.is_running(&self.browser_app_name).await? {
            return Ok(SourceReport::HostAbsent);
        }

        let tabs = self.tabs.tabs(&self.browser_app_name).await?;

        for tab in &tabs {
            if is_meeting_room_url(&tab.url, &self.url_markers, &self.excluded_paths) {
                let label = if tab.title.is_empty() {
                    tab.url.clone()
                } else {
                    tab.title.clone()
                };
                return Ok(SourceReport::Active(ActiveMeeting::new(
                    MeetingKind::GoogleMeet,
                    label,
                )));
            }
        }

        Ok(SourceReport::Idle)
    }
}

/// A source probe that failed this tick; treated as "not active"
#[derive(Debug)]
pub struct SourceFailure {
    pub kind: MeetingKind,
    pub error: DetectionError,
}

/// What the detector saw across all sources on one tick
#[derive(Debug, Default)]
pub struct Observation {
    pub tick: crate::domain::TickObservation,
    pub failures: Vec<SourceFailure>,
}

/// Priority-ordered set of detection sources
pub struct MeetingDetector {
    sources: Vec<Box<dyn MeetingSource>>,
}

impl MeetingDetector {
    /// Create a detector; sources are probed in the order given
    pub fn new(sources: Vec<Box<dyn MeetingSource>>) -> Self {
        Self { sources }
    }

    /// Probe all sources once.
    ///
    /// The first source reporting active short-circuits the rest. A probe
    /// error is recorded as a failure and treated as "not active" for that
    /// tick; it never propagates.
    pub async fn observe(&self) -> Observation {
        let mut observation = Observation::default();

        for source in &self.sources {
            match source.probe().await {
                Ok(SourceReport::Active(meeting)) => {
                    observation.tick.detected = Some(meeting);
                    break;
                }
                Ok(SourceReport::Idle) => {}
                Ok(SourceReport::HostAbsent) => {
                    observation.tick.absent_hosts.push(source.kind());
                }
                Err(error) => {
                    observation.failures.push(SourceFailure {
                        kind: source.kind(),
                        error,
                    });
                }
            }
        }

        observation
    }
}
