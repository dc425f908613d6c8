//! Monitor transition integration tests
//!
//! Drives the monitor use case end to end with scripted detection sources
//! and a recording input sender, covering the observable transition
//! sequences.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use meetwatch::application::ports::{
    InputError, InputSender, NotificationError, NotificationIcon, Notifier, Shortcut,
};
use meetwatch::application::{
    DetectionError, MeetingDetector, MeetingSource, MonitorCallbacks, MonitorConfig,
    MonitorUseCase,
};
use meetwatch::domain::monitor::Interval;
use meetwatch::domain::{ActiveMeeting, MeetingKind, SourceReport, Transition};

struct ScriptedSource {
    kind: MeetingKind,
    reports: Mutex<VecDeque<SourceReport>>,
}

impl ScriptedSource {
    fn new(kind: MeetingKind, reports: Vec<SourceReport>) -> Self {
        Self {
            kind,
            reports: Mutex::new(reports.into()),
        }
    }
}

#[async_trait]
impl MeetingSource for ScriptedSource {
    fn kind(&self) -> MeetingKind {
        self.kind
    }

    async fn probe(&self) -> Result<SourceReport, DetectionError> {
        let mut reports = self.reports.lock().unwrap();
        Ok(reports.pop_front().unwrap_or(SourceReport::Idle))
    }
}

#[derive(Clone, Default)]
struct CountingInput {
    sends: Arc<AtomicUsize>,
}

#[async_trait]
impl InputSender for CountingInput {
    async fn send(&self, _shortcut: &Shortcut) -> Result<(), InputError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct SilentNotifier;

#[async_trait]
impl Notifier for SilentNotifier {
    async fn notify(
        &self,
        _title: &str,
        _message: &str,
        _icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        Ok(())
    }
}

fn fast_config() -> MonitorConfig {
    MonitorConfig {
        settle_delay: Interval::from_millis(1),
        ..MonitorConfig::default()
    }
}

fn active(kind: MeetingKind, label: &str) -> SourceReport {
    SourceReport::Active(ActiveMeeting::new(kind, label))
}

async fn run_sequence(
    reports: Vec<SourceReport>,
    input: CountingInput,
) -> (Vec<Transition>, MonitorUseCase<CountingInput, SilentNotifier>) {
    let ticks = reports.len();
    let detector = MeetingDetector::new(vec![Box::new(ScriptedSource::new(
        MeetingKind::Zoom,
        reports,
    ))]);
    let mut use_case = MonitorUseCase::new(detector, input, SilentNotifier, fast_config());

    let callbacks = MonitorCallbacks::default();
    let mut transitions = Vec::new();
    for _ in 0..ticks {
        transitions.extend(use_case.tick(&callbacks).await);
    }
    (transitions, use_case)
}

#[tokio::test]
async fn false_true_true_false_fires_start_then_stop() {
    let input = CountingInput::default();
    let (transitions, use_case) = run_sequence(
        vec![
            SourceReport::Idle,
            active(MeetingKind::Zoom, "Zoom Meeting"),
            active(MeetingKind::Zoom, "Zoom Meeting"),
            SourceReport::Idle,
        ],
        input.clone(),
    )
    .await;

    assert_eq!(transitions.len(), 2);
    assert!(matches!(transitions[0], Transition::Started(_)));
    assert!(matches!(transitions[1], Transition::Stopped(_)));
    assert_eq!(input.sends.load(Ordering::SeqCst), 1);
    assert!(!use_case.is_recording());
}

#[tokio::test]
async fn all_false_fires_nothing() {
    let input = CountingInput::default();
    let (transitions, _) = run_sequence(
        vec![SourceReport::Idle, SourceReport::Idle, SourceReport::Idle],
        input.clone(),
    )
    .await;

    assert!(transitions.is_empty());
    assert_eq!(input.sends.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn long_meeting_fires_start_once() {
    let input = CountingInput::default();
    let reports = std::iter::repeat_with(|| active(MeetingKind::Zoom, "Zoom Meeting"))
        .take(10)
        .collect();
    let (transitions, use_case) = run_sequence(reports, input.clone()).await;

    assert_eq!(transitions.len(), 1);
    assert_eq!(input.sends.load(Ordering::SeqCst), 1);
    assert!(use_case.is_recording());
}

#[tokio::test]
async fn host_exit_resets_state_without_stop() {
    let input = CountingInput::default();
    let (transitions, use_case) = run_sequence(
        vec![
            active(MeetingKind::Zoom, "Zoom Meeting"),
            SourceReport::HostAbsent,
            SourceReport::HostAbsent,
        ],
        input.clone(),
    )
    .await;

    assert_eq!(transitions.len(), 2);
    assert!(matches!(transitions[0], Transition::Started(_)));
    assert_eq!(transitions[1], Transition::Reset(MeetingKind::Zoom));
    assert!(!use_case.is_recording());
}

#[tokio::test]
async fn browser_meeting_end_is_a_true_stop_edge() {
    // Meet tab closes while Chrome keeps running: stop, not reset
    let input = CountingInput::default();
    let detector = MeetingDetector::new(vec![
        Box::new(ScriptedSource::new(
            MeetingKind::Zoom,
            vec![SourceReport::HostAbsent, SourceReport::HostAbsent],
        )),
        Box::new(ScriptedSource::new(
            MeetingKind::GoogleMeet,
            vec![
                active(MeetingKind::GoogleMeet, "Standup"),
                SourceReport::Idle,
            ],
        )),
    ]);
    let mut use_case = MonitorUseCase::new(detector, input, SilentNotifier, fast_config());

    let callbacks = MonitorCallbacks::default();
    let first = use_case.tick(&callbacks).await;
    let second = use_case.tick(&callbacks).await;

    assert!(matches!(first, Some(Transition::Started(_))));
    assert_eq!(
        second,
        Some(Transition::Stopped(ActiveMeeting::new(
            MeetingKind::GoogleMeet,
            "Standup"
        )))
    );
}

#[tokio::test]
async fn zoom_takes_priority_over_meet() {
    let input = CountingInput::default();
    let detector = MeetingDetector::new(vec![
        Box::new(ScriptedSource::new(
            MeetingKind::Zoom,
            vec![active(MeetingKind::Zoom, "Zoom Meeting")],
        )),
        Box::new(ScriptedSource::new(
            MeetingKind::GoogleMeet,
            vec![active(MeetingKind::GoogleMeet, "Standup")],
        )),
    ]);
    let mut use_case = MonitorUseCase::new(detector, input, SilentNotifier, fast_config());

    let transition = use_case.tick(&MonitorCallbacks::default()).await;
    match transition {
        Some(Transition::Started(meeting)) => assert_eq!(meeting.kind, MeetingKind::Zoom),
        other => panic!("expected start, got {:?}", other),
    }
}

#[tokio::test]
async fn meeting_handover_does_not_refire() {
    // Zoom ends and a Meet meeting is live on the same tick: boolean-edge
    // detection keeps recording without a second shortcut send
    let input = CountingInput::default();
    let detector = MeetingDetector::new(vec![
        Box::new(ScriptedSource::new(
            MeetingKind::Zoom,
            vec![active(MeetingKind::Zoom, "Zoom Meeting"), SourceReport::Idle],
        )),
        // Not probed on the first tick: Zoom already reported active
        Box::new(ScriptedSource::new(
            MeetingKind::GoogleMeet,
            vec![active(MeetingKind::GoogleMeet, "Standup")],
        )),
    ]);
    let mut use_case = MonitorUseCase::new(detector, input.clone(), SilentNotifier, fast_config());

    let callbacks = MonitorCallbacks::default();
    assert!(matches!(
        use_case.tick(&callbacks).await,
        Some(Transition::Started(_))
    ));
    assert_eq!(use_case.tick(&callbacks).await, None);

    assert!(use_case.is_recording());
    assert_eq!(input.sends.load(Ordering::SeqCst), 1);
}
