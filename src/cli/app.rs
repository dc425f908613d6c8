//! Monitor app runner

use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::InputSender;
use crate::application::{
    MeetTabSource, MeetingDetector, MeetingSource, MonitorCallbacks, MonitorConfig, MonitorUseCase,
    ZoomWindowSource,
};
use crate::domain::monitor::Interval;
use crate::infrastructure::{
    create_input_sender, ChromeTabInspector, InputTool, NoOpInputSender, NotifyRustNotifier,
    PgrepProcessInspector, SystemEventsWindowInspector,
};

use super::args::MonitorOptions;
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the monitor loop until interrupted
pub async fn run_monitor(options: MonitorOptions) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    // Two monitors would double-fire the recorder hotkey
    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another monitor is already running (PID: {})", pid));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    // Setup signal handler
    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    // Select the input sender
    let (input, tool): (Box<dyn InputSender>, Option<InputTool>) = if options.dry_run {
        (Box::new(NoOpInputSender::new()), None)
    } else {
        match create_input_sender(options.input_tool).await {
            Ok((sender, tool)) => (sender, Some(tool)),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    let config = MonitorConfig {
        poll_interval: options.poll_interval,
        settle_delay: options.settle_delay,
        enable_notify: options.notify,
        ..MonitorConfig::default()
    };

    // Detection sources in priority order
    let sources: Vec<Box<dyn MeetingSource>> = vec![
        Box::new(ZoomWindowSource::new(
            PgrepProcessInspector::new(),
            SystemEventsWindowInspector::new(),
            config.zoom_process_name.clone(),
            config.zoom_meeting_markers.clone(),
            config.zoom_idle_windows.clone(),
        )),
        Box::new(MeetTabSource::new(
            PgrepProcessInspector::new(),
            ChromeTabInspector::new(),
            config.browser_app_name.clone(),
            config.meeting_url_markers.clone(),
            config.excluded_url_markers.clone(),
        )),
    ];
    let detector = MeetingDetector::new(sources);
    let notifier = NotifyRustNotifier::new();

    presenter.info(&format!(
        "Watching for meetings: Zoom ({}), Google Meet ({})",
        config.zoom_process_name, config.browser_app_name
    ));
    presenter.info(&format!(
        "Recorder shortcut: {} | poll every {}, settle {}",
        config.shortcut, config.poll_interval, config.settle_delay
    ));
    match tool {
        Some(tool) => presenter.info(&format!("Input tool: {}", tool)),
        None => presenter.warn("Dry run: no keystrokes will be sent"),
    }
    presenter.info(&format!(
        "PID: {} | Press Ctrl+C to stop",
        std::process::id()
    ));

    let callbacks = build_callbacks(Arc::clone(&presenter), config.settle_delay);
    let mut use_case = MonitorUseCase::new(detector, input, notifier, config);

    loop {
        if shutdown.is_shutdown() {
            break;
        }

        use_case.tick(&callbacks).await;

        tokio::time::sleep(use_case.config().poll_interval.as_std()).await;
    }

    presenter.status("Monitor stopped");
    let _ = pid_file.release();

    ExitCode::from(EXIT_SUCCESS)
}

/// Wire the use-case callbacks to the presenter
fn build_callbacks(presenter: Arc<Presenter>, settle_delay: Interval) -> MonitorCallbacks {
    let on_source_error = {
        let presenter = Arc::clone(&presenter);
        move |kind: crate::domain::MeetingKind, error: &crate::application::DetectionError| {
            presenter.warn(&format!("{} detection failed: {}", kind, error));
        }
    };

    let on_meeting_detected = {
        let presenter = Arc::clone(&presenter);
        move |meeting: &crate::domain::ActiveMeeting| {
            presenter.transition(&format!("Meeting detected: {}", meeting));
            presenter.start_spinner(&format!(
                "Waiting {} for the meeting window to settle...",
                settle_delay
            ));
        }
    };

    let on_shortcut_sent = {
        let presenter = Arc::clone(&presenter);
        move |shortcut: &crate::application::ports::Shortcut| {
            presenter.spinner_success(&format!("Recording shortcut sent ({})", shortcut));
        }
    };

    let on_send_failed = {
        let presenter = Arc::clone(&presenter);
        move |error: &crate::application::ports::InputError| {
            presenter.spinner_fail("Shortcut delivery failed");
            presenter.error(&error.to_string());
            presenter.warn("Continuing as if the shortcut was delivered");
        }
    };

    let on_meeting_ended = {
        let presenter = Arc::clone(&presenter);
        move |meeting: &crate::domain::ActiveMeeting| {
            presenter.transition(&format!("Meeting ended: {}", meeting));
        }
    };

    let on_state_reset = {
        let presenter = Arc::clone(&presenter);
        move |kind: crate::domain::MeetingKind| {
            presenter.status(&format!("{} closed; recording state reset", kind));
        }
    };

    MonitorCallbacks {
        on_source_error: Some(Box::new(on_source_error)),
        on_meeting_detected: Some(Box::new(on_meeting_detected)),
        on_shortcut_sent: Some(Box::new(on_shortcut_sent)),
        on_send_failed: Some(Box::new(on_send_failed)),
        on_meeting_ended: Some(Box::new(on_meeting_ended)),
        on_state_reset: Some(Box::new(on_state_reset)),
    }
}
