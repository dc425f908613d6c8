//! Meetwatch CLI entry point

use std::process::ExitCode;

use clap::Parser;

use meetwatch::cli::{
    app::{run_monitor, EXIT_USAGE_ERROR},
    args::{Cli, MonitorOptions},
    presenter::Presenter,
};
use meetwatch::domain::monitor::Interval;
use meetwatch::infrastructure::InputToolPreference;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Parse polling interval
    let poll_interval = match cli.interval.as_deref() {
        Some(s) => match s.parse::<Interval>() {
            Ok(i) => i,
            Err(e) => {
                presenter.error(&format!("Invalid interval: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Interval::default_poll(),
    };

    // Parse settle delay
    let settle_delay = match cli.settle.as_deref() {
        Some(s) => match s.parse::<Interval>() {
            Ok(i) => i,
            Err(e) => {
                presenter.error(&format!("Invalid settle delay: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Interval::default_settle(),
    };

    // Parse input tool preference
    let input_tool = match cli.input_tool.as_deref() {
        Some(s) => match s.parse::<InputToolPreference>() {
            Ok(tool) => tool,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => InputToolPreference::default(),
    };

    let options = MonitorOptions {
        poll_interval,
        settle_delay,
        notify: cli.notify,
        dry_run: cli.dry_run,
        input_tool,
    };

    run_monitor(options).await
}
