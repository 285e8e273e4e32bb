use crate::ports::outbound::ProgressReporter;
use crate::presentation::status_rotation::StatusRotation;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

const SPINNER_TICK: Duration = Duration::from_millis(120);

struct ActiveStatus {
    spinner: ProgressBar,
    rotation_task: Option<JoinHandle<()>>,
}

impl ActiveStatus {
    fn finish(self) {
        if let Some(task) = self.rotation_task {
            task.abort();
        }
        self.spinner.finish_and_clear();
    }
}

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so the dashboard on stdout stays clean. While an
/// operation is pending an indicatif spinner shows the current status
/// message, and a tokio interval task advances the rotation.
pub struct StderrProgressReporter {
    active: Mutex<Option<ActiveStatus>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            active: Mutex::new(None),
        }
    }

    fn spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        spinner
    }

    fn take_active(&self) -> Option<ActiveStatus> {
        match self.active.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    fn finish_active(&self) {
        if let Some(active) = self.take_active() {
            active.finish();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.finish_active();
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn start_status(&self, rotation: StatusRotation, interval: Duration) {
        self.finish_active();

        let spinner = Self::spinner(rotation.current());

        // Without a runtime the first message simply stays on screen.
        let rotation_task = tokio::runtime::Handle::try_current().ok().map(|handle| {
            let spinner = spinner.clone();
            let mut rotation = rotation;
            handle.spawn(async move {
                let mut ticker = tokio::time::interval(interval);
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    spinner.set_message(rotation.advance().to_string());
                }
            })
        });

        let active = ActiveStatus {
            spinner,
            rotation_task,
        };
        match self.active.lock() {
            Ok(mut guard) => *guard = Some(active),
            Err(poisoned) => *poisoned.into_inner() = Some(active),
        }
    }

    fn stop_status(&self) {
        self.finish_active();
    }

    fn report_error(&self, message: &str) {
        self.finish_active();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_active();
        eprintln!();
        eprintln!("{}", message);
    }
}
