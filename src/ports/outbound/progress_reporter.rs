use crate::presentation::status_rotation::StatusRotation;
use std::time::Duration;

/// ProgressReporter port for user-facing progress on stderr
///
/// Keeps spinners and status lines away from stdout, which carries the
/// rendered dashboard.
pub trait ProgressReporter {
    /// Reports a one-off progress message
    fn report(&self, message: &str);

    /// Shows a spinner whose message advances through `rotation` every
    /// `interval` until [`ProgressReporter::stop_status`] is called
    fn start_status(&self, rotation: StatusRotation, interval: Duration);

    /// Stops and clears the rotating status, if any
    fn stop_status(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for std::sync::Arc<T> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn start_status(&self, rotation: StatusRotation, interval: Duration) {
        (**self).start_status(rotation, interval)
    }

    fn stop_status(&self) {
        (**self).stop_status()
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
