/// Console adapters for terminal interaction
mod progress_reporter;
mod terminal_prompter;

pub use progress_reporter::StderrProgressReporter;
pub use terminal_prompter::{render_step, TerminalPrompter};
