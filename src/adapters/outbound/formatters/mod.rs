/// Formatter adapters for the results dashboard
mod html_formatter;
mod terminal_formatter;

pub use html_formatter::HtmlFormatter;
pub use terminal_formatter::TerminalFormatter;
