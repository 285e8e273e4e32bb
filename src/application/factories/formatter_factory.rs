use crate::adapters::outbound::formatters::{HtmlFormatter, TerminalFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DashboardFormatter;

/// Factory for creating dashboard formatters
///
/// Selects the infrastructure adapter for the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`.
    ///
    /// `color` only affects terminal output; HTML always carries its colors.
    ///
    /// # Examples
    /// ```
    /// use sentinel_assess::application::dto::OutputFormat;
    /// use sentinel_assess::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn DashboardFormatter> {
        match format {
            OutputFormat::Text => Box::new(TerminalFormatter::new(color)),
            OutputFormat::Html => Box::new(HtmlFormatter::new()),
        }
    }

    /// Whether terminal colors should be used for `format`.
    ///
    /// Colors are never written to a file.
    pub fn use_color(format: OutputFormat, requested: bool, writes_to_file: bool) -> bool {
        format == OutputFormat::Text && requested && !writes_to_file
    }
}
