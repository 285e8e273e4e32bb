use crate::intake::steps::StepPrompt;
use crate::navigation::WizardStep;
use crate::shared::Result;

/// Prompter port for line-based user interaction
///
/// The wizard and the interactive results screen render questions and read
/// answers through this port, so use cases run the same against a terminal
/// or a scripted test double.
pub trait Prompter {
    /// Renders a wizard step's question and options
    fn show_step(&self, step: WizardStep, prompt: &StepPrompt);

    /// Shows an informational or validation message
    fn show_message(&self, message: &str);

    /// Reads one line of input without its line terminator
    ///
    /// # Returns
    /// `None` once input is exhausted
    ///
    /// # Errors
    /// Returns an error if reading from the input fails
    fn read_line(&self) -> Result<Option<String>>;

    /// Whether a person is at the other end
    fn is_interactive(&self) -> bool;
}
