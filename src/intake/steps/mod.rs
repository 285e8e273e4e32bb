//! Wizard step components.
//!
//! Each step owns only its draft value. It describes itself as a
//! [`StepPrompt`] and turns one line of user input into a [`StepOutcome`];
//! committing the answer is the wizard controller's job.
mod application_input;
mod organization_size;
mod risk_tolerance;
mod role_selection;

pub use application_input::ApplicationInput;
pub use organization_size::OrganizationSizeSelection;
pub use risk_tolerance::RiskToleranceInput;
pub use role_selection::RoleSelection;

/// What a step did with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    Submit(T),
    Back,
    Invalid(String),
    Quit,
}

/// One selectable option of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOption {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

/// Everything a prompter needs to render a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPrompt {
    pub question: &'static str,
    pub placeholder: Option<&'static str>,
    pub options: Vec<StepOption>,
    pub can_go_back: bool,
}

/// Navigation commands shared by every step.
pub(crate) enum Command {
    Back,
    Quit,
}

pub(crate) fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_ascii_lowercase().as_str() {
        ":b" | ":back" => Some(Command::Back),
        ":q" | ":quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Picks an option by 1-based number or by matching text.
pub(crate) fn pick<T: Copy>(
    input: &str,
    choices: &[T],
    matches: impl Fn(&T, &str) -> bool,
) -> Option<T> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| choices.get(index))
            .copied();
    }
    choices.iter().copied().find(|choice| matches(choice, trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command(":b"), Some(Command::Back)));
        assert!(matches!(parse_command(" :BACK "), Some(Command::Back)));
        assert!(matches!(parse_command(":q"), Some(Command::Quit)));
        assert!(parse_command("b").is_none());
        assert!(parse_command("Acme").is_none());
    }

    #[test]
    fn test_pick_by_number_and_text() {
        let choices = ["alpha", "beta"];
        let matches = |c: &&str, input: &str| c.eq_ignore_ascii_case(input);
        assert_eq!(pick("1", &choices, matches), Some("alpha"));
        assert_eq!(pick("2", &choices, matches), Some("beta"));
        assert_eq!(pick("BETA", &choices, matches), Some("beta"));
        assert_eq!(pick("0", &choices, matches), None);
        assert_eq!(pick("3", &choices, matches), None);
        assert_eq!(pick("gamma", &choices, matches), None);
    }
}
