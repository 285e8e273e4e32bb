use super::{parse_command, pick, Command, StepOption, StepOutcome, StepPrompt};
use crate::intake::domain::OrganizationSize;

/// Third step: organization size.
#[derive(Debug, Clone, Default)]
pub struct OrganizationSizeSelection {
    current: Option<OrganizationSize>,
}

impl OrganizationSizeSelection {
    pub fn new(current: Option<OrganizationSize>) -> Self {
        Self { current }
    }

    pub fn prompt(&self) -> StepPrompt {
        StepPrompt {
            question: "What is the size of your organization?",
            placeholder: None,
            options: OrganizationSize::ALL
                .iter()
                .enumerate()
                .map(|(i, size)| StepOption {
                    key: (i + 1).to_string(),
                    label: size.label().to_string(),
                    selected: self.current == Some(*size),
                })
                .collect(),
            can_go_back: true,
        }
    }

    /// Bare numbers are option numbers; sizes are matched by label. An empty
    /// line keeps the size already chosen.
    pub fn handle_input(&mut self, input: &str) -> StepOutcome<OrganizationSize> {
        match parse_command(input) {
            Some(Command::Quit) => return StepOutcome::Quit,
            Some(Command::Back) => return StepOutcome::Back,
            None => {}
        }

        if input.trim().is_empty() {
            if let Some(current) = self.current {
                return StepOutcome::Submit(current);
            }
        }

        match pick(input, &OrganizationSize::ALL, |size, text| {
            size.label() == text
        }) {
            Some(size) => StepOutcome::Submit(size),
            None => StepOutcome::Invalid("Choose 1-3 or one of: 1-10, 10-100, 100+".to_string()),
        }
    }
}
