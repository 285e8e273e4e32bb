use super::{parse_command, pick, Command, StepOption, StepOutcome, StepPrompt};
use crate::intake::domain::Role;

/// Second step: the viewer's main responsibility.
#[derive(Debug, Clone, Default)]
pub struct RoleSelection {
    current: Option<Role>,
}

impl RoleSelection {
    pub fn new(current: Option<Role>) -> Self {
        Self { current }
    }

    pub fn prompt(&self) -> StepPrompt {
        StepPrompt {
            question: "What is your main responsibility in the organization?",
            placeholder: None,
            options: Role::SELECTABLE
                .iter()
                .enumerate()
                .map(|(i, role)| StepOption {
                    key: (i + 1).to_string(),
                    label: role.label().to_string(),
                    selected: self.current == Some(*role),
                })
                .collect(),
            can_go_back: true,
        }
    }

    pub fn handle_input(&mut self, input: &str) -> StepOutcome<Role> {
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

        match pick(input, &Role::SELECTABLE, |role, text| {
            role.id().eq_ignore_ascii_case(text)
        }) {
            Some(role) => StepOutcome::Submit(role),
            None => StepOutcome::Invalid(format!(
                "Choose 1-{} or one of: executive, security, compliance, technical",
                Role::SELECTABLE.len()
            )),
        }
    }
}
