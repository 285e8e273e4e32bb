use super::{parse_command, pick, Command, StepOption, StepOutcome, StepPrompt};
use crate::intake::domain::RiskTolerance;

/// Last question: risk tolerance, a three-position slider.
///
/// Typing a level moves the slider and commits it; an empty line commits
/// the slider's current position.
#[derive(Debug, Clone, Default)]
pub struct RiskToleranceInput {
    value: RiskTolerance,
}

impl RiskToleranceInput {
    pub fn new(index: usize) -> Self {
        Self {
            value: RiskTolerance::from_index(index).unwrap_or_default(),
        }
    }

    pub fn value(&self) -> RiskTolerance {
        self.value
    }

    pub fn prompt(&self) -> StepPrompt {
        StepPrompt {
            question: "What is your risk tolerance?",
            placeholder: Some("Press Enter to continue with the highlighted level"),
            options: RiskTolerance::ALL
                .iter()
                .enumerate()
                .map(|(i, level)| StepOption {
                    key: (i + 1).to_string(),
                    label: level.label().to_string(),
                    selected: *level == self.value,
                })
                .collect(),
            can_go_back: true,
        }
    }

    pub fn handle_input(&mut self, input: &str) -> StepOutcome<RiskTolerance> {
        match parse_command(input) {
            Some(Command::Quit) => return StepOutcome::Quit,
            Some(Command::Back) => return StepOutcome::Back,
            None => {}
        }

        if input.trim().is_empty() {
            return StepOutcome::Submit(self.value);
        }

        match pick(input, &RiskTolerance::ALL, |level, text| {
            level.label().eq_ignore_ascii_case(text)
        }) {
            Some(level) => {
                self.value = level;
                StepOutcome::Submit(level)
            }
            None => StepOutcome::Invalid("Choose 1-3 or one of: Low, Medium, High".to_string()),
        }
    }
}
