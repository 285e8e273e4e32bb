use super::{parse_command, Command, StepOutcome, StepPrompt};
use crate::intake::domain::ApplicationDraft;

/// First step: which application should be assessed.
#[derive(Debug, Clone, Default)]
pub struct ApplicationInput {
    draft: ApplicationDraft,
}

impl ApplicationInput {
    /// Starts from a previously committed name, if any.
    pub fn new(initial: &str) -> Self {
        Self {
            draft: ApplicationDraft::new(initial),
        }
    }

    pub fn prompt(&self) -> StepPrompt {
        StepPrompt {
            question: "Which application do you want to assess today?",
            placeholder: Some("Type an application name or URL"),
            options: Vec::new(),
            can_go_back: false,
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// An empty line keeps the current draft, anything else replaces it.
    pub fn handle_input(&mut self, input: &str) -> StepOutcome<String> {
        match parse_command(input) {
            Some(Command::Quit) => return StepOutcome::Quit,
            Some(Command::Back) => {
                return StepOutcome::Invalid("This is the first step".to_string())
            }
            None => {}
        }

        if !input.trim().is_empty() {
            self.draft.set(input);
        }

        match self.draft.submit() {
            Some(name) => StepOutcome::Submit(name),
            None => StepOutcome::Invalid("Please enter an application name or URL".to_string()),
        }
    }
}
