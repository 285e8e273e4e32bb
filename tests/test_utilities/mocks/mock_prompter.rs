use sentinel_assess::intake::steps::StepPrompt;
use sentinel_assess::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock Prompter that replays scripted input lines
///
/// Runs out of lines like a closed stdin: `read_line` returns `None`.
#[derive(Clone)]
pub struct MockPrompter {
    lines: Arc<Mutex<VecDeque<String>>>,
    interactive: bool,
    pub steps: Arc<Mutex<Vec<WizardStep>>>,
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockPrompter {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: Arc::new(Mutex::new(lines.iter().map(|l| l.to_string()).collect())),
            interactive: false,
            steps: Arc::new(Mutex::new(Vec::new())),
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn get_steps(&self) -> Vec<WizardStep> {
        self.steps.lock().unwrap().clone()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

impl Prompter for MockPrompter {
    fn show_step(&self, step: WizardStep, _prompt: &StepPrompt) {
        self.steps.lock().unwrap().push(step);
    }

    fn show_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn read_line(&self) -> Result<Option<String>> {
        Ok(self.lines.lock().unwrap().pop_front())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
