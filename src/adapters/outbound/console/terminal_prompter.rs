use crate::intake::steps::StepPrompt;
use crate::navigation::WizardStep;
use crate::ports::outbound::Prompter;
use crate::shared::Result;
use anyhow::Context;
use owo_colors::OwoColorize;
use std::io::{BufRead, IsTerminal, Write};

/// Number of question steps shown in the "Step N of M" header.
const QUESTION_STEPS: usize = 4;

/// TerminalPrompter adapter that asks wizard questions on the terminal
///
/// Prompts go to stderr and answers come from stdin, one line each.
pub struct TerminalPrompter {
    color: bool,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Prompter for TerminalPrompter {
    fn show_step(&self, step: WizardStep, prompt: &StepPrompt) {
        eprint!("{}", render_step(step, prompt, self.color));
        let _ = std::io::stderr().flush();
    }

    fn show_message(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }
}

/// Renders one wizard step as terminal text, ending with the input marker.
pub fn render_step(step: WizardStep, prompt: &StepPrompt, color: bool) -> String {
    let mut out = String::new();

    let header = format!(
        "Step {} of {} · {}",
        step.position() + 1,
        QUESTION_STEPS,
        step.title()
    );
    out.push('\n');
    if color {
        out.push_str(&header.dimmed().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    if color {
        out.push_str(&prompt.question.bold().to_string());
    } else {
        out.push_str(prompt.question);
    }
    out.push('\n');

    for option in &prompt.options {
        let marker = if option.selected { "●" } else { "○" };
        let line = format!("  {} {}) {}", marker, option.key, option.label);
        if option.selected && color {
            out.push_str(&line.cyan().to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    if let Some(placeholder) = prompt.placeholder {
        out.push_str(&format!("  e.g. {}\n", placeholder));
    }

    let hint = if prompt.can_go_back {
        "(:b back, :q quit)"
    } else {
        "(:q quit)"
    };
    if color {
        out.push_str(&hint.dimmed().to_string());
    } else {
        out.push_str(hint);
    }
    out.push_str("\n> ");
    out
}
