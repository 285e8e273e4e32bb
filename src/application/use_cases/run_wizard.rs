use crate::intake::domain::WizardAnswers;
use crate::intake::steps::{
    ApplicationInput, OrganizationSizeSelection, RiskToleranceInput, RoleSelection, StepOutcome,
};
use crate::navigation::{Location, WizardController, WizardStep};
use crate::ports::outbound::Prompter;
use crate::shared::Result;

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Reached `/complete` with every required answer.
    Completed(Location),
    /// Left early; the location resumes the session.
    Quit(Location),
}

/// RunWizardUseCase - drives the intake wizard over the prompter port
///
/// Starting from any wizard location, asks the question of the current step,
/// feeds the answer to the matching step component and lets the controller
/// move to the next location. Arriving at `/complete` with an unanswered
/// question redirects to that question.
pub struct RunWizardUseCase<'a, P> {
    prompter: &'a P,
}

impl<'a, P: Prompter> RunWizardUseCase<'a, P> {
    pub fn new(prompter: &'a P) -> Self {
        Self { prompter }
    }

    pub fn execute(&self, start: Location) -> Result<WizardOutcome> {
        let mut controller = WizardController::new(start);

        loop {
            let state = controller.state().clone();
            let step = state.current_step;
            let answers = state.answers;

            if step == WizardStep::Complete {
                match controller.state().missing_step() {
                    Some(missing) => {
                        self.prompter.show_message(&format!(
                            "⚠️  {} has not been answered yet",
                            missing.title()
                        ));
                        controller.redirect(missing);
                        continue;
                    }
                    None => return Ok(WizardOutcome::Completed(controller.location().clone())),
                }
            }

            let Some(input) = self.ask(step, &answers)? else {
                return Ok(WizardOutcome::Quit(controller.location().clone()));
            };

            let quit = match step {
                WizardStep::Application => {
                    let mut input_step = ApplicationInput::new(&answers.application);
                    self.apply(input_step.handle_input(&input), &mut controller, |c, v| {
                        c.submit_application(v)
                    })
                }
                WizardStep::Role => {
                    let mut input_step = RoleSelection::new(answers.role);
                    self.apply(input_step.handle_input(&input), &mut controller, |c, v| {
                        c.select_role(v)
                    })
                }
                WizardStep::Size => {
                    let mut input_step = OrganizationSizeSelection::new(answers.organization_size);
                    self.apply(input_step.handle_input(&input), &mut controller, |c, v| {
                        c.select_size(v)
                    })
                }
                WizardStep::Risk => {
                    let mut input_step = RiskToleranceInput::new(answers.risk_index());
                    self.apply(input_step.handle_input(&input), &mut controller, |c, v| {
                        c.select_risk(v)
                    })
                }
                WizardStep::Complete => false,
            };

            if quit {
                return Ok(WizardOutcome::Quit(controller.location().clone()));
            }
        }
    }

    /// Shows the step and reads one line. `None` means input ran out.
    fn ask(&self, step: WizardStep, answers: &WizardAnswers) -> Result<Option<String>> {
        let prompt = match step {
            WizardStep::Application => ApplicationInput::new(&answers.application).prompt(),
            WizardStep::Role => RoleSelection::new(answers.role).prompt(),
            WizardStep::Size => OrganizationSizeSelection::new(answers.organization_size).prompt(),
            WizardStep::Risk => RiskToleranceInput::new(answers.risk_index()).prompt(),
            WizardStep::Complete => return Ok(None),
        };
        self.prompter.show_step(step, &prompt);
        self.prompter.read_line()
    }

    /// Applies a step outcome to the controller. Returns `true` on quit.
    fn apply<T>(
        &self,
        outcome: StepOutcome<T>,
        controller: &mut WizardController,
        commit: impl FnOnce(&mut WizardController, T) -> Location,
    ) -> bool {
        match outcome {
            StepOutcome::Submit(value) => {
                commit(controller, value);
                false
            }
            StepOutcome::Back => {
                controller.back();
                false
            }
            StepOutcome::Invalid(reason) => {
                self.prompter.show_message(&format!("⚠️  {}", reason));
                false
            }
            StepOutcome::Quit => true,
        }
    }
}
