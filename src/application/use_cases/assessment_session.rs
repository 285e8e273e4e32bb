use super::{RunWizardUseCase, SubmitAssessmentUseCase, ViewAssessmentUseCase, WizardOutcome};
use crate::intake::domain::{OrganizationSize, RiskTolerance, Role, WizardAnswers};
use crate::navigation::{Location, Route, WizardStep};
use crate::ports::outbound::{
    AssessmentRepository, DashboardFormatter, OutputPresenter, ProgressReporter, Prompter,
};
use crate::results::services::{ResultsState, ResultsView};
use crate::shared::error::SentinelError;
use crate::shared::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

pub const LANDING_TEXT: &str = "\
🛡️  Sentinel - AI-Powered Security Assessment
Transform business decisions into CISO-ready trust briefs in minutes.

  • Source-Grounded Analysis: vendor security pages, CVE databases, CISA KEV
    and compliance attestations, with citations.
  • Comprehensive Scoring: transparent 0-100 trust scores with rationale.
  • Safer Alternatives: one or two safer options with a clear rationale.";

const START_HINT: &str = "Press Enter to start an assessment (:q to quit)";

const RESULTS_HELP: &str =
    "Commands: role <executive|security|compliance|technical|global>, alt <n>, q";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The final screen was rendered.
    Rendered(Location),
    /// The user left the wizard; the location resumes it.
    Incomplete(Location),
    /// Creation or fetch failed; the message is what the user sees.
    Failed { location: Location, message: String },
}

/// A command typed on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResultsCommand {
    Role(Role),
    Alternative(usize),
    Quit,
    Empty,
    Invalid(String),
}

impl ResultsCommand {
    fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (command, argument) = trimmed
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((trimmed, ""));

        match command.to_ascii_lowercase().as_str() {
            "" => ResultsCommand::Empty,
            "q" | ":q" | "quit" | ":quit" => ResultsCommand::Quit,
            "role" => match Role::from_id(argument) {
                Some(role) => ResultsCommand::Role(role),
                None => ResultsCommand::Invalid(format!("Unknown role: {}", argument)),
            },
            "alt" => match argument.parse::<usize>() {
                Ok(number) if number > 0 => ResultsCommand::Alternative(number),
                _ => ResultsCommand::Invalid("Usage: alt <number>".to_string()),
            },
            other => ResultsCommand::Invalid(format!("Unknown command: {}", other)),
        }
    }
}

enum ResultsExit {
    Done(Location),
    Failed(Location, String),
    Navigate(Location),
}

/// AssessmentSession - top-level flow from a starting location
///
/// Resolves the location to a screen and runs it: the landing page, the
/// wizard followed by submission, or the results screen with its role and
/// alternative commands. Screens hand each other locations, never in-memory
/// state.
pub struct AssessmentSession<R, PR, P> {
    repository: Arc<R>,
    progress_reporter: Arc<PR>,
    prompter: P,
    formatter: Box<dyn DashboardFormatter>,
    presenter: Box<dyn OutputPresenter>,
    status_interval: Duration,
}

impl<R, PR, P> AssessmentSession<R, PR, P>
where
    R: AssessmentRepository,
    PR: ProgressReporter,
    P: Prompter,
{
    pub fn new(
        repository: R,
        progress_reporter: PR,
        prompter: P,
        formatter: Box<dyn DashboardFormatter>,
        presenter: Box<dyn OutputPresenter>,
        status_interval: Duration,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            progress_reporter: Arc::new(progress_reporter),
            prompter,
            formatter,
            presenter,
            status_interval,
        }
    }

    pub async fn run(&self, start: Location) -> Result<SessionOutcome> {
        let mut submit = SubmitAssessmentUseCase::new(
            Arc::clone(&self.repository),
            Arc::clone(&self.progress_reporter),
            self.status_interval,
        );
        let mut location = start;

        loop {
            tracing::debug!(location = %location, "resolving location");
            location = match Route::resolve(&location) {
                Route::Landing => {
                    self.prompter.show_message(LANDING_TEXT);
                    if !self.prompter.is_interactive() {
                        return Ok(SessionOutcome::Rendered(location));
                    }
                    self.prompter.show_message(START_HINT);
                    match self.prompter.read_line()? {
                        Some(line) if !is_quit(&line) => Location::new(WizardStep::Application.path()),
                        _ => return Ok(SessionOutcome::Incomplete(location)),
                    }
                }
                Route::Wizard(_) => match RunWizardUseCase::new(&self.prompter).execute(location)? {
                    WizardOutcome::Quit(at) => return Ok(SessionOutcome::Incomplete(at)),
                    WizardOutcome::Completed(at) => {
                        submit.arrive();
                        let answers = WizardAnswers::from_location(&at);
                        match submit.execute(&answers).await {
                            Ok(next) => next,
                            Err(e) => {
                                return Ok(SessionOutcome::Failed {
                                    location: at,
                                    message: e.to_string(),
                                })
                            }
                        }
                    }
                },
                Route::Assessment { id, role } => {
                    match self.show_results(id, role, &mut submit).await? {
                        ResultsExit::Done(at) => return Ok(SessionOutcome::Rendered(at)),
                        ResultsExit::Failed(at, message) => {
                            return Ok(SessionOutcome::Failed {
                                location: at,
                                message,
                            })
                        }
                        ResultsExit::Navigate(next) => next,
                    }
                }
            };
        }
    }

    async fn show_results(
        &self,
        id: String,
        role: Option<String>,
        submit: &mut SubmitAssessmentUseCase<Arc<R>, Arc<PR>>,
    ) -> Result<ResultsExit> {
        let viewer = ViewAssessmentUseCase::new(
            Arc::clone(&self.repository),
            Arc::clone(&self.progress_reporter),
            self.status_interval,
        );
        let (mut view, mut ticket) = ResultsView::open(id, role);

        'fetch: loop {
            viewer.load(&mut view, ticket).await;
            let location = Route::assessment_location(view.assessment_id(), view.role());

            let Some(model) = viewer.dashboard(&view, Utc::now()) else {
                let message = match view.state() {
                    ResultsState::Failed(message) => message.clone(),
                    _ => SentinelError::FetchAssessmentFailed.to_string(),
                };
                return Ok(ResultsExit::Failed(location, message));
            };
            let content = self.formatter.format(&model)?;
            self.presenter.present(&content)?;

            if !self.prompter.is_interactive() {
                return Ok(ResultsExit::Done(location));
            }

            loop {
                self.prompter.show_message(RESULTS_HELP);
                let Some(line) = self.prompter.read_line()? else {
                    return Ok(ResultsExit::Done(location));
                };

                match ResultsCommand::parse(&line) {
                    ResultsCommand::Quit => return Ok(ResultsExit::Done(location)),
                    ResultsCommand::Empty => {}
                    ResultsCommand::Invalid(message) => {
                        self.prompter.show_message(&format!("⚠️  {}", message))
                    }
                    ResultsCommand::Role(role) => {
                        let id = view.assessment_id().to_string();
                        match view.navigate(id, Some(role.id().to_string())) {
                            Some(next) => {
                                ticket = next;
                                continue 'fetch;
                            }
                            None => self
                                .prompter
                                .show_message(&format!("Already showing the {} view", role.label())),
                        }
                    }
                    ResultsCommand::Alternative(number) => {
                        let name = match view.state() {
                            ResultsState::Ready(assessment) => assessment
                                .alternatives
                                .get(number - 1)
                                .map(|alternative| alternative.name.clone()),
                            _ => None,
                        };
                        let Some(name) = name else {
                            self.prompter
                                .show_message(&format!("⚠️  No alternative number {}", number));
                            continue;
                        };
                        if name.trim().is_empty() {
                            self.prompter.show_message(&format!(
                                "⚠️  Alternative {} has no name to assess",
                                number
                            ));
                            continue;
                        }

                        let answers = alternative_answers(name, view.role());
                        submit.arrive();
                        match submit.execute(&answers).await {
                            Ok(next) => return Ok(ResultsExit::Navigate(next)),
                            Err(e) => self.prompter.show_message(&format!("❌ {}", e)),
                        }
                    }
                }
            }
        }
    }
}

/// Answers for assessing an alternative: same role, default size and risk.
fn alternative_answers(name: String, role: Option<&str>) -> WizardAnswers {
    WizardAnswers {
        application: name,
        role: Some(role.and_then(Role::from_id).unwrap_or(Role::Global)),
        organization_size: Some(OrganizationSize::Medium),
        risk_tolerance: Some(RiskTolerance::Medium),
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), ":q" | ":quit")
}
