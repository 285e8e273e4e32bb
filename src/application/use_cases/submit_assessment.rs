use crate::application::dto::CreateAssessmentRequest;
use crate::intake::domain::WizardAnswers;
use crate::navigation::{Location, Route};
use crate::ports::outbound::{AssessmentRepository, ProgressReporter};
use crate::presentation::status_rotation::StatusRotation;
use crate::shared::error::SentinelError;
use crate::shared::Result;
use std::time::Duration;

/// Lifecycle of one creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

/// SubmitAssessmentUseCase - creates the assessment once the wizard is done
///
/// Submits at most once per arrival at the terminal step: a pending, failed
/// or finished attempt refuses to resubmit until [`Self::arrive`] starts a
/// new arrival. While the request is pending a rotating status message is
/// shown through the progress reporter.
pub struct SubmitAssessmentUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    status_interval: Duration,
    state: SubmissionState,
}

impl<R, PR> SubmitAssessmentUseCase<R, PR>
where
    R: AssessmentRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: PR, status_interval: Duration) -> Self {
        Self {
            repository,
            progress_reporter,
            status_interval,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Marks a new arrival at the terminal step, allowing one submission.
    pub fn arrive(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Creates the assessment and returns the results location.
    ///
    /// # Errors
    /// - [`SentinelError::IncompleteAnswers`] when a required answer is missing
    /// - [`SentinelError::CreateAssessmentFailed`] when the backend call fails
    /// - [`SentinelError::Validation`] when this arrival already submitted
    pub async fn execute(&mut self, answers: &WizardAnswers) -> Result<Location> {
        if self.state != SubmissionState::Idle {
            return Err(SentinelError::Validation {
                message: "an assessment was already submitted for this visit".to_string(),
            }
            .into());
        }

        let request = CreateAssessmentRequest::from_answers(answers)?;
        tracing::info!(
            name = %request.name,
            role = %request.role,
            size = %request.size,
            risk = %request.risk,
            "creating assessment"
        );

        self.state = SubmissionState::Pending;
        self.progress_reporter
            .start_status(StatusRotation::creation(), self.status_interval);
        let result = self.repository.create_assessment(&request).await;
        self.progress_reporter.stop_status();

        match result {
            Ok(id) => {
                self.progress_reporter
                    .report_completion(&format!("✅ Assessment ready: {}", id));
                let location = Route::assessment_location(&id, Some(request.role.as_str()));
                self.state = SubmissionState::Succeeded(id);
                Ok(location)
            }
            Err(e) => {
                tracing::warn!(error = ?e, "assessment creation failed");
                let error = SentinelError::CreateAssessmentFailed;
                self.state = SubmissionState::Failed(error.to_string());
                self.progress_reporter
                    .report_error(&format!("❌ {}", error));
                Err(error.into())
            }
        }
    }
}
