use crate::application::read_models::{DashboardReadModel, DashboardReadModelBuilder};
use crate::ports::outbound::{AssessmentRepository, ProgressReporter};
use crate::presentation::status_rotation::StatusRotation;
use crate::results::services::{FetchTicket, ResultsState, ResultsView};
use crate::shared::error::SentinelError;
use chrono::{DateTime, Utc};
use std::time::Duration;

const LOADING_MESSAGES: &[&str] = &["Loading assessment..."];

/// ViewAssessmentUseCase - fetches an assessment into a results view
///
/// The fetch outcome is handed to the view together with its ticket, so a
/// response that arrives after the view moved on is dropped there.
pub struct ViewAssessmentUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    status_interval: Duration,
}

impl<R, PR> ViewAssessmentUseCase<R, PR>
where
    R: AssessmentRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: PR, status_interval: Duration) -> Self {
        Self {
            repository,
            progress_reporter,
            status_interval,
        }
    }

    /// Fetches the view's assessment and applies the result.
    ///
    /// Returns `false` when the result belonged to a stale ticket.
    pub async fn load(&self, view: &mut ResultsView, ticket: FetchTicket) -> bool {
        let id = view.assessment_id().to_string();
        self.progress_reporter
            .start_status(StatusRotation::new(LOADING_MESSAGES), self.status_interval);
        let result = self.repository.get_assessment(&id).await;
        self.progress_reporter.stop_status();

        let result = result.map_err(|e| {
            tracing::warn!(id = %id, error = ?e, "assessment fetch failed");
            SentinelError::FetchAssessmentFailed.to_string()
        });
        view.complete(ticket, result)
    }

    /// Read model for a ready view, `None` while loading or after a failure.
    pub fn dashboard(&self, view: &ResultsView, now: DateTime<Utc>) -> Option<DashboardReadModel> {
        match view.state() {
            ResultsState::Ready(assessment) => Some(DashboardReadModelBuilder::build(
                assessment,
                view.role(),
                now,
            )),
            ResultsState::Loading | ResultsState::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::CreateAssessmentRequest;
    use crate::results::domain::{Assessment, CardId};
    use crate::shared::Result;
    use async_trait::async_trait;

    struct FixedRepository {
        assessment: Option<Assessment>,
    }

    #[async_trait]
    impl AssessmentRepository for FixedRepository {
        async fn create_assessment(&self, _request: &CreateAssessmentRequest) -> Result<String> {
            unreachable!("not used by the viewer")
        }

        async fn get_assessment(&self, id: &str) -> Result<Assessment> {
            match &self.assessment {
                Some(a) if a.id == id => Ok(a.clone()),
                _ => anyhow::bail!("404 Not Found"),
            }
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn start_status(&self, _rotation: StatusRotation, _interval: Duration) {}
        fn stop_status(&self) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn viewer(assessment: Option<Assessment>) -> ViewAssessmentUseCase<FixedRepository, SilentReporter> {
        ViewAssessmentUseCase::new(
            FixedRepository { assessment },
            SilentReporter,
            Duration::from_millis(10),
        )
    }

    #[tokio::test]
    async fn test_load_ready_and_build_dashboard() {
        let viewer = viewer(Some(Assessment {
            id: "abc123".to_string(),
            ..Default::default()
        }));
        let (mut view, ticket) = ResultsView::open("abc123", Some("compliance".to_string()));
        assert!(viewer.load(&mut view, ticket).await);

        let model = viewer.dashboard(&view, Utc::now()).unwrap();
        assert_eq!(model.card_ids(), vec![CardId::Compliance, CardId::Certifications]);
    }

    #[tokio::test]
    async fn test_load_failure_is_plain_message() {
        let viewer = viewer(None);
        let (mut view, ticket) = ResultsView::open("missing", None);
        viewer.load(&mut view, ticket).await;
        assert_eq!(
            view.state(),
            &ResultsState::Failed("Failed to fetch assessment".to_string())
        );
        assert!(viewer.dashboard(&view, Utc::now()).is_none());
    }

    #[tokio::test]
    async fn test_stale_load_is_dropped() {
        let viewer = viewer(Some(Assessment {
            id: "first".to_string(),
            ..Default::default()
        }));
        let (mut view, first) = ResultsView::open("first", None);
        let _second = view.navigate("second", None).unwrap();
        assert!(!viewer.load(&mut view, first).await);
        assert_eq!(view.state(), &ResultsState::Loading);
    }
}
