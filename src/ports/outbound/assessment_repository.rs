use crate::application::dto::CreateAssessmentRequest;
use crate::results::domain::Assessment;
use crate::shared::Result;
use async_trait::async_trait;

/// AssessmentRepository port for the assessment backend
///
/// This port abstracts the two backend operations the client needs:
/// creating an assessment and fetching a stored one.
///
/// # Async Support
/// Both methods are async. Implementations must be `Send + Sync`.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Creates an assessment and returns its id
    ///
    /// # Errors
    /// Returns [`SentinelError::CreateAssessmentFailed`] on any transport
    /// failure or non-success status.
    ///
    /// [`SentinelError::CreateAssessmentFailed`]: crate::shared::error::SentinelError::CreateAssessmentFailed
    async fn create_assessment(&self, request: &CreateAssessmentRequest) -> Result<String>;

    /// Fetches a stored assessment by id
    ///
    /// # Errors
    /// Returns [`SentinelError::FetchAssessmentFailed`] on any transport
    /// failure, non-success status or undecodable body.
    ///
    /// [`SentinelError::FetchAssessmentFailed`]: crate::shared::error::SentinelError::FetchAssessmentFailed
    async fn get_assessment(&self, id: &str) -> Result<Assessment>;
}

#[async_trait]
impl<T: AssessmentRepository + ?Sized> AssessmentRepository for std::sync::Arc<T> {
    async fn create_assessment(&self, request: &CreateAssessmentRequest) -> Result<String> {
        (**self).create_assessment(request).await
    }

    async fn get_assessment(&self, id: &str) -> Result<Assessment> {
        (**self).get_assessment(id).await
    }
}
