use crate::application::dto::{AssessmentCreated, CreateAssessmentRequest};
use crate::ports::outbound::AssessmentRepository;
use crate::results::domain::Assessment;
use crate::shared::error::SentinelError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const ASSESSMENTS_ENDPOINT: &str = "/api/assessments";

/// SentinelApiClient adapter for the Sentinel assessment backend
///
/// Implements the AssessmentRepository port over HTTP. Every non-2xx status,
/// transport error or malformed body collapses into the single user-facing
/// failure of the operation; the details only reach the diagnostic log.
pub struct SentinelApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SentinelApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sentinel-assess/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rejects ids that would change the request path once interpolated.
    fn validate_assessment_id(id: &str) -> std::result::Result<(), SentinelError> {
        let reason = if id.trim().is_empty() {
            Some("id is empty")
        } else if id.contains('/') || id.contains('\\') {
            Some("id contains path separators")
        } else if id.contains("..") {
            Some("id contains '..'")
        } else if id.contains('#') || id.contains('?') || id.contains('@') {
            Some("id contains URL-unsafe characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SentinelError::InvalidAssessmentId {
                id: id.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn post_assessment(&self, request: &CreateAssessmentRequest) -> Result<AssessmentCreated> {
        let url = format!("{}{}", self.base_url, ASSESSMENTS_ENDPOINT);
        tracing::debug!(%url, name = %request.name, role = %request.role, "creating assessment");

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Assessment API returned status code {}", response.status());
        }
        Ok(response.json::<AssessmentCreated>().await?)
    }

    async fn fetch_assessment(&self, id: &str) -> Result<Assessment> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            ASSESSMENTS_ENDPOINT,
            urlencoding::encode(id)
        );
        tracing::debug!(%url, "fetching assessment");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Assessment API returned status code {}", response.status());
        }
        Ok(response.json::<Assessment>().await?)
    }
}

#[async_trait]
impl AssessmentRepository for SentinelApiClient {
    async fn create_assessment(&self, request: &CreateAssessmentRequest) -> Result<String> {
        match self.post_assessment(request).await {
            Ok(created) => {
                tracing::debug!(id = %created.id, "assessment created");
                Ok(created.id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "assessment creation failed");
                Err(SentinelError::CreateAssessmentFailed.into())
            }
        }
    }

    async fn get_assessment(&self, id: &str) -> Result<Assessment> {
        Self::validate_assessment_id(id)?;

        self.fetch_assessment(id).await.map_err(|e| {
            tracing::warn!(%id, error = %e, "assessment fetch failed");
            SentinelError::FetchAssessmentFailed.into()
        })
    }
}
