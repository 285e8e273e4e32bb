use crate::intake::domain::WizardAnswers;
use crate::shared::error::SentinelError;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/assessments`.
///
/// Every field is the backend's identifier: role id, size id
/// (`small`/`medium`/`large`) and lowercase risk key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssessmentRequest {
    pub name: String,
    pub role: String,
    pub size: String,
    pub risk: String,
}

impl CreateAssessmentRequest {
    /// Builds the request from the wizard's answers.
    ///
    /// # Errors
    /// Returns [`SentinelError::IncompleteAnswers`] when the name, role or
    /// size is missing. A missing risk is sent as `medium`.
    pub fn from_answers(answers: &WizardAnswers) -> Result<Self, SentinelError> {
        let name = answers.application.trim();
        if name.is_empty() {
            return Err(SentinelError::IncompleteAnswers {
                missing: "application".to_string(),
            });
        }
        let role = answers.role.ok_or_else(|| SentinelError::IncompleteAnswers {
            missing: "role".to_string(),
        })?;
        let size = answers
            .organization_size
            .ok_or_else(|| SentinelError::IncompleteAnswers {
                missing: "organization size".to_string(),
            })?;
        let risk = answers.risk_tolerance.unwrap_or_default();

        Ok(Self {
            name: name.to_string(),
            role: role.id().to_string(),
            size: size.api_id().to_string(),
            risk: risk.api_id().to_string(),
        })
    }
}

/// Body of a successful creation response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssessmentCreated {
    pub id: String,
}
