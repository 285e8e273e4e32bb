use super::{OrganizationSize, RiskTolerance, Role};
use crate::navigation::Location;

/// Query keys under which each answer is persisted.
pub const NAME_PARAM: &str = "name";
pub const ROLE_PARAM: &str = "role";
pub const SIZE_PARAM: &str = "size";
pub const RISK_PARAM: &str = "risk";

/// Answers collected by the intake wizard.
///
/// Answers only live in a location's query string between steps; this type is
/// the in-memory view rebuilt from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardAnswers {
    pub application: String,
    pub role: Option<Role>,
    pub organization_size: Option<OrganizationSize>,
    pub risk_tolerance: Option<RiskTolerance>,
}

impl WizardAnswers {
    /// Reads answers from a location's query parameters.
    ///
    /// Unknown role or size values are dropped. A risk parameter that is
    /// present but not a known label resolves to `Medium`.
    pub fn from_location(location: &Location) -> Self {
        Self {
            application: location.param(NAME_PARAM).unwrap_or_default().to_string(),
            role: location.param(ROLE_PARAM).and_then(Role::from_id),
            organization_size: location
                .param(SIZE_PARAM)
                .and_then(OrganizationSize::from_label),
            risk_tolerance: location
                .param(RISK_PARAM)
                .map(|label| RiskTolerance::from_label_or_default(Some(label))),
        }
    }

    /// Query parameters for every answer given so far, in wizard order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.application.is_empty() {
            params.push((NAME_PARAM, self.application.clone()));
        }
        if let Some(role) = self.role {
            params.push((ROLE_PARAM, role.id().to_string()));
        }
        if let Some(size) = self.organization_size {
            params.push((SIZE_PARAM, size.label().to_string()));
        }
        if let Some(risk) = self.risk_tolerance {
            params.push((RISK_PARAM, risk.label().to_string()));
        }
        params
    }

    /// Risk index used by the risk step and the API request.
    pub fn risk_index(&self) -> usize {
        self.risk_tolerance.unwrap_or_default().index()
    }
}
