pub mod answers;
pub mod application_draft;
pub mod organization_size;
pub mod risk_tolerance;
pub mod role;

pub use answers::WizardAnswers;
pub use application_draft::ApplicationDraft;
pub use organization_size::OrganizationSize;
pub use risk_tolerance::RiskTolerance;
pub use role::Role;
