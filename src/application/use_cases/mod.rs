/// Use cases module containing application business logic orchestration
mod assessment_session;
mod run_wizard;
mod submit_assessment;
mod view_assessment;

pub use assessment_session::{AssessmentSession, SessionOutcome, LANDING_TEXT};
pub use run_wizard::{RunWizardUseCase, WizardOutcome};
pub use submit_assessment::{SubmissionState, SubmitAssessmentUseCase};
pub use view_assessment::ViewAssessmentUseCase;
