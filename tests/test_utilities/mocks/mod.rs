/// Mock implementations for testing
mod mock_assessment_repository;
mod mock_presenter;
mod mock_progress_reporter;
mod mock_prompter;

pub use mock_assessment_repository::MockAssessmentRepository;
pub use mock_presenter::MockPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_prompter::MockPrompter;
