/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (backend API, terminal, file system).
pub mod assessment_repository;
pub mod dashboard_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod prompter;

pub use assessment_repository::AssessmentRepository;
pub use dashboard_formatter::DashboardFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use prompter::Prompter;
