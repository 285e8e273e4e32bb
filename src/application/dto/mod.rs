/// Data Transfer Objects for application layer
///
/// DTOs carry data between the use cases and the adapters: the creation
/// request sent to the backend and the chosen output format.
mod assessment_request;
mod output_format;

pub use assessment_request::{AssessmentCreated, CreateAssessmentRequest};
pub use output_format::OutputFormat;
