//! sentinel-assess - terminal client for Sentinel security assessments
//!
//! Runs a four-question intake wizard (application, role, organization
//! size, risk tolerance), asks the backend to create an assessment and
//! renders the result as a role-filtered dashboard. Progress lives in a
//! *location* string such as `/risk?name=Acme&role=security`, so any
//! session can be resumed or shared by passing that location back.
//!
//! # Architecture
//!
//! - **Domain** (`intake`, `navigation`, `results`): wizard answers and
//!   steps, location-driven navigation, assessments and card visibility
//! - **Presentation** (`presentation`): tones, labels, dates and chart
//!   geometry shared by every output format
//! - **Application** (`application`): use cases, DTOs and read models
//! - **Ports** (`ports`): interfaces for infrastructure
//! - **Adapters** (`adapters`): HTTP client, terminal, formatters, files
//! - **Shared** (`shared`): error types
//!
//! # Example
//!
//! ```no_run
//! use sentinel_assess::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let session = AssessmentSession::new(
//!     SentinelApiClient::new("http://localhost:5000", Duration::from_secs(60))?,
//!     StderrProgressReporter::new(),
//!     TerminalPrompter::new(true),
//!     FormatterFactory::create(OutputFormat::Text, true),
//!     PresenterFactory::create(PresenterType::Stdout),
//!     DEFAULT_STATUS_INTERVAL,
//! );
//!
//! let outcome = session.run(Location::parse("/assessments/abc123?role=security")?).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod intake;
pub mod logging;
pub mod navigation;
pub mod ports;
pub mod presentation;
pub mod results;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TerminalPrompter};
    pub use crate::adapters::outbound::filesystem::{DashboardFileWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{HtmlFormatter, TerminalFormatter};
    pub use crate::adapters::outbound::network::SentinelApiClient;
    pub use crate::application::dto::{CreateAssessmentRequest, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{
        CardView, DashboardReadModel, DashboardReadModelBuilder,
    };
    pub use crate::application::use_cases::{
        AssessmentSession, RunWizardUseCase, SessionOutcome, SubmitAssessmentUseCase,
        ViewAssessmentUseCase, WizardOutcome,
    };
    pub use crate::intake::domain::{OrganizationSize, RiskTolerance, Role, WizardAnswers};
    pub use crate::navigation::{Location, Route, WizardController, WizardStep};
    pub use crate::ports::outbound::{
        AssessmentRepository, DashboardFormatter, OutputPresenter, ProgressReporter, Prompter,
    };
    pub use crate::presentation::status_rotation::{StatusRotation, DEFAULT_STATUS_INTERVAL};
    pub use crate::results::domain::{Assessment, CardId};
    pub use crate::results::policies::get_visible_cards;
    pub use crate::results::services::{FetchTicket, ResultsState, ResultsView};
    pub use crate::shared::error::{ExitCode, SentinelError};
    pub use crate::shared::Result;
}
