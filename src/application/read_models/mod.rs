//! Read models for the results dashboard
//!
//! View-optimized, already formatted structs built from a fetched
//! assessment. Formatters consume these and never touch the raw response.

pub mod card_views;
pub mod dashboard_read_model;
pub mod dashboard_read_model_builder;

pub use card_views::*;
pub use dashboard_read_model::{CardView, DashboardReadModel};
pub use dashboard_read_model_builder::DashboardReadModelBuilder;
