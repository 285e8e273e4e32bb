use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardFormatter port for rendering the results screen
///
/// This port abstracts the output format of the dashboard (terminal text,
/// standalone HTML).
pub trait DashboardFormatter {
    /// Renders the dashboard read model
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, model: &DashboardReadModel) -> Result<String>;
}
