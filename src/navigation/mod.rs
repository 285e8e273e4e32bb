//! Location-driven navigation.
//!
//! The wizard keeps no state outside the current location: answers are read
//! from and written back to its query string on every step.
pub mod location;
pub mod route;
pub mod wizard_controller;
pub mod wizard_step;

pub use location::Location;
pub use route::Route;
pub use wizard_controller::{wizard_location, WizardController, WizardState};
pub use wizard_step::WizardStep;
