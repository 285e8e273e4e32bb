//! Results screen: the fetched assessment, which cards a role sees, and the
//! fetch lifecycle of one visit.
pub mod domain;
pub mod policies;
pub mod services;
