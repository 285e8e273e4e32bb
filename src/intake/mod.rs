//! Intake wizard: the answers it collects and the step components that
//! collect them.
pub mod domain;
pub mod steps;
