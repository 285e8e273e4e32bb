//! Pure display helpers: tones, labels, dates and chart geometry.
//!
//! Nothing here knows about a concrete output format; formatters in
//! `adapters::outbound::formatters` turn these values into text or SVG.
pub mod country;
pub mod geometry;
pub mod labels;
pub mod palette;
pub mod status_rotation;
pub mod time;

pub use palette::{score_tone, Tone};
