pub mod role_visibility;

pub use role_visibility::{get_visible_cards, visible_cards_for};
