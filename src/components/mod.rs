//! UI Components
//!
//! Reusable Leptos components.

mod like_button;
mod treasure_card;

pub use like_button::LikeButton;
pub use treasure_card::TreasureCard;
