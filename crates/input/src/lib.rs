//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::LifeAction`]. The engine
//! never sees keys; actions only steer the runner's frame clock and seeding.

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, should_quit};
