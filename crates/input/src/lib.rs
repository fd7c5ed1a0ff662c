//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]. Anything
//! that is not a recognized binding maps to `None` and is ignored.

pub mod map;
pub mod mouse;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::{handle_mouse_event, PointerOutcome};
