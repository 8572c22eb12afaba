//! Terminal input and frame timing.
//!
//! Independent of the renderer: maps `crossterm` key events onto
//! [`crate::types::Action`] and tracks current-down state in a way that works
//! in terminals without key-release events.

pub mod clock;
pub mod held;
pub mod map;

pub use tui_raycaster_types as types;

pub use clock::FrameClock;
pub use held::HeldActions;
pub use map::{map_key, should_quit};
