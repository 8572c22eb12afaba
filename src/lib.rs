//! TUI raycaster (workspace facade crate).
//!
//! Keeps the `tui_raycaster::{core,input,term,types}` public API in one place
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
