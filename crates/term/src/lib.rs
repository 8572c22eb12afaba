//! Terminal rendering layer.
//!
//! Renders the cast scene into a simple styled framebuffer and flushes it to
//! a terminal backend. The view side is pure (no I/O) so the whole frame
//! composition can be unit-tested; only [`sink::TerminalSink`] touches the
//! terminal.

pub mod fb;
pub mod scene_view;
pub mod sink;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use scene_view::{SceneView, Viewport};
pub use sink::TerminalSink;
