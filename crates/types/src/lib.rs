//! Shared types and tuning constants.
//!
//! Pure data with no external dependencies, usable from the simulation core,
//! the input layer, and the terminal renderer alike.
//!
//! # World and view constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH`/`SCREEN_HEIGHT` | 120×40 | Fallback viewport when the terminal size is unknown |
//! | `MAP_WIDTH`/`MAP_HEIGHT` | 16×16 | Fixture world dimensions |
//! | `FOV` | π/4 | Total angular width of the column sweep |
//! | `MAX_DEPTH` | 16.0 | Ray travel limit; beyond it a ray reads as open sky |
//! | `MARCH_STEP` | 0.1 | Fixed ray march increment in map units |
//! | `BOUNDARY_RAD` | 0.01 | Corner grazing angle below which a hit is a wall seam |
//!
//! # Movement constants
//!
//! - `TURN_RATE`: 1.0 rad/s, applied unconditionally (rotation is always free)
//! - `MOVE_SPEED`: 5.0 cells/s, subject to whole-step collision rejection
//! - Spawn pose: (6.0, 6.0) facing angle 0 (the +y reference heading)

/// Fallback terminal viewport width in columns.
pub const SCREEN_WIDTH: u16 = 120;

/// Fallback terminal viewport height in rows.
pub const SCREEN_HEIGHT: u16 = 40;

/// Fixture map width in cells.
pub const MAP_WIDTH: i32 = 16;

/// Fixture map height in cells.
pub const MAP_HEIGHT: i32 = 16;

/// Field of view: total angular width of the visible column sweep.
pub const FOV: f32 = std::f32::consts::FRAC_PI_4;

/// Maximum ray travel distance before a ray is treated as unobstructed.
pub const MAX_DEPTH: f32 = 16.0;

/// Fixed ray march increment in map units.
pub const MARCH_STEP: f32 = 0.1;

/// Corner grazing threshold in radians for wall-seam detection.
pub const BOUNDARY_RAD: f32 = 0.01;

/// Turn rate in radians per second.
pub const TURN_RATE: f32 = 1.0;

/// Move speed in cells per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Player spawn position and heading.
pub const SPAWN_X: f32 = 6.0;
pub const SPAWN_Y: f32 = 6.0;
pub const SPAWN_ANGLE: f32 = 0.0;

/// Frame budget for the input poll, in milliseconds (~60 FPS pacing).
pub const FRAME_MS: u64 = 16;

/// Map glyphs shared by the map parser and the minimap overlay.
pub const WALL_GLYPH: char = '#';
pub const EMPTY_GLYPH: char = '.';

/// Minimap marker for the player's current cell.
pub const PLAYER_MARKER: char = 'o';

/// Logical movement actions polled once per frame.
///
/// Only current-down state matters; there are no edge/event semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}

impl Action {
    /// All actions, in a stable order usable for per-action state arrays.
    pub const ALL: [Action; 4] = [
        Action::TurnLeft,
        Action::TurnRight,
        Action::MoveForward,
        Action::MoveBackward,
    ];

    /// Stable index into [`Action::ALL`].
    pub fn index(self) -> usize {
        match self {
            Action::TurnLeft => 0,
            Action::TurnRight => 1,
            Action::MoveForward => 2,
            Action::MoveBackward => 3,
        }
    }
}

/// One frame's input snapshot: which actions are currently held.
///
/// Built by the input layer once per frame and consumed by
/// the simulation update; plain data so the core stays free of
/// any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        !(self.turn_left || self.turn_right || self.forward || self.backward)
    }
}
