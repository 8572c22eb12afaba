//! Player pose and the movement controller.
//!
//! Rotation is always free; translation is a whole-step accept/reject
//! against the world map. There is no sliding or axis-separated resolution:
//! a step that would land inside a wall is reverted with the exact inverse
//! delta, restoring the previous position bit-for-bit.

use crate::types::{SPAWN_ANGLE, SPAWN_X, SPAWN_Y};
use crate::world::WorldMap;

/// Continuous player position and heading.
///
/// `angle` is in radians; 0 faces the +y reference heading and increasing
/// angle turns clockwise on the minimap. The position is not range-checked
/// here; collision is enforced by [`Player::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// The fixture-world spawn pose.
    pub fn spawn() -> Self {
        Self::new(SPAWN_X, SPAWN_Y, SPAWN_ANGLE)
    }

    /// Rotate by `sign * turn_rate * dt`. Never collision-checked.
    pub fn turn(&mut self, sign: f32, turn_rate: f32, dt: f32) {
        self.angle += sign * turn_rate * dt;
    }

    /// Step along the heading by `sign * speed * dt`, rejecting steps that
    /// land inside a wall.
    ///
    /// Returns whether the step stood. Forward and backward share this one
    /// routine with the sign flipped.
    pub fn step(&mut self, map: &WorldMap, sign: f32, speed: f32, dt: f32) -> bool {
        let dx = sign * self.angle.sin() * speed * dt;
        let dy = sign * self.angle.cos() * speed * dt;

        self.x += dx;
        self.y += dy;
        if map.is_wall(self.x, self.y) {
            self.x -= dx;
            self.y -= dy;
            return false;
        }
        true
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}
