//! The one mutable simulation object owned by the frame loop.

use crate::player::Player;
use crate::types::{InputState, MOVE_SPEED, TURN_RATE};
use crate::world::WorldMap;

/// World plus player, updated exactly once per frame.
///
/// `update` is the sole writer of the player state; the render pipeline only
/// reads. No ambient globals anywhere.
#[derive(Debug, Clone)]
pub struct Game {
    pub map: WorldMap,
    pub player: Player,
}

impl Game {
    /// The fixture world with the default spawn pose.
    pub fn new() -> Self {
        Self {
            map: WorldMap::fixture(),
            player: Player::spawn(),
        }
    }

    pub fn with_map(map: WorldMap, player: Player) -> Self {
        Self { map, player }
    }

    /// Apply one frame of held input over `dt` seconds.
    pub fn update(&mut self, input: InputState, dt: f32) {
        if input.turn_left {
            self.player.turn(-1.0, TURN_RATE, dt);
        }
        if input.turn_right {
            self.player.turn(1.0, TURN_RATE, dt);
        }
        if input.forward {
            self.player.step(&self.map, 1.0, MOVE_SPEED, dt);
        }
        if input.backward {
            self.player.step(&self.map, -1.0, MOVE_SPEED, dt);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
