//! Simulation core - pure, deterministic, and testable.
//!
//! Everything needed to simulate and project the world lives here, with
//! **zero dependencies** on terminal I/O, timing, or input backends:
//!
//! - [`world`]: immutable wall/empty grid and the single collision oracle
//! - [`player`]: player pose with free rotation and collision-rejected steps
//! - [`raycast`]: per-column ray marching and wall-seam detection
//! - [`shade`]: distance banding and perspective row mapping
//! - [`game`]: the one mutable simulation object owned by the frame loop
//!
//! The core is a pure function of (world, player, input, dt). Rendering the
//! same state twice produces identical output, which the integration tests
//! rely on.

pub mod game;
pub mod player;
pub mod raycast;
pub mod shade;
pub mod world;

pub use tui_raycaster_types as types;

pub use game::Game;
pub use player::Player;
pub use raycast::{RayCaster, RayHit};
pub use shade::{FloorBand, Sample, WallBand};
pub use world::{MapError, Tile, WorldMap};
