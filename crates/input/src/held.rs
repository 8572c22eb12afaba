//! Held-action tracking for terminal environments.
//!
//! The simulation only wants current-down state, polled once per frame.
//! Terminals that do not emit key-release events would leave a tapped key
//! "held" forever, so each press carries a timestamp and goes stale after a
//! short timeout; terminals that do emit releases clear it sooner.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::map::map_key;
use crate::types::{Action, InputState};

// Long enough to bridge typical key auto-repeat gaps, short enough that a
// single tap does not turn into a sustained walk.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which movement actions are currently held.
#[derive(Debug, Clone)]
pub struct HeldActions {
    pressed: [Option<Instant>; Action::ALL.len()],
    release_timeout_ms: u64,
}

impl HeldActions {
    pub fn new() -> Self {
        Self {
            pressed: [None; Action::ALL.len()],
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Record a key press (or terminal auto-repeat, which refreshes the hold).
    pub fn key_pressed(&mut self, code: KeyCode) {
        if let Some(action) = map_key(code) {
            self.pressed[action.index()] = Some(Instant::now());
        }
    }

    /// Record a key release, for terminals that report them.
    pub fn key_released(&mut self, code: KeyCode) {
        if let Some(action) = map_key(code) {
            self.pressed[action.index()] = None;
        }
    }

    /// Whether `action` is currently held (and not stale).
    pub fn is_active(&self, action: Action) -> bool {
        match self.pressed[action.index()] {
            Some(at) => at.elapsed().as_millis() as u64 <= self.release_timeout_ms,
            None => false,
        }
    }

    /// Snapshot all four actions for this frame's simulation update.
    pub fn snapshot(&self) -> InputState {
        InputState {
            turn_left: self.is_active(Action::TurnLeft),
            turn_right: self.is_active(Action::TurnRight),
            forward: self.is_active(Action::MoveForward),
            backward: self.is_active(Action::MoveBackward),
        }
    }

    pub fn reset(&mut self) {
        self.pressed = [None; Action::ALL.len()];
    }
}

impl Default for HeldActions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_press_makes_action_active() {
        let mut held = HeldActions::new();
        assert!(!held.is_active(Action::MoveForward));

        held.key_pressed(KeyCode::Up);
        assert!(held.is_active(Action::MoveForward));
        assert!(held.snapshot().forward);
        assert!(!held.snapshot().backward);
    }

    #[test]
    fn test_release_clears_action() {
        let mut held = HeldActions::new();
        held.key_pressed(KeyCode::Char('a'));
        assert!(held.is_active(Action::TurnLeft));

        held.key_released(KeyCode::Char('a'));
        assert!(!held.is_active(Action::TurnLeft));
    }

    #[test]
    fn test_hold_goes_stale_without_release_events() {
        let mut held = HeldActions::new().with_release_timeout_ms(50);
        held.key_pressed(KeyCode::Up);

        // Simulate a terminal that never sent a release by backdating the press.
        held.pressed[Action::MoveForward.index()] =
            Some(Instant::now() - Duration::from_millis(51));
        assert!(!held.is_active(Action::MoveForward));
        assert!(held.snapshot().is_idle());
    }

    #[test]
    fn test_auto_repeat_refreshes_the_hold() {
        let mut held = HeldActions::new().with_release_timeout_ms(50);
        held.pressed[Action::MoveForward.index()] =
            Some(Instant::now() - Duration::from_millis(40));

        // A repeat event arrives before the timeout; the hold survives.
        held.key_pressed(KeyCode::Up);
        assert!(held.is_active(Action::MoveForward));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut held = HeldActions::new();
        held.key_pressed(KeyCode::Char('x'));
        assert!(held.snapshot().is_idle());
    }

    #[test]
    fn test_reset_clears_all_holds() {
        let mut held = HeldActions::new();
        held.key_pressed(KeyCode::Up);
        held.key_pressed(KeyCode::Left);
        held.reset();
        assert!(held.snapshot().is_idle());
    }
}
