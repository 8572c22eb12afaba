//! Terminal raycaster runner.
//!
//! One synchronous frame loop: elapsed time, input snapshot, movement update,
//! cast + shade + composite, flush. Input polling with a ~16ms budget paces
//! the loop; the only blocking points are the poll and the flush.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_raycaster::core::Game;
use tui_raycaster::input::{should_quit, FrameClock, HeldActions};
use tui_raycaster::term::{FrameBuffer, SceneView, TerminalSink, Viewport};
use tui_raycaster::types::{FRAME_MS, SCREEN_HEIGHT, SCREEN_WIDTH};

fn main() -> Result<()> {
    let mut term = TerminalSink::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalSink) -> Result<()> {
    let mut game = Game::new();
    let view = SceneView::default();
    let mut held = HeldActions::new();
    let mut clock = FrameClock::start();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Input with a frame-budget timeout; this also paces the loop.
        if event::poll(Duration::from_millis(FRAME_MS))? {
            loop {
                match event::read()? {
                    Event::Key(key) => match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            if should_quit(key) {
                                return Ok(());
                            }
                            held.key_pressed(key.code);
                        }
                        KeyEventKind::Release => {
                            held.key_released(key.code);
                        }
                    },
                    Event::Resize(_, _) => {
                        term.invalidate();
                    }
                    _ => {}
                }
                if !event::poll(Duration::from_secs(0))? {
                    break;
                }
            }
        }

        let dt = clock.elapsed_seconds();
        let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };

        game.update(held.snapshot(), dt);

        let (w, h) = crossterm::terminal::size().unwrap_or((SCREEN_WIDTH, SCREEN_HEIGHT));
        view.render_into(&game.map, &game.player, fps, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }
}
