//! SceneView: composes the cast scene into a terminal framebuffer.
//!
//! This module is pure (no I/O). One ray per viewport column, one shade
//! sample per row, then the minimap, player marker, and status line are
//! overlaid. Rendering the same state twice produces identical buffers.

use crate::core::shade::{self, FloorBand, Sample, WallBand};
use crate::core::{Player, RayCaster, WorldMap};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PLAYER_MARKER;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows the status line occupies before the minimap starts.
const MINIMAP_HEADER_ROWS: u16 = 1;

/// The frame composer.
pub struct SceneView {
    caster: RayCaster,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            caster: RayCaster::default(),
        }
    }
}

impl SceneView {
    pub fn new(caster: RayCaster) -> Self {
        Self { caster }
    }

    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the hot path: callers keep one framebuffer across frames and
    /// only pay a resize when the terminal size changes.
    pub fn render_into(
        &self,
        map: &WorldMap,
        player: &Player,
        fps: f32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let cols = viewport.width;
        let rows = viewport.height;
        if cols == 0 || rows == 0 {
            return;
        }

        for col in 0..cols {
            let angle = self.caster.column_angle(player.angle, col, cols);
            let hit = self.caster.cast(map, player.x, player.y, angle);
            for row in 0..rows {
                let sample = shade::sample(&hit, row, rows, self.caster.max_depth);
                fb.put(col, row, sample.glyph(), style_for(sample));
            }
        }

        self.draw_minimap(map, player, fb);
        self.draw_status(player, fps, fb);
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(
        &self,
        map: &WorldMap,
        player: &Player,
        fps: f32,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(map, player, fps, viewport, &mut fb);
        fb
    }

    /// Top-left inset copy of the map glyphs, one character per cell, plus
    /// the player marker at the player's current cell.
    fn draw_minimap(&self, map: &WorldMap, player: &Player, fb: &mut FrameBuffer) {
        let wall = CellStyle {
            fg: Rgb::new(120, 170, 220),
            ..CellStyle::default()
        };
        let empty = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        for y in 0..map.height() {
            for x in 0..map.width() {
                let tile = map.tile(x, y);
                let style = match tile {
                    crate::core::Tile::Wall => wall,
                    crate::core::Tile::Empty => empty,
                };
                fb.put(x as u16, y as u16 + MINIMAP_HEADER_ROWS, tile.glyph(), style);
            }
        }

        let px = player.x as i32;
        let py = player.y as i32;
        if px >= 0 && px < map.width() && py >= 0 && py < map.height() {
            let marker = CellStyle {
                fg: Rgb::new(255, 220, 80),
                ..CellStyle::default()
            };
            fb.put(px as u16, py as u16 + MINIMAP_HEADER_ROWS, PLAYER_MARKER, marker);
        }
    }

    fn draw_status(&self, player: &Player, fps: f32, fb: &mut FrameBuffer) {
        let line = format!(
            "X={:.2}, Y={:.2}, A={:.2} FPS={:.2}",
            player.x, player.y, player.angle, fps
        );
        fb.put_str(0, 0, &line, CellStyle::default());
    }
}

fn style_for(sample: Sample) -> CellStyle {
    match sample {
        Sample::Sky => CellStyle::default(),
        Sample::Wall(band) => CellStyle {
            fg: Rgb::new(200, 200, 200),
            dim: matches!(band, WallBand::Faint),
            ..CellStyle::default()
        },
        Sample::Floor(band) => CellStyle {
            fg: Rgb::new(140, 120, 90),
            dim: matches!(band, FloorBand::Far | FloorBand::Faint),
            ..CellStyle::default()
        },
    }
}
