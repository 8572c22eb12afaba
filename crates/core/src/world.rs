//! World map: a fixed rectangular grid of wall/empty cells.
//!
//! The map is immutable after construction and queried through a single
//! collision/occlusion oracle, [`WorldMap::is_wall`], shared by movement
//! and ray casting.

use thiserror::Error;

use crate::types::{EMPTY_GLYPH, WALL_GLYPH};

/// Errors produced when parsing a map layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map layout has no rows")]
    Empty,
    #[error("row {row} is {got} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("unrecognized map glyph {glyph:?} at ({x}, {y})")]
    BadGlyph { glyph: char, x: usize, y: usize },
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
}

impl Tile {
    /// The glyph used in layout literals and on the minimap.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => WALL_GLYPH,
            Tile::Empty => EMPTY_GLYPH,
        }
    }
}

/// Immutable grid of tiles with a closed-world boundary.
///
/// Any coordinate outside `[0, width) x [0, height)` reads as [`Tile::Wall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

/// The reference 16x16 world: fully walled border, a lone pillar at (7, 5)
/// and a wall run across (10..16, 11).
const FIXTURE_ROWS: [&str; 16] = [
    "################",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#......#.......#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#.........######",
    "#..............#",
    "#..............#",
    "#..............#",
    "################",
];

impl WorldMap {
    /// Parse a layout from rows of `#` (wall) and `.` (empty), top to bottom.
    pub fn from_rows(rows: &[&str]) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let width = first.chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    got,
                    expected: width,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                match glyph {
                    WALL_GLYPH => tiles.push(Tile::Wall),
                    EMPTY_GLYPH => tiles.push(Tile::Empty),
                    other => {
                        return Err(MapError::BadGlyph {
                            glyph: other,
                            x,
                            y,
                        })
                    }
                }
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            tiles,
        })
    }

    /// The default 16x16 test/gameplay world.
    pub fn fixture() -> Self {
        Self::from_rows(&FIXTURE_ROWS).expect("fixture layout is well-formed")
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell lookup; out-of-range coordinates read as wall (closed world).
    pub fn tile(&self, x: i32, y: i32) -> Tile {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return Tile::Wall;
        }
        self.tiles[(y * self.width + x) as usize]
    }

    /// The collision/occlusion oracle.
    ///
    /// Truncates continuous coordinates to cell indices. Both movement and
    /// ray casting go through here; there is no duplicate wall test anywhere.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        self.tile(x as i32, y as i32) == Tile::Wall
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::fixture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_matches_layout_literal() {
        let map = WorldMap::fixture();
        assert_eq!(map.width(), 16);
        assert_eq!(map.height(), 16);

        for (y, row) in FIXTURE_ROWS.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                assert_eq!(
                    map.tile(x as i32, y as i32).glyph(),
                    glyph,
                    "cell ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let map = WorldMap::fixture();
        assert_eq!(map.tile(-1, 5), Tile::Wall);
        assert_eq!(map.tile(5, -1), Tile::Wall);
        assert_eq!(map.tile(16, 5), Tile::Wall);
        assert_eq!(map.tile(5, 16), Tile::Wall);
        assert!(map.is_wall(-0.5, 100.0));
        assert!(map.is_wall(100.0, 8.0));
    }

    #[test]
    fn is_wall_truncates_to_cell_indices() {
        let map = WorldMap::fixture();
        // (7, 5) is the interior pillar.
        assert!(map.is_wall(7.0, 5.0));
        assert!(map.is_wall(7.9, 5.9));
        assert!(!map.is_wall(8.0, 5.5));
        assert!(!map.is_wall(6.99, 5.5));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = WorldMap::from_rows(&["###", "#.#", "##"]).unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 2,
                got: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn rejects_unknown_glyphs() {
        let err = WorldMap::from_rows(&["###", "#?#", "###"]).unwrap_err();
        assert_eq!(
            err,
            MapError::BadGlyph {
                glyph: '?',
                x: 1,
                y: 1
            }
        );
    }

    #[test]
    fn rejects_empty_layouts() {
        assert_eq!(WorldMap::from_rows(&[]).unwrap_err(), MapError::Empty);
        assert_eq!(WorldMap::from_rows(&[""]).unwrap_err(), MapError::Empty);
    }
}
