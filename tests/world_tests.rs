//! World map collision-oracle properties.

use tui_raycaster::core::{MapError, Tile, WorldMap};

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

#[test]
fn is_wall_matches_source_layout_for_every_cell() {
    let map = WorldMap::fixture();
    for (y, row) in FIXTURE_ROWS.iter().enumerate() {
        for (x, glyph) in row.chars().enumerate() {
            let expected = glyph == '#';
            assert_eq!(
                map.is_wall(x as f32 + 0.5, y as f32 + 0.5),
                expected,
                "cell ({x}, {y})"
            );
        }
    }
}

#[test]
fn every_out_of_bounds_coordinate_is_wall() {
    let map = WorldMap::fixture();
    for coord in [-100, -1, 16, 17, 1000] {
        for other in 0..16 {
            assert_eq!(map.tile(coord, other), Tile::Wall);
            assert_eq!(map.tile(other, coord), Tile::Wall);
        }
    }
    assert!(map.is_wall(-1.5, 8.0));
    assert!(map.is_wall(8.0, 16.0));
    assert!(map.is_wall(1e9, 1e9));
}

#[test]
fn custom_layouts_parse_and_query() {
    let map = WorldMap::from_rows(&["####", "#..#", "####"]).unwrap();
    assert_eq!(map.width(), 4);
    assert_eq!(map.height(), 3);
    assert!(!map.is_wall(1.5, 1.5));
    assert!(map.is_wall(0.5, 1.5));
}

#[test]
fn malformed_layouts_are_rejected_with_context() {
    let err = WorldMap::from_rows(&["##", "#"]).unwrap_err();
    assert!(matches!(err, MapError::RaggedRow { row: 1, .. }));
    assert!(err.to_string().contains("row 1"));

    let err = WorldMap::from_rows(&["#o"]).unwrap_err();
    assert!(err.to_string().contains("'o'"));
}
