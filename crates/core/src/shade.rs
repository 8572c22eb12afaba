//! Shader: distance banding and perspective-correct row mapping.
//!
//! Wall intensity falls off in four fixed bands of distance; the floor gets
//! its own four bands keyed on normalized row position. Everything here is a
//! pure function from (hit, row, screen height) to a display sample.

use crate::raycast::RayHit;
use crate::types::MARCH_STEP;

/// Wall intensity band, ordered near to far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallBand {
    Near,
    Mid,
    Far,
    Faint,
    /// At or beyond max depth (or a seam): nothing visible.
    Out,
}

impl WallBand {
    /// Band for a wall at `distance` under the given depth limit.
    pub fn from_distance(distance: f32, max_depth: f32) -> Self {
        if distance <= max_depth / 4.0 {
            WallBand::Near
        } else if distance < max_depth / 3.0 {
            WallBand::Mid
        } else if distance < max_depth / 2.0 {
            WallBand::Far
        } else if distance < max_depth {
            WallBand::Faint
        } else {
            WallBand::Out
        }
    }

    /// Closeness rank for ordering tests; lower is closer.
    pub fn rank(self) -> u8 {
        match self {
            WallBand::Near => 0,
            WallBand::Mid => 1,
            WallBand::Far => 2,
            WallBand::Faint => 3,
            WallBand::Out => 4,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            WallBand::Near => '\u{2588}',
            WallBand::Mid => '\u{2593}',
            WallBand::Far => '\u{2592}',
            WallBand::Faint => '\u{2591}',
            WallBand::Out => ' ',
        }
    }
}

/// Floor shade band, keyed on normalized row position below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorBand {
    Near,
    Mid,
    Far,
    Faint,
    Out,
}

impl FloorBand {
    /// Band for screen row `row` of `screen_h`.
    ///
    /// `b` runs from 1 at the horizon down to 0 at the bottom edge; lower
    /// `b` means the floor is closer to the viewer.
    pub fn from_row(row: u16, screen_h: u16) -> Self {
        let half = screen_h as f32 / 2.0;
        let b = 1.0 - (row as f32 - half) / half;
        if b < 0.25 {
            FloorBand::Near
        } else if b < 0.5 {
            FloorBand::Mid
        } else if b < 0.75 {
            FloorBand::Far
        } else if b < 0.9 {
            FloorBand::Faint
        } else {
            FloorBand::Out
        }
    }

    pub fn glyph(self) -> char {
        match self {
            FloorBand::Near => '#',
            FloorBand::Mid => 'x',
            FloorBand::Far => '.',
            FloorBand::Faint => '-',
            FloorBand::Out => ' ',
        }
    }
}

/// One display cell's symbolic content, before styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Sky,
    Wall(WallBand),
    Floor(FloorBand),
}

impl Sample {
    pub fn glyph(self) -> char {
        match self {
            Sample::Sky => ' ',
            Sample::Wall(band) => band.glyph(),
            Sample::Floor(band) => band.glyph(),
        }
    }
}

/// Screen rows `[ceiling, floor]` covered by a wall at `distance`.
///
/// The distance is clamped to no less than one march step before the
/// division, so a degenerate zero-distance hit renders as a full-height
/// nearest wall instead of dividing by zero.
pub fn wall_span(distance: f32, screen_h: u16) -> (i32, i32) {
    let h = screen_h as f32;
    let d = distance.max(MARCH_STEP);
    let ceiling = (h / 2.0 - h / d) as i32;
    let floor = screen_h as i32 - ceiling;
    (ceiling, floor)
}

/// The sample for screen row `row` of a column with ray result `hit`.
pub fn sample(hit: &RayHit, row: u16, screen_h: u16, max_depth: f32) -> Sample {
    let (ceiling, floor) = wall_span(hit.distance, screen_h);
    let row = row as i32;

    if row < ceiling {
        Sample::Sky
    } else if row <= floor {
        // Seams between wall faces render blank regardless of distance.
        let band = if hit.boundary {
            WallBand::Out
        } else {
            WallBand::from_distance(hit.distance, max_depth)
        };
        Sample::Wall(band)
    } else {
        Sample::Floor(FloorBand::from_row(row as u16, screen_h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_DEPTH;

    #[test]
    fn wall_bands_fade_monotonically_with_distance() {
        let distances = [1.0, 4.0, 4.5, 5.5, 7.9, 8.0, 12.0, 15.9, 16.0, 20.0];
        let mut last_rank = 0;
        for d in distances {
            let rank = WallBand::from_distance(d, MAX_DEPTH).rank();
            assert!(rank >= last_rank, "band got closer at distance {d}");
            last_rank = rank;
        }
    }

    #[test]
    fn wall_band_thresholds() {
        assert_eq!(WallBand::from_distance(4.0, 16.0), WallBand::Near);
        assert_eq!(WallBand::from_distance(4.1, 16.0), WallBand::Mid);
        assert_eq!(WallBand::from_distance(6.0, 16.0), WallBand::Far);
        assert_eq!(WallBand::from_distance(8.0, 16.0), WallBand::Faint);
        assert_eq!(WallBand::from_distance(16.0, 16.0), WallBand::Out);
    }

    #[test]
    fn boundary_forces_blank_wall() {
        let hit = RayHit {
            distance: 2.0,
            boundary: true,
        };
        let (ceiling, _) = wall_span(hit.distance, 40);
        let s = sample(&hit, ceiling as u16, 40, MAX_DEPTH);
        assert_eq!(s, Sample::Wall(WallBand::Out));
        assert_eq!(s.glyph(), ' ');
    }

    #[test]
    fn zero_distance_clamps_instead_of_dividing_by_zero() {
        let (ceiling, floor) = wall_span(0.0, 40);
        assert_eq!((ceiling, floor), wall_span(MARCH_STEP, 40));
        // A wall right on top of the viewer fills the whole column.
        assert!(ceiling < 0);
        assert!(floor > 40);
    }

    #[test]
    fn rows_split_into_sky_wall_floor() {
        let hit = RayHit {
            distance: 4.0,
            boundary: false,
        };
        // h=40, d=4: ceiling = 20 - 10 = 10, floor = 30.
        assert_eq!(sample(&hit, 0, 40, MAX_DEPTH), Sample::Sky);
        assert_eq!(sample(&hit, 9, 40, MAX_DEPTH), Sample::Sky);
        assert_eq!(
            sample(&hit, 10, 40, MAX_DEPTH),
            Sample::Wall(WallBand::Near)
        );
        assert_eq!(
            sample(&hit, 30, 40, MAX_DEPTH),
            Sample::Wall(WallBand::Near)
        );
        assert!(matches!(sample(&hit, 31, 40, MAX_DEPTH), Sample::Floor(_)));
        assert!(matches!(sample(&hit, 39, 40, MAX_DEPTH), Sample::Floor(_)));
    }

    #[test]
    fn floor_bands_by_row_position() {
        // h=40, half=20: b = 1 - (row-20)/20.
        assert_eq!(FloorBand::from_row(39, 40), FloorBand::Near); // b=0.05
        assert_eq!(FloorBand::from_row(32, 40), FloorBand::Mid); // b=0.4
        assert_eq!(FloorBand::from_row(27, 40), FloorBand::Far); // b=0.65
        assert_eq!(FloorBand::from_row(23, 40), FloorBand::Faint); // b=0.85
        assert_eq!(FloorBand::from_row(21, 40), FloorBand::Out); // b=0.95
    }
}
