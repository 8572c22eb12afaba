//! Ray caster: per-column wall distance recovery by fixed-step marching.
//!
//! Columns sample the field of view at uniform *angles* rather than uniform
//! screen-plane offsets. That is the characteristic projection of this
//! rendering technique (fisheye-free but not a true pinhole) and is kept
//! deliberately.

use arrayvec::ArrayVec;
use std::cmp::Ordering;

use crate::types::{BOUNDARY_RAD, FOV, MARCH_STEP, MAX_DEPTH};
use crate::world::WorldMap;

/// Result of casting one column's ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance to the wall, clamped to `[0, max_depth]`.
    pub distance: f32,
    /// Whether the ray grazes a cell corner (a wall seam).
    pub boundary: bool,
}

/// Ray casting parameters for one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster {
    pub fov: f32,
    pub max_depth: f32,
}

impl Default for RayCaster {
    fn default() -> Self {
        Self {
            fov: FOV,
            max_depth: MAX_DEPTH,
        }
    }
}

impl RayCaster {
    pub fn new(fov: f32, max_depth: f32) -> Self {
        Self { fov, max_depth }
    }

    /// Angle of the ray for screen column `col` of `cols`, centered on
    /// `heading`: the sweep runs from `heading - fov/2` to `heading + fov/2`.
    pub fn column_angle(&self, heading: f32, col: u16, cols: u16) -> f32 {
        heading - self.fov / 2.0 + (col as f32 / cols as f32) * self.fov
    }

    /// March a ray from `(ox, oy)` along `ray_angle` until it hits a wall or
    /// runs out of depth.
    ///
    /// Leaving the map bounds reads the same as "nothing there": a hit at
    /// `max_depth` with no boundary, never an error.
    pub fn cast(&self, map: &WorldMap, ox: f32, oy: f32, ray_angle: f32) -> RayHit {
        let eye_x = ray_angle.sin();
        let eye_y = ray_angle.cos();

        let mut distance = 0.0f32;
        while distance < self.max_depth {
            distance += MARCH_STEP;

            let sx = ox + eye_x * distance;
            let sy = oy + eye_y * distance;
            let cell_x = sx as i32;
            let cell_y = sy as i32;

            if cell_x < 0 || cell_x >= map.width() || cell_y < 0 || cell_y >= map.height() {
                return RayHit {
                    distance: self.max_depth,
                    boundary: false,
                };
            }

            if map.is_wall(sx, sy) {
                return RayHit {
                    distance: distance.min(self.max_depth),
                    boundary: grazes_corner(ox, oy, eye_x, eye_y, cell_x, cell_y),
                };
            }
        }

        RayHit {
            distance: self.max_depth,
            boundary: false,
        }
    }
}

/// Wall-seam test: does the ray pass within [`BOUNDARY_RAD`] of one of the
/// hit cell's two nearest corners?
///
/// For each corner of the hit cell, take the angle between the ray direction
/// and the unit vector from the ray origin to that corner. Corners are ranked
/// by distance so only the two facing the player are considered; a corner
/// coincident with the origin has no direction and is skipped.
fn grazes_corner(ox: f32, oy: f32, eye_x: f32, eye_y: f32, cell_x: i32, cell_y: i32) -> bool {
    let mut corners: ArrayVec<(f32, f32), 4> = ArrayVec::new();

    for dx in 0..2 {
        for dy in 0..2 {
            let vx = (cell_x + dx) as f32 - ox;
            let vy = (cell_y + dy) as f32 - oy;
            let dist = (vx * vx + vy * vy).sqrt();
            if dist <= f32::EPSILON {
                continue;
            }
            let dot = (eye_x * vx + eye_y * vy) / dist;
            corners.push((dist, dot));
        }
    }

    corners.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    corners
        .iter()
        .take(2)
        .any(|&(_, dot)| dot.clamp(-1.0, 1.0).acos() < BOUNDARY_RAD)
}
