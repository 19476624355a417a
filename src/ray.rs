use crate::config::Config;
use crate::map::Map;
use crate::render::Rgb;
use glam::{IVec2, Vec2};

/// Direction components smaller than this count as parallel to a grid-line
/// family; such a ray would need to travel further than any map to cross one.
const PARALLEL: f32 = 1e-6;

/// Which family of grid lines a ray struck.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Family {
    /// lines of constant y
    Horizontal,
    /// lines of constant x
    Vertical,
}

impl Family {
    /// Flat shade for walls of this family. Vertical faces are lit brighter.
    pub fn shade(self, config: &Config) -> Rgb {
        match self {
            Family::Horizontal => config.horizontal_shade,
            Family::Vertical => config.vertical_shade,
        }
    }

    /// index of the axis this family steps along (y for horizontal lines)
    fn stepped(self) -> usize {
        match self {
            Family::Horizontal => 1,
            Family::Vertical => 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Hit {
    pub pos: Vec2,
    pub distance: f32,
    pub family: Family,
}

/// One ray of a frame's fan and whatever it struck.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayCast {
    pub angle: f32,
    pub hit: Option<Hit>,
}

/// Walk the grid lines of one family outward from `origin` and report the first
/// crossing into a solid tile.
///
/// Gives up after as many lines as the map's longer side, and immediately when
/// the ray runs parallel to the family.
pub fn scan(map: &Map, origin: Vec2, angle: f32, family: Family) -> Option<Hit> {
    let dir = Vec2::from_angle(angle);
    let stepped = family.stepped();
    let derived = 1 - stepped;

    let along = dir[stepped];
    if along.abs() < PARALLEL {
        return None;
    }

    let tile_size = map.tile_size();
    // derived-axis travel per unit of stepped-axis travel
    let slope = dir[derived] / along;
    let sign: i32 = if along > 0. { 1 } else { -1 };
    // first grid line ahead of the origin, by index
    let start = (origin[stepped] / tile_size).floor() as i32 + if sign > 0 { 1 } else { 0 };

    for i in 0..map.span() as i32 {
        let line = start + sign * i;
        let mut pos = Vec2::ZERO;
        pos[stepped] = line as f32 * tile_size;
        pos[derived] = origin[derived] + (pos[stepped] - origin[stepped]) * slope;

        // the tile on the far side of the line
        let mut cell = IVec2::ZERO;
        cell[stepped] = if sign > 0 { line } else { line - 1 };
        cell[derived] = (pos[derived] / tile_size).floor() as i32;

        if map.is_solid(cell) {
            return Some(Hit {
                pos,
                distance: origin.distance(pos),
                family,
            });
        }
    }

    None
}

/// The nearer of two hits. Misses lose to any hit; exact ties go to the
/// vertical family.
pub fn nearer(horizontal: Option<Hit>, vertical: Option<Hit>) -> Option<Hit> {
    match (horizontal, vertical) {
        (Some(h), Some(v)) => Some(if v.distance <= h.distance { v } else { h }),
        (h, v) => v.or(h),
    }
}

/// Cast a single ray. `angle` should already lie in `[0, 2π)`.
pub fn cast(map: &Map, origin: Vec2, angle: f32) -> RayCast {
    let horizontal = scan(map, origin, angle, Family::Horizontal);
    let vertical = scan(map, origin, angle, Family::Vertical);

    RayCast {
        angle,
        hit: nearer(horizontal, vertical),
    }
}
