use crate::config::Config;
use crate::map::{Map, Tile};
use anyhow::Context;
use glam::Vec2;
use std::f32::consts::TAU;

/// default start position when the map marks no spawn
const START: Vec2 = Vec2::new(70., 70.);

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.
    } else {
        wrapped
    }
}

/// A single discrete input, applied as one atomic player update.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Player {
    pub pos: Vec2,
    /// heading in radians, kept in `[0, 2π)`
    direction: f32,
}

impl Player {
    pub fn new(pos: Vec2, direction: f32) -> Self {
        Self {
            pos,
            direction: normalize_angle(direction),
        }
    }

    /// Where a new game starts, facing east: the map's spawn tile if it has one,
    /// else (70, 70), else the centre of the first empty tile. Fails when the map
    /// has nowhere to stand.
    pub fn spawn(map: &Map) -> anyhow::Result<Self> {
        let pos = match map.get_spawn() {
            Some(pos) => pos,
            None if !map.blocks(START) => START,
            None => map
                .tiles()
                .find(|(_, tile)| *tile == Tile::Empty)
                .map(|(corner, _)| corner + map.tile_size() / 2.)
                .context("map has no empty tile to spawn in")?,
        };

        Ok(Self::new(pos, 0.))
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// displacement of one forward step of length `speed`
    pub fn step(&self, speed: f32) -> Vec2 {
        Vec2::from_angle(self.direction) * speed
    }

    pub fn turn(&mut self, by: f32) {
        self.direction = normalize_angle(self.direction + by);
    }

    /// Move by `step` unless the destination is a solid tile or off the grid.
    /// Returns whether the move was committed.
    pub fn try_move(&mut self, step: Vec2, map: &Map) -> bool {
        let candidate = self.pos + step;
        if map.blocks(candidate) {
            log::debug!("move to {candidate} blocked");
            return false;
        }

        self.pos = candidate;
        true
    }

    pub fn apply(&mut self, command: Command, map: &Map, config: &Config) {
        match command {
            Command::TurnLeft => self.turn(-config.turn_step),
            Command::TurnRight => self.turn(config.turn_step),
            Command::MoveForward => {
                self.try_move(self.step(config.move_step), map);
            }
            Command::MoveBackward => {
                self.try_move(-self.step(config.move_step), map);
            }
        }
    }
}
