//! Grid ray-caster: casts a fan of rays from the player across a tile map and
//! projects each hit into a vertical wall slice.

pub mod config;
pub mod frame;
pub mod map;
pub mod player;
pub mod projection;
pub mod ray;
pub mod render;

pub use config::Config;
pub use frame::Frame;
pub use map::{Map, Tile};
pub use player::{Command, Player};
pub use render::{DrawCmd, DrawList, Renderer, Rgb};
