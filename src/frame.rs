use crate::config::Config;
use crate::map::{Map, Tile};
use crate::player::{normalize_angle, Player};
use crate::projection::{project, Sample, Slice};
use crate::ray::{cast, Hit, RayCast};
use crate::render::{Renderer, Rgb};
use glam::Vec2;

const PLAYER_SIZE: f32 = 10.;
const HEADING_LENGTH: f32 = 25.;
const HEADING_WIDTH: f32 = 3.;

/// Angles of the ray fan, left to right, each wrapped into `[0, 2π)`.
pub fn fan(heading: f32, config: &Config) -> impl Iterator<Item = f32> {
    let first = heading - config.fov_rad() / 2.;
    let delta = config.ray_delta();
    (0..config.num_rays).map(move |i| normalize_angle(first + i as f32 * delta))
}

/// Everything cast for one frame, against a snapshot of the player taken when
/// the frame started.
#[derive(Clone, PartialEq, Debug)]
pub struct Frame {
    pub player: Player,
    /// tile size of the map the rays were cast against
    pub tile_size: f32,
    pub rays: Vec<RayCast>,
}

impl Frame {
    pub fn cast(player: &Player, map: &Map, config: &Config) -> Self {
        let player = *player;
        let rays = fan(player.direction(), config)
            .map(|angle| cast(map, player.pos, angle))
            .collect();

        Self {
            player,
            tile_size: map.tile_size(),
            rays,
        }
    }

    /// Projected slice of every ray that hit something, left to right.
    ///
    /// Rays that left the map without a hit are skipped rather than drawn as a
    /// zero-length sight line and an empty slice; their screen column stays blank.
    pub fn slices<'a>(&'a self, config: &'a Config) -> impl Iterator<Item = (Slice, Hit)> + 'a {
        self.rays.iter().enumerate().filter_map(move |(index, ray)| {
            let hit = ray.hit?;
            let sample = Sample {
                index,
                angle: ray.angle,
                distance: hit.distance,
            };
            let slice = project(sample, self.player.direction(), self.tile_size, config);
            Some((slice, hit))
        })
    }

    /// Emit the whole frame: top-down map, player marker, then one sight line and
    /// one wall slice per ray that hit.
    pub fn draw(
        &self,
        map: &Map,
        config: &Config,
        renderer: &mut impl Renderer,
    ) -> anyhow::Result<()> {
        renderer.clear(config.clear_color)?;

        // DRAW MAP
        let size = map.tile_size();
        for (corner, tile) in map.tiles() {
            let color = match tile {
                Tile::Solid => Rgb::WHITE,
                Tile::Empty => Rgb::BLACK,
            };
            let (near, far) = (corner + 1., corner + size - 1.);
            renderer.quad(
                [
                    near,
                    Vec2::new(near.x, far.y),
                    far,
                    Vec2::new(far.x, near.y),
                ],
                color,
            )?;
        }

        // DRAW PLAYER
        let pos = self.player.pos;
        renderer.point(pos, PLAYER_SIZE, Rgb::YELLOW)?;
        renderer.line(
            pos,
            pos + self.player.step(HEADING_LENGTH),
            HEADING_WIDTH,
            Rgb::YELLOW,
        )?;

        // DRAW RAYS AND WALLS
        for (slice, hit) in self.slices(config) {
            let color = hit.family.shade(config);
            renderer.line(pos, hit.pos, 1., color)?;
            renderer.line(slice.top(), slice.bottom(), slice.width, color)?;
        }

        log::trace!(
            "drew frame at {pos} heading {:.3}, {}/{} rays hit",
            self.player.direction(),
            self.rays.iter().filter(|ray| ray.hit.is_some()).count(),
            self.rays.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::tests::boxed;
    use crate::render::{DrawCmd, DrawList};
    use std::f32::consts::TAU;

    #[test]
    fn fan_spans_the_field_of_view() {
        let config = Config::default();
        let angles = fan(0., &config).collect::<Vec<_>>();
        assert_eq!(angles.len(), 60);
        assert!((angles[0] - (TAU - 30f32.to_radians())).abs() < 1e-5);
        assert!(angles[30].min(TAU - angles[30]) < 1e-5);
        assert!((angles[59] - 29f32.to_radians()).abs() < 1e-5);
        assert!(angles.iter().all(|a| (0. ..TAU).contains(a)));
    }

    #[test]
    fn frame_uses_its_snapshot() {
        let config = Config::default();
        let map = boxed(10, 10);
        let mut player = Player::new(Vec2::new(200., 200.), 1.);
        let frame = Frame::cast(&player, &map, &config);

        player.turn(1.);
        player.pos = Vec2::new(300., 300.);
        assert_eq!(frame.player.pos, Vec2::new(200., 200.));
        assert_eq!(frame.player.direction(), 1.);
    }

    #[test]
    fn draws_map_then_player_then_rays() -> anyhow::Result<()> {
        let config = Config::default();
        let map = boxed(10, 10);
        let player = Player::new(Vec2::new(70., 70.), 0.);
        let frame = Frame::cast(&player, &map, &config);

        let mut list = DrawList::new();
        frame.draw(&map, &config, &mut list)?;

        assert_eq!(list.cmds[0], DrawCmd::Clear(config.clear_color));
        let quads = &list.cmds[1..101];
        assert!(quads.iter().all(|cmd| matches!(cmd, DrawCmd::Quad { .. })));
        assert_eq!(
            quads[0],
            DrawCmd::Quad {
                corners: [
                    Vec2::new(1., 1.),
                    Vec2::new(1., 63.),
                    Vec2::new(63., 63.),
                    Vec2::new(63., 1.),
                ],
                color: Rgb::WHITE,
            }
        );
        assert!(matches!(quads[11], DrawCmd::Quad { color, .. } if color == Rgb::BLACK));
        assert!(matches!(list.cmds[101], DrawCmd::Point { .. }));

        // heading line, then a sight line and a slice per ray
        assert_eq!(list.cmds.len(), 103 + 2 * 60);
        let slice_xs = list
            .lines()
            .skip(2)
            .step_by(2)
            .map(|(from, _, _, _)| from.x)
            .collect::<Vec<_>>();
        assert!(slice_xs.windows(2).all(|pair| pair[0] < pair[1]));

        Ok(())
    }

    #[test]
    fn misses_emit_nothing() -> anyhow::Result<()> {
        let config = Config::default();
        let map = Map::parse("....\n....\n....\n....", 64.)?;
        let player = Player::new(Vec2::new(100., 100.), 0.);
        let frame = Frame::cast(&player, &map, &config);
        assert!(frame.rays.iter().all(|ray| ray.hit.is_none()));

        let mut list = DrawList::new();
        frame.draw(&map, &config, &mut list)?;
        // clear, 16 tiles, point, heading
        assert_eq!(list.cmds.len(), 1 + 16 + 2);

        Ok(())
    }

    #[test]
    fn slices_use_the_map_tile_size() {
        // config keeps its default 64 unit tiles while the map uses 32
        let config = Config::default();
        let map = Map::parse("##########\n#........#\n##########", 32.).unwrap();
        let player = Player::new(Vec2::new(48., 48.), 0.);
        let frame = Frame::cast(&player, &map, &config);
        assert_eq!(frame.tile_size, 32.);

        let (centre, hit) = frame.slices(&config).nth(30).unwrap();
        // east wall starts at x = 288
        assert!((hit.distance - 240.).abs() < 1e-2);
        assert!((centre.height - 32. * 480. / 240.).abs() < 1e-2);
    }
}
