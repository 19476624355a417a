use crate::StringToAnyhow;
use glam::Vec2;
use raycaster::{Command, Config, Frame, Map, Player, Renderer, Rgb};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

fn sdl_color(color: Rgb) -> Color {
    let [r, g, b] = color.to_bytes();
    Color::RGB(r, g, b)
}

fn sdl_point(at: Vec2) -> Point {
    Point::new(at.x.round() as i32, at.y.round() as i32)
}

/// Rasterizes frames onto an SDL canvas.
struct Backend<'c>(&'c mut Canvas<Window>);

impl Renderer for Backend<'_> {
    fn clear(&mut self, color: Rgb) -> anyhow::Result<()> {
        self.0.set_draw_color(sdl_color(color));
        self.0.clear();
        Ok(())
    }

    fn point(&mut self, at: Vec2, size: f32, color: Rgb) -> anyhow::Result<()> {
        let corner = at - size / 2.;
        self.0.set_draw_color(sdl_color(color));
        self.0
            .fill_rect(Rect::new(
                corner.x.round() as i32,
                corner.y.round() as i32,
                size.max(1.) as u32,
                size.max(1.) as u32,
            ))
            .ah()
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) -> anyhow::Result<()> {
        self.0.set_draw_color(sdl_color(color));

        // thick lines are a bundle of one pixel lines side by side
        let normal = (to - from).perp().normalize_or_zero();
        let strands = width.round().max(1.) as i32;
        for k in 0..strands {
            let offset = normal * (k as f32 - (strands - 1) as f32 / 2.);
            self.0
                .draw_line(sdl_point(from + offset), sdl_point(to + offset))
                .ah()?;
        }

        Ok(())
    }

    // every quad the caster emits is axis-aligned, so its bounding box is exact
    fn quad(&mut self, corners: [Vec2; 4], color: Rgb) -> anyhow::Result<()> {
        let min = corners.iter().copied().fold(Vec2::INFINITY, Vec2::min);
        let max = corners.iter().copied().fold(Vec2::NEG_INFINITY, Vec2::max);
        let size = (max - min).max(Vec2::ONE);

        self.0.set_draw_color(sdl_color(color));
        self.0
            .fill_rect(Rect::new(
                min.x.round() as i32,
                min.y.round() as i32,
                size.x.round() as u32,
                size.y.round() as u32,
            ))
            .ah()
    }
}

pub(crate) struct Game {
    map: Map,
    player: Player,
    config: Config,
    pub canvas: Canvas<Window>,
    pub update: bool,
}

impl Game {
    /// initialize game
    pub fn new(canvas: Canvas<Window>, map: Map, config: Config) -> anyhow::Result<Self> {
        let player = Player::spawn(&map)?;
        log::info!(
            "player spawned at {} facing {:.3}",
            player.pos,
            player.direction()
        );

        Ok(Self {
            map,
            player,
            config,
            canvas,
            update: true,
        })
    }

    /// handle a key press; key repeats count as separate presses
    pub fn key(&mut self, key: Keycode) {
        let command = match key {
            Keycode::A | Keycode::Left => Command::TurnLeft,
            Keycode::D | Keycode::Right => Command::TurnRight,
            Keycode::W | Keycode::Up => Command::MoveForward,
            Keycode::S | Keycode::Down => Command::MoveBackward,
            _ => return,
        };

        self.player.apply(command, &self.map, &self.config);
        self.update = true;
    }

    /// cast and draw one frame
    pub fn draw(&mut self) -> anyhow::Result<()> {
        let frame = Frame::cast(&self.player, &self.map, &self.config);
        frame.draw(&self.map, &self.config, &mut Backend(&mut self.canvas))
    }
}
