//! Draw primitives handed to whatever backend rasterizes a frame.

use glam::Vec2;

/// colour with channels in `[0, 1]`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1., 1., 1.);
    pub const BLACK: Rgb = Rgb::new(0., 0., 0.);
    pub const YELLOW: Rgb = Rgb::new(1., 1., 0.);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// channels scaled to bytes, clamping anything outside `[0, 1]`
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0., 1.) * 255.).round() as u8)
    }
}

/// A rendering backend. Coordinates are in pixels with y pointing down.
pub trait Renderer {
    fn clear(&mut self, color: Rgb) -> anyhow::Result<()>;

    /// square point of edge `size` centred on `at`
    fn point(&mut self, at: Vec2, size: f32, color: Rgb) -> anyhow::Result<()>;

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) -> anyhow::Result<()>;

    /// filled quad, corners in counter-clockwise order
    fn quad(&mut self, corners: [Vec2; 4], color: Rgb) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawCmd {
    Clear(Rgb),
    Point {
        at: Vec2,
        size: f32,
        color: Rgb,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgb,
    },
    Quad {
        corners: [Vec2; 4],
        color: Rgb,
    },
}

/// Backend that only records what it was asked to draw.
#[derive(Clone, Default, Debug)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32, Rgb)> + '_ {
        self.cmds.iter().filter_map(|cmd| match *cmd {
            DrawCmd::Line {
                from,
                to,
                width,
                color,
            } => Some((from, to, width, color)),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Rgb) -> anyhow::Result<()> {
        self.cmds.push(DrawCmd::Clear(color));
        Ok(())
    }

    fn point(&mut self, at: Vec2, size: f32, color: Rgb) -> anyhow::Result<()> {
        self.cmds.push(DrawCmd::Point { at, size, color });
        Ok(())
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) -> anyhow::Result<()> {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }

    fn quad(&mut self, corners: [Vec2; 4], color: Rgb) -> anyhow::Result<()> {
        self.cmds.push(DrawCmd::Quad { corners, color });
        Ok(())
    }
}
