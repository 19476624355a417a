use glam::{IVec2, Vec2};
use std::fs::read_to_string;
use std::path::Path;

/// Layout used when no map file is given.
const CLASSIC: &str = include_str!("../map/classic.map");

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Empty,
    Solid,
}

/// Rectangular occupancy grid, row-major, immutable once loaded.
#[derive(Clone, PartialEq, Debug)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    tile_size: f32,
    tiles: Vec<Tile>,
    spawn: Option<usize>,
}

impl Map {
    /// Build a map from rows of tiles. Fails on an empty or ragged grid, or a
    /// tile size that is not a positive finite number.
    pub fn new(rows: Vec<Vec<Tile>>, tile_size: f32) -> anyhow::Result<Self> {
        Self::from_rows(rows, tile_size, None)
    }

    fn from_rows(
        rows: Vec<Vec<Tile>>,
        tile_size: f32,
        spawn: Option<usize>,
    ) -> anyhow::Result<Self> {
        if !tile_size.is_finite() || tile_size <= 0. {
            anyhow::bail!("tile size must be positive, got {tile_size}");
        }

        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            anyhow::bail!("map has no tiles");
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            anyhow::bail!(
                "map is not rectangular: row {y} has {} tiles, expected {width}",
                row.len()
            );
        }

        Ok(Self {
            width,
            height,
            tile_size,
            tiles: rows.into_iter().flatten().collect(),
            spawn,
        })
    }

    /// Parse the text map format: one row per line, `#`/`1` solid, `.`/`0`/space
    /// empty, `*` empty and the spawn tile.
    pub fn parse(src: &str, tile_size: f32) -> anyhow::Result<Self> {
        let mut rows = vec![];
        let mut spawn = None;

        for (y, line) in src.trim_end_matches(['\n', '\r']).lines().enumerate() {
            let mut row = vec![];
            for (x, glyph) in line.chars().enumerate() {
                row.push(match glyph {
                    '#' | '1' => Tile::Solid,
                    '.' | '0' | ' ' => Tile::Empty,
                    '*' => {
                        if spawn.is_some() {
                            anyhow::bail!("second spawn at row {y}, column {x}");
                        }
                        spawn = Some((y, x));
                        Tile::Empty
                    }
                    other => anyhow::bail!("invalid tile in map: {other:?}"),
                });
            }
            rows.push(row);
        }

        let width = rows.first().map(Vec::len).unwrap_or(0);
        let this = Self::from_rows(rows, tile_size, spawn.map(|(y, x)| y * width + x))?;
        log::debug!(
            "parsed {}x{} map, spawn {:?}",
            this.width,
            this.height,
            this.spawn
        );

        Ok(this)
    }

    pub fn load(path: impl AsRef<Path>, tile_size: f32) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("loading map at {}", path.display());
        Self::parse(&read_to_string(path)?, tile_size)
    }

    /// the bordered 10x10 layout with a few interior walls
    pub fn classic(tile_size: f32) -> anyhow::Result<Self> {
        Self::parse(CLASSIC, tile_size)
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Grid cell containing a world position. Uses floor division so negative
    /// coordinates land in negative cells instead of truncating towards zero.
    pub fn cell(&self, pos: Vec2) -> IVec2 {
        (pos / self.tile_size).floor().as_ivec2()
    }

    /// tile at a cell, `None` outside the grid
    pub fn tile(&self, cell: IVec2) -> Option<Tile> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }

    /// cells outside the grid are never solid
    pub fn is_solid(&self, cell: IVec2) -> bool {
        self.tile(cell) == Some(Tile::Solid)
    }

    /// Whether a body may not stand at `pos`. Positions off the grid block.
    pub fn blocks(&self, pos: Vec2) -> bool {
        self.tile(self.cell(pos)) != Some(Tile::Empty)
    }

    /// top-left corner of a tile in world units
    pub fn idx_to_vec(&self, idx: usize) -> Vec2 {
        let x = idx % self.width;
        let y = idx / self.width;
        Vec2::new(x as f32, y as f32) * self.tile_size
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Vec2, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, tile)| (self.idx_to_vec(idx), *tile))
    }

    /// centre of the spawn tile, if the map marks one
    pub fn get_spawn(&self) -> Option<Vec2> {
        self.spawn
            .map(|idx| self.idx_to_vec(idx) + Vec2::splat(self.tile_size / 2.))
    }

    /// the larger of the two grid dimensions
    pub fn span(&self) -> usize {
        self.width.max(self.height)
    }

    /// length of the grid's diagonal in world units
    pub fn diagonal(&self) -> f32 {
        Vec2::new(self.width as f32, self.height as f32).length() * self.tile_size
    }
}
