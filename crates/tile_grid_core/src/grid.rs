//! Fixed-size tile grid

use serde::{Deserialize, Serialize};

use crate::selection::PixelRect;
use crate::sprite::SpriteRef;

/// Grid dimensions and on-screen tile size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    /// Edge length of one tile in pixels
    pub tile_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 16,
            tile_size: 48,
        }
    }
}

/// Address of a tile, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePos {
    // Field order gives the derived `Ord` row-major ordering
    pub row: u32,
    pub col: u32,
}

impl TilePos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Shift by a signed (row, column) offset. Returns `None` below zero.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }

    /// Signed offset from `origin` to `self` as (rows, columns)
    pub fn offset_from(self, origin: TilePos) -> (i32, i32) {
        (
            self.row as i32 - origin.row as i32,
            self.col as i32 - origin.col as i32,
        )
    }
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub pos: TilePos,
    pub sprite: Option<SpriteRef>,
    /// Visual selection marker (includes in-drag preview)
    pub selected: bool,
}

/// Rows × columns of tiles, created once and never resized.
///
/// Every accessor treats out-of-range coordinates as a no-op rather than an error.
#[derive(Debug, Clone)]
pub struct TileGrid {
    rows: u32,
    cols: u32,
    tile_size: u32,
    /// Row-major, in creation order
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn new(config: GridConfig) -> Self {
        let capacity = (config.rows as usize)
            .checked_mul(config.cols as usize)
            .unwrap_or_default();
        let mut tiles = Vec::with_capacity(capacity);
        for row in 0..config.rows {
            for col in 0..config.cols {
                tiles.push(Tile {
                    pos: TilePos::new(row, col),
                    sprite: None,
                    selected: false,
                });
            }
        }

        Self {
            rows: config.rows,
            cols: config.cols,
            tile_size: config.tile_size.max(1),
            tiles,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn config(&self) -> GridConfig {
        GridConfig {
            rows: self.rows,
            cols: self.cols,
            tile_size: self.tile_size,
        }
    }

    /// Grid extent in pixels as (width, height)
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            (self.cols * self.tile_size) as f32,
            (self.rows * self.tile_size) as f32,
        )
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline]
    fn index(&self, pos: TilePos) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.row * self.cols + pos.col) as usize)
        } else {
            None
        }
    }

    /// All tiles in creation (row-major) order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, pos: TilePos) -> Option<&Tile> {
        self.index(pos).map(|idx| &self.tiles[idx])
    }

    /// Sprite at `pos`, `None` if empty or out of range
    pub fn sprite(&self, pos: TilePos) -> Option<SpriteRef> {
        self.tile(pos).and_then(|tile| tile.sprite)
    }

    /// Assign or clear the sprite at `pos`. Returns false if `pos` is out of range.
    pub fn set_sprite(&mut self, pos: TilePos, sprite: Option<SpriteRef>) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.tiles[idx].sprite = sprite;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, pos: TilePos) -> bool {
        self.tile(pos).map_or(false, |tile| tile.selected)
    }

    pub fn set_selected(&mut self, pos: TilePos, selected: bool) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx].selected = selected;
        }
    }

    pub fn clear_selection_marks(&mut self) {
        for tile in &mut self.tiles {
            tile.selected = false;
        }
    }

    /// Positions whose selection marker is set, row-major
    pub fn marked_positions(&self) -> Vec<TilePos> {
        self.tiles
            .iter()
            .filter(|tile| tile.selected)
            .map(|tile| tile.pos)
            .collect()
    }

    /// True when no tile holds a sprite
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|tile| tile.sprite.is_none())
    }

    /// The cell after `pos` in row-major order, wrapping to the next row.
    /// Returns `None` after the final cell.
    pub fn next_row_major(&self, pos: TilePos) -> Option<TilePos> {
        if !self.contains(pos) {
            return None;
        }
        let next = if pos.col + 1 < self.cols {
            TilePos::new(pos.row, pos.col + 1)
        } else {
            TilePos::new(pos.row + 1, 0)
        };
        self.contains(next).then_some(next)
    }

    /// Pixel bounds of a tile in grid-local coordinates
    pub fn tile_bounds(&self, pos: TilePos) -> PixelRect {
        let size = self.tile_size as f32;
        let min_x = pos.col as f32 * size;
        let min_y = pos.row as f32 * size;
        PixelRect::new(min_x, min_y, min_x + size, min_y + size)
    }

    /// Tile under a grid-local pixel position
    pub fn pos_at_pixel(&self, x: f32, y: f32) -> Option<TilePos> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let size = self.tile_size as f32;
        let pos = TilePos::new((y / size).floor() as u32, (x / size).floor() as u32);
        self.contains(pos).then_some(pos)
    }
}
