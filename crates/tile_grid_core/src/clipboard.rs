//! Tile clipboard for copy/cut/paste

use crate::grid::{TileGrid, TilePos};
use crate::sprite::SpriteRef;

/// One captured tile, positioned relative to the first captured tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub d_row: i32,
    pub d_col: i32,
    pub sprite: Option<SpriteRef>,
}

/// Buffer of copied tiles. Replaced wholesale by each copy or cut.
#[derive(Debug, Clone, Default)]
pub struct TileClipboard {
    entries: Vec<ClipboardEntry>,
}

impl TileClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_content(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    /// Capture `positions` (in the given order) from the grid.
    ///
    /// Offsets are relative to `positions[0]`. An empty slice leaves the
    /// previous content untouched.
    pub fn capture(&mut self, grid: &TileGrid, positions: &[TilePos]) {
        let Some(&origin) = positions.first() else {
            return;
        };
        self.entries = positions
            .iter()
            .map(|pos| {
                let (d_row, d_col) = pos.offset_from(origin);
                ClipboardEntry {
                    d_row,
                    d_col,
                    sprite: grid.sprite(*pos),
                }
            })
            .collect();
    }

    /// Cells the clipboard would land on when anchored at `anchor`.
    ///
    /// Out-of-bounds targets are dropped; the rest keep their order.
    pub fn targets(&self, grid: &TileGrid, anchor: TilePos) -> Vec<(TilePos, Option<SpriteRef>)> {
        let Some(first) = self.entries.first() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter_map(|entry| {
                let target =
                    anchor.offset(entry.d_row - first.d_row, entry.d_col - first.d_col)?;
                grid.contains(target).then_some((target, entry.sprite))
            })
            .collect()
    }

    /// Write the clipboard onto the grid at `anchor`. Returns how many tiles were written.
    pub fn paste(&self, grid: &mut TileGrid, anchor: TilePos) -> usize {
        let targets = self.targets(grid, anchor);
        for (pos, sprite) in &targets {
            grid.set_sprite(*pos, *sprite);
        }
        targets.len()
    }
}
