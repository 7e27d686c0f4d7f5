//! Undo/redo history of full-grid snapshots

use tracing::debug;

use crate::grid::{TileGrid, TilePos};
use crate::sprite::SpriteRef;

/// Sprite assignment of one tile at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotCell {
    pub pos: TilePos,
    pub sprite: Option<SpriteRef>,
}

/// Every tile's sprite at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    cells: Vec<SnapshotCell>,
}

impl GridSnapshot {
    pub fn capture(grid: &TileGrid) -> Self {
        Self {
            cells: grid
                .tiles()
                .iter()
                .map(|tile| SnapshotCell {
                    pos: tile.pos,
                    sprite: tile.sprite,
                })
                .collect(),
        }
    }

    pub fn cells(&self) -> &[SnapshotCell] {
        &self.cells
    }

    /// Overwrite every matching tile, including ones that did not change
    pub fn restore(&self, grid: &mut TileGrid) {
        for cell in &self.cells {
            grid.set_sprite(cell.pos, cell.sprite);
        }
    }
}

/// Linear snapshot stack with a cursor.
///
/// The cursor always indexes a valid entry unless the stack is empty.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    entries: Vec<GridSnapshot>,
    cursor: Option<usize>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh history whose only entry is the current grid
    pub fn reset(&mut self, grid: &TileGrid) {
        self.entries.clear();
        self.cursor = None;
        self.commit(grid);
    }

    /// Drop everything after the cursor, then append the current grid
    pub fn commit(&mut self, grid: &TileGrid) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(GridSnapshot::capture(grid));
        self.cursor = Some(self.entries.len() - 1);
        debug!("History commit: entry {} of {}", self.entries.len() - 1, self.entries.len());
    }

    /// Step back one entry. Returns false at the first entry.
    pub fn undo(&mut self, grid: &mut TileGrid) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.entries[cursor - 1].restore(grid);
                debug!("Undo to history entry {}", cursor - 1);
                true
            }
            _ => false,
        }
    }

    /// Step forward one entry. Returns false at the last entry.
    pub fn redo(&mut self, grid: &mut TileGrid) -> bool {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                self.entries[cursor + 1].restore(grid);
                debug!("Redo to history entry {}", cursor + 1);
                true
            }
            _ => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.map_or(false, |cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor
            .map_or(false, |cursor| cursor + 1 < self.entries.len())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
