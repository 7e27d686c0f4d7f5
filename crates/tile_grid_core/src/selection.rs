//! Marquee selection over the tile grid
//!
//! The engine moves through three phases:
//! - `Idle`: nothing selected, no drag in progress
//! - `Dragging`: pointer is down, tiles under the marquee are marked as a preview
//! - `Selected`: the drag was committed into the persistent selection set
//!
//! The persistent set keeps insertion order (copy offsets are relative to its
//! first entry) and never holds duplicates. Tile selection markers on the grid
//! are kept equal to the set, plus the preview while dragging.

use crate::grid::{TileGrid, TilePos};

/// Axis-aligned rectangle in grid-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl PixelRect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Normalized rectangle spanning two arbitrary corners
    pub fn from_corners(a: (f32, f32), b: (f32, f32)) -> Self {
        Self {
            min_x: a.0.min(b.0),
            min_y: a.1.min(b.1),
            max_x: a.0.max(b.0),
            max_y: a.1.max(b.1),
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Zero-area rectangles (a click without movement) hit nothing
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Strict overlap test; touching edges do not count
    pub fn intersects(&self, other: &PixelRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

/// Current phase of the selection state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Dragging,
    Selected,
}

/// Tiles whose bounds intersect `rect`, in row-major order
pub fn intersecting_tiles(grid: &TileGrid, rect: &PixelRect) -> Vec<TilePos> {
    if rect.is_empty() {
        return Vec::new();
    }
    grid.tiles()
        .iter()
        .map(|tile| tile.pos)
        .filter(|pos| grid.tile_bounds(*pos).intersects(rect))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    selected: Vec<TilePos>,
    phase: SelectionPhase,
    drag_start: Option<(f32, f32)>,
    drag_current: Option<(f32, f32)>,
    additive: bool,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == SelectionPhase::Dragging
    }

    /// Committed selection in insertion order
    pub fn selected(&self) -> &[TilePos] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        self.selected.contains(&pos)
    }

    /// Committed selection sorted row-major
    pub fn sorted(&self) -> Vec<TilePos> {
        let mut sorted = self.selected.clone();
        sorted.sort();
        sorted
    }

    /// Marquee currently being dragged, for drawing
    pub fn drag_rect(&self) -> Option<PixelRect> {
        match (self.drag_start, self.drag_current) {
            (Some(start), Some(current)) if self.is_dragging() => {
                Some(PixelRect::from_corners(start, current))
            }
            _ => None,
        }
    }

    /// Pointer pressed at a grid-local pixel position.
    ///
    /// Ignored (returns false) if the position is outside the grid. Without the
    /// multi-select modifier the current selection is dropped first.
    pub fn begin_drag(&mut self, grid: &mut TileGrid, point: (f32, f32), additive: bool) -> bool {
        if grid.pos_at_pixel(point.0, point.1).is_none() {
            return false;
        }
        if !additive {
            self.selected.clear();
        }
        self.additive = additive;
        self.drag_start = Some(point);
        self.drag_current = Some(point);
        self.phase = SelectionPhase::Dragging;
        self.sync_marks(grid, &[]);
        true
    }

    /// Pointer moved while dragging: refresh the preview markers
    pub fn update_drag(&mut self, grid: &mut TileGrid, point: (f32, f32)) {
        if !self.is_dragging() {
            return;
        }
        self.drag_current = Some(point);
        if let Some(rect) = self.drag_rect() {
            let preview = intersecting_tiles(grid, &rect);
            self.sync_marks(grid, &preview);
        }
    }

    /// Pointer released: commit the marquee into the selection set
    pub fn end_drag(&mut self, grid: &mut TileGrid, point: (f32, f32)) {
        if !self.is_dragging() {
            return;
        }
        self.drag_current = Some(point);
        let rect = self.drag_rect().unwrap_or_default();
        let additive = self.additive;
        self.drag_start = None;
        self.drag_current = None;
        self.commit(grid, &rect, additive);
    }

    /// Abandon an in-progress drag, keeping whatever was committed before it
    pub fn cancel_drag(&mut self, grid: &mut TileGrid) {
        if !self.is_dragging() {
            return;
        }
        self.drag_start = None;
        self.drag_current = None;
        self.sync_marks(grid, &[]);
        self.update_phase();
    }

    /// Commit the tiles intersecting `rect` without a drag
    pub fn select(&mut self, grid: &mut TileGrid, rect: &PixelRect, additive: bool) {
        self.drag_start = None;
        self.drag_current = None;
        self.commit(grid, rect, additive);
    }

    /// Select the inclusive block of cells spanned by two corners, clipped to the grid
    pub fn select_cells(&mut self, grid: &mut TileGrid, a: TilePos, b: TilePos, additive: bool) {
        if !additive {
            self.selected.clear();
        }
        let max_row = a.row.max(b.row).min(grid.rows().saturating_sub(1));
        let max_col = a.col.max(b.col).min(grid.cols().saturating_sub(1));
        for row in a.row.min(b.row)..=max_row {
            for col in a.col.min(b.col)..=max_col {
                let pos = TilePos::new(row, col);
                if grid.contains(pos) && !self.selected.contains(&pos) {
                    self.selected.push(pos);
                }
            }
        }
        self.refresh(grid);
    }

    /// Replace the selection with exactly one tile (or nothing)
    pub fn set_single(&mut self, grid: &mut TileGrid, pos: Option<TilePos>) {
        self.selected.clear();
        if let Some(pos) = pos.filter(|pos| grid.contains(*pos)) {
            self.selected.push(pos);
        }
        self.refresh(grid);
    }

    pub fn clear(&mut self, grid: &mut TileGrid) {
        self.set_single(grid, None);
    }

    /// Empty the selection and return what it held, in insertion order
    pub fn take(&mut self, grid: &mut TileGrid) -> Vec<TilePos> {
        let taken = std::mem::take(&mut self.selected);
        self.refresh(grid);
        taken
    }

    fn commit(&mut self, grid: &mut TileGrid, rect: &PixelRect, additive: bool) {
        if !additive {
            self.selected.clear();
        }
        for pos in intersecting_tiles(grid, rect) {
            if !self.selected.contains(&pos) {
                self.selected.push(pos);
            }
        }
        self.sync_marks(grid, &[]);
        self.update_phase();
    }

    /// Recompute the phase and markers; an in-progress drag keeps its preview
    fn refresh(&mut self, grid: &mut TileGrid) {
        self.update_phase();
        let preview = self
            .drag_rect()
            .map(|rect| intersecting_tiles(grid, &rect))
            .unwrap_or_default();
        self.sync_marks(grid, &preview);
    }

    fn update_phase(&mut self) {
        self.phase = if self.drag_start.is_some() {
            SelectionPhase::Dragging
        } else if self.selected.is_empty() {
            SelectionPhase::Idle
        } else {
            SelectionPhase::Selected
        };
    }

    fn sync_marks(&self, grid: &mut TileGrid, preview: &[TilePos]) {
        grid.clear_selection_marks();
        for pos in self.selected.iter().chain(preview) {
            grid.set_selected(*pos, true);
        }
    }
}
