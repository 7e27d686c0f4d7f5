//! The map editor controller
//!
//! [`MapEditor`] owns the grid, selection, clipboard and history and is the
//! only place they are mutated. Every operation that changes tile sprites
//! commits exactly one history snapshot; preview and selection-only
//! operations never do.

use tracing::{debug, info};

use crate::action::EditorAction;
use crate::clipboard::TileClipboard;
use crate::grid::{GridConfig, TileGrid, TilePos};
use crate::history::SnapshotHistory;
use crate::palette::{PaletteConfig, SpritePalette};
use crate::record::{
    export_records, import_records, parse_records, records_to_json, ImportSummary, RecordError,
    TileRecord,
};
use crate::selection::{PixelRect, SelectionEngine};
use crate::sprite::SpriteRef;

#[derive(Debug, Clone)]
pub struct MapEditor {
    grid: TileGrid,
    palette: SpritePalette,
    selection: SelectionEngine,
    clipboard: TileClipboard,
    history: SnapshotHistory,
    /// Tile under the pointer; the paste anchor
    hovered: Option<TilePos>,
    active_sprite: Option<SpriteRef>,
    auto_advance: bool,
}

impl Default for MapEditor {
    fn default() -> Self {
        Self::new(GridConfig::default(), PaletteConfig::default())
    }
}

impl MapEditor {
    /// Create an empty map. The history starts with the empty grid as entry 0.
    pub fn new(grid: GridConfig, palette: PaletteConfig) -> Self {
        let grid = TileGrid::new(grid);
        let mut history = SnapshotHistory::new();
        history.reset(&grid);

        Self {
            grid,
            palette: SpritePalette::new(palette),
            selection: SelectionEngine::new(),
            clipboard: TileClipboard::new(),
            history,
            hovered: None,
            active_sprite: None,
            auto_advance: false,
        }
    }

    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = enabled;
        self
    }

    /// Replace the map with an empty one of the same size. The clipboard survives.
    pub fn reset(&mut self) {
        self.grid = TileGrid::new(self.grid.config());
        self.selection = SelectionEngine::new();
        self.hovered = None;
        self.history.reset(&self.grid);
        info!(
            "Started new {}x{} map",
            self.grid.rows(),
            self.grid.cols()
        );
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn palette(&self) -> &SpritePalette {
        &self.palette
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn clipboard(&self) -> &TileClipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn hovered(&self) -> Option<TilePos> {
        self.hovered
    }

    pub fn active_sprite(&self) -> Option<SpriteRef> {
        self.active_sprite
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn toggle_auto_advance(&mut self) {
        self.auto_advance = !self.auto_advance;
        debug!("Auto-advance: {}", self.auto_advance);
    }

    // Pointer input (grid-local pixel coordinates)

    /// Start a marquee drag. Returns false if `point` is outside the grid.
    pub fn pointer_down(&mut self, point: (f32, f32), additive: bool) -> bool {
        self.hovered = self.grid.pos_at_pixel(point.0, point.1);
        self.selection.begin_drag(&mut self.grid, point, additive)
    }

    pub fn pointer_move(&mut self, point: (f32, f32)) {
        self.hovered = self.grid.pos_at_pixel(point.0, point.1);
        self.selection.update_drag(&mut self.grid, point);
    }

    pub fn pointer_up(&mut self, point: (f32, f32)) {
        self.hovered = self.grid.pos_at_pixel(point.0, point.1);
        self.selection.end_drag(&mut self.grid, point);
    }

    /// Pointer left the grid: there is no paste anchor any more
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    pub fn hover(&mut self, pos: Option<TilePos>) {
        self.hovered = pos.filter(|pos| self.grid.contains(*pos));
    }

    // Selection

    pub fn select(&mut self, rect: &PixelRect, additive: bool) {
        self.selection.select(&mut self.grid, rect, additive);
    }

    pub fn select_cells(&mut self, a: TilePos, b: TilePos, additive: bool) {
        self.selection.select_cells(&mut self.grid, a, b, additive);
    }

    pub fn select_all(&mut self) {
        let last = TilePos::new(
            self.grid.rows().saturating_sub(1),
            self.grid.cols().saturating_sub(1),
        );
        self.selection
            .select_cells(&mut self.grid, TilePos::new(0, 0), last, false);
    }

    pub fn clear_selection(&mut self) {
        self.selection.cancel_drag(&mut self.grid);
        self.selection.clear(&mut self.grid);
    }

    // Mutations

    /// Paint `sprite` onto every selected tile in row-major order.
    ///
    /// Returns false (and commits nothing) when the selection is empty.
    pub fn draw(&mut self, sprite: SpriteRef) -> bool {
        if self.selection.is_empty() {
            return false;
        }

        let mut targets = self.selection.take(&mut self.grid);
        targets.sort();
        for pos in &targets {
            self.grid.set_sprite(*pos, Some(sprite));
        }

        if self.auto_advance {
            let next = targets
                .last()
                .and_then(|last| self.grid.next_row_major(*last));
            self.selection.set_single(&mut self.grid, next);
        }

        self.commit("draw", targets.len());
        true
    }

    /// Paint the active sprite, if one has been chosen
    pub fn draw_active(&mut self) -> bool {
        match self.active_sprite {
            Some(sprite) => self.draw(sprite),
            None => false,
        }
    }

    /// Make palette entry `index` the active sprite and paint it onto the selection
    pub fn choose_sprite(&mut self, index: usize) -> bool {
        let Some(sprite) = self.palette.get(index) else {
            return false;
        };
        self.active_sprite = Some(sprite);
        self.draw(sprite)
    }

    pub fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let targets = self.selection.take(&mut self.grid);
        for pos in &targets {
            self.grid.set_sprite(*pos, None);
        }
        self.commit("delete", targets.len());
        true
    }

    /// Copy the selection to the clipboard. Does not touch sprites or history.
    pub fn copy(&mut self) -> bool {
        !self.copy_selection().is_empty()
    }

    /// Copy the selection, then clear the copied tiles
    pub fn cut(&mut self) -> bool {
        let copied = self.copy_selection();
        if copied.is_empty() {
            return false;
        }
        for pos in &copied {
            self.grid.set_sprite(*pos, None);
        }
        self.commit("cut", copied.len());
        true
    }

    /// Paste at the hovered tile
    pub fn paste(&mut self) -> bool {
        match self.hovered {
            Some(anchor) => self.paste_at(anchor),
            None => false,
        }
    }

    /// Paste with the clipboard's first entry at `anchor`; off-grid cells are skipped
    pub fn paste_at(&mut self, anchor: TilePos) -> bool {
        if !self.clipboard.has_content() || !self.grid.contains(anchor) {
            return false;
        }
        let written = self.clipboard.paste(&mut self.grid, anchor);
        self.commit("paste", written);
        true
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    /// Apply an action. Returns true if anything changed.
    pub fn dispatch(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::Draw(sprite) => self.draw(sprite),
            EditorAction::ChooseSprite(index) => self.choose_sprite(index),
            EditorAction::DrawActive => self.draw_active(),
            EditorAction::DeleteSelection => self.delete_selection(),
            EditorAction::Copy => self.copy(),
            EditorAction::Cut => self.cut(),
            EditorAction::Paste => self.paste(),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::SelectAll => {
                self.select_all();
                true
            }
            EditorAction::ClearSelection => {
                self.clear_selection();
                true
            }
            EditorAction::ToggleAutoAdvance => {
                self.toggle_auto_advance();
                true
            }
        }
    }

    // Import / export

    pub fn export_state(&self) -> Vec<TileRecord> {
        export_records(&self.grid)
    }

    /// Apply records onto the grid. Does not commit a history entry.
    pub fn import_state(&mut self, records: &[TileRecord]) -> ImportSummary {
        let summary = import_records(&mut self.grid, records);
        info!(
            "Imported {} tiles ({} records skipped)",
            summary.applied, summary.skipped
        );
        summary
    }

    pub fn export_json(&self) -> Result<String, RecordError> {
        records_to_json(&self.export_state())
    }

    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary, RecordError> {
        let records = parse_records(text)?;
        Ok(self.import_state(&records))
    }

    fn copy_selection(&mut self) -> Vec<TilePos> {
        let positions = self.selection.take(&mut self.grid);
        self.clipboard.capture(&self.grid, &positions);
        positions
    }

    fn commit(&mut self, operation: &str, tiles: usize) {
        self.history.commit(&self.grid);
        debug!("Committed {} of {} tiles", operation, tiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(rows: u32, cols: u32) -> MapEditor {
        MapEditor::new(
            GridConfig {
                rows,
                cols,
                tile_size: 10,
            },
            PaletteConfig {
                columns: 4,
                rows: 4,
                sprite_size: 16,
            },
        )
    }

    fn sprite_a() -> SpriteRef {
        SpriteRef::new(16, 32)
    }

    #[test]
    fn test_draw_undo_redo_scenario() {
        let mut editor = editor(3, 3);
        editor.select_cells(TilePos::new(0, 0), TilePos::new(1, 1), false);
        assert_eq!(editor.selection().selected().len(), 4);

        assert!(editor.draw(sprite_a()));
        assert_eq!(editor.history().len(), 2);
        for pos in [
            TilePos::new(0, 0),
            TilePos::new(0, 1),
            TilePos::new(1, 0),
            TilePos::new(1, 1),
        ] {
            assert_eq!(editor.grid().sprite(pos), Some(sprite_a()));
        }
        assert_eq!(editor.grid().sprite(TilePos::new(2, 2)), None);

        assert!(editor.undo());
        assert!(editor.grid().is_empty());
        assert_eq!(editor.history().cursor(), Some(0));

        assert!(editor.redo());
        assert_eq!(editor.grid().sprite(TilePos::new(1, 1)), Some(sprite_a()));
        assert_eq!(editor.history().cursor(), Some(1));
    }

    #[test]
    fn test_scenario_through_pointer_drag() {
        let mut editor = editor(3, 3);
        assert!(editor.pointer_down((2.0, 2.0), false));
        editor.pointer_move((15.0, 15.0));
        editor.pointer_up((15.0, 15.0));
        assert_eq!(editor.selection().selected().len(), 4);

        editor.draw(sprite_a());
        assert_eq!(editor.grid().sprite(TilePos::new(1, 1)), Some(sprite_a()));
        assert_eq!(editor.grid().sprite(TilePos::new(0, 2)), None);
    }

    #[test]
    fn test_keyboard_action_during_drag_keeps_marquee() {
        let mut editor = editor(4, 4);
        editor.pointer_down((1.0, 1.0), false);
        editor.pointer_move((25.0, 25.0));
        assert!(!editor.copy());
        assert!(editor.selection().is_dragging());

        editor.pointer_up((35.0, 35.0));
        assert_eq!(editor.selection().selected().len(), 16);
        assert_eq!(editor.grid().marked_positions().len(), 16);
    }

    #[test]
    fn test_select_rect_replaces_or_extends() {
        let mut editor = editor(3, 3);
        editor.select(&PixelRect::new(5.0, 5.0, 15.0, 15.0), false);
        assert_eq!(editor.selection().selected().len(), 4);

        editor.select(&PixelRect::new(22.0, 22.0, 28.0, 28.0), false);
        assert_eq!(editor.selection().selected(), &[TilePos::new(2, 2)]);

        editor.select(&PixelRect::new(0.0, 22.0, 8.0, 28.0), true);
        assert_eq!(
            editor.selection().selected(),
            &[TilePos::new(2, 2), TilePos::new(2, 0)]
        );
        assert_eq!(
            editor.grid().marked_positions(),
            vec![TilePos::new(2, 0), TilePos::new(2, 2)]
        );
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_draw_active_repeats_chosen_sprite() {
        let mut editor = editor(3, 3);
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 0), false);
        assert!(!editor.draw_active());

        editor.choose_sprite(2);
        editor.select_cells(TilePos::new(2, 1), TilePos::new(2, 2), false);
        assert!(editor.dispatch(EditorAction::DrawActive));
        assert_eq!(editor.grid().sprite(TilePos::new(2, 2)), editor.palette().get(2));
        assert_eq!(editor.history().len(), 3);
    }

    #[test]
    fn test_draw_on_empty_selection_is_noop() {
        let mut editor = editor(3, 3);
        assert!(!editor.draw(sprite_a()));
        assert_eq!(editor.history().len(), 1);
        assert!(editor.grid().is_empty());
    }

    #[test]
    fn test_draw_clears_selection_markers() {
        let mut editor = editor(3, 3);
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 1), false);
        editor.draw(sprite_a());
        assert!(editor.selection().is_empty());
        assert!(editor.grid().marked_positions().is_empty());
    }

    #[test]
    fn test_auto_advance_moves_past_last_drawn_tile() {
        let mut editor = editor(3, 3).with_auto_advance(true);
        // Selection order is irrelevant; the last tile in row-major order wins
        editor.select_cells(TilePos::new(0, 2), TilePos::new(0, 2), false);
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 0), true);
        editor.draw(sprite_a());
        assert_eq!(editor.selection().selected(), &[TilePos::new(1, 0)]);
        assert!(editor.grid().is_selected(TilePos::new(1, 0)));

        editor.draw(sprite_a());
        assert_eq!(editor.selection().selected(), &[TilePos::new(1, 1)]);
        assert_eq!(editor.history().len(), 3);
    }

    #[test]
    fn test_auto_advance_from_final_cell_empties_selection() {
        let mut editor = editor(3, 3).with_auto_advance(true);
        editor.select_cells(TilePos::new(2, 2), TilePos::new(2, 2), false);
        editor.draw(sprite_a());
        assert!(editor.selection().is_empty());
        assert!(!editor.grid().is_selected(TilePos::new(0, 0)));
    }

    #[test]
    fn test_choose_sprite_sets_active_and_draws() {
        let mut editor = editor(3, 3);
        editor.select_cells(TilePos::new(1, 1), TilePos::new(1, 1), false);
        assert!(editor.choose_sprite(5));
        let expected = editor.palette().get(5);
        assert_eq!(editor.active_sprite(), expected);
        assert_eq!(editor.grid().sprite(TilePos::new(1, 1)), expected);
        assert!(!editor.choose_sprite(99));
    }

    #[test]
    fn test_copy_does_not_mutate() {
        let mut editor = editor(3, 3);
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 1), false);
        editor.draw(sprite_a());
        editor.select_cells(TilePos::new(0, 0), TilePos::new(1, 1), false);

        let before = editor.export_state();
        assert!(editor.copy());
        assert_eq!(editor.export_state(), before);
        assert_eq!(editor.history().len(), 2);
        assert_eq!(editor.clipboard().entries().len(), 4);
        assert!(editor.grid().marked_positions().is_empty());
    }

    #[test]
    fn test_cut_is_copy_then_clear() {
        let mut editor = editor(3, 3);
        editor.select_cells(TilePos::new(0, 0), TilePos::new(1, 1), false);
        editor.draw(sprite_a());

        let mut copied = editor.clone();
        copied.select_cells(TilePos::new(0, 0), TilePos::new(0, 1), false);
        copied.copy();

        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 1), false);
        assert!(editor.cut());
        assert_eq!(editor.clipboard().entries(), copied.clipboard().entries());
        assert_eq!(editor.grid().sprite(TilePos::new(0, 0)), None);
        assert_eq!(editor.grid().sprite(TilePos::new(0, 1)), None);
        assert_eq!(editor.grid().sprite(TilePos::new(1, 0)), Some(sprite_a()));
        assert_eq!(editor.history().len(), 3);
    }

    #[test]
    fn test_cut_with_empty_selection_is_noop() {
        let mut editor = editor(3, 3);
        assert!(!editor.cut());
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_paste_requires_clipboard_and_anchor() {
        let mut editor = editor(8, 8);
        editor.hover(Some(TilePos::new(1, 1)));
        assert!(!editor.paste());

        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 0), false);
        editor.draw(sprite_a());
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 0), false);
        editor.copy();

        editor.pointer_leave();
        assert!(!editor.paste());
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_paste_at_hovered_tile_skips_out_of_bounds() {
        let mut editor = editor(7, 7);
        editor.select_cells(TilePos::new(0, 0), TilePos::new(1, 1), false);
        editor.draw(sprite_a());

        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 1), false);
        editor.select_cells(TilePos::new(1, 0), TilePos::new(1, 0), true);
        editor.copy();

        editor.hover(Some(TilePos::new(5, 5)));
        assert!(editor.paste());
        assert_eq!(editor.grid().sprite(TilePos::new(5, 5)), Some(sprite_a()));
        assert_eq!(editor.grid().sprite(TilePos::new(5, 6)), Some(sprite_a()));
        assert_eq!(editor.grid().sprite(TilePos::new(6, 5)), Some(sprite_a()));
        assert_eq!(editor.grid().sprite(TilePos::new(6, 6)), None);

        // Anchored on the last column only the first column of the block fits
        editor.hover(Some(TilePos::new(2, 6)));
        assert!(editor.paste());
        assert_eq!(editor.grid().sprite(TilePos::new(2, 6)), Some(sprite_a()));
        assert_eq!(editor.grid().sprite(TilePos::new(3, 6)), Some(sprite_a()));
        assert_eq!(editor.history().len(), 4);
    }

    #[test]
    fn test_delete_selection() {
        let mut editor = editor(3, 3);
        assert!(!editor.delete_selection());
        editor.select_all();
        editor.draw(sprite_a());
        editor.select_cells(TilePos::new(1, 1), TilePos::new(1, 1), false);
        assert!(editor.delete_selection());
        assert_eq!(editor.grid().sprite(TilePos::new(1, 1)), None);
        assert_eq!(editor.grid().sprite(TilePos::new(0, 0)), Some(sprite_a()));
        assert_eq!(editor.history().len(), 3);
    }

    #[test]
    fn test_undo_all_then_redo_all() {
        let mut editor = editor(4, 4);
        let sprites: Vec<SpriteRef> = editor.palette().entries()[..5].to_vec();
        for (i, sprite) in sprites.iter().enumerate() {
            let pos = TilePos::new(i as u32 % 4, i as u32 / 4);
            editor.select_cells(pos, pos, false);
            editor.draw(*sprite);
        }
        let final_state = editor.export_state();

        for _ in 0..sprites.len() {
            assert!(editor.undo());
        }
        assert!(!editor.undo());
        assert!(editor.grid().is_empty());

        for _ in 0..sprites.len() {
            assert!(editor.redo());
        }
        assert!(!editor.redo());
        assert_eq!(editor.export_state(), final_state);
    }

    #[test]
    fn test_new_edit_after_undo_drops_redo() {
        let mut editor = editor(3, 3);
        editor.select_all();
        editor.draw(sprite_a());
        editor.undo();
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 0), false);
        editor.draw(SpriteRef::new(0, 0));
        assert!(!editor.history().can_redo());
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_import_does_not_commit() {
        let mut source = editor(3, 3);
        source.select_cells(TilePos::new(2, 0), TilePos::new(2, 2), false);
        source.draw(sprite_a());
        let json = source.export_json().unwrap();

        let mut target = editor(3, 3);
        let summary = target.import_json(&json).unwrap();
        assert_eq!(summary.applied, 3);
        assert_eq!(target.history().len(), 1);
        assert_eq!(target.export_state(), source.export_state());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut editor = editor(3, 3);
        assert!(editor.dispatch(EditorAction::SelectAll));
        assert!(editor.dispatch(EditorAction::Draw(sprite_a())));
        assert!(editor.dispatch(EditorAction::Undo));
        assert!(!editor.dispatch(EditorAction::Undo));
        assert!(editor.dispatch(EditorAction::Redo));
        assert!(editor.dispatch(EditorAction::ToggleAutoAdvance));
        assert!(editor.auto_advance());
        assert!(!editor.dispatch(EditorAction::Paste));
    }

    #[test]
    fn test_reset_keeps_clipboard() {
        let mut editor = editor(3, 3);
        editor.select_all();
        editor.draw(sprite_a());
        editor.select_all();
        editor.copy();
        editor.reset();
        assert!(editor.grid().is_empty());
        assert_eq!(editor.history().len(), 1);
        assert!(editor.clipboard().has_content());
    }
}
