//! Tile canvas: painting, marquee selection and the context menu

use bevy_egui::egui;
use tile_grid_core::MapEditor;

use super::{paint_sprite, EditorTheme, PendingAction, SpriteSheet};
use crate::EditorState;

/// Render the grid and feed pointer input to the editor
pub fn render_grid_view(ui: &mut egui::Ui, editor_state: &mut EditorState, sheet: &SpriteSheet) {
    let zoom = editor_state.zoom;
    let (width, height) = editor_state.editor.grid().pixel_size();

    egui::ScrollArea::both()
        .id_salt("grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                egui::vec2(width * zoom, height * zoom),
                egui::Sense::click_and_drag(),
            );
            let origin = response.rect.min;

            handle_pointer(ui, &response, origin, zoom, &mut editor_state.editor);
            paint_grid(&painter, origin, zoom, editor_state, sheet);

            response.context_menu(|ui| {
                if ui.button("Save").clicked() {
                    editor_state.pending_action = Some(PendingAction::Save);
                    ui.close();
                }
                if ui.button("Load").clicked() {
                    editor_state.pending_action = Some(PendingAction::Load);
                    ui.close();
                }
            });
        });
}

/// Screen position to grid-local pixel coordinates
pub fn screen_to_grid(pos: egui::Pos2, origin: egui::Pos2, zoom: f32) -> (f32, f32) {
    ((pos.x - origin.x) / zoom, (pos.y - origin.y) / zoom)
}

fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    origin: egui::Pos2,
    zoom: f32,
    editor: &mut MapEditor,
) {
    let (pressed, released, latest, modifiers) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.latest_pos(),
            i.modifiers,
        )
    });
    let dragging = editor.selection().is_dragging();

    let Some(pos) = latest else {
        if !dragging {
            editor.pointer_leave();
        }
        return;
    };
    let point = screen_to_grid(pos, origin, zoom);

    if pressed && response.hovered() {
        // Shift or Ctrl/Cmd extend the current selection
        editor.pointer_down(point, modifiers.shift || modifiers.command);
    } else if released && dragging {
        editor.pointer_up(point);
    } else if dragging || response.hovered() {
        editor.pointer_move(point);
    } else {
        editor.pointer_leave();
    }
}

fn paint_grid(
    painter: &egui::Painter,
    origin: egui::Pos2,
    zoom: f32,
    editor_state: &EditorState,
    sheet: &SpriteSheet,
) {
    let editor = &editor_state.editor;
    let grid = editor.grid();
    let tile = grid.tile_size() as f32 * zoom;
    let sprite_size = editor.palette().config().sprite_size;

    let tile_rect = |row: u32, col: u32| {
        egui::Rect::from_min_size(
            origin + egui::vec2(col as f32 * tile, row as f32 * tile),
            egui::vec2(tile, tile),
        )
    };

    for cell in grid.tiles() {
        let rect = tile_rect(cell.pos.row, cell.pos.col);
        match cell.sprite {
            Some(sprite) => paint_sprite(painter, rect, sprite, sprite_size, sheet),
            None => {
                painter.rect_filled(rect, 0.0, EditorTheme::TILE_EMPTY);
            }
        }

        if editor_state.show_grid {
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, EditorTheme::GRID_LINE),
                egui::StrokeKind::Inside,
            );
        }

        if cell.selected {
            painter.rect_filled(rect, 0.0, EditorTheme::TILE_SELECTED_FILL);
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(2.0, EditorTheme::TILE_SELECTED_STROKE),
                egui::StrokeKind::Inside,
            );
        }
    }

    if let Some(pos) = editor.hovered() {
        painter.rect_stroke(
            tile_rect(pos.row, pos.col),
            0.0,
            egui::Stroke::new(1.5, EditorTheme::TILE_HOVER_STROKE),
            egui::StrokeKind::Inside,
        );
    }

    if let Some(rect) = editor.selection().drag_rect() {
        let marquee = egui::Rect::from_min_max(
            origin + egui::vec2(rect.min_x * zoom, rect.min_y * zoom),
            origin + egui::vec2(rect.max_x * zoom, rect.max_y * zoom),
        );
        painter.rect_stroke(
            marquee,
            0.0,
            egui::Stroke::new(1.0, EditorTheme::MARQUEE_STROKE),
            egui::StrokeKind::Outside,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_accounts_for_zoom() {
        let origin = egui::pos2(100.0, 50.0);
        assert_eq!(
            screen_to_grid(egui::pos2(196.0, 146.0), origin, 2.0),
            (48.0, 48.0)
        );
        assert_eq!(screen_to_grid(origin, origin, 0.5), (0.0, 0.0));
    }
}
