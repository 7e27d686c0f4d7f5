//! Toolbar UI

use bevy_egui::egui;
use tile_grid_core::EditorAction;

use super::PendingAction;
use crate::EditorState;

/// Render the toolbar
pub fn render_toolbar(ctx: &egui::Context, editor_state: &mut EditorState) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut clicked = None;

            let history = editor_state.editor.history();
            if ui
                .add_enabled(history.can_undo(), egui::Button::new("Undo"))
                .on_hover_text("Undo (Ctrl+Z)")
                .clicked()
            {
                clicked = Some(EditorAction::Undo);
            }
            if ui
                .add_enabled(history.can_redo(), egui::Button::new("Redo"))
                .on_hover_text("Redo (Ctrl+Y)")
                .clicked()
            {
                clicked = Some(EditorAction::Redo);
            }

            ui.separator();

            let has_selection = !editor_state.editor.selection().is_empty();
            for (action, hint) in [
                (EditorAction::Copy, "Copy (Ctrl+C)"),
                (EditorAction::Cut, "Cut (Ctrl+X)"),
                (EditorAction::DeleteSelection, "Delete (Del)"),
            ] {
                if ui
                    .add_enabled(has_selection, egui::Button::new(action.label()))
                    .on_hover_text(hint)
                    .clicked()
                {
                    clicked = Some(action);
                }
            }

            ui.separator();

            // Drawing moves the selection to the next tile when enabled
            let mut auto_advance = editor_state.editor.auto_advance();
            if ui
                .checkbox(&mut auto_advance, "Auto-advance")
                .on_hover_text("Select the next tile after drawing (Tab)")
                .changed()
            {
                clicked = Some(EditorAction::ToggleAutoAdvance);
            }

            ui.separator();

            // Grid toggle
            ui.checkbox(&mut editor_state.show_grid, "Grid");

            ui.separator();

            // Zoom controls
            if ui.button("-").clicked() {
                editor_state.zoom_out();
            }
            ui.label(format!("{}%", (editor_state.zoom * 100.0) as i32));
            if ui.button("+").clicked() {
                editor_state.zoom_in();
            }

            if let Some(action) = clicked {
                editor_state.pending_action = Some(PendingAction::Edit(action));
            }
        });
    });
}
