//! Menu bar UI

use bevy_egui::egui;
use tile_grid_core::EditorAction;

use crate::project::MapDocument;
use crate::EditorState;

use super::PendingAction;

/// Render the menu bar
pub fn render_menu_bar(ctx: &egui::Context, editor_state: &mut EditorState, document: &MapDocument) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("New Map").clicked() {
                    editor_state.pending_action = Some(PendingAction::New);
                    ui.close();
                }
                if ui.button("Load...").clicked() {
                    editor_state.pending_action = Some(PendingAction::Load);
                    ui.close();
                }
                ui.separator();
                if ui.button("Save").clicked() {
                    editor_state.pending_action = Some(PendingAction::Save);
                    ui.close();
                }
                if ui.button("Save As...").clicked() {
                    editor_state.pending_action = Some(PendingAction::SaveAs);
                    ui.close();
                }
                ui.separator();
                if ui.button("Settings...").clicked() {
                    editor_state.show_settings_dialog = true;
                    ui.close();
                }
            });

            // Edit menu
            ui.menu_button("Edit", |ui| {
                let editor = &editor_state.editor;
                let can_undo = editor.history().can_undo();
                let can_redo = editor.history().can_redo();
                let has_selection = !editor.selection().is_empty();
                let has_clipboard = editor.clipboard().has_content();

                let mut clicked = None;
                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo"))
                    .clicked()
                {
                    clicked = Some(EditorAction::Undo);
                }
                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo"))
                    .clicked()
                {
                    clicked = Some(EditorAction::Redo);
                }
                ui.separator();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Cut"))
                    .clicked()
                {
                    clicked = Some(EditorAction::Cut);
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Copy"))
                    .clicked()
                {
                    clicked = Some(EditorAction::Copy);
                }
                // Pasting needs a hovered tile, which the keyboard shortcut provides
                ui.add_enabled(false, egui::Button::new("Paste (Ctrl+V over the grid)"))
                    .on_disabled_hover_text(if has_clipboard {
                        "Hover a tile and press Ctrl+V"
                    } else {
                        "Clipboard is empty"
                    });
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete"))
                    .clicked()
                {
                    clicked = Some(EditorAction::DeleteSelection);
                }
                ui.separator();
                if ui.button("Select All").clicked() {
                    clicked = Some(EditorAction::SelectAll);
                }
                if ui.button("Deselect").clicked() {
                    clicked = Some(EditorAction::ClearSelection);
                }

                if let Some(action) = clicked {
                    editor_state.pending_action = Some(PendingAction::Edit(action));
                    ui.close();
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                if ui
                    .checkbox(&mut editor_state.show_grid, "Show Grid")
                    .clicked()
                {
                    ui.close();
                }
                let mut auto_advance = editor_state.editor.auto_advance();
                if ui.checkbox(&mut auto_advance, "Auto-Advance").clicked() {
                    editor_state.pending_action =
                        Some(PendingAction::Edit(EditorAction::ToggleAutoAdvance));
                    ui.close();
                }
                ui.separator();
                if ui.button("Zoom In").clicked() {
                    editor_state.zoom_in();
                }
                if ui.button("Zoom Out").clicked() {
                    editor_state.zoom_out();
                }
                if ui.button("Reset Zoom").clicked() {
                    editor_state.zoom = 1.0;
                    ui.close();
                }
            });

            // Help menu
            ui.menu_button("Help", |ui| {
                if ui.button("About...").clicked() {
                    editor_state.show_about_dialog = true;
                    ui.close();
                }
            });

            // Document status on the right
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dirty_indicator = if document.is_dirty() { " *" } else { "" };
                ui.label(format!("{}{}", document.name(), dirty_indicator));
            });
        });
    });
}
