//! Dialog windows and file actions for the editor

use bevy_egui::egui;
use std::path::Path;
use tile_grid_core::EditorAction;

use crate::preferences::EditorPreferences;
use crate::project::MapDocument;
use crate::EditorState;

/// Actions that can be triggered from menus, panels and shortcuts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingAction {
    New,
    Load,
    Save,
    SaveAs,
    Edit(EditorAction),
}

#[cfg(feature = "native")]
const MAP_FILTER_NAME: &str = "Tile Map";
#[cfg(feature = "native")]
const MAP_EXTENSIONS: &[&str] = &["json"];

/// Render all dialogs
pub fn render_dialogs(ctx: &egui::Context, editor_state: &mut EditorState) {
    render_about_dialog(ctx, editor_state);
    render_error_dialog(ctx, editor_state);
}

/// Run a file action: New, Load, Save or SaveAs
pub fn handle_file_action(
    action: PendingAction,
    editor_state: &mut EditorState,
    document: &mut MapDocument,
    preferences: &mut EditorPreferences,
) {
    match action {
        PendingAction::New => {
            editor_state.editor.reset();
            *document = MapDocument::default();
            editor_state.status_message = Some("New map".to_string());
        }
        PendingAction::Load => {
            #[cfg(feature = "native")]
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter(MAP_FILTER_NAME, MAP_EXTENSIONS)
                    .pick_file()
                {
                    load_map(&path, editor_state, document, preferences);
                }
            }
        }
        PendingAction::Save => {
            if let Some(path) = document.path.clone() {
                save_map(&path, editor_state, document, preferences);
            } else {
                // No path set, trigger Save As
                editor_state.pending_action = Some(PendingAction::SaveAs);
            }
        }
        PendingAction::SaveAs => {
            #[cfg(feature = "native")]
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter(MAP_FILTER_NAME, MAP_EXTENSIONS)
                    .set_file_name(format!("{}.json", document.name()))
                    .save_file()
                {
                    save_map(&path, editor_state, document, preferences);
                }
            }
        }
        PendingAction::Edit(_) => {
            // Put edit actions back
            editor_state.pending_action = Some(action);
        }
    }
}

/// Import `path` onto the current grid
pub fn load_map(
    path: &Path,
    editor_state: &mut EditorState,
    document: &mut MapDocument,
    preferences: &mut EditorPreferences,
) {
    match document.load(&mut editor_state.editor, path) {
        Ok(summary) => {
            bevy::log::info!(
                "Loaded {:?}: {} tiles applied, {} skipped",
                path,
                summary.applied,
                summary.skipped
            );
            editor_state.status_message = Some(format!("Loaded {} tiles", summary.applied));
            remember_map(path, preferences);
        }
        Err(e) => {
            editor_state.error_message = Some(format!("Failed to load map: {}", e));
        }
    }
}

pub fn save_map(
    path: &Path,
    editor_state: &mut EditorState,
    document: &mut MapDocument,
    preferences: &mut EditorPreferences,
) {
    match document.save(&editor_state.editor, path) {
        Ok(()) => {
            editor_state.status_message = Some(format!("Saved {}", document.name()));
            remember_map(path, preferences);
        }
        Err(e) => {
            editor_state.error_message = Some(format!("Failed to save: {}", e));
        }
    }
}

fn remember_map(path: &Path, preferences: &mut EditorPreferences) {
    preferences.set_last_map(path);
    if let Err(e) = preferences.save() {
        bevy::log::error!("Failed to save preferences: {}", e);
    }
}

fn render_about_dialog(ctx: &egui::Context, editor_state: &mut EditorState) {
    if !editor_state.show_about_dialog {
        return;
    }

    egui::Window::new("About Tile Grid Editor")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Tile Grid Editor");
            ui.label("Paint sprite maps on a fixed tile grid");
            ui.separator();
            ui.label("Drag to select tiles, Shift or Ctrl to add to the selection");
            ui.label("Click a palette sprite to paint the selection, Enter to repeat it");
            ui.label("Ctrl+C / Ctrl+X / Ctrl+V paste at the tile under the pointer");
            ui.label("Ctrl+Z undo, Ctrl+Y redo, Tab toggles auto-advance");
            ui.separator();
            if ui.button("Close").clicked() {
                editor_state.show_about_dialog = false;
            }
        });
}

fn render_error_dialog(ctx: &egui::Context, editor_state: &mut EditorState) {
    let Some(error_msg) = editor_state.error_message.clone() else {
        return;
    };

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(&error_msg);
            ui.separator();
            if ui.button("OK").clicked() {
                editor_state.error_message = None;
            }
        });
}
