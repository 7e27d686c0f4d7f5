//! Settings/Preferences dialog

use bevy_egui::egui;

use crate::preferences::{
    EditorPreferences, GRID_DIM_RANGE, PALETTE_DIM_RANGE, TILE_SIZE_RANGE,
};

/// Render the Settings dialog
///
/// Grid, palette and sprite sheet settings apply on the next start.
pub fn render_settings_dialog(
    ctx: &egui::Context,
    show: &mut bool,
    preferences: &mut EditorPreferences,
) {
    if !*show {
        return;
    }

    let mut close_dialog = false;
    let mut save_and_close = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(true)
        .default_size([420.0, 360.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Startup");
                ui.separator();
                ui.checkbox(
                    &mut preferences.auto_open_last_map,
                    "Reopen last map on startup",
                );
                if let Some(path) = &preferences.last_map_path {
                    ui.label(format!("Last map: {}", path));
                }

                ui.add_space(16.0);

                ui.heading("Editing");
                ui.separator();
                ui.checkbox(&mut preferences.show_grid, "Show Grid");
                ui.checkbox(&mut preferences.auto_advance, "Auto-advance after drawing");
                ui.horizontal(|ui| {
                    ui.label("Default Zoom:");
                    ui.add(
                        egui::Slider::new(&mut preferences.zoom, 0.25..=4.0)
                            .suffix("x")
                            .logarithmic(true),
                    );
                });

                ui.add_space(16.0);

                ui.heading("Map (next start)");
                ui.separator();
                egui::Grid::new("map_settings_grid")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Rows:");
                        ui.add(
                            egui::DragValue::new(&mut preferences.grid.rows).range(GRID_DIM_RANGE),
                        );
                        ui.end_row();

                        ui.label("Columns:");
                        ui.add(
                            egui::DragValue::new(&mut preferences.grid.cols).range(GRID_DIM_RANGE),
                        );
                        ui.end_row();

                        ui.label("Tile Size:");
                        ui.add(
                            egui::DragValue::new(&mut preferences.grid.tile_size)
                                .range(TILE_SIZE_RANGE)
                                .suffix("px"),
                        );
                        ui.end_row();

                        ui.label("Sprite Sheet:");
                        ui.text_edit_singleline(&mut preferences.sprite_sheet_path);
                        ui.end_row();

                        ui.label("Sheet Columns:");
                        ui.add(
                            egui::DragValue::new(&mut preferences.palette.columns)
                                .range(PALETTE_DIM_RANGE),
                        );
                        ui.end_row();

                        ui.label("Sheet Rows:");
                        ui.add(
                            egui::DragValue::new(&mut preferences.palette.rows)
                                .range(PALETTE_DIM_RANGE),
                        );
                        ui.end_row();

                        ui.label("Sprite Size:");
                        ui.add(
                            egui::DragValue::new(&mut preferences.palette.sprite_size)
                                .range(TILE_SIZE_RANGE)
                                .suffix("px"),
                        );
                        ui.end_row();
                    });
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save_and_close = true;
                }
                if ui.button("Cancel").clicked() {
                    close_dialog = true;
                }
            });
        });

    if save_and_close {
        if let Err(e) = preferences.save() {
            bevy::log::error!("Failed to save preferences: {}", e);
        }
        *show = false;
    }

    if close_dialog {
        // Reload preferences to discard changes
        *preferences = EditorPreferences::load();
        *show = false;
    }
}
