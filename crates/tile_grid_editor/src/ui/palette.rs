//! Sprite palette panel

use bevy_egui::egui;
use tile_grid_core::EditorAction;

use super::{paint_sprite, EditorTheme, ImageLoadState, PendingAction, SpriteSheet};
use crate::EditorState;

/// Render the palette. Clicking a sprite makes it active and paints the selection.
pub fn render_palette(ui: &mut egui::Ui, editor_state: &mut EditorState, sheet: &SpriteSheet) {
    let palette = editor_state.editor.palette();
    let config = palette.config();
    let active = editor_state.editor.active_sprite();
    let cell = (config.sprite_size as f32).clamp(16.0, 40.0);

    match &sheet.load_state {
        ImageLoadState::Failed(msg) => {
            ui.colored_label(EditorTheme::WARNING, msg);
        }
        ImageLoadState::Pending | ImageLoadState::Loading => {
            ui.label("Loading sprite sheet...");
        }
        ImageLoadState::Loaded => {}
    }

    match active {
        Some(sprite) => ui.label(format!("Active: {}", sprite.bg_position())),
        None => ui.label("Active: (none)"),
    };
    ui.separator();

    let mut chosen = None;
    egui::ScrollArea::vertical()
        .id_salt("palette_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(2.0, 2.0);
            for row in 0..config.rows {
                ui.horizontal(|ui| {
                    for column in 0..config.columns {
                        let index = (row * config.columns + column) as usize;
                        let Some(sprite) = palette.get(index) else {
                            continue;
                        };

                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(cell, cell), egui::Sense::click());
                        paint_sprite(ui.painter(), rect, sprite, config.sprite_size, sheet);

                        if active == Some(sprite) {
                            ui.painter().rect_stroke(
                                rect,
                                0.0,
                                egui::Stroke::new(2.0, EditorTheme::PALETTE_ACTIVE),
                                egui::StrokeKind::Inside,
                            );
                        } else if response.hovered() {
                            ui.painter().rect_stroke(
                                rect,
                                0.0,
                                egui::Stroke::new(1.0, egui::Color32::WHITE),
                                egui::StrokeKind::Inside,
                            );
                        }

                        if response
                            .on_hover_text(format!("#{} {}", index, sprite.bg_position()))
                            .clicked()
                        {
                            chosen = Some(index);
                        }
                    }
                });
            }
        });

    if let Some(index) = chosen {
        editor_state.pending_action = Some(PendingAction::Edit(EditorAction::ChooseSprite(index)));
    }
}
