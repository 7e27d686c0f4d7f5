//! Editor UI components using bevy_egui
//!
//! This module provides the panels, dialogs and the tile canvas, plus the
//! system that applies the actions they queue.

mod dialogs;
mod grid_view;
mod menu_bar;
mod palette;
mod settings_dialog;
mod theme;
mod toolbar;

pub use dialogs::*;
pub use grid_view::{render_grid_view, screen_to_grid};
pub use menu_bar::*;
pub use palette::render_palette;
pub use settings_dialog::render_settings_dialog;
pub use theme::EditorTheme;
pub use toolbar::render_toolbar;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass, EguiTextureHandle};
use tile_grid_core::{EditorAction, SpriteRef};

use crate::preferences::EditorPreferences;
use crate::project::MapDocument;
use crate::EditorState;

/// State of an image load operation
#[derive(Debug, Clone, PartialEq)]
pub enum ImageLoadState {
    /// Not yet started loading
    Pending,
    Loading,
    Loaded,
    Failed(String),
}

/// The sprite sheet shared by the palette and the canvas
#[derive(Resource, Debug, Clone)]
pub struct SpriteSheet {
    /// Image path relative to the assets directory
    pub path: String,
    pub handle: Option<Handle<Image>>,
    /// Registered egui texture with its width and height in pixels
    pub texture: Option<(egui::TextureId, f32, f32)>,
    pub load_state: ImageLoadState,
}

impl SpriteSheet {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            handle: None,
            texture: None,
            load_state: ImageLoadState::Pending,
        }
    }

    /// Texture and UV rectangle for one sprite, once the sheet is loaded
    pub fn sprite_uv(&self, sprite: SpriteRef, sprite_size: u32) -> Option<(egui::TextureId, egui::Rect)> {
        let (texture_id, width, height) = self.texture?;
        Some((texture_id, sprite_uv_rect(sprite, sprite_size, width, height)))
    }
}

/// Normalized UV rectangle of `sprite` in a sheet of `width` x `height` pixels
pub fn sprite_uv_rect(sprite: SpriteRef, sprite_size: u32, width: f32, height: f32) -> egui::Rect {
    let size = sprite_size as f32;
    egui::Rect::from_min_max(
        egui::pos2(sprite.x as f32 / width, sprite.y as f32 / height),
        egui::pos2(
            (sprite.x as f32 + size) / width,
            (sprite.y as f32 + size) / height,
        ),
    )
}

/// Draw a sprite into `rect`, or a placeholder color while the sheet is unavailable
pub fn paint_sprite(
    painter: &egui::Painter,
    rect: egui::Rect,
    sprite: SpriteRef,
    sprite_size: u32,
    sheet: &SpriteSheet,
) {
    match sheet.sprite_uv(sprite, sprite_size) {
        Some((texture_id, uv)) => {
            painter.image(texture_id, rect, uv, egui::Color32::WHITE);
        }
        None => {
            painter.rect_filled(rect, 0.0, EditorTheme::placeholder_color(sprite.x, sprite.y));
        }
    }
}

/// Main UI plugin
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (load_sprite_sheet_texture, process_pending_actions),
        )
        .add_systems(EguiPrimaryContextPass, render_ui);
    }
}

/// Load the sprite sheet and register it with egui once it is ready
fn load_sprite_sheet_texture(
    mut sheet: ResMut<SpriteSheet>,
    mut contexts: EguiContexts,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
) {
    use bevy::asset::LoadState;

    if matches!(
        sheet.load_state,
        ImageLoadState::Loaded | ImageLoadState::Failed(_)
    ) {
        return;
    }

    let Some(handle) = sheet.handle.clone() else {
        if sheet.path.is_empty() {
            sheet.load_state = ImageLoadState::Failed("No sprite sheet configured".to_string());
            return;
        }
        let path = sheet.path.clone();
        sheet.handle = Some(asset_server.load(path));
        sheet.load_state = ImageLoadState::Loading;
        return;
    };

    match asset_server.load_state(&handle) {
        LoadState::Loaded => {
            if let Some(image) = images.get(&handle) {
                let width = image.width() as f32;
                let height = image.height() as f32;

                let texture_id = contexts.add_image(EguiTextureHandle::Strong(handle.clone()));
                sheet.texture = Some((texture_id, width, height));
                sheet.load_state = ImageLoadState::Loaded;
                bevy::log::info!(
                    "Loaded sprite sheet {:?} ({}x{})",
                    sheet.path,
                    width,
                    height
                );
            }
        }
        LoadState::Failed(err) => {
            bevy::log::warn!("Failed to load sprite sheet {:?}: {}", sheet.path, err);
            sheet.load_state = ImageLoadState::Failed(format!(
                "Sprite sheet {} could not be loaded",
                sheet.path
            ));
        }
        _ => {}
    }
}

fn render_ui(
    mut contexts: EguiContexts,
    mut editor_state: ResMut<EditorState>,
    mut preferences: ResMut<EditorPreferences>,
    document: Res<MapDocument>,
    sheet: Res<SpriteSheet>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    EditorTheme::apply(ctx);

    render_menu_bar(ctx, &mut editor_state, &document);
    render_settings_dialog(
        ctx,
        &mut editor_state.show_settings_dialog,
        &mut preferences,
    );
    render_toolbar(ctx, &mut editor_state);

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        render_status_bar(ui, &editor_state);
    });

    egui::SidePanel::left("palette")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Sprites");
            render_palette(ui, &mut editor_state, &sheet);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        render_grid_view(ui, &mut editor_state, &sheet);
    });

    render_dialogs(ctx, &mut editor_state);
}

fn render_status_bar(ui: &mut egui::Ui, editor_state: &EditorState) {
    let editor = &editor_state.editor;
    ui.horizontal(|ui| {
        ui.label(format!("Selected: {}", editor.selection().selected().len()));
        ui.separator();
        ui.label(format!("Clipboard: {}", editor.clipboard().entries().len()));
        ui.separator();
        match editor.hovered() {
            Some(pos) => ui.label(format!("Tile: {}, {}", pos.row, pos.col)),
            None => ui.label("Tile: -"),
        };
        ui.separator();
        let history = editor.history();
        ui.label(format!(
            "History: {}/{}",
            history.cursor().map_or(0, |cursor| cursor + 1),
            history.len()
        ));
        ui.separator();
        ui.label(format!("Zoom: {}%", (editor_state.zoom * 100.0) as i32));
        if editor.auto_advance() {
            ui.separator();
            ui.label("Auto-advance");
        }

        if let Some(message) = &editor_state.status_message {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(message);
            });
        }
    });
}

/// System to process pending actions queued by the UI and shortcuts
fn process_pending_actions(
    mut editor_state: ResMut<EditorState>,
    mut document: ResMut<MapDocument>,
    mut preferences: ResMut<EditorPreferences>,
) {
    let Some(action) = editor_state.pending_action.take() else {
        return;
    };

    match action {
        PendingAction::Edit(edit) => {
            apply_edit_action(&mut editor_state, &mut document, edit);
            if edit == EditorAction::ToggleAutoAdvance {
                preferences.auto_advance = editor_state.editor.auto_advance();
                if let Err(e) = preferences.save() {
                    bevy::log::error!("Failed to save preferences: {}", e);
                }
            }
        }
        // File operations are handled in dialogs.rs
        file_action => {
            handle_file_action(file_action, &mut editor_state, &mut document, &mut preferences);
        }
    }
}

/// Apply an editing action, marking the document dirty if tiles changed
pub fn apply_edit_action(
    editor_state: &mut EditorState,
    document: &mut MapDocument,
    action: EditorAction,
) -> bool {
    let changed = editor_state.editor.dispatch(action);
    if changed {
        if action.edits_tiles() {
            document.mark_dirty();
        }
        editor_state.status_message = Some(action.label().to_string());
    }
    changed
}
