//! tile_grid_editor - Sprite tile-map editor built on Bevy and egui
//!
//! This crate wraps [`tile_grid_core::MapEditor`] in an interactive editor with:
//! - A sprite palette loaded from a sprite sheet
//! - Marquee selection with additive (Shift/Ctrl) drags
//! - Copy/cut/paste anchored at the tile under the pointer
//! - Undo/redo over whole-grid snapshots
//! - JSON map save/load
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use tile_grid_editor::EditorPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(EditorPlugin::new().with_grid_size(12, 16))
//!         .run();
//! }
//! ```

pub mod commands;
pub mod preferences;
pub mod project;
pub mod ui;

pub use tile_grid_core;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use std::path::PathBuf;
use tile_grid_core::{GridConfig, MapEditor, PaletteConfig};

use commands::handle_keyboard_shortcuts;
use preferences::EditorPreferences;
use project::MapDocument;
use ui::{EditorUiPlugin, PendingAction, SpriteSheet};

/// Initial editor configuration set through [`EditorPlugin`].
///
/// Fields left as `None` fall back to the saved preferences.
#[derive(Clone, Debug, Default)]
pub struct EditorStateConfig {
    pub grid: Option<GridConfig>,
    pub palette: Option<PaletteConfig>,
    /// Sprite sheet image, relative to the assets directory
    pub sprite_sheet: Option<String>,
    pub auto_advance: Option<bool>,
    pub show_grid: Option<bool>,
    /// Initial zoom level (0.25 to 4.0)
    pub initial_zoom: Option<f32>,
}

/// Main editor plugin
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use tile_grid_editor::EditorPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         EditorPlugin::new()
///             .with_grid_size(20, 30)
///             .with_sprite_sheet("tiles/dungeon.png")
///             .with_auto_advance(true)
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct EditorPlugin {
    pub initial_state: EditorStateConfig,
}

impl EditorPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of tile rows and columns
    pub fn with_grid_size(mut self, rows: u32, cols: u32) -> Self {
        let grid = self.initial_state.grid.get_or_insert_with(GridConfig::default);
        grid.rows = rows.max(1);
        grid.cols = cols.max(1);
        self
    }

    /// Set the tile and sprite size in pixels
    pub fn with_tile_size(mut self, size: u32) -> Self {
        let size = size.max(1);
        self.initial_state
            .grid
            .get_or_insert_with(GridConfig::default)
            .tile_size = size;
        self.initial_state
            .palette
            .get_or_insert_with(PaletteConfig::default)
            .sprite_size = size;
        self
    }

    /// Set the palette layout as columns and rows of sprites
    pub fn with_palette_size(mut self, columns: u32, rows: u32) -> Self {
        let palette = self
            .initial_state
            .palette
            .get_or_insert_with(PaletteConfig::default);
        palette.columns = columns.max(1);
        palette.rows = rows.max(1);
        self
    }

    /// Set the sprite sheet image, relative to the assets directory
    pub fn with_sprite_sheet(mut self, path: impl Into<String>) -> Self {
        self.initial_state.sprite_sheet = Some(path.into());
        self
    }

    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.initial_state.auto_advance = Some(enabled);
        self
    }

    pub fn with_initial_grid(mut self, show: bool) -> Self {
        self.initial_state.show_grid = Some(show);
        self
    }

    /// Set the initial zoom level (0.25 to 4.0, default: 1.0)
    pub fn with_initial_zoom(mut self, zoom: f32) -> Self {
        self.initial_state.initial_zoom = Some(zoom.clamp(MIN_ZOOM, MAX_ZOOM));
        self
    }

    /// Plugin config takes precedence over saved preferences
    fn resolve(&self, preferences: &EditorPreferences) -> (EditorState, SpriteSheet) {
        let config = &self.initial_state;
        let grid = config.grid.unwrap_or_else(|| preferences.grid_config());
        let palette = config.palette.unwrap_or_else(|| preferences.palette_config());
        let auto_advance = config.auto_advance.unwrap_or(preferences.auto_advance);

        let mut editor_state =
            EditorState::new(MapEditor::new(grid, palette).with_auto_advance(auto_advance));
        editor_state.show_grid = config.show_grid.unwrap_or(preferences.show_grid);
        editor_state.zoom = config
            .initial_zoom
            .unwrap_or(preferences.zoom)
            .clamp(MIN_ZOOM, MAX_ZOOM);

        let sheet = SpriteSheet::new(
            config
                .sprite_sheet
                .clone()
                .unwrap_or_else(|| preferences.sprite_sheet_path.clone()),
        );

        (editor_state, sheet)
    }
}

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        let preferences = EditorPreferences::load();
        bevy::log::info!("Loaded editor preferences");

        let (editor_state, sheet) = self.resolve(&preferences);
        let grid = editor_state.editor.grid().config();
        bevy::log::info!(
            "EditorPlugin: {}x{} grid of {}px tiles, sprite sheet {:?}",
            grid.rows,
            grid.cols,
            grid.tile_size,
            sheet.path
        );

        app.add_plugins(EguiPlugin::default())
            .add_plugins(EditorUiPlugin)
            .insert_resource(editor_state)
            .insert_resource(sheet)
            .insert_resource(preferences)
            .insert_resource(MapDocument::default())
            .add_systems(Startup, (setup_editor_camera, open_last_map))
            .add_systems(Update, (handle_keyboard_shortcuts, update_window_title));
    }
}

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 4.0;

/// Spawns the editor camera if one doesn't exist
fn setup_editor_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}

/// Reopen the most recent map when the preference is enabled
fn open_last_map(
    mut editor_state: ResMut<EditorState>,
    mut document: ResMut<MapDocument>,
    preferences: Res<EditorPreferences>,
) {
    if !preferences.auto_open_last_map {
        return;
    }
    let Some(path) = preferences.last_map_path.as_ref().map(PathBuf::from) else {
        return;
    };
    if !path.exists() {
        bevy::log::warn!("Last map {:?} no longer exists", path);
        return;
    }

    match document.load(&mut editor_state.editor, &path) {
        Ok(summary) => {
            bevy::log::info!("Reopened {:?} ({} tiles)", path, summary.applied);
        }
        Err(e) => {
            editor_state.error_message = Some(format!("Failed to open last map: {}", e));
        }
    }
}

fn update_window_title(document: Res<MapDocument>, mut windows: Query<&mut Window>) {
    if !document.is_changed() {
        return;
    }
    let title = document.title();
    for mut window in &mut windows {
        if window.title != title {
            window.title = title.clone();
        }
    }
}

/// Global editor state
#[derive(Resource)]
pub struct EditorState {
    /// Grid, palette, selection, clipboard and history
    pub editor: MapEditor,

    pub show_grid: bool,
    pub zoom: f32,

    // Dialogs
    pub show_about_dialog: bool,
    pub show_settings_dialog: bool,
    pub error_message: Option<String>,
    /// Short feedback shown in the status bar
    pub status_message: Option<String>,

    /// Set by menus, shortcuts and panels; consumed once per frame
    pub pending_action: Option<PendingAction>,
}

impl EditorState {
    pub fn new(editor: MapEditor) -> Self {
        Self {
            editor,
            show_grid: true,
            zoom: 1.0,
            show_about_dialog: false,
            show_settings_dialog: false,
            error_message: None,
            status_message: None,
            pending_action: None,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 1.25).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / 1.25).max(MIN_ZOOM);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(MapEditor::default())
    }
}
