//! User preferences persisted between sessions

mod file;

pub use file::*;

use std::ops::RangeInclusive;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use tile_grid_core::{GridConfig, PaletteConfig};

/// Allowed grid rows and columns
pub const GRID_DIM_RANGE: RangeInclusive<u32> = 1..=256;
/// Allowed palette rows and columns
pub const PALETTE_DIM_RANGE: RangeInclusive<u32> = 1..=64;
/// Allowed tile and sprite edge length in pixels
pub const TILE_SIZE_RANGE: RangeInclusive<u32> = 8..=256;

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Editor preferences stored as `preferences.json` in the platform config directory
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    /// Reopen the last map on startup
    pub auto_open_last_map: bool,
    /// Move the selection to the next tile after drawing
    pub auto_advance: bool,
    pub show_grid: bool,
    pub zoom: f32,
    pub grid: GridConfig,
    pub palette: PaletteConfig,
    /// Sprite sheet image, relative to the assets directory
    pub sprite_sheet_path: String,
    /// Most recently saved or loaded map
    pub last_map_path: Option<String>,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            auto_open_last_map: false,
            auto_advance: false,
            show_grid: true,
            zoom: 1.0,
            grid: GridConfig::default(),
            palette: PaletteConfig::default(),
            sprite_sheet_path: "sprites.png".to_string(),
            last_map_path: None,
        }
    }
}

impl EditorPreferences {
    /// Remember the map that was last saved or loaded
    pub fn set_last_map(&mut self, path: &std::path::Path) {
        self.last_map_path = Some(path.to_string_lossy().to_string());
    }

    /// Grid layout limited to the sizes the settings dialog allows
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            rows: clamp_to(self.grid.rows, &GRID_DIM_RANGE),
            cols: clamp_to(self.grid.cols, &GRID_DIM_RANGE),
            tile_size: clamp_to(self.grid.tile_size, &TILE_SIZE_RANGE),
        }
    }

    /// Palette layout limited to the sizes the settings dialog allows
    pub fn palette_config(&self) -> PaletteConfig {
        PaletteConfig {
            columns: clamp_to(self.palette.columns, &PALETTE_DIM_RANGE),
            rows: clamp_to(self.palette.rows, &PALETTE_DIM_RANGE),
            sprite_size: clamp_to(self.palette.sprite_size, &TILE_SIZE_RANGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: EditorPreferences =
            serde_json::from_str(r#"{ "auto_advance": true, "zoom": 2.0 }"#).unwrap();
        assert!(prefs.auto_advance);
        assert_eq!(prefs.zoom, 2.0);
        assert_eq!(prefs.grid, GridConfig::default());
        assert_eq!(prefs.sprite_sheet_path, "sprites.png");
    }

    #[test]
    fn test_set_last_map() {
        let mut prefs = EditorPreferences::default();
        prefs.set_last_map(std::path::Path::new("maps/town.json"));
        assert_eq!(prefs.last_map_path.as_deref(), Some("maps/town.json"));
    }

    #[test]
    fn test_hand_edited_sizes_are_clamped() {
        let prefs: EditorPreferences = serde_json::from_str(
            r#"{
                "grid": { "rows": 70000, "cols": 0, "tile_size": 2 },
                "palette": { "columns": 4000000000, "rows": 8, "sprite_size": 48 }
            }"#,
        )
        .unwrap();
        let grid = prefs.grid_config();
        assert_eq!((grid.rows, grid.cols, grid.tile_size), (256, 1, 8));
        let palette = prefs.palette_config();
        assert_eq!((palette.columns, palette.rows, palette.sprite_size), (64, 8, 48));
    }
}
