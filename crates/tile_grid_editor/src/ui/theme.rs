//! Editor theme and styling for egui
//!
//! Flat dark theme for the panels plus the colors used to paint the tile
//! canvas and the sprite palette.

use bevy_egui::egui::{self, Color32, CornerRadius, Stroke, Visuals};

pub struct EditorTheme;

impl EditorTheme {
    // -------------------------------------------------------------------------------
    // Panels
    // -------------------------------------------------------------------------------

    pub const BG_WINDOW: Color32 = Color32::from_rgb(40, 41, 47);
    pub const BG_PANEL: Color32 = Color32::from_rgb(52, 54, 60);
    pub const BG_WIDGET: Color32 = Color32::from_rgb(67, 68, 75);
    pub const BG_HOVER: Color32 = Color32::from_rgb(85, 86, 94);
    pub const BORDER_WIDGET: Color32 = Color32::from_rgb(85, 86, 90);

    /// Primary accent blue
    pub const ACCENT_BLUE: Color32 = Color32::from_rgb(45, 130, 209);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(185, 185, 187);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(147, 148, 150);
    pub const ERROR: Color32 = Color32::from_rgb(156, 82, 92);
    pub const WARNING: Color32 = Color32::from_rgb(200, 160, 60);

    // -------------------------------------------------------------------------------
    // Tile canvas
    // -------------------------------------------------------------------------------

    /// Background of a tile with no sprite
    pub const TILE_EMPTY: Color32 = Color32::from_rgb(30, 31, 36);
    pub const GRID_LINE: Color32 = Color32::from_rgb(64, 66, 74);
    /// Tiles in the selection (or the drag preview)
    pub const TILE_SELECTED_FILL: Color32 = Color32::from_rgba_premultiplied(20, 60, 100, 90);
    pub const TILE_SELECTED_STROKE: Color32 = Color32::from_rgb(90, 170, 240);
    /// Paste anchor under the pointer
    pub const TILE_HOVER_STROKE: Color32 = Color32::from_rgb(255, 202, 57);
    pub const MARQUEE_STROKE: Color32 = Color32::WHITE;

    /// Border around the active palette sprite
    pub const PALETTE_ACTIVE: Color32 = Color32::from_rgb(255, 202, 57);

    /// Apply the editor theme to the egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_WINDOW;
        visuals.popup_shadow = egui::Shadow::NONE;
        visuals.window_shadow = egui::Shadow::NONE;

        visuals.widgets.inactive.bg_fill = Self::BG_WIDGET;
        visuals.widgets.inactive.weak_bg_fill = Self::BG_WIDGET;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(4);

        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.weak_bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::BORDER_WIDGET);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(4);

        visuals.widgets.active.bg_fill = Self::ACCENT_BLUE;
        visuals.widgets.active.weak_bg_fill = Self::ACCENT_BLUE;
        visuals.widgets.active.fg_stroke = Stroke::new(1.5, Color32::WHITE);
        visuals.widgets.active.corner_radius = CornerRadius::same(4);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_MUTED);

        visuals.selection.bg_fill = Self::ACCENT_BLUE;
        visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.warn_fg_color = Self::WARNING;
        visuals.error_fg_color = Self::ERROR;

        ctx.set_visuals(visuals);
    }

    /// Stand-in color for a sprite while the sprite sheet is unavailable
    pub fn placeholder_color(x: u32, y: u32) -> Color32 {
        let mix = |v: u32, salt: u32| -> u8 { (60 + (v.wrapping_mul(salt) / 7) % 160) as u8 };
        Color32::from_rgb(mix(x + 1, 37), mix(y + 1, 53), mix(x + y + 1, 71))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_color_is_stable() {
        assert_eq!(
            EditorTheme::placeholder_color(48, 96),
            EditorTheme::placeholder_color(48, 96)
        );
        assert_ne!(
            EditorTheme::placeholder_color(0, 0),
            EditorTheme::placeholder_color(48, 0)
        );
    }
}
