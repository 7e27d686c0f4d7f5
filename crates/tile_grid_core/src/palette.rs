//! Fixed catalog of sprites available for painting

use serde::{Deserialize, Serialize};

use crate::sprite::SpriteRef;

/// Layout of the shared sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Sprites per sheet row
    pub columns: u32,
    /// Sprite rows in the sheet
    pub rows: u32,
    /// Edge length of one sprite in sheet pixels
    pub sprite_size: u32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 8,
            sprite_size: 48,
        }
    }
}

/// Selectable sprites, enumerated row-major across the sheet
#[derive(Debug, Clone)]
pub struct SpritePalette {
    config: PaletteConfig,
    entries: Vec<SpriteRef>,
}

impl SpritePalette {
    pub fn new(config: PaletteConfig) -> Self {
        let capacity = (config.columns as usize)
            .checked_mul(config.rows as usize)
            .unwrap_or_default();
        let mut entries = Vec::with_capacity(capacity);
        for row in 0..config.rows {
            for column in 0..config.columns {
                entries.push(SpriteRef::from_cell(column, row, config.sprite_size));
            }
        }
        Self { config, entries }
    }

    pub fn config(&self) -> PaletteConfig {
        self.config
    }

    pub fn entries(&self) -> &[SpriteRef] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<SpriteRef> {
        self.entries.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_of(&self, sprite: SpriteRef) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == sprite)
    }

    /// Sprite sheet (column, row) of a palette entry
    pub fn cell_of(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.entries.len() {
            return None;
        }
        let columns = self.config.columns.max(1) as usize;
        Some(((index % columns) as u32, (index / columns) as u32))
    }
}

impl Default for SpritePalette {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_enumerates_sheet_row_major() {
        let palette = SpritePalette::new(PaletteConfig {
            columns: 3,
            rows: 2,
            sprite_size: 16,
        });
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.get(0), Some(SpriteRef::new(0, 0)));
        assert_eq!(palette.get(2), Some(SpriteRef::new(32, 0)));
        assert_eq!(palette.get(4), Some(SpriteRef::new(16, 16)));
        assert_eq!(palette.get(6), None);
        assert_eq!(palette.cell_of(4), Some((1, 1)));
        assert_eq!(palette.index_of(SpriteRef::new(16, 16)), Some(4));
    }
}
