//! Sprite references into the shared sprite sheet

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background position written for tiles without a sprite
pub const EMPTY_BG_POSITION: &str = "0% 0%";

/// Location of one sprite inside the shared sprite sheet.
///
/// Stored as the pixel offset of the sprite's top-left corner. The value is
/// `Copy`: assigning a sprite to a tile replaces it, it is never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteRef {
    pub x: u32,
    pub y: u32,
}

impl SpriteRef {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Sprite at a (column, row) cell of a sheet laid out on a regular grid
    pub fn from_cell(column: u32, row: u32, sprite_size: u32) -> Self {
        Self {
            x: column * sprite_size,
            y: row * sprite_size,
        }
    }

    /// CSS-style background position that shows this sprite, e.g. `-48px -96px`
    pub fn bg_position(&self) -> String {
        format!("{} {}", offset_to_css(self.x), offset_to_css(self.y))
    }

    /// Parse a background position produced by [`SpriteRef::bg_position`].
    ///
    /// Returns `None` for the empty sentinel and for anything that is not two
    /// non-positive pixel lengths.
    pub fn parse_bg_position(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == EMPTY_BG_POSITION {
            return None;
        }

        let mut parts = text.split_whitespace();
        let x = css_to_offset(parts.next()?)?;
        let y = css_to_offset(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y })
    }
}

impl fmt::Display for SpriteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Browsers normalize `-0px` to `0px`, so zero is written without a sign
fn offset_to_css(offset: u32) -> String {
    if offset == 0 {
        "0px".to_string()
    } else {
        format!("-{}px", offset)
    }
}

fn css_to_offset(length: &str) -> Option<u32> {
    let value: i64 = length.strip_suffix("px")?.parse().ok()?;
    if value > 0 {
        return None;
    }
    u32::try_from(-value).ok()
}
