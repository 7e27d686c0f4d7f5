//! Core data structures for tile_grid
//!
//! This crate holds everything the editor knows about a map, with no
//! rendering dependency:
//! - `TileGrid` - Fixed rows × columns of tiles holding optional sprites
//! - `SpritePalette` - The catalog of sprites in the shared sheet
//! - `SelectionEngine` - Marquee selection over tile bounds
//! - `TileClipboard` - Relative-positioned copy buffer
//! - `SnapshotHistory` - Undo/redo over full-grid snapshots
//! - `MapEditor` - The controller that owns all of the above
//! - `TileRecord` - The flat JSON map format

mod action;
mod clipboard;
mod editor;
mod file;
mod grid;
mod history;
mod palette;
mod record;
mod selection;
mod sprite;

pub use action::EditorAction;
pub use clipboard::{ClipboardEntry, TileClipboard};
pub use editor::MapEditor;
pub use file::{load_map_file, save_map_file, MapFileError};
pub use grid::{GridConfig, Tile, TileGrid, TilePos};
pub use history::{GridSnapshot, SnapshotCell, SnapshotHistory};
pub use palette::{PaletteConfig, SpritePalette};
pub use record::{
    export_records, import_records, parse_records, records_to_json, ImportSummary, RecordError,
    TileRecord,
};
pub use selection::{intersecting_tiles, PixelRect, SelectionEngine, SelectionPhase};
pub use sprite::{SpriteRef, EMPTY_BG_POSITION};
