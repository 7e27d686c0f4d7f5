//! Map document management for the editor
//!
//! This module tracks which file the map belongs to and whether it has
//! unsaved edits. The tile data itself lives in [`tile_grid_core::MapEditor`].

mod file;

pub use file::*;

use bevy::prelude::Resource;
use std::path::PathBuf;

/// The file backing the map being edited
#[derive(Debug, Clone, Default, Resource)]
pub struct MapDocument {
    pub path: Option<PathBuf>,
    pub dirty: bool,
}

impl MapDocument {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Display name: the file stem, or "Untitled" before the first save
    pub fn name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Window title, with a marker for unsaved changes
    pub fn title(&self) -> String {
        if self.dirty {
            format!("{}* - Tile Grid Editor", self.name())
        } else {
            format!("{} - Tile Grid Editor", self.name())
        }
    }
}
