//! Map file save/load operations

use super::MapDocument;
use std::path::Path;
use tile_grid_core::{ImportSummary, MapEditor, MapFileError};

#[derive(Debug)]
pub enum DocumentError {
    File(MapFileError),
    NoPath,
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::File(e) => write!(f, "{}", e),
            DocumentError::NoPath => write!(f, "No file path set"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<MapFileError> for DocumentError {
    fn from(e: MapFileError) -> Self {
        DocumentError::File(e)
    }
}

impl MapDocument {
    /// Import a map file onto the editor's grid and adopt its path.
    ///
    /// Loading merges into existing tiles, so the document is only clean
    /// afterwards if the grid was empty beforehand.
    pub fn load(&mut self, editor: &mut MapEditor, path: &Path) -> Result<ImportSummary, DocumentError> {
        let merged = !editor.grid().is_empty();
        let summary = editor.load_from(path)?;
        self.path = Some(path.to_path_buf());
        self.dirty = merged;
        Ok(summary)
    }

    /// Save the map to `path` and adopt it as the current file
    pub fn save(&mut self, editor: &MapEditor, path: &Path) -> Result<(), DocumentError> {
        editor.save_to(path)?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Save to current path if set
    pub fn save_current(&mut self, editor: &MapEditor) -> Result<(), DocumentError> {
        if let Some(path) = self.path.clone() {
            self.save(editor, &path)
        } else {
            Err(DocumentError::NoPath)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_grid_core::{SpriteRef, TilePos};

    #[test]
    fn test_save_current_requires_path() {
        let mut doc = MapDocument::default();
        let editor = MapEditor::default();
        assert!(matches!(
            doc.save_current(&editor),
            Err(DocumentError::NoPath)
        ));
    }

    #[test]
    fn test_save_and_load_clear_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");

        let mut editor = MapEditor::default();
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 3), false);
        editor.draw(SpriteRef::new(48, 0));

        let mut doc = MapDocument::default();
        doc.mark_dirty();
        doc.save(&editor, &path).unwrap();
        assert!(!doc.is_dirty());
        assert_eq!(doc.path.as_deref(), Some(path.as_path()));

        let mut reopened = MapEditor::default();
        let mut other = MapDocument::default();
        let summary = other.load(&mut reopened, &path).unwrap();
        assert_eq!(summary.applied, 4);
        assert_eq!(reopened.export_state(), editor.export_state());
        assert!(!other.is_dirty());
    }

    #[test]
    fn test_load_over_unsaved_tiles_stays_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");

        let mut saved = MapEditor::default();
        saved.select_cells(TilePos::new(1, 1), TilePos::new(1, 1), false);
        saved.draw(SpriteRef::new(48, 0));
        MapDocument::default().save(&saved, &path).unwrap();

        let mut editor = MapEditor::default();
        let mut doc = MapDocument::default();
        editor.select_cells(TilePos::new(0, 0), TilePos::new(0, 0), false);
        editor.draw(SpriteRef::new(96, 0));
        doc.mark_dirty();

        doc.load(&mut editor, &path).unwrap();
        // (0, 0) is empty in the file and keeps the unsaved sprite
        assert_eq!(editor.grid().sprite(TilePos::new(0, 0)), Some(SpriteRef::new(96, 0)));
        assert_eq!(editor.grid().sprite(TilePos::new(1, 1)), Some(SpriteRef::new(48, 0)));
        assert!(doc.is_dirty());
        assert_eq!(doc.title(), "map* - Tile Grid Editor");
    }

    #[test]
    fn test_failed_load_keeps_previous_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = MapDocument::default();
        let mut editor = MapEditor::default();
        let result = doc.load(&mut editor, &dir.path().join("missing.json"));
        assert!(matches!(result, Err(DocumentError::File(_))));
        assert!(doc.path.is_none());
    }
}
