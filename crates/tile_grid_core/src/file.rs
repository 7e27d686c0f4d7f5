//! Map file save/load operations

use std::path::Path;

use crate::editor::MapEditor;
use crate::record::{parse_records, records_to_json, ImportSummary, TileRecord};

#[derive(Debug)]
pub enum MapFileError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for MapFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapFileError::IoError(e) => write!(f, "IO error: {}", e),
            MapFileError::ParseError(e) => write!(f, "Parse error: {}", e),
            MapFileError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for MapFileError {}

/// Read tile records from a JSON map file
pub fn load_map_file(path: &Path) -> Result<Vec<TileRecord>, MapFileError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| MapFileError::IoError(e.to_string()))?;
    parse_records(&content).map_err(|e| MapFileError::ParseError(e.to_string()))
}

/// Write tile records to a JSON map file
pub fn save_map_file(path: &Path, records: &[TileRecord]) -> Result<(), MapFileError> {
    let content =
        records_to_json(records).map_err(|e| MapFileError::SerializeError(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| MapFileError::IoError(e.to_string()))
}

impl MapEditor {
    /// Export the map to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), MapFileError> {
        save_map_file(path, &self.export_state())?;
        tracing::info!("Saved map to {:?}", path);
        Ok(())
    }

    /// Import a map file onto the current grid (additive, no history entry)
    pub fn load_from(&mut self, path: &Path) -> Result<ImportSummary, MapFileError> {
        let records = load_map_file(path)?;
        Ok(self.import_state(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridConfig, TilePos};
    use crate::palette::PaletteConfig;
    use crate::sprite::SpriteRef;

    fn editor() -> MapEditor {
        MapEditor::new(
            GridConfig {
                rows: 4,
                cols: 5,
                tile_size: 48,
            },
            PaletteConfig::default(),
        )
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");

        let mut source = editor();
        source.select_cells(TilePos::new(1, 1), TilePos::new(2, 3), false);
        source.draw(SpriteRef::new(96, 144));
        source.save_to(&path).unwrap();

        let mut target = editor();
        let summary = target.load_from(&path).unwrap();
        assert_eq!(summary.applied, 6);
        assert_eq!(target.export_state(), source.export_state());
    }

    #[test]
    fn test_saved_file_is_json_array_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        editor().save_to(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 20);
        assert_eq!(records[19]["row"], "3");
        assert_eq!(records[19]["col"], "4");
        assert_eq!(records[19]["bgPosition"], "0% 0%");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_map_file(&missing),
            Err(MapFileError::IoError(_))
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "[{").unwrap();
        assert!(matches!(
            editor().load_from(&broken),
            Err(MapFileError::ParseError(_))
        ));
    }
}
