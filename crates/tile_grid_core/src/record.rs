//! Flat per-tile records used by the JSON map format
//!
//! A map file is a JSON array with one record per tile:
//!
//! ```json
//! [{ "id": 0, "bgPosition": "-48px -96px", "col": "0", "row": "0" }]
//! ```
//!
//! `col` and `row` are decimal strings on the wire and are converted to
//! integers as soon as a record is read. Numeric coordinates and missing
//! fields are accepted when reading; such records are skipped at import
//! rather than failing the whole file.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::grid::{TileGrid, TilePos};
use crate::sprite::{SpriteRef, EMPTY_BG_POSITION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    /// Export order, starting at 0
    #[serde(default)]
    pub id: usize,
    #[serde(default)]
    pub bg_position: String,
    #[serde(default, deserialize_with = "coordinate")]
    pub col: String,
    #[serde(default, deserialize_with = "coordinate")]
    pub row: String,
}

/// Read a coordinate written either as a string or as a bare number
fn coordinate<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

impl TileRecord {
    /// Integer tile position, if both coordinates are decimal numbers
    pub fn pos(&self) -> Option<TilePos> {
        let row = self.row.trim().parse().ok()?;
        let col = self.col.trim().parse().ok()?;
        Some(TilePos::new(row, col))
    }

    pub fn is_empty_sprite(&self) -> bool {
        self.bg_position.trim() == EMPTY_BG_POSITION
    }
}

#[derive(Debug)]
pub enum RecordError {
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::ParseError(e) => write!(f, "Parse error: {}", e),
            RecordError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for RecordError {}

/// Outcome of applying a list of records to a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records that assigned a sprite
    pub applied: usize,
    /// Sentinel, unmatched or malformed records left untouched
    pub skipped: usize,
}

/// One record per tile, in creation order
pub fn export_records(grid: &TileGrid) -> Vec<TileRecord> {
    grid.tiles()
        .iter()
        .enumerate()
        .map(|(id, tile)| TileRecord {
            id,
            bg_position: tile
                .sprite
                .map(|sprite| sprite.bg_position())
                .unwrap_or_else(|| EMPTY_BG_POSITION.to_string()),
            col: tile.pos.col.to_string(),
            row: tile.pos.row.to_string(),
        })
        .collect()
}

/// Assign sprites from records onto matching tiles.
///
/// Sentinel entries never overwrite existing content and records that do not
/// match a tile are ignored, so importing is additive.
pub fn import_records(grid: &mut TileGrid, records: &[TileRecord]) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for record in records {
        if record.is_empty_sprite() {
            summary.skipped += 1;
            continue;
        }

        let Some(pos) = record.pos().filter(|pos| grid.contains(*pos)) else {
            summary.skipped += 1;
            continue;
        };

        match SpriteRef::parse_bg_position(&record.bg_position) {
            Some(sprite) => {
                grid.set_sprite(pos, Some(sprite));
                summary.applied += 1;
            }
            None => {
                warn!(
                    "Skipping record {} with unreadable bgPosition {:?}",
                    record.id, record.bg_position
                );
                summary.skipped += 1;
            }
        }
    }

    summary
}

pub fn parse_records(text: &str) -> Result<Vec<TileRecord>, RecordError> {
    serde_json::from_str(text).map_err(|e| RecordError::ParseError(e.to_string()))
}

pub fn records_to_json(records: &[TileRecord]) -> Result<String, RecordError> {
    serde_json::to_string_pretty(records).map_err(|e| RecordError::SerializeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    fn grid() -> TileGrid {
        TileGrid::new(GridConfig {
            rows: 2,
            cols: 3,
            tile_size: 48,
        })
    }

    #[test]
    fn test_export_wire_format() {
        let mut grid = grid();
        grid.set_sprite(TilePos::new(1, 0), Some(SpriteRef::new(48, 96)));

        let records = export_records(&grid);
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].bg_position, EMPTY_BG_POSITION);
        assert_eq!(records[3].id, 3);
        assert_eq!(records[3].bg_position, "-48px -96px");
        assert_eq!(records[3].col, "0");
        assert_eq!(records[3].row, "1");

        let json = serde_json::to_value(&records[3]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "bgPosition": "-48px -96px", "col": "0", "row": "1" })
        );
    }

    #[test]
    fn test_round_trip_into_empty_grid() {
        let mut source = grid();
        source.set_sprite(TilePos::new(0, 2), Some(SpriteRef::new(0, 0)));
        source.set_sprite(TilePos::new(1, 1), Some(SpriteRef::new(96, 48)));

        let json = records_to_json(&export_records(&source)).unwrap();
        let mut target = grid();
        let summary = import_records(&mut target, &parse_records(&json).unwrap());

        assert_eq!(summary.applied, 2);
        assert_eq!(summary.skipped, 4);
        for tile in source.tiles() {
            assert_eq!(target.sprite(tile.pos), tile.sprite);
        }
    }

    #[test]
    fn test_sentinel_does_not_overwrite() {
        let mut target = grid();
        let existing = SpriteRef::new(48, 0);
        target.set_sprite(TilePos::new(0, 0), Some(existing));

        let records = export_records(&grid());
        import_records(&mut target, &records);
        assert_eq!(target.sprite(TilePos::new(0, 0)), Some(existing));
    }

    #[test]
    fn test_unmatched_and_malformed_records_are_skipped() {
        let mut target = grid();
        let records = parse_records(
            r#"[
                { "id": 0, "bgPosition": "-48px 0px", "col": "9", "row": "0" },
                { "id": 1, "bgPosition": "-48px 0px", "col": "x", "row": "0" },
                { "id": 2, "bgPosition": "left top", "col": "1", "row": "0" },
                { "id": 3, "bgPosition": "-48px 0px", "col": "2", "row": "1" }
            ]"#,
        )
        .unwrap();

        let summary = import_records(&mut target, &records);
        assert_eq!(summary, ImportSummary { applied: 1, skipped: 3 });
        assert_eq!(target.sprite(TilePos::new(1, 2)), Some(SpriteRef::new(48, 0)));
        assert_eq!(target.sprite(TilePos::new(0, 1)), None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse_records("{ not json"),
            Err(RecordError::ParseError(_))
        ));
        assert!(parse_records(r#"{ "id": 0 }"#).is_err());
    }

    #[test]
    fn test_loose_records_are_skipped_individually() {
        let mut target = grid();
        let records = parse_records(
            r#"[
                { "id": 0, "bgPosition": "-48px 0px", "col": 1, "row": 0 },
                { "id": 1, "col": "2", "row": "0" },
                { "id": 2, "bgPosition": "-48px 0px", "col": null, "row": "1" },
                { "id": 3, "bgPosition": "-48px 0px", "col": -1, "row": 1 },
                { "id": 4, "bgPosition": "0px -48px", "col": "2", "row": "1" }
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 5);

        let summary = import_records(&mut target, &records);
        assert_eq!(summary, ImportSummary { applied: 2, skipped: 3 });
        assert_eq!(target.sprite(TilePos::new(0, 1)), Some(SpriteRef::new(48, 0)));
        assert_eq!(target.sprite(TilePos::new(1, 2)), Some(SpriteRef::new(0, 48)));
        assert_eq!(target.sprite(TilePos::new(0, 2)), None);
    }
}
