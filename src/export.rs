//! Snapshot export: the JSON file plus markup snippets mirrored to the log.

use crate::board::ButtonBoard;
use crate::constants::EXPORT_FILE_NAME;
use crate::error::{BoardError, Result};
use crate::flower::FlowerRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionEntry {
    pub top: String,
    pub left: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlowerEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

/// Positions and flower metadata keyed by flower id.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportData {
    #[serde(default)]
    pub positions: BTreeMap<String, PositionEntry>,
    #[serde(default)]
    pub flowers: BTreeMap<String, FlowerEntry>,
}

impl ExportData {
    /// Reads the live state of every button and its registry record.
    pub fn collect(board: &ButtonBoard, registry: &FlowerRegistry) -> Self {
        let mut data = Self::default();
        for button in board.buttons() {
            let id = button.flower_id.clone();
            data.positions.insert(
                id.clone(),
                PositionEntry {
                    top: button.position.top_css(),
                    left: button.position.left_css(),
                },
            );

            // A button without a record still exports, with empty metadata.
            let (name, description) = registry
                .get(&id)
                .map(|r| (r.name.clone(), r.description.clone()))
                .unwrap_or_default();
            data.flowers.insert(
                id,
                FlowerEntry {
                    name,
                    display_name: button.label.clone(),
                    description,
                },
            );
        }
        data
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One snippet per button, in board order.
pub fn markup_snippets(board: &ButtonBoard) -> Vec<String> {
    board.buttons().iter().map(|b| b.markup()).collect()
}

/// Writes `json` to the fixed export file name inside `dir`.
pub fn write_export(dir: &Path, json: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| BoardError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, json).map_err(|source| BoardError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn log_export(json: &str, board: &ButtonBoard) {
    log::info!("=== COMPLETE FLOWER DATA ===");
    log::info!("Positions and descriptions saved!");
    log::info!("{json}");
    log::info!("=== MARKUP BUTTONS ===");
    for snippet in markup_snippets(board) {
        log::info!("{snippet}");
    }
    log::info!("================================");
}

pub struct ExportReport {
    pub path: PathBuf,
    pub data: ExportData,
}

impl ExportReport {
    pub fn notice(&self) -> String {
        format!(
            "All data saved! Check:\n1. Exported file: {}\n2. The application log for the complete data and markup",
            self.path.display()
        )
    }
}

/// Collects the snapshot, writes it under `dir`, and mirrors it to the log.
pub fn export(board: &ButtonBoard, registry: &FlowerRegistry, dir: &Path) -> Result<ExportReport> {
    let data = ExportData::collect(board, registry);
    let json = data.to_pretty_json()?;
    let path = write_export(dir, &json)?;
    log_export(&json, board);
    log::info!("Exported {} buttons to {}", data.positions.len(), path.display());
    Ok(ExportReport { path, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{FlowerButton, Position};
    use crate::flower::FlowerRecord;
    use std::collections::BTreeSet;

    fn fixtures() -> (ButtonBoard, FlowerRegistry) {
        let board = [
            FlowerButton::new("rose", "白風信子", Position::new(30.0, 12.5)),
            FlowerButton::new("daisy", "噴泉草", Position::new(80.0, 60.0)),
            FlowerButton::new("ghost", "???", Position::new(5.0, 5.0)),
        ]
        .into_iter()
        .collect();
        let registry = [
            FlowerRecord::new("rose", "白風信子", "純潔的愛"),
            FlowerRecord::new("daisy", "噴泉草", "柔軟與自由"),
            FlowerRecord::new("lily", "淺紫翠珠", "守護與柔情"),
        ]
        .into_iter()
        .collect();
        (board, registry)
    }

    #[test]
    fn test_positions_match_buttons() {
        let (board, registry) = fixtures();
        let data = ExportData::collect(&board, &registry);

        let keys: BTreeSet<&str> = data.positions.keys().map(String::as_str).collect();
        let ids: BTreeSet<&str> = board.flower_ids().collect();
        assert_eq!(keys, ids);
        assert!(!data.flowers.contains_key("lily"));

        for button in board.buttons() {
            let entry = &data.positions[&button.flower_id];
            assert_eq!(entry.top, button.position.top_css());
            assert_eq!(entry.left, button.position.left_css());
        }
        assert_eq!(data.positions["rose"].left, "12.5%");
    }

    #[test]
    fn test_missing_record_exports_empty() {
        let (board, registry) = fixtures();
        let data = ExportData::collect(&board, &registry);
        let ghost = &data.flowers["ghost"];
        assert_eq!(ghost.name, "");
        assert_eq!(ghost.description, "");
        assert_eq!(ghost.display_name, "???");
    }

    #[test]
    fn test_json_shape() {
        let (board, registry) = fixtures();
        let json = ExportData::collect(&board, &registry).to_pretty_json().unwrap();
        assert!(json.contains("\n  \"positions\": {"));
        assert!(json.contains("\"displayName\": \"白風信子\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["positions"]["daisy"]["top"], "80%");
        assert_eq!(value["flowers"]["rose"]["description"], "純潔的愛");
    }

    #[test]
    fn test_export_writes_fixed_file() {
        let (board, registry) = fixtures();
        let dir = std::env::temp_dir().join(format!("flower_board_export_{}", std::process::id()));
        let report = export(&board, &registry, &dir).unwrap();

        assert_eq!(report.path, dir.join("flower-complete-data.json"));
        let text = fs::read_to_string(&report.path).unwrap();
        let parsed: ExportData = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report.data);
        assert!(report.notice().contains("flower-complete-data.json"));
    }

    #[test]
    fn test_markup_in_board_order() {
        let (board, _) = fixtures();
        let snippets = markup_snippets(&board);
        assert_eq!(snippets.len(), 3);
        assert!(snippets[0].contains("data-flower=\"rose\""));
        assert!(snippets[1].contains("data-flower=\"daisy\""));
    }
}
