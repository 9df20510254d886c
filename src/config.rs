//! The board definition: background, font, button positions and flower metadata.
//!
//! The file uses the same shape as the export snapshot, so an exported file can be
//! dropped in as `board.json` to make the new layout the starting point.

use crate::board::ButtonBoard;
use crate::button::{FlowerButton, Position};
use crate::constants::DEFAULT_BACKGROUND;
use crate::error::{BoardError, Result};
use crate::export::{ExportData, FlowerEntry, PositionEntry};
use crate::flower::{FlowerRecord, FlowerRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardConfig {
    #[serde(default = "default_background")]
    pub background: PathBuf,
    #[serde(default)]
    pub font: Option<PathBuf>,
    #[serde(flatten)]
    pub data: ExportData,
}

fn default_background() -> PathBuf {
    PathBuf::from(DEFAULT_BACKGROUND)
}

/// (id, name, description, top%, left%)
const DEFAULT_FLOWERS: [(&str, &str, &str, f32, f32); 8] = [
    (
        "rose",
        "白風信子",
        "花語：純潔的愛、思念與祝福。\n一朵朵細小的白花，帶著溫柔的香氣，\n像遠方寄來的問候，靜靜傳遞心意。",
        22.0,
        18.0,
    ),
    (
        "lily",
        "淺紫翠珠",
        "花語：守護與柔情。\n細小的花密集成簇，\n象徵家的聯繫與不離不棄的陪伴。",
        35.0,
        62.0,
    ),
    (
        "tulip",
        "白松蟲花",
        "花語：細膩的愛與體貼的思念。\n柔軟的花心像一顆溫暖的心，\n靜靜守護著家，也守護著想念。",
        48.0,
        30.0,
    ),
    (
        "peony",
        "雪柳",
        "花語：思念與祝福。\n纖細的枝條開滿白花，\n象徵潔淨的情感與新一年的希望。",
        12.0,
        45.0,
    ),
    (
        "orchid",
        "白洋牡丹",
        "花語：光彩奪目的美麗。\n層層疊疊的花瓣，是歲月與溫柔的形狀，\n像媽媽的笑容，永遠溫暖明亮。",
        55.0,
        50.0,
    ),
    (
        "sunflower",
        "淡藍小飛燕",
        "花語：希望與開闊。\n藍色的花莖筆直挺立，\n如同祝願——願日子平靜、心情寬闊。",
        28.0,
        78.0,
    ),
    (
        "hydrangea",
        "白風鈴桔梗",
        "花語：溫柔的祝福、誠摯的心意。\n鈴鐺形花朵在光下微微顫動，\n像一聲輕響的「謝謝你」，\n說著孩子永遠的感激。",
        66.0,
        22.0,
    ),
    (
        "daisy",
        "噴泉草",
        "花語：柔軟與自由。\n輕盈的穗隨風搖曳，\n像時光裡不變的溫柔節奏。",
        72.0,
        70.0,
    ),
];

impl Default for BoardConfig {
    fn default() -> Self {
        let mut data = ExportData::default();
        for (id, name, description, top, left) in DEFAULT_FLOWERS {
            let position = Position::new(top, left);
            data.positions.insert(
                id.to_string(),
                PositionEntry {
                    top: position.top_css(),
                    left: position.left_css(),
                },
            );
            data.flowers.insert(
                id.to_string(),
                FlowerEntry {
                    name: name.to_string(),
                    display_name: name.to_string(),
                    description: description.to_string(),
                },
            );
        }
        Self {
            background: default_background(),
            font: None,
            data,
        }
    }
}

impl BoardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| BoardError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| BoardError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, falling back to the built-in board when it is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded board from {}", path.display());
                config
            }
            Err(BoardError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::info!("No board at {}, using the built-in one", path.display());
                Self::default()
            }
            Err(err) => {
                log::error!("{err}; using the built-in board");
                Self::default()
            }
        }
    }

    /// Resolves the relative paths in this config against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.background.is_relative() {
            self.background = base.join(&self.background);
        }
        if let Some(font) = &mut self.font {
            if font.is_relative() {
                *font = base.join(&*font);
            }
        }
    }

    pub fn registry(&self) -> FlowerRegistry {
        self.data
            .flowers
            .iter()
            .map(|(id, entry)| FlowerRecord::new(id.clone(), entry.name.clone(), entry.description.clone()))
            .collect()
    }

    /// One button per entry in `positions`.
    pub fn board(&self) -> ButtonBoard {
        self.data
            .positions
            .iter()
            .map(|(id, entry)| {
                let position = Position::from_css(&entry.top, &entry.left).unwrap_or_else(|err| {
                    log::warn!("Button {id}: {err}; placing it at the corner");
                    Position::default()
                });
                let position = Position::clamped(position.top, position.left);
                FlowerButton::new(id.clone(), self.label_for(id), position)
            })
            .collect()
    }

    fn label_for(&self, id: &str) -> String {
        match self.data.flowers.get(id) {
            Some(entry) if !entry.display_name.is_empty() => entry.display_name.clone(),
            Some(entry) if !entry.name.is_empty() => entry.name.clone(),
            _ => id.to_string(),
        }
    }
}
