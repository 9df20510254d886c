use crate::constants::{CJK_FONT_CANDIDATES, CJK_FONT_NAME};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use std::path::{Path, PathBuf};

/// Picks the configured font if it exists, else the first system candidate that does.
pub fn find_font(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        log::warn!("Configured font {} not found", path.display());
    }
    CJK_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Registers a CJK-capable font as a fallback so the flower names render.
pub fn install_fonts(ctx: &egui::Context, configured: Option<&Path>) {
    let Some(path) = find_font(configured) else {
        log::warn!("No CJK font found; flower names may not render");
        return;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("Failed to read font {}: {err}", path.display());
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("Using font {}", path.display());
}
