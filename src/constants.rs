//! Centralized constants for board sizing, labels, file names, and colors.
//!
//! This module collects the magic numbers and strings used across the board so the
//! rendering code and the state logic agree on them.

use eframe::egui::Color32;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Viewport widths at or below this value use the full viewport height for the board.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Upper bound for a button position on either axis, in percent of the container.
pub const MAX_POSITION_PERCENT: f32 = 95.0;

/// Lower bound for a button position on either axis, in percent of the container.
pub const MIN_POSITION_PERCENT: f32 = 0.0;

/// Width changes smaller than this are not treated as a resize.
pub const RESIZE_EPSILON: f32 = 0.5;

// =============================================================================
// WINDOW CONSTANTS
// =============================================================================

/// Title of the native window.
pub const WINDOW_TITLE: &str = "Flower Board";

/// Initial window width when the application starts.
pub const INITIAL_WINDOW_WIDTH: f32 = 1100.0;

/// Initial window height when the application starts.
pub const INITIAL_WINDOW_HEIGHT: f32 = 760.0;

/// Smallest window the board can be shrunk to.
pub const MIN_WINDOW_SIZE: f32 = 320.0;

// =============================================================================
// FILE CONSTANTS
// =============================================================================

/// Name of the board definition inside the config directory.
pub const BOARD_FILE_NAME: &str = "board.json";

/// Default background image, resolved relative to the config directory.
pub const DEFAULT_BACKGROUND: &str = "flower.jpg";

/// Fixed name of the exported snapshot.
pub const EXPORT_FILE_NAME: &str = "flower-complete-data.json";

/// Places searched for a font that covers CJK glyphs when none is configured.
pub const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

/// Name the fallback font is registered under.
pub const CJK_FONT_NAME: &str = "board-cjk";

// =============================================================================
// TOOLBAR LABELS
// =============================================================================

/// Edit toggle label while edit mode is off.
pub const EDIT_MODE_LABEL: &str = "🎨 Edit Mode";

/// Edit toggle label while edit mode is on.
pub const EDITING_LABEL: &str = "✓ Editing...";

/// Label of the export trigger.
pub const EXPORT_LABEL: &str = "💾 Save All";

// =============================================================================
// NOTICES
// =============================================================================

/// Shown after an edit is written back to the registry.
pub const EDIT_SAVED_NOTICE: &str =
    "Flower details updated! Click \"💾 Save All\" to export the changes.";

// =============================================================================
// BUTTON RENDERING CONSTANTS
// =============================================================================

/// Font size of the button labels.
pub const BUTTON_FONT_SIZE: f32 = 16.0;

/// Horizontal padding between a button edge and its label.
pub const BUTTON_PADDING_X: f32 = 14.0;

/// Vertical padding between a button edge and its label.
pub const BUTTON_PADDING_Y: f32 = 8.0;

/// Corner radius of a flower button.
pub const BUTTON_CORNER_RADIUS: f32 = 18.0;

/// Length of a dash in the edit-mode outline.
pub const EDIT_DASH_LENGTH: f32 = 5.0;

/// Gap between dashes in the edit-mode outline.
pub const EDIT_DASH_GAP: f32 = 3.0;

// =============================================================================
// MODAL CONSTANTS
// =============================================================================

/// Width of the info modal and the edit dialog.
pub const DIALOG_WIDTH: f32 = 380.0;

/// Font size of the flower name heading in the info modal.
pub const MODAL_TITLE_SIZE: f32 = 24.0;

/// Rows shown by the description editor.
pub const DESCRIPTION_ROWS: usize = 6;

// =============================================================================
// COLORS
// =============================================================================

/// Board fill used until the background image is available.
pub const COLOR_BOARD_FALLBACK: Color32 = Color32::from_rgb(238, 232, 222);

/// Button fill in normal mode.
pub const COLOR_BUTTON_BG: Color32 = Color32::from_rgba_premultiplied(180, 180, 180, 200);

/// Button fill while hovered.
pub const COLOR_BUTTON_HOVER_BG: Color32 = Color32::from_rgba_premultiplied(235, 235, 235, 235);

/// Button fill while being dragged.
pub const COLOR_BUTTON_DRAGGING_BG: Color32 = Color32::from_rgba_premultiplied(235, 220, 184, 235);

/// Button label color.
pub const COLOR_BUTTON_TEXT: Color32 = Color32::from_rgb(70, 60, 60);

/// Dashed outline drawn on buttons in edit mode.
pub const COLOR_EDIT_OUTLINE: Color32 = Color32::from_rgb(220, 90, 120);

/// Backdrop behind an open modal.
pub const COLOR_BACKDROP: Color32 = Color32::from_black_alpha(140);

/// Fill of the edit toggle while edit mode is on.
pub const COLOR_TOGGLE_ACTIVE: Color32 = Color32::from_rgb(220, 90, 120);
