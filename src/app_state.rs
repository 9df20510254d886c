//! Application state shared by every handler: registry, buttons, mode flag, and the
//! transient modal, dialog and drag sessions.
//!
//! Nothing here touches egui's `Context`, so every interaction can be driven from tests
//! with plain geometry.

use crate::board::ButtonBoard;
use crate::button::Position;
use crate::config::BoardConfig;
use crate::constants::{EDITING_LABEL, EDIT_MODE_LABEL, EDIT_SAVED_NOTICE};
use crate::drag::DragController;
use crate::edit_dialog::{EditDialog, EditForm};
use crate::export;
use crate::flower::FlowerRegistry;
use crate::modal::InfoModal;
use eframe::egui::{Pos2, Rect};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Acknowledgment for the operator, shown as a blocking dialog by the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Where a button click went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickRoute {
    InfoModal,
    EditDialog,
    Ignored,
}

pub struct AppState {
    registry: FlowerRegistry,
    board: ButtonBoard,
    edit_mode: bool,
    info: InfoModal,
    edit: EditDialog,
    drag: DragController,
    notices: VecDeque<Notice>,
}

impl AppState {
    pub fn new(registry: FlowerRegistry, board: ButtonBoard) -> Self {
        Self {
            registry,
            board,
            edit_mode: false,
            info: InfoModal::new(),
            edit: EditDialog::new(),
            drag: DragController::new(),
            notices: VecDeque::new(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.registry(), config.board())
    }

    pub fn registry(&self) -> &FlowerRegistry {
        &self.registry
    }

    pub fn board(&self) -> &ButtonBoard {
        &self.board
    }

    pub fn info(&self) -> &InfoModal {
        &self.info
    }

    pub fn edit_dialog(&self) -> &EditDialog {
        &self.edit
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Click routing and info modal
    // ─────────────────────────────────────────────────────────────────────────────

    /// Sends a click to the edit dialog in edit mode, otherwise to the info modal.
    pub fn click_button(&mut self, flower_id: &str) -> ClickRoute {
        if self.edit_mode {
            if self.edit.open(&self.registry, &self.board, flower_id) {
                ClickRoute::EditDialog
            } else {
                ClickRoute::Ignored
            }
        } else if self.info.show(&self.registry, flower_id) {
            ClickRoute::InfoModal
        } else {
            ClickRoute::Ignored
        }
    }

    pub fn hide_info(&mut self) {
        self.info.hide();
    }

    pub fn handle_escape(&mut self) -> bool {
        self.info.handle_escape()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Edit mode
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        if !self.edit_mode {
            self.drag.end(&mut self.board);
        }
        log::info!("Edit mode {}", if self.edit_mode { "on" } else { "off" });
        self.edit_mode
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.edit_mode {
            EDITING_LABEL
        } else {
            EDIT_MODE_LABEL
        }
    }

    pub fn export_visible(&self) -> bool {
        self.edit_mode
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dragging
    // ─────────────────────────────────────────────────────────────────────────────

    /// Starts a drag; only possible in edit mode.
    pub fn begin_drag(&mut self, flower_id: &str, pointer: Pos2, button_top_left: Pos2) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.drag
            .begin(&mut self.board, flower_id, pointer, button_top_left)
    }

    pub fn drag_to(&mut self, pointer: Pos2, container: Rect) -> Option<Position> {
        self.drag.update(&mut self.board, pointer, container)
    }

    pub fn end_drag(&mut self) -> Option<String> {
        self.drag.end(&mut self.board)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Edit dialog
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.edit.form_mut()
    }

    pub fn save_edit(&mut self) -> Option<String> {
        let saved = self.edit.save(&mut self.registry, &mut self.board)?;
        self.notices
            .push_back(Notice::Info(EDIT_SAVED_NOTICE.to_string()));
        Some(saved)
    }

    pub fn close_edit(&mut self) {
        self.edit.close();
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Export and notices
    // ─────────────────────────────────────────────────────────────────────────────

    /// Writes the snapshot into `dir` and queues the matching notice.
    pub fn export(&mut self, dir: &Path) -> Option<PathBuf> {
        match export::export(&self.board, &self.registry, dir) {
            Ok(report) => {
                log::debug!("Export covered {} flowers", report.data.flowers.len());
                self.notices.push_back(Notice::Info(report.notice()));
                Some(report.path)
            }
            Err(err) => {
                log::error!("Export failed: {err}");
                self.notices
                    .push_back(Notice::Error(format!("Export failed: {err}")));
                None
            }
        }
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }
}
