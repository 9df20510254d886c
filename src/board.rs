//! The ordered set of flower buttons on the board.
//!
//! Buttons keep the order they were loaded in; that order drives rendering, hit
//! testing and the export snippets.

use crate::button::{FlowerButton, Position};

/// Manages the button collection with lookups keyed by flower id.
#[derive(Clone, Debug, Default)]
pub struct ButtonBoard {
    buttons: Vec<FlowerButton>,
}

#[allow(dead_code)]
impl ButtonBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Collection Access
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn buttons(&self) -> &[FlowerButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Returns an iterator over the flower ids in board order.
    pub fn flower_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.buttons.iter().map(|b| b.flower_id.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn index_of(&self, flower_id: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.flower_id == flower_id)
    }

    pub fn get(&self, flower_id: &str) -> Option<&FlowerButton> {
        self.buttons.iter().find(|b| b.flower_id == flower_id)
    }

    pub fn get_mut(&mut self, flower_id: &str) -> Option<&mut FlowerButton> {
        self.buttons.iter_mut().find(|b| b.flower_id == flower_id)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Adds a button. A second button for the same flower id is rejected.
    pub fn push(&mut self, button: FlowerButton) -> bool {
        if self.index_of(&button.flower_id).is_some() {
            log::warn!("Duplicate button for flower {:?} ignored", button.flower_id);
            return false;
        }
        self.buttons.push(button);
        true
    }

    pub fn set_label(&mut self, flower_id: &str, label: &str) -> bool {
        match self.get_mut(flower_id) {
            Some(button) => {
                button.label = label.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_position(&mut self, flower_id: &str, position: Position) -> bool {
        match self.get_mut(flower_id) {
            Some(button) => {
                button.position = position;
                true
            }
            None => false,
        }
    }

    pub fn set_dragging(&mut self, flower_id: &str, dragging: bool) {
        if let Some(button) = self.get_mut(flower_id) {
            button.is_dragging = dragging;
        }
    }

    pub fn any_dragging(&self) -> bool {
        self.buttons.iter().any(|b| b.is_dragging)
    }
}

impl FromIterator<FlowerButton> for ButtonBoard {
    fn from_iter<I: IntoIterator<Item = FlowerButton>>(iter: I) -> Self {
        let mut board = Self::new();
        for button in iter {
            board.push(button);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ButtonBoard {
        [
            FlowerButton::new("rose", "白風信子", Position::new(10.0, 10.0)),
            FlowerButton::new("lily", "淺紫翠珠", Position::new(20.0, 30.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_duplicate_flower_rejected() {
        let mut board = board();
        assert!(!board.push(FlowerButton::new("rose", "x", Position::default())));
        assert_eq!(board.len(), 2);
        assert_eq!(board.flower_ids().collect::<Vec<_>>(), vec!["rose", "lily"]);
    }

    #[test]
    fn test_dragging_flags() {
        let mut board = board();
        board.set_dragging("lily", true);
        assert!(board.any_dragging());
        assert!(board.get("lily").unwrap().is_dragging);
        board.set_dragging("lily", false);
        assert!(!board.any_dragging());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut board = board();
        assert!(!board.set_label("cactus", "x"));
        assert!(!board.set_position("cactus", Position::new(1.0, 1.0)));
        board.set_dragging("cactus", true);
        assert!(!board.any_dragging());
    }
}
