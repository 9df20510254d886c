//! Pointer drag for repositioning buttons: idle → dragging → idle.

use crate::board::ButtonBoard;
use crate::button::Position;
use eframe::egui::{Pos2, Rect, Vec2};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        flower_id: String,
        /// Pointer position relative to the button's top-left corner at grab time.
        offset: Vec2,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { flower_id, .. } => Some(flower_id),
            DragState::Idle => None,
        }
    }

    /// Grabs the button for `flower_id`. Fails when the board has no such button.
    pub fn begin(
        &mut self,
        board: &mut ButtonBoard,
        flower_id: &str,
        pointer: Pos2,
        button_top_left: Pos2,
    ) -> bool {
        if board.get(flower_id).is_none() {
            return false;
        }
        if self.is_dragging() {
            self.end(board);
        }

        board.set_dragging(flower_id, true);
        self.state = DragState::Dragging {
            flower_id: flower_id.to_string(),
            offset: pointer - button_top_left,
        };
        log::debug!("Drag started for {flower_id}");
        true
    }

    /// Moves the grabbed button so it follows `pointer`, clamped to the container.
    pub fn update(
        &mut self,
        board: &mut ButtonBoard,
        pointer: Pos2,
        container: Rect,
    ) -> Option<Position> {
        let DragState::Dragging { flower_id, offset } = &self.state else {
            return None;
        };
        let position = position_for(pointer, *offset, container)?;
        board.set_position(flower_id, position);
        Some(position)
    }

    /// Releases the grabbed button. Returns its flower id if a drag was in progress.
    pub fn end(&mut self, board: &mut ButtonBoard) -> Option<String> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { flower_id, .. } => {
                board.set_dragging(&flower_id, false);
                log::debug!("Drag ended for {flower_id}");
                Some(flower_id)
            }
            DragState::Idle => None,
        }
    }
}

/// Converts a pointer position to a clamped percentage position inside `container`.
///
/// Returns `None` for a container without area.
pub fn position_for(pointer: Pos2, offset: Vec2, container: Rect) -> Option<Position> {
    let width = container.width();
    let height = container.height();
    if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
        return None;
    }

    let x = pointer.x - container.min.x - offset.x;
    let y = pointer.y - container.min.y - offset.y;

    Some(Position::clamped(y / height * 100.0, x / width * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::FlowerButton;
    use eframe::egui::{pos2, vec2};

    fn setup() -> (ButtonBoard, Rect) {
        let board = [FlowerButton::new("rose", "白風信子", Position::new(10.0, 10.0))]
            .into_iter()
            .collect();
        let container = Rect::from_min_size(pos2(0.0, 40.0), vec2(1000.0, 500.0));
        (board, container)
    }

    #[test]
    fn test_drag_moves_by_percentage() {
        let (mut board, container) = setup();
        let mut drag = DragController::new();
        // Button top-left sits at (100, 90); grab it 5px right and 5px down.
        assert!(drag.begin(&mut board, "rose", pos2(105.0, 95.0), pos2(100.0, 90.0)));
        assert!(board.get("rose").unwrap().is_dragging);

        let p = drag.update(&mut board, pos2(505.0, 295.0), container).unwrap();
        assert_eq!(p, Position::new(50.0, 50.0));
        assert_eq!(board.get("rose").unwrap().position, Position::new(50.0, 50.0));

        assert_eq!(drag.end(&mut board).as_deref(), Some("rose"));
        assert!(!board.any_dragging());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_positions_stay_within_bounds() {
        let (mut board, container) = setup();
        let mut drag = DragController::new();
        drag.begin(&mut board, "rose", pos2(100.0, 90.0), pos2(100.0, 90.0));

        let pointers = [
            pos2(-5000.0, -5000.0),
            pos2(5000.0, 5000.0),
            pos2(999.0, 41.0),
            pos2(0.0, 539.0),
            pos2(-1.0, 10_000.0),
            pos2(480.0, 260.0),
        ];
        for pointer in pointers {
            let p = drag.update(&mut board, pointer, container).unwrap();
            assert!((0.0..=95.0).contains(&p.top), "top {} out of range", p.top);
            assert!((0.0..=95.0).contains(&p.left), "left {} out of range", p.left);
        }
        let far = drag.update(&mut board, pos2(5000.0, 5000.0), container).unwrap();
        assert_eq!(far, Position::new(95.0, 95.0));
    }

    #[test]
    fn test_update_without_session_is_noop() {
        let (mut board, container) = setup();
        let mut drag = DragController::new();
        assert_eq!(drag.update(&mut board, pos2(300.0, 300.0), container), None);
        assert_eq!(board.get("rose").unwrap().position, Position::new(10.0, 10.0));
        assert_eq!(drag.end(&mut board), None);
    }

    #[test]
    fn test_begin_unknown_button_fails() {
        let (mut board, _) = setup();
        let mut drag = DragController::new();
        assert!(!drag.begin(&mut board, "cactus", pos2(0.0, 0.0), pos2(0.0, 0.0)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_zero_sized_container_keeps_position() {
        let (mut board, _) = setup();
        let mut drag = DragController::new();
        drag.begin(&mut board, "rose", pos2(0.0, 0.0), pos2(0.0, 0.0));
        let empty = Rect::from_min_size(pos2(0.0, 0.0), vec2(0.0, 300.0));
        assert_eq!(drag.update(&mut board, pos2(50.0, 50.0), empty), None);
        assert_eq!(board.get("rose").unwrap().position, Position::new(10.0, 10.0));
    }
}
