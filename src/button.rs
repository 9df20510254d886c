use crate::constants::{MAX_POSITION_PERCENT, MIN_POSITION_PERCENT};
use crate::error::{BoardError, Result};
use eframe::egui::{pos2, Pos2, Rect};

/// Position of a button's top-left corner in percent of the board container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

impl Position {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Clamps both axes into the range a button may occupy.
    pub fn clamped(top: f32, left: f32) -> Self {
        Self {
            top: top.clamp(MIN_POSITION_PERCENT, MAX_POSITION_PERCENT),
            left: left.clamp(MIN_POSITION_PERCENT, MAX_POSITION_PERCENT),
        }
    }

    pub fn top_css(&self) -> String {
        format_percent(self.top)
    }

    pub fn left_css(&self) -> String {
        format_percent(self.left)
    }

    /// Parses `top`/`left` style strings such as `"12.5%"`.
    pub fn from_css(top: &str, left: &str) -> Result<Self> {
        Ok(Self::new(parse_percent(top)?, parse_percent(left)?))
    }

    /// Screen position of the top-left corner inside `container`.
    pub fn to_screen(&self, container: Rect) -> Pos2 {
        pos2(
            container.min.x + container.width() * self.left / 100.0,
            container.min.y + container.height() * self.top / 100.0,
        )
    }
}

pub fn format_percent(value: f32) -> String {
    format!("{value}%")
}

pub fn parse_percent(text: &str) -> Result<f32> {
    let trimmed = text.trim();
    trimmed
        .strip_suffix('%')
        .and_then(|number| number.trim().parse::<f32>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| BoardError::Percent(text.to_string()))
}

/// A clickable flower button on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowerButton {
    pub flower_id: String,
    pub label: String,
    pub position: Position,
    pub is_dragging: bool,
}

impl FlowerButton {
    pub fn new(flower_id: impl Into<String>, label: impl Into<String>, position: Position) -> Self {
        Self {
            flower_id: flower_id.into(),
            label: label.into(),
            position,
            is_dragging: false,
        }
    }

    /// Markup snippet reproducing this button's position and label.
    pub fn markup(&self) -> String {
        format!(
            "<button class=\"flower-btn\" data-flower=\"{}\" style=\"top: {}; left: {};\">\n    <span class=\"btn-text\">{}</span>\n</button>",
            self.flower_id,
            self.position.top_css(),
            self.position.left_css(),
            self.label
        )
    }
}
