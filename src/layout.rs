//! Sizing of the board container from the viewport and the background's aspect ratio.

use crate::constants::{MOBILE_BREAKPOINT, RESIZE_EPSILON};
use eframe::egui::{pos2, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

pub fn layout_mode(viewport_width: f32) -> LayoutMode {
    if viewport_width <= MOBILE_BREAKPOINT {
        LayoutMode::Mobile
    } else {
        LayoutMode::Desktop
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub height: f32,
    pub min_height: f32,
}

impl ContainerSize {
    fn uniform(height: f32) -> Self {
        Self {
            height,
            min_height: height,
        }
    }

    pub fn effective_height(&self) -> f32 {
        self.height.max(self.min_height)
    }
}

/// Height that keeps the background's aspect ratio at `width`.
pub fn desktop_height(width: f32, image_size: Vec2) -> Option<f32> {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return None;
    }
    Some(width * (image_size.y / image_size.x))
}

/// Re-sizes the container on the first frame, on every viewport change, and when
/// the background finishes loading.
#[derive(Clone, Debug, Default)]
pub struct LayoutAdjuster {
    image_size: Option<Vec2>,
    viewport: Option<Vec2>,
    size: Option<ContainerSize>,
}

impl LayoutAdjuster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_adjust(&self, viewport: Vec2) -> bool {
        match self.viewport {
            None => true,
            Some(last) => {
                (last.x - viewport.x).abs() > RESIZE_EPSILON
                    || (last.y - viewport.y).abs() > RESIZE_EPSILON
            }
        }
    }

    /// Applies the sizing rule for `viewport` and returns the new container size.
    pub fn adjust(&mut self, viewport: Vec2) -> ContainerSize {
        self.viewport = Some(viewport);
        let next = match layout_mode(viewport.x) {
            LayoutMode::Mobile => Some(ContainerSize::uniform(viewport.y)),
            LayoutMode::Desktop => self
                .image_size
                .and_then(|image| desktop_height(viewport.x, image))
                .map(ContainerSize::uniform),
        };

        // An unknown background keeps whatever sizing was there before.
        let size = next
            .or(self.size)
            .unwrap_or_else(|| ContainerSize::uniform(viewport.y));
        self.size = Some(size);
        size
    }

    /// Records the background's size and re-runs the rule for the last viewport.
    pub fn on_image_loaded(&mut self, image_size: Vec2) -> Option<ContainerSize> {
        self.image_size = Some(image_size);
        self.viewport.map(|viewport| self.adjust(viewport))
    }

    pub fn image_size(&self) -> Option<Vec2> {
        self.image_size
    }

    pub fn container_size(&self) -> Option<ContainerSize> {
        self.size
    }
}

/// UV rectangle that covers a `container` with an image while keeping its aspect ratio.
pub fn cover_uv(container: Vec2, image: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if container.x <= 0.0 || container.y <= 0.0 || image.x <= 0.0 || image.y <= 0.0 {
        return full;
    }

    let container_aspect = container.x / container.y;
    let image_aspect = image.x / image.y;

    if image_aspect > container_aspect {
        let visible = container_aspect / image_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(inset, 0.0), pos2(1.0 - inset, 1.0))
    } else {
        let visible = image_aspect / container_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, inset), pos2(1.0, 1.0 - inset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn test_mobile_uses_viewport_height() {
        let mut layout = LayoutAdjuster::new();
        layout.on_image_loaded(vec2(1000.0, 500.0));
        let size = layout.adjust(vec2(768.0, 900.0));
        assert_eq!(size, ContainerSize { height: 900.0, min_height: 900.0 });
        assert_eq!(layout_mode(768.0), LayoutMode::Mobile);
        assert_eq!(layout_mode(769.0), LayoutMode::Desktop);
    }

    #[test]
    fn test_desktop_follows_image_aspect() {
        let mut layout = LayoutAdjuster::new();
        layout.on_image_loaded(vec2(1600.0, 1200.0));
        let size = layout.adjust(vec2(1000.0, 700.0));
        assert_eq!(size.height, 750.0);
        assert_eq!(size.min_height, 750.0);
    }

    #[test]
    fn test_desktop_keeps_previous_until_image_loads() {
        let mut layout = LayoutAdjuster::new();
        // First frame without an image falls back to the viewport height.
        assert_eq!(layout.adjust(vec2(1200.0, 800.0)).height, 800.0);
        // A later resize still has nothing better, so the old height stays.
        assert_eq!(layout.adjust(vec2(1400.0, 600.0)).height, 800.0);
        // The image arriving re-runs the rule for the current viewport.
        let size = layout.on_image_loaded(vec2(2000.0, 1000.0)).unwrap();
        assert_eq!(size.height, 700.0);
    }

    #[test]
    fn test_image_before_first_frame_waits() {
        let mut layout = LayoutAdjuster::new();
        assert_eq!(layout.on_image_loaded(vec2(100.0, 50.0)), None);
        assert_eq!(layout.adjust(vec2(1000.0, 300.0)).height, 500.0);
    }

    #[test]
    fn test_needs_adjust_on_change_only() {
        let mut layout = LayoutAdjuster::new();
        assert!(layout.needs_adjust(vec2(1000.0, 700.0)));
        layout.adjust(vec2(1000.0, 700.0));
        assert!(!layout.needs_adjust(vec2(1000.2, 700.0)));
        assert!(layout.needs_adjust(vec2(900.0, 700.0)));
        assert!(layout.needs_adjust(vec2(1000.0, 500.0)));
    }

    #[test]
    fn test_cover_uv_crops_centered() {
        // Wide image in a square container: crop the sides.
        let uv = cover_uv(vec2(100.0, 100.0), vec2(200.0, 100.0));
        assert_eq!(uv, Rect::from_min_max(pos2(0.25, 0.0), pos2(0.75, 1.0)));
        // Tall image in a square container: crop top and bottom.
        let uv = cover_uv(vec2(100.0, 100.0), vec2(100.0, 200.0));
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.25), pos2(1.0, 0.75)));
        // Matching aspect uses the full image.
        let uv = cover_uv(vec2(300.0, 150.0), vec2(200.0, 100.0));
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }
}
