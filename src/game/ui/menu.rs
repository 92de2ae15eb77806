//! Scene Menu
//!
//! One clickable text label per scene kind, stacked in the top-left corner.
//! The label of the mounted scene is underlined.

use glam::Vec2;

use crate::game::canvas::{Canvas, hex_color};
use crate::game::scenes::SceneKind;

use super::text::{measure_text, pixel_scale};

/// Label font size
pub const MENU_FONT_SIZE: f32 = 25.0;
pub const MENU_COLOR: u32 = 0x8f93be;
const MENU_X: f32 = 10.0;
const MENU_FIRST_Y: f32 = 50.0;
const MENU_ROW_STEP: f32 = 30.0;
/// Gap between a label and its underline
const UNDERLINE_GAP: f32 = 3.0;
const UNDERLINE_THICKNESS: f32 = 2.0;

/// A labelled hit box that selects a scene
#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    pub kind: SceneKind,
    pub label: &'static str,
    /// Top-left corner of the label
    pub position: Vec2,
}

impl MenuButton {
    /// Rendered label size
    pub fn size(&self) -> Vec2 {
        let (w, h) = measure_text(self.label, pixel_scale(MENU_FONT_SIZE));
        Vec2::new(w, h)
    }

    /// Point-in-label test, edges inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.position + self.size();
        point.x >= self.position.x
            && point.x <= max.x
            && point.y >= self.position.y
            && point.y <= max.y
    }
}

/// Scene picker overlay
pub struct SceneMenu {
    buttons: Vec<MenuButton>,
}

impl SceneMenu {
    pub fn new() -> Self {
        let buttons = SceneKind::ALL
            .iter()
            .enumerate()
            .map(|(row, &kind)| MenuButton {
                kind,
                label: kind.label(),
                position: Vec2::new(MENU_X, MENU_FIRST_Y + row as f32 * MENU_ROW_STEP),
            })
            .collect();

        Self { buttons }
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    /// Scene selected by a click at `(x, y)`, if it landed on a label
    pub fn button_at(&self, x: f32, y: f32) -> Option<SceneKind> {
        let point = Vec2::new(x, y);
        self.buttons
            .iter()
            .find(|button| button.contains(point))
            .map(|button| button.kind)
    }

    pub fn draw(&self, canvas: &mut Canvas, active: Option<SceneKind>) {
        let color = hex_color(MENU_COLOR);
        for button in &self.buttons {
            canvas.draw_text(button.label, button.position, MENU_FONT_SIZE, color);

            if active == Some(button.kind) {
                let size = button.size();
                canvas.fill_rect(
                    button.position + Vec2::new(0.0, size.y + UNDERLINE_GAP),
                    Vec2::new(size.x, UNDERLINE_THICKNESS),
                    color,
                );
            }
        }
    }
}

impl Default for SceneMenu {
    fn default() -> Self {
        Self::new()
    }
}
