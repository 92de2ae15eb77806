//! FPS readout drawn in the top-left corner

use glam::Vec2;

use crate::game::canvas::{Canvas, hex_color};

use super::menu::MENU_COLOR;

const FPS_POSITION: Vec2 = Vec2::new(20.0, 20.0);
const FPS_FONT_SIZE: f32 = 18.0;

/// Displays the most recent frames-per-second reading
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new reading; negative and non-finite values read as zero
    pub fn set(&mut self, fps: f32) {
        self.fps = if fps.is_finite() { fps.max(0.0) } else { 0.0 };
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Text shown on screen, e.g. `FPS: 60`
    pub fn label(&self) -> String {
        format!("FPS: {}", self.fps.round() as u32)
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_text(&self.label(), FPS_POSITION, FPS_FONT_SIZE, hex_color(MENU_COLOR));
    }
}
