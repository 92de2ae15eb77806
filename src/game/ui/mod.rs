//! UI Module
//!
//! Overlay drawn above the active scene: scene menu and FPS readout.

pub mod fps_counter;
pub mod menu;
pub mod text;

pub use fps_counter::FpsCounter;
pub use menu::{MenuButton, SceneMenu};
pub use text::{draw_text, emoji_color, get_char_bitmap, measure_text, pixel_scale};
