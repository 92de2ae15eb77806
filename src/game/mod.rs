//! Game Module
//!
//! Scenes, the scene host, the 2D canvas they draw into, and the overlay UI.
//! **No wgpu imports.** Everything here is GPU-agnostic and runs headless
//! in tests.

pub mod canvas;
pub mod config;
pub mod rng;
pub mod scenes;
pub mod ui;

pub use canvas::{Canvas, hex_color};
pub use config::DemoConfig;
pub use rng::SceneRng;
pub use scenes::{
    Card, CardScene, CardState, Particle, ParticleScene, Scene, SceneHost, SceneKind, TextScene,
    TextToken, Viewport,
};
pub use ui::{FpsCounter, MenuButton, SceneMenu, draw_text, get_char_bitmap, measure_text};
