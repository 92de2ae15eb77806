//! Scene Switcher Engine Library
//!
//! A small 2D demo engine: one active scene at a time (card dealing,
//! rotating text, particle emitter), a button menu and an FPS readout,
//! drawn through a CPU-built triangle mesh and a single wgpu pipeline.
//!
//! # Modules
//!
//! - [`render`] - GPU context, render passes, frame clock
//! - [`game`] - Scenes, scene host, 2D canvas, overlay UI, config
//!
//! # Example
//!
//! ```
//! use scene_switcher_engine::game::{Canvas, SceneHost, SceneKind, SceneRng, Viewport};
//!
//! let mut host = SceneHost::new(Viewport::new(1280.0, 720.0), SceneRng::new(7));
//! host.switch(SceneKind::Particles);
//!
//! // One frame at nominal rate
//! host.tick(1.0);
//!
//! let mut canvas = Canvas::new(1280.0, 720.0);
//! host.draw(&mut canvas);
//! assert!(!canvas.mesh().indices.is_empty());
//! ```

pub mod render;

// Scene and UI modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the render module contents at crate level for convenience
pub use render::*;
// Re-export the scene entry points
pub use game::{Scene, SceneHost, SceneKind, Viewport};
