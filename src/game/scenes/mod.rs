//! Scene Module
//!
//! The three demo scenes, the [`Scene`] capability they share, and the
//! [`SceneHost`] that keeps exactly one of them mounted.

pub mod card_scene;
pub mod host;
pub mod particle_scene;
pub mod text_scene;

use glam::Vec2;

use crate::game::canvas::Canvas;
use crate::game::rng::SceneRng;

pub use card_scene::{Card, CardScene, CardState};
pub use host::SceneHost;
pub use particle_scene::{Particle, ParticleScene};
pub use text_scene::{TextScene, TextToken};

/// Size of the drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Behaviour shared by every demo scene.
///
/// A scene owns its visual elements. The host calls [`update`](Scene::update)
/// once per frame with a frame delta (60 units per second), forwards window
/// resizes, and calls [`destroy`](Scene::destroy) exactly once before
/// dropping it.
pub trait Scene {
    /// Which variant this is
    fn kind(&self) -> SceneKind;

    /// Advance the simulation by `delta` frame units
    fn update(&mut self, delta: f32);

    /// React to a new viewport size
    fn resize(&mut self, width: f32, height: f32);

    /// Emit this frame's visual elements
    fn draw(&self, canvas: &mut Canvas);

    /// Release every owned visual element
    fn destroy(&mut self);

    /// Number of live visual elements (cards, tokens or particles)
    fn entity_count(&self) -> usize;
}

/// Selectable scene variants, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Cards,
    Text,
    Particles,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [SceneKind::Cards, SceneKind::Text, SceneKind::Particles];

    /// Convert from a zero-based menu index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            SceneKind::Cards => "Cards",
            SceneKind::Text => "Text",
            SceneKind::Particles => "Particles",
        }
    }

    /// Build a fresh scene of this kind for the given viewport
    pub fn create(self, viewport: Viewport, rng: SceneRng) -> Box<dyn Scene> {
        match self {
            SceneKind::Cards => Box::new(CardScene::new(viewport, rng)),
            SceneKind::Text => Box::new(TextScene::new(viewport, rng)),
            SceneKind::Particles => Box::new(ParticleScene::new(viewport, rng)),
        }
    }
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
