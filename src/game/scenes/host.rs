//! Scene host - owns the one mounted scene and routes frame and resize
//! events to it.

use crate::game::canvas::Canvas;
use crate::game::rng::SceneRng;

use super::{Scene, SceneKind, Viewport};

/// Holds zero or one active scene.
///
/// A scene being replaced is torn down and dropped inside
/// [`switch_to`](SceneHost::switch_to), so no handle to it outlives the
/// switch and no later tick can reach it.
pub struct SceneHost {
    active: Option<Box<dyn Scene>>,
    viewport: Viewport,
    rng: SceneRng,
}

impl SceneHost {
    pub fn new(viewport: Viewport, rng: SceneRng) -> Self {
        Self {
            active: None,
            viewport,
            rng,
        }
    }

    /// Build a scene of `kind` for the current viewport and mount it
    pub fn switch(&mut self, kind: SceneKind) {
        let scene = kind.create(self.viewport, self.rng.fork());
        self.switch_to(scene);
    }

    /// Tear down the current scene (if any) and mount `scene`
    pub fn switch_to(&mut self, scene: Box<dyn Scene>) {
        if let Some(mut previous) = self.active.take() {
            previous.destroy();
            log::info!("Unmounted {} scene", previous.kind());
        }

        log::info!(
            "Mounted {} scene ({} entities)",
            scene.kind(),
            scene.entity_count()
        );
        self.active = Some(scene);
    }

    /// Forward one frame delta to the active scene
    pub fn tick(&mut self, delta: f32) {
        if let Some(scene) = self.active.as_mut() {
            scene.update(delta);
        }
    }

    /// Record the new viewport and forward it to the active scene
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if let Some(scene) = self.active.as_mut() {
            scene.resize(width, height);
        }
    }

    /// Draw the active scene, if any
    pub fn draw(&self, canvas: &mut Canvas) {
        if let Some(scene) = &self.active {
            scene.draw(canvas);
        }
    }

    pub fn active(&self) -> Option<&dyn Scene> {
        self.active.as_deref()
    }

    pub fn active_kind(&self) -> Option<SceneKind> {
        self.active.as_ref().map(|scene| scene.kind())
    }

    pub fn has_active_scene(&self) -> bool {
        self.active.is_some()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> SceneHost {
        SceneHost::new(Viewport::new(800.0, 600.0), SceneRng::new(1))
    }

    #[test]
    fn test_empty_host_ignores_events() {
        let mut host = host();
        host.tick(1.0);
        host.on_resize(1024.0, 768.0);

        assert!(!host.has_active_scene());
        assert_eq!(host.viewport(), Viewport::new(1024.0, 768.0));

        let mut canvas = Canvas::new(1024.0, 768.0);
        host.draw(&mut canvas);
        assert!(canvas.mesh().is_empty());
    }

    #[test]
    fn test_switch_mounts_kind() {
        let mut host = host();
        host.switch(SceneKind::Text);
        assert_eq!(host.active_kind(), Some(SceneKind::Text));

        host.switch(SceneKind::Particles);
        assert_eq!(host.active_kind(), Some(SceneKind::Particles));
    }

    #[test]
    fn test_new_scene_uses_latest_viewport() {
        let mut host = host();
        host.on_resize(300.0, 90.0);
        host.switch(SceneKind::Cards);

        let mut canvas = Canvas::new(300.0, 90.0);
        host.draw(&mut canvas);
        assert!(!canvas.mesh().is_empty());
        assert_eq!(host.active().map(|s| s.entity_count()), Some(144));
    }
}
