//! ParticleScene - a fixed pool of dots streaming out of the screen center.
//!
//! Particles are never removed: when one runs out of life it is respawned in
//! place at the viewport center with a new velocity and lifetime.

use std::ops::Range;

use glam::Vec2;

use crate::game::canvas::{Canvas, hex_color};
use crate::game::rng::SceneRng;

use super::{Scene, SceneKind, Viewport};

/// Pool size
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_RADIUS: f32 = 5.0;
/// The dot is drawn this far below the particle position
pub const PARTICLE_DRAW_OFFSET_Y: f32 = 2.0;
pub const PARTICLE_COLOR: u32 = 0xff0066;
/// Per-axis velocity range (frame units)
pub const VELOCITY_RANGE: Range<f32> = -1.0..1.0;
/// Lifetime range (frame units)
pub const LIFE_RANGE: Range<f32> = 50.0..100.0;

/// A simulated dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining life in frame units
    pub life: f32,
}

impl Particle {
    fn spawn(center: Vec2, rng: &mut SceneRng) -> Self {
        Self {
            position: center,
            velocity: Vec2::new(
                rng.range_f32(VELOCITY_RANGE),
                rng.range_f32(VELOCITY_RANGE),
            ),
            life: rng.range_f32(LIFE_RANGE),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}

/// Continuous emitter over a fixed particle pool
pub struct ParticleScene {
    viewport: Viewport,
    rng: SceneRng,
    particles: Vec<Particle>,
    respawns: u64,
}

impl ParticleScene {
    pub fn new(viewport: Viewport, mut rng: SceneRng) -> Self {
        let center = viewport.center();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(center, &mut rng))
            .collect();

        Self {
            viewport,
            rng,
            particles,
            respawns: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Total respawns since the scene was built
    pub fn respawns(&self) -> u64 {
        self.respawns
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Scene for ParticleScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Particles
    }

    fn update(&mut self, delta: f32) {
        let center = self.viewport.center();
        for particle in &mut self.particles {
            particle.position += particle.velocity * delta;
            particle.life -= delta;

            if particle.is_expired() {
                *particle = Particle::spawn(center, &mut self.rng);
                self.respawns += 1;
            }
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        // Snaps live particles too, not only the spawn point
        let center = self.viewport.center();
        for particle in &mut self.particles {
            particle.position = center;
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        let color = hex_color(PARTICLE_COLOR);
        let offset = Vec2::new(0.0, PARTICLE_DRAW_OFFSET_Y);
        for particle in &self.particles {
            canvas.fill_circle(particle.position + offset, PARTICLE_RADIUS, color);
        }
    }

    fn destroy(&mut self) {
        self.particles.clear();
    }

    fn entity_count(&self) -> usize {
        self.particles.len()
    }
}
