//! CardScene - deals a deck from one stack to another, one card at a time.
//!
//! Two-state machine. While `Idle` the scene waits [`DEAL_INTERVAL`] frame
//! units, then lifts the top card off the source stack. While `Flying` that
//! card slides linearly to the destination anchor over [`FLIGHT_DURATION`]
//! frame units and lands on top of the destination stack. Once the source
//! stack is empty the scene stays idle for good.
//!
//! Resizing moves both stack anchors but leaves a card that is already in
//! flight where it is until its next update.

use glam::Vec2;

use crate::game::canvas::{Canvas, hex_color};
use crate::game::rng::SceneRng;

use super::{Scene, SceneKind, Viewport};

/// Cards in the deck
pub const CARD_COUNT: usize = 144;
pub const CARD_WIDTH: f32 = 80.0;
pub const CARD_HEIGHT: f32 = 120.0;
pub const CARD_CORNER_RADIUS: f32 = 10.0;
/// Vertical offset between neighbouring cards in the source stack
pub const STACK_FAN_OFFSET: f32 = 0.5;
/// Idle wait before the next card is dealt (frame units)
pub const DEAL_INTERVAL: f32 = 60.0;
/// Time a card spends in flight (frame units)
pub const FLIGHT_DURATION: f32 = 120.0;

/// A single card. `position` is stack-local while stacked and screen-space
/// while in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: usize,
    /// `0xRRGGBB` fill color
    pub tint: u32,
    pub position: Vec2,
}

/// Dealing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// No card in flight
    Idle,
    /// One card interpolating between the stacks
    Flying,
}

/// Card-dealing animation between two stacks
pub struct CardScene {
    viewport: Viewport,
    /// Topmost card is last
    source: Vec<Card>,
    /// Topmost card is last
    destination: Vec<Card>,
    in_flight: Option<Card>,
    source_anchor: Vec2,
    destination_anchor: Vec2,
    elapsed: f32,
}

impl CardScene {
    pub fn new(viewport: Viewport, mut rng: SceneRng) -> Self {
        let source = (0..CARD_COUNT)
            .map(|id| Card {
                id,
                tint: rng.tint(),
                position: Vec2::new(0.0, id as f32 * STACK_FAN_OFFSET),
            })
            .collect();

        let (source_anchor, destination_anchor) = Self::stack_anchors(viewport);

        Self {
            viewport,
            source,
            destination: Vec::with_capacity(CARD_COUNT),
            in_flight: None,
            source_anchor,
            destination_anchor,
            elapsed: 0.0,
        }
    }

    /// Stacks sit at one and two thirds of the width, vertically centered
    fn stack_anchors(viewport: Viewport) -> (Vec2, Vec2) {
        let y = viewport.height / 2.0;
        (
            Vec2::new(viewport.width / 3.0, y),
            Vec2::new(viewport.width * 2.0 / 3.0, y),
        )
    }

    pub fn state(&self) -> CardState {
        if self.in_flight.is_some() {
            CardState::Flying
        } else {
            CardState::Idle
        }
    }

    /// No cards left to deal and nothing in flight
    pub fn is_finished(&self) -> bool {
        self.source.is_empty() && self.in_flight.is_none()
    }

    pub fn source_cards(&self) -> &[Card] {
        &self.source
    }

    pub fn destination_cards(&self) -> &[Card] {
        &self.destination
    }

    pub fn in_flight(&self) -> Option<&Card> {
        self.in_flight.as_ref()
    }

    pub fn source_anchor(&self) -> Vec2 {
        self.source_anchor
    }

    pub fn destination_anchor(&self) -> Vec2 {
        self.destination_anchor
    }

    /// Frame units since the last deal or landing
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw_card(canvas: &mut Canvas, card: &Card, origin: Vec2) {
        canvas.fill_rounded_rect(
            origin + card.position,
            Vec2::new(CARD_WIDTH, CARD_HEIGHT),
            CARD_CORNER_RADIUS,
            hex_color(card.tint),
        );
    }
}

impl Scene for CardScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Cards
    }

    fn update(&mut self, delta: f32) {
        self.elapsed += delta;

        if let Some(card) = self.in_flight.as_mut() {
            // Clamped so that completion compares exactly against 1.0
            let progress = (self.elapsed / FLIGHT_DURATION).min(1.0);
            card.position = self.source_anchor.lerp(self.destination_anchor, progress);

            if progress == 1.0
                && let Some(mut landed) = self.in_flight.take()
            {
                landed.position = Vec2::ZERO;
                self.destination.push(landed);
                self.elapsed = 0.0;
            }
        } else if self.elapsed >= DEAL_INTERVAL
            && let Some(mut card) = self.source.pop()
        {
            card.position = self.source_anchor;
            self.in_flight = Some(card);
            self.elapsed = 0.0;
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        (self.source_anchor, self.destination_anchor) = Self::stack_anchors(self.viewport);
    }

    fn draw(&self, canvas: &mut Canvas) {
        for card in &self.source {
            Self::draw_card(canvas, card, self.source_anchor);
        }
        for card in &self.destination {
            Self::draw_card(canvas, card, self.destination_anchor);
        }
        if let Some(card) = &self.in_flight {
            Self::draw_card(canvas, card, Vec2::ZERO);
        }
    }

    fn destroy(&mut self) {
        self.source.clear();
        self.destination.clear();
        self.in_flight = None;
    }

    fn entity_count(&self) -> usize {
        self.source.len() + self.destination.len() + usize::from(self.in_flight.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> CardScene {
        CardScene::new(Viewport::new(900.0, 600.0), SceneRng::new(11))
    }

    #[test]
    fn test_initial_state() {
        let scene = scene();
        assert_eq!(scene.state(), CardState::Idle);
        assert_eq!(scene.source_cards().len(), CARD_COUNT);
        assert!(scene.destination_cards().is_empty());
        assert_eq!(scene.elapsed(), 0.0);
    }

    #[test]
    fn test_source_stack_is_fanned() {
        let scene = scene();
        let cards = scene.source_cards();
        assert_eq!(cards[0].position, Vec2::ZERO);
        assert_eq!(cards[10].position, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_anchors() {
        let scene = scene();
        assert_eq!(scene.source_anchor(), Vec2::new(300.0, 300.0));
        assert_eq!(scene.destination_anchor(), Vec2::new(600.0, 300.0));
    }

    #[test]
    fn test_deals_topmost_card() {
        let mut scene = scene();
        let top_id = scene.source_cards().last().map(|c| c.id);

        scene.update(DEAL_INTERVAL);

        assert_eq!(scene.state(), CardState::Flying);
        assert_eq!(scene.in_flight().map(|c| c.id), top_id);
        assert_eq!(scene.in_flight().map(|c| c.position), Some(scene.source_anchor()));
        assert_eq!(scene.elapsed(), 0.0);
    }

    #[test]
    fn test_flight_interpolates_linearly() {
        let mut scene = scene();
        scene.update(DEAL_INTERVAL);
        scene.update(FLIGHT_DURATION / 2.0);

        let halfway = scene.source_anchor().lerp(scene.destination_anchor(), 0.5);
        assert_eq!(scene.in_flight().map(|c| c.position), Some(halfway));
    }

    #[test]
    fn test_landing_resets_to_stack_origin() {
        let mut scene = scene();
        scene.update(DEAL_INTERVAL);
        scene.update(FLIGHT_DURATION + 5.0);

        assert_eq!(scene.state(), CardState::Idle);
        assert_eq!(scene.destination_cards().len(), 1);
        assert_eq!(scene.destination_cards()[0].position, Vec2::ZERO);
        assert_eq!(scene.elapsed(), 0.0);
    }

    #[test]
    fn test_resize_keeps_in_flight_card() {
        let mut scene = scene();
        scene.update(DEAL_INTERVAL);
        scene.update(30.0);
        let before = scene.in_flight().map(|c| c.position);

        scene.resize(1500.0, 900.0);

        assert_eq!(scene.source_anchor(), Vec2::new(500.0, 450.0));
        assert_eq!(scene.destination_anchor(), Vec2::new(1000.0, 450.0));
        assert_eq!(scene.in_flight().map(|c| c.position), before);
    }

    #[test]
    fn test_destroy_releases_cards() {
        let mut scene = scene();
        scene.update(DEAL_INTERVAL);
        scene.destroy();

        assert_eq!(scene.entity_count(), 0);
        assert!(scene.in_flight().is_none());
    }

    #[test]
    fn test_draw_emits_every_card() {
        let scene = scene();
        let mut canvas = Canvas::new(900.0, 600.0);
        scene.draw(&mut canvas);

        // One fan per card: center + 4 corners * (segments + 1)
        let per_card = canvas.mesh().vertices.len() / CARD_COUNT;
        assert_eq!(canvas.mesh().vertices.len(), per_card * CARD_COUNT);
        assert!(per_card > 4);
    }
}
