//! TextScene - a row of random words and emoji, replaced every two seconds.

use glam::Vec2;

use crate::game::canvas::{Canvas, hex_color};
use crate::game::rng::SceneRng;
use crate::game::ui::text::{emoji_color, measure_text, pixel_scale};

use super::{Scene, SceneKind, Viewport};

pub const WORDS: [&str; 4] = ["Hello", "World", "Rust", "Scenes"];
pub const EMOJIS: [&str; 4] = ["\u{1F600}", "\u{1F30D}", "\u{1F4BB}", "\u{1F3AE}"];

/// Tokens drawn per generation
pub const TOKENS_PER_GENERATION: usize = 5;
/// Chance that a token is a word rather than an emoji
pub const WORD_PROBABILITY: f64 = 0.7;
/// Gap between neighbouring tokens
pub const TOKEN_SPACING: f32 = 10.0;
pub const MIN_FONT_SIZE: f32 = 40.0;
/// Exclusive upper bound
pub const MAX_FONT_SIZE: f32 = 76.0;
/// Frame units between regenerations
pub const REGENERATE_INTERVAL: f32 = 120.0;

const TEXT_COLOR: u32 = 0xffffff;

/// One laid-out word or emoji. `x` is relative to the group origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextToken {
    pub text: &'static str,
    pub font_size: f32,
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub is_emoji: bool,
    /// Fill color; emoji use their own glyph color
    pub color: [f32; 4],
}

impl TextToken {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Periodically regenerated line of tokens, centered in the viewport
pub struct TextScene {
    viewport: Viewport,
    rng: SceneRng,
    tokens: Vec<TextToken>,
    /// Screen position of the group's top-left corner
    origin: Vec2,
    elapsed: f32,
    generation: u64,
}

impl TextScene {
    pub fn new(viewport: Viewport, rng: SceneRng) -> Self {
        let mut scene = Self {
            viewport,
            rng,
            tokens: Vec::with_capacity(TOKENS_PER_GENERATION),
            origin: Vec2::ZERO,
            elapsed: 0.0,
            generation: 0,
        };
        scene.regenerate();
        scene
    }

    /// Replace every token with a fresh random line and re-center it
    fn regenerate(&mut self) {
        self.tokens.clear();

        let font_size = self.rng.range_f32(MIN_FONT_SIZE..MAX_FONT_SIZE);
        let scale = pixel_scale(font_size);

        let mut x = 0.0;
        for _ in 0..TOKENS_PER_GENERATION {
            let is_emoji = !self.rng.chance(WORD_PROBABILITY);
            let pool: &[&'static str] = if is_emoji { &EMOJIS } else { &WORDS };
            let Some(&text) = self.rng.choose(pool) else {
                continue;
            };

            let (width, height) = measure_text(text, scale);
            let color = text
                .chars()
                .next()
                .and_then(emoji_color)
                .unwrap_or_else(|| hex_color(TEXT_COLOR));
            self.tokens.push(TextToken {
                text,
                font_size,
                x,
                width,
                height,
                is_emoji,
                color,
            });
            x += width + TOKEN_SPACING;
        }

        self.generation += 1;
        self.center();
    }

    /// Place the group in the middle of the viewport
    fn center(&mut self) {
        let size = self.group_size();
        self.origin = Vec2::new(
            (self.viewport.width - size.x) / 2.0,
            (self.viewport.height - size.y) / 2.0,
        );
    }

    /// Bounding size of the token group
    pub fn group_size(&self) -> Vec2 {
        let width = self.tokens.last().map_or(0.0, TextToken::right);
        let height = self.tokens.iter().map(|t| t.height).fold(0.0, f32::max);
        Vec2::new(width, height)
    }

    pub fn tokens(&self) -> &[TextToken] {
        &self.tokens
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Generations produced so far (the initial line counts as one)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Font size shared by the current generation
    pub fn font_size(&self) -> Option<f32> {
        self.tokens.first().map(|t| t.font_size)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Scene for TextScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Text
    }

    fn update(&mut self, delta: f32) {
        self.elapsed += delta;
        if self.elapsed >= REGENERATE_INTERVAL {
            self.regenerate();
            self.elapsed = 0.0;
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.center();
    }

    fn draw(&self, canvas: &mut Canvas) {
        for token in &self.tokens {
            canvas.draw_text(
                token.text,
                self.origin + Vec2::new(token.x, 0.0),
                token.font_size,
                token.color,
            );
        }
    }

    fn destroy(&mut self) {
        self.tokens.clear();
    }

    fn entity_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> TextScene {
        TextScene::new(Viewport::new(1280.0, 720.0), SceneRng::new(5))
    }

    #[test]
    fn test_initial_generation() {
        let scene = scene();
        assert_eq!(scene.generation(), 1);
        assert_eq!(scene.tokens().len(), TOKENS_PER_GENERATION);
    }

    #[test]
    fn test_tokens_share_font_size() {
        let scene = scene();
        let size = scene.font_size().unwrap();
        assert!((MIN_FONT_SIZE..MAX_FONT_SIZE).contains(&size));
        assert!(scene.tokens().iter().all(|t| t.font_size == size));
    }

    #[test]
    fn test_tokens_come_from_fixed_lists() {
        let scene = scene();
        for token in scene.tokens() {
            if token.is_emoji {
                assert!(EMOJIS.contains(&token.text));
            } else {
                assert!(WORDS.contains(&token.text));
            }
        }
    }

    #[test]
    fn test_tokens_carry_fill_color() {
        let mut scene = scene();
        let mut seen_word = false;
        let mut seen_emoji = false;

        // Enough generations to see both kinds
        for _ in 0..20 {
            for token in scene.tokens() {
                let glyph = token.text.chars().next().and_then(emoji_color);
                if token.is_emoji {
                    seen_emoji = true;
                    assert_eq!(Some(token.color), glyph);
                } else {
                    seen_word = true;
                    assert_eq!(token.color, hex_color(TEXT_COLOR));
                }
            }
            scene.update(REGENERATE_INTERVAL);
        }
        assert!(seen_word && seen_emoji);
    }

    #[test]
    fn test_group_is_centered() {
        let scene = scene();
        let size = scene.group_size();
        let origin = scene.origin();
        assert!((origin.x * 2.0 + size.x - 1280.0).abs() < 1e-3);
        assert!((origin.y * 2.0 + size.y - 720.0).abs() < 1e-3);
    }

    #[test]
    fn test_resize_recenters_without_regenerating() {
        let mut scene = scene();
        let tokens = scene.tokens().to_vec();

        scene.resize(640.0, 480.0);

        assert_eq!(scene.tokens(), tokens.as_slice());
        assert_eq!(scene.generation(), 1);
        let size = scene.group_size();
        assert!((scene.origin().x - (640.0 - size.x) / 2.0).abs() < 1e-3);
        assert!((scene.origin().y - (480.0 - size.y) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_regenerates_on_interval() {
        let mut scene = scene();
        scene.update(REGENERATE_INTERVAL - 1.0);
        assert_eq!(scene.generation(), 1);

        scene.update(1.0);
        assert_eq!(scene.generation(), 2);
        assert_eq!(scene.elapsed(), 0.0);
    }

    #[test]
    fn test_destroy_discards_tokens() {
        let mut scene = scene();
        scene.destroy();
        assert_eq!(scene.entity_count(), 0);
        assert_eq!(scene.group_size(), Vec2::ZERO);
    }
}
