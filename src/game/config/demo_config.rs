//! Demo Configuration
//!
//! Window, background and startup settings for the scene switcher. Nothing
//! is loaded from disk; the binary takes [`DemoConfig::from_env`], which only
//! reads an optional seed.

use crate::game::rng::SceneRng;
use crate::game::scenes::SceneKind;
use crate::render::GpuContextConfig;

/// Environment variable holding a fixed RNG seed for reproducible runs
pub const SEED_ENV_VAR: &str = "SCENE_SWITCHER_SEED";

/// Settings the scene demo starts with
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub window_title: String,
    /// Initial inner size in physical pixels
    pub window_width: u32,
    pub window_height: u32,
    /// Clear color, `0xRRGGBB`
    pub background_color: u32,
    /// Scene mounted at startup
    pub initial_scene: SceneKind,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    pub gpu: GpuContextConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_title: "Scene Switcher".to_string(),
            window_width: 1280,
            window_height: 720,
            background_color: 0xfed9bf,
            initial_scene: SceneKind::Cards,
            seed: None,
            gpu: GpuContextConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Defaults, with the seed taken from [`SEED_ENV_VAR`] when set
    pub fn from_env() -> Self {
        let value = std::env::var(SEED_ENV_VAR).ok();
        Self::default().with_seed_override(value.as_deref())
    }

    /// Apply a seed given as text. Unparseable values are logged and ignored.
    pub fn with_seed_override(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            match value.trim().parse::<u64>() {
                Ok(seed) => {
                    log::info!("Using fixed scene seed {seed}");
                    self.seed = Some(seed);
                }
                Err(err) => log::warn!("Ignoring {SEED_ENV_VAR}={value:?}: {err}"),
            }
        }
        self
    }

    /// Root RNG for the scene host
    pub fn scene_rng(&self) -> SceneRng {
        match self.seed {
            Some(seed) => SceneRng::new(seed),
            None => SceneRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.window_title, "Scene Switcher");
        assert_eq!((config.window_width, config.window_height), (1280, 720));
        assert_eq!(config.background_color, 0xfed9bf);
        assert_eq!(config.initial_scene, SceneKind::Cards);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_seed_override_parses() {
        let config = DemoConfig::default().with_seed_override(Some(" 42 "));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.scene_rng().seed(), 42);

        let mut a = config.scene_rng();
        let mut b = config.scene_rng();
        assert_eq!(a.tint(), b.tint());
    }

    #[test]
    fn test_bad_seed_override_is_ignored() {
        let config = DemoConfig::default().with_seed_override(Some("not-a-number"));
        assert!(config.seed.is_none());

        let config = DemoConfig::default().with_seed_override(None);
        assert!(config.seed.is_none());
    }
}
