//! Config Module
//!
//! Fixed settings for the scene demo window, GPU and scene seeding.

pub mod demo_config;

pub use demo_config::{DemoConfig, SEED_ENV_VAR};
