//! Game configuration
//!
//! Loaded from an optional JSON file; command line flags override single
//! values afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::simulation::{
    CarKind, Dimension2D, DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_AUTONOMOUS_CARS,
    DEFAULT_TICKS_PER_SECOND,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f64,
    pub arena_height: f64,

    /// Number of cars besides the player's
    pub autonomous_cars: usize,

    /// Preset used for every autonomous car
    pub autonomous_kind: CarKind,

    pub ticks_per_second: u32,

    /// Seed for reproducible games; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            autonomous_cars: DEFAULT_AUTONOMOUS_CARS,
            autonomous_kind: CarKind::Slow,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Missing fields fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> Result<()> {
        if !self.arena_size().is_valid_arena() {
            anyhow::bail!(
                "Arena must have a positive finite size, got {}x{}",
                self.arena_width,
                self.arena_height
            );
        }
        if self.ticks_per_second == 0 {
            anyhow::bail!("Tick rate must be at least 1 tick per second");
        }
        Ok(())
    }

    pub fn arena_size(&self) -> Dimension2D {
        Dimension2D::new(self.arena_width, self.arena_height)
    }
}
