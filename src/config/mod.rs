pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::game::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

pub use loader::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Where high scores are kept. Falls back to the user data directory.
    // Plain values must precede the tables in TOML output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_scores_path: Option<PathBuf>,
    pub game: GameConfig,
    pub sound: SoundConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 1 (slowest) to 9 (fastest); only picks the gravity interval.
    pub speed: u8,
    /// Rows of garbage seeded at session start. Values outside
    /// `1..BOARD_HEIGHT` seed nothing.
    pub starting_lines: usize,
    /// Fixed seed for reproducible piece sequences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            starting_lines: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Clamps the speed into its supported range.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sleep between frames so the demo runs at the real gravity speed.
    pub realtime: bool,
    /// Autoplay inputs attempted between two gravity ticks.
    pub inputs_per_tick: u32,
    /// Hard stop for the demo loop.
    pub max_ticks: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            realtime: false,
            inputs_per_tick: 3,
            max_ticks: 20_000,
        }
    }
}
