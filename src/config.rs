//! Runner configuration from environment variables.
//!
//! Every variable is optional. Values that do not parse fall back to their
//! defaults; values that parse but make no sense (a threshold of 12, a width of
//! 0) are passed through so engine construction rejects them loudly.
//!
//! - `LIFE_WIDTH`, `LIFE_HEIGHT`: grid size in cells (default: fit the terminal)
//! - `LIFE_SEED`: seed for the initial grid (default: time based)
//! - `LIFE_UNDER_POPULATION`, `LIFE_OVER_POPULATION`, `LIFE_REPRODUCTION`: rule thresholds
//! - `LIFE_FRAME_MS`: frame interval in milliseconds (default: 16)
//! - `LIFE_PATTERN`: start from a named pattern instead of random cells
//! - `LIFE_LOG_PATH`: append log records to this file

use crate::core::patterns::{self, Pattern};
use crate::core::{EngineConfig, Rules};
use crate::types::DEFAULT_FRAME_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub seed: Option<u32>,
    pub rules: Rules,
    pub frame_ms: u32,
    pub pattern: Option<String>,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            seed: None,
            rules: Rules::default(),
            frame_ms: DEFAULT_FRAME_MS,
            pattern: None,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the process environment in production).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let number = |key: &str| text(key).and_then(|s| s.parse::<u64>().ok());

        let defaults = Rules::default();
        let threshold = |key: &str, default: u8| {
            number(key)
                .map(|n| u8::try_from(n).unwrap_or(u8::MAX))
                .unwrap_or(default)
        };

        Self {
            width: number("LIFE_WIDTH").map(|n| n as usize),
            height: number("LIFE_HEIGHT").map(|n| n as usize),
            seed: number("LIFE_SEED").and_then(|n| u32::try_from(n).ok()),
            rules: Rules::new(
                threshold("LIFE_UNDER_POPULATION", defaults.under_population),
                threshold("LIFE_OVER_POPULATION", defaults.over_population),
                threshold("LIFE_REPRODUCTION", defaults.reproduction),
            ),
            frame_ms: number("LIFE_FRAME_MS")
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                .unwrap_or(DEFAULT_FRAME_MS),
            pattern: text("LIFE_PATTERN"),
            log_path: text("LIFE_LOG_PATH"),
        }
    }

    /// Grid size, filling unset dimensions from `fitted`.
    pub fn grid_size(&self, fitted: (usize, usize)) -> (usize, usize) {
        (self.width.unwrap_or(fitted.0), self.height.unwrap_or(fitted.1))
    }

    pub fn engine_config(&self, fitted: (usize, usize)) -> EngineConfig {
        let (width, height) = self.grid_size(fitted);
        EngineConfig::new(width, height).with_rules(self.rules)
    }

    /// The configured starting pattern, if it names a known one.
    pub fn pattern(&self) -> Option<&'static Pattern> {
        self.pattern.as_deref().and_then(patterns::find)
    }
}
