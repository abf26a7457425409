//! Game options
//!
//! Loaded from a JSON file; every field is optional and falls back to its
//! default.

use crate::error::OptionsError;
use crate::{DEFAULT_LOOT_DROP_CHANCE, DEFAULT_MAX_WEIGHT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Carrying capacity of newly created characters
    pub max_weight: u32,
    /// Chance that a won fight drops an item
    pub loot_drop_chance: f64,
    /// RNG seed, `None` to seed from entropy
    pub seed: Option<u64>,
    /// Upper bound on rounds before a duel is called a draw
    pub max_rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_weight: DEFAULT_MAX_WEIGHT,
            loot_drop_chance: DEFAULT_LOOT_DROP_CHANCE,
            seed: None,
            max_rounds: 200,
        }
    }
}

impl GameOptions {
    /// Load options from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let options = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), ?options, "options loaded");
        Ok(options)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(contents)?;
        Ok(options.sanitized())
    }

    /// Clamp the drop chance into `[0, 1]`
    fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.loot_drop_chance) {
            tracing::warn!(
                loot_drop_chance = self.loot_drop_chance,
                "loot drop chance out of range, clamping"
            );
            self.loot_drop_chance = if self.loot_drop_chance.is_nan() {
                DEFAULT_LOOT_DROP_CHANCE
            } else {
                self.loot_drop_chance.clamp(0.0, 1.0)
            };
        }
        self
    }
}
