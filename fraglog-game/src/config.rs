//! Parser configuration.
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_PREFIX_WIDTH, DEFAULT_WORLD_ID};
use crate::player::ClientId;

/// Tunables for the line classifier and the kill rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Reserved identity the server names as killer for hazard deaths.
    pub world_id: ClientId,
    /// Greatest byte offset at which a command token may start.
    pub max_prefix_width: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            world_id: ClientId::new(DEFAULT_WORLD_ID),
            max_prefix_width: DEFAULT_MAX_PREFIX_WIDTH,
        }
    }
}

impl ParserConfig {
    /// Parse a JSON document; missing fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `id` is the environment rather than a real player.
    #[must_use]
    pub fn is_environment(&self, id: &ClientId) -> bool {
        *id == self.world_id
    }
}
