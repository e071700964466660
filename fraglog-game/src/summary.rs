//! Immutable summary view served to API consumers.
use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::GAME_KEY_PREFIX;
use crate::game::GameSession;
use crate::registry::SessionRegistry;

/// Output shape of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub hostname: String,
    pub version: String,
    pub total_kills: u32,
    pub players: Vec<String>,
    /// Derived score per username.
    pub kills: BTreeMap<String, u32>,
}

impl GameSummary {
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            hostname: session.hostname.clone(),
            version: session.version.clone(),
            total_kills: session.total_kills,
            players: session.player_names(),
            kills: session.player_scores(),
        }
    }
}

/// Synthesized key of the game at 1-based `index`, e.g. `game_3`.
#[must_use]
pub fn game_key(index: usize) -> String {
    format!("{GAME_KEY_PREFIX}{index}")
}

/// Every game, keyed `game_<index>`.
///
/// Serializes as a JSON object whose keys follow session order
/// (`game_2` before `game_10`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    games: Vec<(String, GameSummary)>,
}

impl Summary {
    #[must_use]
    pub fn from_registry(registry: &SessionRegistry) -> Self {
        let games = registry
            .iter()
            .map(|(index, session)| (game_key(index), GameSummary::from_session(session)))
            .collect();
        Self { games }
    }

    /// Look a game up by the id part of its key (`"3"` finds `game_3`).
    #[must_use]
    pub fn game(&self, id: &str) -> Option<&GameSummary> {
        let key = format!("{GAME_KEY_PREFIX}{id}");
        self.games
            .iter()
            .find(|(game, _)| *game == key)
            .map(|(_, summary)| summary)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GameSummary)> {
        self.games.iter().map(|(key, game)| (key.as_str(), game))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.games.len()))?;
        for (key, game) in &self.games {
            map.serialize_entry(key, game)?;
        }
        map.end()
    }
}
