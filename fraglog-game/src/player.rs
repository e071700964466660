//! Players tracked inside a single game session.
use serde::{Deserialize, Serialize};

/// Numeric client slot as printed by the server, kept textual.
///
/// Ids are only unique inside one game session; the server reuses slots
/// across games.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Build an id from a string slice, trimming whitespace.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One connected client and its counters for the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: ClientId,
    /// Empty until the first userinfo change names the client.
    pub username: String,
    pub kills: u32,
    pub deaths_by_environment: u32,
}

impl PlayerRecord {
    /// Fresh record as created by a connect event.
    #[must_use]
    pub const fn new(id: ClientId) -> Self {
        Self {
            id,
            username: String::new(),
            kills: 0,
            deaths_by_environment: 0,
        }
    }

    /// Replace the display name (never merged with the previous one).
    pub fn rename(&mut self, username: &str) {
        self.username = username.to_string();
    }

    pub const fn record_kill(&mut self) {
        self.kills = self.kills.saturating_add(1);
    }

    pub const fn record_environment_death(&mut self) {
        self.deaths_by_environment = self.deaths_by_environment.saturating_add(1);
    }

    /// Kills minus environment deaths, floored at zero.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.kills.saturating_sub(self.deaths_by_environment)
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.username.is_empty()
    }
}
