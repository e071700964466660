//! A single game session and its aggregation views.
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::player::{ClientId, PlayerRecord};

/// One game, from its `InitGame` line up to the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    pub hostname: String,
    pub version: String,
    /// Every recognized kill, environment deaths included.
    pub total_kills: u32,
    players: Vec<PlayerRecord>,
    slots: HashMap<ClientId, usize>,
    kills_by_means: BTreeMap<String, u32>,
}

/// Per-session kill breakdown served next to the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillReport {
    pub total_kills: u32,
    pub players: Vec<String>,
    /// Keyed by cause label, e.g. `MOD_RAILGUN`.
    pub kills_by_means: BTreeMap<String, u32>,
    /// Keyed by username; raw credited kills.
    pub kills_by_player: BTreeMap<String, u32>,
    /// Keyed by username.
    pub deaths_by_environment: BTreeMap<String, u32>,
}

impl GameSession {
    #[must_use]
    pub fn new(hostname: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Players in connection order.
    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &ClientId) -> Option<&PlayerRecord> {
        self.slots.get(id).and_then(|&slot| self.players.get(slot))
    }

    pub fn player_mut(&mut self, id: &ClientId) -> Option<&mut PlayerRecord> {
        let slot = *self.slots.get(id)?;
        self.players.get_mut(slot)
    }

    /// Register a fresh record for `id`.
    ///
    /// A reconnect on an occupied slot resets that record in place, so the
    /// player keeps their original position. Returns `true` on reconnect.
    pub fn connect(&mut self, id: ClientId) -> bool {
        if let Some(&slot) = self.slots.get(&id) {
            self.players[slot] = PlayerRecord::new(id);
            return true;
        }
        self.slots.insert(id.clone(), self.players.len());
        self.players.push(PlayerRecord::new(id));
        false
    }

    /// Count a kill against the session, whoever it is attributed to.
    pub fn record_kill(&mut self, cause: &str) {
        self.total_kills = self.total_kills.saturating_add(1);
        let count = self.kills_by_means.entry(cause.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[must_use]
    pub const fn kills_by_means(&self) -> &BTreeMap<String, u32> {
        &self.kills_by_means
    }

    fn named_players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter().filter(|player| player.is_named())
    }

    /// Distinct usernames in connection order. Unnamed players are left out.
    #[must_use]
    pub fn player_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for player in self.named_players() {
            if !names.contains(&player.username) {
                names.push(player.username.clone());
            }
        }
        names
    }

    /// Derived score per username; players sharing a name are summed.
    #[must_use]
    pub fn player_scores(&self) -> BTreeMap<String, u32> {
        tally(self.named_players(), PlayerRecord::score)
    }

    #[must_use]
    pub fn kill_report(&self) -> KillReport {
        KillReport {
            total_kills: self.total_kills,
            players: self.player_names(),
            kills_by_means: self.kills_by_means.clone(),
            kills_by_player: tally(self.named_players(), |player| player.kills),
            deaths_by_environment: tally(self.named_players(), |player| {
                player.deaths_by_environment
            }),
        }
    }
}

fn tally<'a, I, F>(players: I, metric: F) -> BTreeMap<String, u32>
where
    I: Iterator<Item = &'a PlayerRecord>,
    F: Fn(&PlayerRecord) -> u32,
{
    let mut totals = BTreeMap::new();
    for player in players {
        let entry = totals.entry(player.username.clone()).or_insert(0_u32);
        *entry = entry.saturating_add(metric(player));
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(session: &mut GameSession, id: &str, name: &str) {
        session.connect(ClientId::new(id));
        session
            .player_mut(&ClientId::new(id))
            .expect("player just connected")
            .rename(name);
    }

    #[test]
    fn connect_preserves_order_and_resets_on_reconnect() {
        let mut session = GameSession::new("Code Miner Server", "ioq3 1.36");
        named(&mut session, "2", "Isgalamido");
        named(&mut session, "3", "Mocinha");
        session
            .player_mut(&ClientId::new("2"))
            .unwrap()
            .record_kill();

        assert!(session.connect(ClientId::new("2")));
        let ids: Vec<&str> = session.players().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
        let reconnected = session.player(&ClientId::new("2")).unwrap();
        assert_eq!(reconnected.kills, 0);
        assert!(!reconnected.is_named());
    }

    #[test]
    fn missing_player_lookups_return_none() {
        let mut session = GameSession::default();
        assert!(session.player(&ClientId::new("9")).is_none());
        assert!(session.player_mut(&ClientId::new("9")).is_none());
    }

    #[test]
    fn unnamed_players_are_left_out_of_views() {
        let mut session = GameSession::default();
        named(&mut session, "2", "Dono da Bola");
        session.connect(ClientId::new("3"));

        assert_eq!(session.player_names(), ["Dono da Bola"]);
        assert_eq!(session.player_scores().len(), 1);
    }

    #[test]
    fn shared_names_are_merged() {
        let mut session = GameSession::default();
        named(&mut session, "2", "Zeh");
        named(&mut session, "5", "Zeh");
        session.player_mut(&ClientId::new("2")).unwrap().record_kill();
        session.player_mut(&ClientId::new("5")).unwrap().record_kill();

        assert_eq!(session.player_names(), ["Zeh"]);
        assert_eq!(session.player_scores().get("Zeh"), Some(&2));
    }

    #[test]
    fn kill_report_keeps_means_and_players_apart() {
        let mut session = GameSession::default();
        named(&mut session, "2", "Isgalamido");
        session.record_kill("MOD_TRIGGER_HURT");
        session
            .player_mut(&ClientId::new("2"))
            .unwrap()
            .record_environment_death();
        session.record_kill("MOD_RAILGUN");
        session.player_mut(&ClientId::new("2")).unwrap().record_kill();

        let report = session.kill_report();
        assert_eq!(report.total_kills, 2);
        assert_eq!(report.kills_by_means.get("MOD_TRIGGER_HURT"), Some(&1));
        assert_eq!(report.kills_by_means.get("MOD_RAILGUN"), Some(&1));
        assert!(!report.kills_by_means.contains_key("Isgalamido"));
        assert_eq!(report.kills_by_player.get("Isgalamido"), Some(&1));
        assert_eq!(report.deaths_by_environment.get("Isgalamido"), Some(&1));
        assert_eq!(session.player_scores().get("Isgalamido"), Some(&0));
    }
}
