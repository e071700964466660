//! Field extraction, one function per command payload.
//!
//! Each extractor works on the full raw line and returns `None` when the
//! fields it needs are absent, so callers never mistake a default for a
//! parsed value.
use std::sync::OnceLock;

use regex::Regex;

use crate::player::ClientId;

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("valid extraction pattern"))
}

/// Server metadata carried by an `InitGame` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameInfo {
    pub hostname: Option<String>,
    pub version: Option<String>,
}

/// Client id and optional display name from a userinfo change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: ClientId,
    pub name: Option<String>,
}

/// The fields of a `Kill:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillEvent {
    pub killer: ClientId,
    pub victim: ClientId,
    pub means_id: Option<u32>,
    /// Trailing `by MOD_*` token when the line carries the readable part.
    pub cause: Option<String>,
}

/// `sv_hostname\<value>` from an info string.
#[must_use]
pub fn extract_hostname(line: &str) -> Option<&str> {
    static HOSTNAME: OnceLock<Regex> = OnceLock::new();
    pattern(&HOSTNAME, r"(?:^|\\)sv_hostname\\([^\\]+)")
        .captures(line)?
        .get(1)
        .map(|value| value.as_str())
}

/// `version\<value>` from an info string.
#[must_use]
pub fn extract_version(line: &str) -> Option<&str> {
    static VERSION: OnceLock<Regex> = OnceLock::new();
    pattern(&VERSION, r"(?:^|\\)version\\([^\\]+)")
        .captures(line)?
        .get(1)
        .map(|value| value.as_str())
}

#[must_use]
pub fn extract_game_info(line: &str) -> GameInfo {
    GameInfo {
        hostname: extract_hostname(line).map(str::to_string),
        version: extract_version(line).map(str::to_string),
    }
}

/// `ClientConnect: <digits>`.
#[must_use]
pub fn extract_connect_id(line: &str) -> Option<ClientId> {
    static CONNECT: OnceLock<Regex> = OnceLock::new();
    let id = pattern(&CONNECT, r"ClientConnect:\s*(\d+)")
        .captures(line)?
        .get(1)?;
    Some(ClientId::new(id.as_str()))
}

/// The `n\<name>` field of a userinfo payload.
///
/// The payload alternates `key\value`, so only a key position can name
/// the player; an `n` appearing as some other key's value is skipped.
#[must_use]
pub fn extract_name(payload: &str) -> Option<&str> {
    let mut fields = payload.trim_start_matches('\\').split('\\');
    while let Some(key) = fields.next() {
        let value = fields.next()?;
        if key == "n" {
            return Some(value);
        }
    }
    None
}

/// `ClientUserinfoChanged: <digits> <key>\<value>\...`.
#[must_use]
pub fn extract_userinfo(line: &str) -> Option<UserInfo> {
    static USERINFO: OnceLock<Regex> = OnceLock::new();
    let caps = pattern(&USERINFO, r"ClientUserinfoChanged:\s*(\d+)\s*(.*)$").captures(line)?;
    let id = ClientId::new(caps.get(1)?.as_str());
    let name = caps
        .get(2)
        .and_then(|payload| extract_name(payload.as_str()))
        .map(str::to_string);
    Some(UserInfo { id, name })
}

/// `Kill: <killer> <victim> [<means>][: <killer> killed <victim> by <MOD>]`.
#[must_use]
pub fn extract_kill(line: &str) -> Option<KillEvent> {
    static KILL: OnceLock<Regex> = OnceLock::new();
    static CAUSE: OnceLock<Regex> = OnceLock::new();
    let caps = pattern(&KILL, r"Kill:\s*(\d+)\s+(\d+)(?:\s+(\d+))?").captures(line)?;
    let killer = ClientId::new(caps.get(1)?.as_str());
    let victim = ClientId::new(caps.get(2)?.as_str());
    let means_id = caps
        .get(3)
        .and_then(|value| value.as_str().parse::<u32>().ok());
    let cause = pattern(&CAUSE, r"\skilled\s.*\sby\s+(\S+)\s*$")
        .captures(line)
        .and_then(|found| found.get(1))
        .map(|value| value.as_str().to_string());
    Some(KillEvent {
        killer,
        victim,
        means_id,
        cause,
    })
}
