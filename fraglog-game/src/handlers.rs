//! One handler per recognized command.
//!
//! Handlers receive the session they mutate (or `None` before the first
//! `InitGame`) and report every skipped mutation as a [`LineError`].
use crate::config::ParserConfig;
use crate::constants::{CMD_CLIENT_CONNECT, CMD_CLIENT_USERINFO_CHANGED, CMD_KILL};
use crate::error::LineError;
use crate::extract::{extract_connect_id, extract_game_info, extract_kill, extract_userinfo};
use crate::game::GameSession;
use crate::means::cause_label;
use crate::registry::SessionRegistry;

/// Open a new session from an `InitGame` line and make it current.
///
/// Missing metadata yields empty strings. Returns the 1-based index.
pub fn start_game(registry: &mut SessionRegistry, line: &str) -> usize {
    let info = extract_game_info(line);
    registry.start_session(GameSession::new(
        info.hostname.unwrap_or_default(),
        info.version.unwrap_or_default(),
    ))
}

/// Add an unnamed player for a `ClientConnect` line.
///
/// # Errors
///
/// Fails without mutating when there is no session or no numeric id.
pub fn connect_player(session: Option<&mut GameSession>, line: &str) -> Result<(), LineError> {
    let session = session.ok_or(LineError::NoActiveSession)?;
    let id = extract_connect_id(line).ok_or(LineError::Malformed {
        command: CMD_CLIENT_CONNECT,
    })?;
    if session.connect(id) {
        log::debug!("client slot reconnected, record reset");
    }
    Ok(())
}

/// Rename a known player from a `ClientUserinfoChanged` line.
///
/// # Errors
///
/// Fails without mutating when there is no session, the payload has no id
/// or name, or the id has not connected in the current session.
pub fn update_player(session: Option<&mut GameSession>, line: &str) -> Result<(), LineError> {
    let session = session.ok_or(LineError::NoActiveSession)?;
    let malformed = LineError::Malformed {
        command: CMD_CLIENT_USERINFO_CHANGED,
    };
    let info = extract_userinfo(line).ok_or_else(|| malformed.clone())?;
    let player = session
        .player_mut(&info.id)
        .ok_or_else(|| LineError::UnknownPlayer {
            id: info.id.clone(),
        })?;
    let name = info.name.ok_or(malformed)?;
    player.rename(&name);
    Ok(())
}

/// Apply a `Kill` line.
///
/// The session total always moves. A kill by the environment identity
/// charges the victim an environment death; any other kill credits the
/// killer and leaves the victim alone.
///
/// # Errors
///
/// Fails when there is no session or the ids cannot be read (nothing is
/// counted), or when the credited or charged player is unknown (only the
/// session total and cause breakdown are counted).
pub fn record_kill(
    session: Option<&mut GameSession>,
    line: &str,
    config: &ParserConfig,
) -> Result<(), LineError> {
    let session = session.ok_or(LineError::NoActiveSession)?;
    let kill = extract_kill(line).ok_or(LineError::Malformed { command: CMD_KILL })?;
    session.record_kill(&cause_label(kill.means_id, kill.cause.as_deref()));

    if config.is_environment(&kill.killer) {
        let victim = session
            .player_mut(&kill.victim)
            .ok_or(LineError::UnknownPlayer { id: kill.victim })?;
        victim.record_environment_death();
    } else {
        let killer = session
            .player_mut(&kill.killer)
            .ok_or(LineError::UnknownPlayer { id: kill.killer })?;
        killer.record_kill();
    }
    Ok(())
}
