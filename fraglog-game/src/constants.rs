//! Fixed vocabulary of the arena server log.
//!
//! Command names are matched verbatim against the token the classifier
//! extracts; anything else is skipped by the engine.

// Commands -----------------------------------------------------------------
pub const CMD_INIT_GAME: &str = "InitGame";
pub const CMD_CLIENT_CONNECT: &str = "ClientConnect";
pub const CMD_CLIENT_USERINFO_CHANGED: &str = "ClientUserinfoChanged";
pub const CMD_KILL: &str = "Kill";

// Info-string keys ---------------------------------------------------------
pub const KEY_HOSTNAME: &str = "sv_hostname";
pub const KEY_VERSION: &str = "version";
pub const KEY_NAME: &str = "n";

// Parser defaults ----------------------------------------------------------
/// Client id the server reports as the killer for hazard deaths.
pub const DEFAULT_WORLD_ID: &str = "1022";
/// Widest timestamp prefix (e.g. ` 20:37 `) tolerated before a command.
pub const DEFAULT_MAX_PREFIX_WIDTH: usize = 8;

// Summary ------------------------------------------------------------------
pub const GAME_KEY_PREFIX: &str = "game_";
