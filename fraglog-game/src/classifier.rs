//! Command extraction for raw log lines.
//!
//! Every record looks like `<marker> <Command>:<payload>`, where the
//! marker is a variable-width run of digits and punctuation (`0:00`,
//! ` 20:37`, `1:02:03`) and may be missing.
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{CMD_CLIENT_CONNECT, CMD_CLIENT_USERINFO_CHANGED, CMD_INIT_GAME, CMD_KILL};

/// Commands the engine acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    InitGame,
    ClientConnect,
    ClientUserinfoChanged,
    Kill,
}

impl Command {
    /// Map an extracted token to a command; `None` for everything the
    /// statistics do not need (`ClientBegin`, `Item`, `say`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            CMD_INIT_GAME => Some(Self::InitGame),
            CMD_CLIENT_CONNECT => Some(Self::ClientConnect),
            CMD_CLIENT_USERINFO_CHANGED => Some(Self::ClientUserinfoChanged),
            CMD_KILL => Some(Self::Kill),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InitGame => CMD_INIT_GAME,
            Self::ClientConnect => CMD_CLIENT_CONNECT,
            Self::ClientUserinfoChanged => CMD_CLIENT_USERINFO_CHANGED,
            Self::Kill => CMD_KILL,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn command_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^A-Za-z]*([A-Za-z][A-Za-z0-9_]*)(?:[:\s]|$)")
            .expect("valid command pattern")
    })
}

/// Extract the command token of `line`.
///
/// Returns `None` when no token starts within `max_prefix_width` bytes,
/// which covers separator rows, blank lines and truncated records.
#[must_use]
pub fn classify_line(line: &str, max_prefix_width: usize) -> Option<&str> {
    let token = command_pattern().captures(line)?.get(1)?;
    (token.start() <= max_prefix_width).then(|| token.as_str())
}
