//! Error types for line handling and log loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::player::ClientId;

/// Why a single log line produced no mutation.
///
/// None of these abort a parse; the engine records them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("no active game session")]
    NoActiveSession,
    #[error("malformed {command} payload")]
    Malformed { command: &'static str },
    #[error("unknown player {id}")]
    UnknownPlayer { id: ClientId },
}

/// Fatal failures while acquiring the log or its configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid parser config: {0}")]
    Config(#[from] serde_json::Error),
}
