//! Fraglog Game Engine
//!
//! Rebuilds game sessions, players and kill statistics from an arena
//! server log. This crate holds the parsing core without any transport or
//! process concerns.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod game;
pub mod handlers;
pub mod means;
pub mod player;
pub mod registry;
pub mod summary;

use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use classifier::{Command, classify_line};
pub use config::ParserConfig;
pub use error::{LineError, LoadError};
pub use extract::{GameInfo, KillEvent, UserInfo};
pub use game::{GameSession, KillReport};
pub use means::MeansOfDeath;
pub use player::{ClientId, PlayerRecord};
pub use registry::{LineOutcome, LogParser, ParseReport, SessionRegistry};
pub use summary::{GameSummary, Summary, game_key};

/// Trait for abstracting where the raw log comes from
pub trait LogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the whole log into memory
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    fn read_log(&self) -> Result<String, Self::Error>;
}

/// Log stored on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogSource {
    path: PathBuf,
}

impl FileLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for FileLogSource {
    type Error = LoadError;

    /// Invalid UTF-8 is replaced rather than rejected, so one corrupt
    /// record only affects its own line.
    fn read_log(&self) -> Result<String, Self::Error> {
        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Load a parser configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_parser_config(path: &Path) -> Result<ParserConfig, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ParserConfig::from_json(&json)?)
}

/// Read `source` once and parse every line of it
///
/// # Errors
///
/// Returns the source's error if the log cannot be read; individual
/// lines never fail the parse.
pub fn parse_source<S>(source: &S, config: ParserConfig) -> Result<LogParser, S::Error>
where
    S: LogSource,
{
    let text = source.read_log()?;
    let mut parser = LogParser::new(config);
    parser.parse_str(&text);
    Ok(parser)
}
