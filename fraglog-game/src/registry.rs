//! Session registry and the line-by-line parsing engine.
use serde::{Deserialize, Serialize};

use crate::classifier::{Command, classify_line};
use crate::config::ParserConfig;
use crate::error::LineError;
use crate::game::GameSession;
use crate::handlers::{connect_player, record_kill, start_game, update_player};
use crate::summary::Summary;

/// Ordered game sessions; the last one is current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRegistry {
    sessions: Vec<GameSession>,
}

impl SessionRegistry {
    /// Append `session`, make it current and return its 1-based index.
    pub fn start_session(&mut self, session: GameSession) -> usize {
        self.sessions.push(session);
        self.sessions.len()
    }

    /// 1-based index of the current session, `None` before the first start.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.sessions.is_empty() {
            None
        } else {
            Some(self.sessions.len())
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&GameSession> {
        self.sessions.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut GameSession> {
        self.sessions.last_mut()
    }

    /// Session by 1-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GameSession> {
        index
            .checked_sub(1)
            .and_then(|offset| self.sessions.get(offset))
    }

    /// Session named by the id part of its `game_<n>` key, so `"3"`
    /// matches but `"03"` and `"+3"` do not.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&GameSession> {
        let index = id.parse::<usize>().ok()?;
        if index.to_string() != id {
            return None;
        }
        self.get(index)
    }

    /// Sessions with their 1-based indices, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GameSession)> {
        self.sessions
            .iter()
            .enumerate()
            .map(|(offset, session)| (offset + 1, session))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Project the current state; always reflects every line parsed so far.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_registry(self)
    }
}

/// What happened to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Handled(Command),
    /// No command token in the line.
    Unclassified,
    /// A command the statistics do not use.
    Ignored,
    Rejected(Command, LineError),
}

/// Running counters for a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub lines: usize,
    pub handled: usize,
    pub unclassified: usize,
    pub ignored: usize,
    pub rejected: usize,
}

/// Feeds log lines, in order, to the command handlers.
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParserConfig,
    registry: SessionRegistry,
    report: ParseReport,
}

impl LogParser {
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn report(&self) -> ParseReport {
        self.report
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        self.registry.summary()
    }

    #[must_use]
    pub fn into_registry(self) -> SessionRegistry {
        self.registry
    }

    /// Parse a whole log held in memory.
    pub fn parse_str(&mut self, text: &str) -> ParseReport {
        self.parse_lines(text.lines())
    }

    /// Parse `lines` in order, continuing the numbering of earlier calls.
    pub fn parse_lines<I, S>(&mut self, lines: I) -> ParseReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.parse_line(line.as_ref());
        }
        log::info!(
            "parsed {} lines into {} games ({} handled, {} ignored, {} unclassified, {} rejected)",
            self.report.lines,
            self.registry.len(),
            self.report.handled,
            self.report.ignored,
            self.report.unclassified,
            self.report.rejected,
        );
        self.report
    }

    /// Classify and dispatch a single line. Never fails; problems are
    /// logged, counted and returned.
    pub fn parse_line(&mut self, line: &str) -> LineOutcome {
        self.report.lines += 1;
        let line_number = self.report.lines;

        let Some(token) = classify_line(line, self.config.max_prefix_width) else {
            log::debug!("could not find command on line {line_number}");
            self.report.unclassified += 1;
            return LineOutcome::Unclassified;
        };
        let Some(command) = Command::from_name(token) else {
            log::debug!("command {token} ignored (line {line_number})");
            self.report.ignored += 1;
            return LineOutcome::Ignored;
        };

        match self.dispatch(command, line) {
            Ok(()) => {
                self.report.handled += 1;
                LineOutcome::Handled(command)
            }
            Err(error) => {
                log::warn!("{command} rejected on line {line_number}: {error}");
                self.report.rejected += 1;
                LineOutcome::Rejected(command, error)
            }
        }
    }

    fn dispatch(&mut self, command: Command, line: &str) -> Result<(), LineError> {
        match command {
            Command::InitGame => {
                let index = start_game(&mut self.registry, line);
                log::debug!("game {index} started");
                Ok(())
            }
            Command::ClientConnect => connect_player(self.registry.current_mut(), line),
            Command::ClientUserinfoChanged => update_player(self.registry.current_mut(), line),
            Command::Kill => record_kill(self.registry.current_mut(), line, &self.config),
        }
    }
}
