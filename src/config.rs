//! Session configuration.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{search::SearchConfig, tictactoe::Player};

/// Pause before an automated move is shown, in milliseconds
pub const DEFAULT_MOVE_DELAY_MS: u64 = 500;

/// Configuration for a [`GameSession`](crate::session::GameSession).
///
/// Builder-style, and loadable from JSON. Missing fields take their
/// defaults, so `{}` is a valid file.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use oxo::{config::SessionConfig, tictactoe::Player};
///
/// let config = SessionConfig::new()
///     .with_automated_mark(Player::X)
///     .with_move_delay(Duration::from_millis(0));
/// assert_eq!(config.first_mover, Player::X);
/// assert_eq!(config.move_delay(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Mark placed by the first move after every restart
    pub first_mover: Player,
    /// Mark played by the engine when the opponent is automated
    pub automated_mark: Player,
    /// Display pacing before an automated move is applied
    pub move_delay_ms: u64,
    /// Search options for the automated opponent
    pub search: SearchConfig,
}

impl SessionConfig {
    /// Standard setup: X opens, the engine plays O, 500 ms pacing, pruning on.
    pub fn new() -> Self {
        Self {
            first_mover: Player::X,
            automated_mark: Player::O,
            move_delay_ms: DEFAULT_MOVE_DELAY_MS,
            search: SearchConfig::default(),
        }
    }

    /// Set the opening mark.
    pub fn with_first_mover(mut self, player: Player) -> Self {
        self.first_mover = player;
        self
    }

    /// Set the mark the engine plays.
    pub fn with_automated_mark(mut self, player: Player) -> Self {
        self.automated_mark = player;
        self
    }

    /// Set the pause before automated moves.
    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the search options.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the text is not a valid
    /// configuration object.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Serialization`] if its contents are malformed.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded session config");
        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
