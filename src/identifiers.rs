//! Identifier types for game sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generation number of a game session.
///
/// A session id is advanced every time the board is reset or abandoned, so
/// work scheduled against an older id can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    /// Create a session identifier from a raw generation number.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::identifiers::SessionId;
    ///
    /// let id = SessionId::new(3);
    /// assert_eq!(id.next(), SessionId::new(4));
    /// ```
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The following generation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the raw generation number.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}
