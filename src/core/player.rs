//! Player identification and per-player record.
//!
//! ## PlayerId
//!
//! Opaque identifier supplied by the adapter (typically a platform user id).
//! The engine only compares ids for equality.
//!
//! ## Player
//!
//! A player's name, visual identity and board position. Fields are private:
//! the owning `GameState` is the only mutator, everybody else reads through
//! getters or holds a cloned snapshot.

use serde::{Deserialize, Serialize};

use super::board::Square;
use super::identity::VisualIdentity;

/// Opaque player identifier.
///
/// ```
/// use snakes_ladders::core::PlayerId;
///
/// let id = PlayerId::new(-1001);
/// assert_eq!(id.raw(), -1001);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A participant in one match.
///
/// Position `0` means the token has not entered the board yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    identity: VisualIdentity,
    position: Square,
}

impl Player {
    /// Create a player off the board.
    pub(crate) fn new(id: PlayerId, name: impl Into<String>, identity: VisualIdentity) -> Self {
        Self {
            id,
            name: name.into(),
            identity,
            position: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name given at join time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color and shape used to draw this player's token.
    #[must_use]
    pub fn identity(&self) -> VisualIdentity {
        self.identity
    }

    /// Current square, `0` if not yet on the board.
    #[must_use]
    pub fn position(&self) -> Square {
        self.position
    }

    /// Whether the token has entered the board.
    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.position > 0
    }

    pub(crate) fn set_position(&mut self, position: Square) {
        self.position = position;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::identity_for;

    #[test]
    fn test_player_id() {
        let id = PlayerId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Player(42)");
        assert_eq!(PlayerId::from(42), id);
    }

    #[test]
    fn test_new_player_is_off_board() {
        let player = Player::new(PlayerId::new(1), "Alice", identity_for(0));
        assert_eq!(player.position(), 0);
        assert!(!player.is_on_board());
        assert_eq!(player.name(), "Alice");
    }

    #[test]
    fn test_display() {
        let player = Player::new(PlayerId::new(1), "Alice", identity_for(0));
        assert_eq!(format!("{}", player), "Alice (blue circle)");
    }
}
