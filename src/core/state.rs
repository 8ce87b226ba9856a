//! Game state: players, turn pointer and the movement rules.
//!
//! ## Turn order
//!
//! Join order is turn order and is never rearranged. `turn_index` points at
//! the player whose move is next; it advances by one (wrapping) after every
//! move unless the roll earns a bonus turn.
//!
//! ## Movement
//!
//! `candidate = position + steps`. Overshooting the final square voids the
//! roll. Landing on a transition key redirects the token (ladder forwards,
//! snake backwards). Transitions are followed once, never chained.
//!
//! ## Snapshots
//!
//! Players live in an `im::Vector`, so cloning a `GameState` is O(1). An
//! adapter that renders on a worker thread clones the state and hands the
//! clone over, leaving the original free for the next command.

use std::sync::Arc;

use im::Vector;

use super::board::{BoardDefinition, Square, TransitionKind, FINAL_SQUARE};
use super::config::GameOptions;
use super::error::GameError;
use super::identity::{identity_for, VisualIdentity};
use super::player::{Player, PlayerId};

/// Outcome of one `move_player` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Square the token ended on after any transition.
    pub position: Square,
    /// Snake, ladder, or nothing.
    pub transition: TransitionKind,
    /// The roll overshot the final square and was forfeited.
    pub voided: bool,
    /// The same player keeps the turn.
    pub bonus_turn: bool,
}

impl MoveResult {
    /// Whether this move reached the final square.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.position == FINAL_SQUARE
    }
}

/// State of one match.
///
/// ## Invariants
///
/// - `turn_index < players.len()` whenever there are players
/// - no two players share an id
/// - a failed operation mutates nothing
#[derive(Clone, Debug)]
pub struct GameState {
    board: Arc<BoardDefinition>,
    players: Vector<Player>,
    turn_index: usize,
    /// Total joins so far; drives identity assignment.
    joined: usize,
    options: GameOptions,
}

impl GameState {
    /// Start an empty match on `board`.
    #[must_use]
    pub fn new(board: Arc<BoardDefinition>, options: GameOptions) -> Self {
        Self {
            board,
            players: Vector::new(),
            turn_index: 0,
            joined: 0,
            options,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Arc<BoardDefinition> {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Toggle the bonus-turn rule for the rest of the match.
    pub fn set_bonus_turn_on_max(&mut self, enabled: bool) {
        self.options.bonus_turn_on_max = enabled;
    }

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Index of the player whose turn it is, `None` with no players.
    #[must_use]
    pub fn turn_index(&self) -> Option<usize> {
        if self.players.is_empty() {
            None
        } else {
            Some(self.turn_index)
        }
    }

    /// Snapshot of the player whose turn it is.
    ///
    /// Returns a copy; changing it does not affect the game.
    #[must_use]
    pub fn turn(&self) -> Option<Player> {
        self.players.get(self.turn_index).cloned()
    }

    /// First player (in turn order) standing on the final square.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.position() == FINAL_SQUARE)
    }

    // === Mutations ===

    /// Add a player at the end of the turn order.
    ///
    /// Returns the visual identity assigned to the new player.
    pub fn add_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<VisualIdentity, GameError> {
        if self.index_of(id).is_some() {
            return Err(GameError::PlayerExists(id));
        }

        let identity = identity_for(self.joined);
        let player = Player::new(id, name, identity);
        log::debug!("{} joined as {}", id, identity);

        self.players.push_back(player);
        self.joined += 1;
        Ok(identity)
    }

    /// Move a player `steps` squares.
    ///
    /// With `check_turn`, a player who does not hold the turn is rejected
    /// with `NotPlayerTurn` and nothing changes.
    pub fn move_player(&mut self, id: PlayerId, steps: u8, check_turn: bool) -> Result<MoveResult, GameError> {
        let idx = self.index_of(id).ok_or(GameError::PlayerNotFound(id))?;

        if check_turn && idx != self.turn_index {
            return Err(GameError::NotPlayerTurn {
                player: id,
                current: self.players[self.turn_index].id(),
            });
        }

        let from = self.players[idx].position();
        let candidate = u16::from(from) + u16::from(steps);

        let (position, transition, voided) = if candidate > u16::from(FINAL_SQUARE) {
            (from, TransitionKind::None, true)
        } else {
            // candidate <= 100 fits in a Square
            let landed = candidate as Square;
            match self.board.transition(landed) {
                Some(to) => (to, TransitionKind::between(landed, to), false),
                None => (landed, TransitionKind::None, false),
            }
        };

        if let Some(player) = self.players.get_mut(idx) {
            player.set_position(position);
        }

        let bonus_turn = self.options.grants_bonus_turn(steps);
        if !bonus_turn {
            self.turn_index = (self.turn_index + 1) % self.players.len();
        }

        log::debug!(
            "{} rolled {}: {} -> {} ({:?}{})",
            id,
            steps,
            from,
            position,
            transition,
            if voided { ", void" } else { "" }
        );

        Ok(MoveResult {
            position,
            transition,
            voided,
            bonus_turn,
        })
    }

    /// Remove a player from the match.
    ///
    /// Players after the removed one keep their relative order. If the
    /// removed player held the turn, it passes to the player who followed
    /// them. Identities of the remaining players never change. Later
    /// joiners continue the identity rotation from the join count rather
    /// than the current player count, so a newcomer does not take over the
    /// removed player's slot. The rotation still wraps every
    /// `COLORS.len() * SHAPES.len()` joins, after which identities repeat.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, GameError> {
        let idx = self.index_of(id).ok_or(GameError::PlayerNotFound(id))?;
        let removed = self.players.remove(idx);

        if self.players.is_empty() {
            self.turn_index = 0;
        } else if idx < self.turn_index {
            self.turn_index -= 1;
        } else if self.turn_index >= self.players.len() {
            self.turn_index = 0;
        }

        log::debug!("{} left; {} players remain", id, self.players.len());
        Ok(removed)
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }
}
