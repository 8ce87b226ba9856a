use std::sync::Arc;

use thiserror::Error;

use crate::core::{BoardDefinition, GameError, GameOptions, GameState, MoveResult, Player, PlayerId, Square, VisualIdentity};
use crate::render::{RenderError, Renderer};

/// Where a match is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchPhase {
    /// Players may join; rolls are refused.
    AwaitingStart,
    /// Rolls are accepted from the player holding the turn.
    InProgress,
    /// Someone won or the admin aborted. Nothing more is accepted.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the match has not begun")]
    NotStarted,
    #[error("the match has already begun")]
    AlreadyStarted,
    #[error("the match is over")]
    Finished,
    #[error("nobody has joined yet")]
    NoPlayers,
    #[error("only the match creator can do that ({0} is not)")]
    NotAdmin(PlayerId),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Result of an accepted roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// The mover after the move.
    pub mover: Player,
    pub result: MoveResult,
    /// Who rolls next; `None` once the match is won.
    pub next: Option<Player>,
}

impl RollOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.result.is_win()
    }
}

/// One row of a status listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub name: String,
    pub position: Square,
    pub identity: VisualIdentity,
    /// This player holds the turn.
    pub is_turn: bool,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_turn { "*" } else { " " };
        write!(f, "{} {}: {} ({})", marker, self.position, self.name, self.identity)
    }
}

/// A match: one `GameState` plus its lifecycle.
#[derive(Clone, Debug)]
pub struct Match {
    game: GameState,
    admin: PlayerId,
    phase: MatchPhase,
}

impl Match {
    /// Open a match created by `admin`. The admin does not join automatically.
    #[must_use]
    pub fn new(board: Arc<BoardDefinition>, admin: PlayerId, options: GameOptions) -> Self {
        log::info!("{} opened a match on '{}'", admin, board.name());
        Self {
            game: GameState::new(board, options),
            admin,
            phase: MatchPhase::AwaitingStart,
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn admin(&self) -> PlayerId {
        self.admin
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Seat a player. Allowed until the match finishes.
    pub fn join(&mut self, id: PlayerId, name: impl Into<String>) -> Result<VisualIdentity, SessionError> {
        if self.phase == MatchPhase::Finished {
            return Err(SessionError::Finished);
        }
        Ok(self.game.add_player(id, name)?)
    }

    /// Start accepting rolls. Returns the player who rolls first.
    pub fn begin(&mut self) -> Result<Player, SessionError> {
        match self.phase {
            MatchPhase::InProgress => return Err(SessionError::AlreadyStarted),
            MatchPhase::Finished => return Err(SessionError::Finished),
            MatchPhase::AwaitingStart => {}
        }
        let first = self.game.turn().ok_or(SessionError::NoPlayers)?;
        self.phase = MatchPhase::InProgress;
        log::info!("match on '{}' began with {} players", self.game.board().name(), self.game.len());
        Ok(first)
    }

    /// Apply a roll from `id`. Only the player holding the turn may roll.
    pub fn play_roll(&mut self, id: PlayerId, steps: u8) -> Result<RollOutcome, SessionError> {
        match self.phase {
            MatchPhase::AwaitingStart => return Err(SessionError::NotStarted),
            MatchPhase::Finished => return Err(SessionError::Finished),
            MatchPhase::InProgress => {}
        }

        let result = self.game.move_player(id, steps, true)?;
        let mover = self
            .game
            .player(id)
            .cloned()
            .ok_or(GameError::PlayerNotFound(id))?;

        let next = if result.is_win() {
            self.phase = MatchPhase::Finished;
            log::info!("{} won on '{}'", mover.name(), self.game.board().name());
            None
        } else {
            self.game.turn()
        };

        Ok(RollOutcome { mover, result, next })
    }

    /// Toggle the bonus-turn rule. Admin only.
    pub fn set_bonus_turn_on_max(&mut self, by: PlayerId, enabled: bool) -> Result<(), SessionError> {
        self.require_admin(by)?;
        self.game.set_bonus_turn_on_max(enabled);
        Ok(())
    }

    /// End the match without a winner. Admin only.
    pub fn abort(&mut self, by: PlayerId) -> Result<(), SessionError> {
        self.require_admin(by)?;
        if self.phase == MatchPhase::Finished {
            return Err(SessionError::Finished);
        }
        self.phase = MatchPhase::Finished;
        log::info!("{} aborted the match on '{}'", by, self.game.board().name());
        Ok(())
    }

    /// One line per player in turn order.
    #[must_use]
    pub fn status(&self) -> Vec<StatusLine> {
        let current = self.game.turn_index();
        self.game
            .players()
            .enumerate()
            .map(|(i, p)| StatusLine {
                name: p.name().to_string(),
                position: p.position(),
                identity: p.identity(),
                is_turn: current == Some(i),
            })
            .collect()
    }

    /// Render the current board.
    pub fn render(&self, renderer: &Renderer) -> Result<Vec<u8>, RenderError> {
        renderer.render(&self.game)
    }

    fn require_admin(&self, by: PlayerId) -> Result<(), SessionError> {
        if by == self.admin {
            Ok(())
        } else {
            Err(SessionError::NotAdmin(by))
        }
    }
}
