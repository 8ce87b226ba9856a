//! Engine errors.
//!
//! All of these are caller-input or precondition violations. They are
//! returned before any state is touched, so a failed call leaves the game
//! exactly as it was.

use thiserror::Error;

use super::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} has already joined")]
    PlayerExists(PlayerId),
    #[error("{0} is not in this game")]
    PlayerNotFound(PlayerId),
    /// Frequent and harmless: a roll arrived out of turn.
    #[error("it is not {player}'s turn (current: {current})")]
    NotPlayerTurn { player: PlayerId, current: PlayerId },
}
