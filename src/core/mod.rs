//! Core engine types: players, identities, boards, options, dice, state.
//!
//! Nothing here draws or touches the filesystem. A `GameState` is driven
//! entirely by the adapter's calls.

pub mod player;
pub mod identity;
pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId};
pub use identity::{identity_for, identity_in_palette, Color, Shape, VisualIdentity, COLORS, SHAPES};
pub use board::{BoardDefinition, Square, TransitionKind, FINAL_SQUARE};
pub use config::GameOptions;
pub use dice::{Dice, DiceState};
pub use error::GameError;
pub use state::{GameState, MoveResult};
