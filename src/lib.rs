//! # snakes-ladders
//!
//! A turn-based snakes and ladders engine with a board image compositor.
//!
//! ## Design Principles
//!
//! 1. **Engine, not bot**: The engine tracks players, turn order and
//!    movement. Messaging, persistence and command dispatch belong to the
//!    adapter that drives it.
//!
//! 2. **Join order is turn order**: Players are never reordered. Visual
//!    identities are a pure function of how many joined before.
//!
//! 3. **Failed calls change nothing**: Every error is returned before any
//!    mutation, so an out-of-turn roll is cheap to reject.
//!
//! ## Architecture
//!
//! - **Shared boards**: A `BoardDefinition` is immutable and shared via
//!   `Arc` by every match played on it.
//!
//! - **Persistent player list**: `im::Vector` makes `GameState` clones O(1),
//!   so a render can run on a snapshot while the match moves on.
//!
//! - **One state per match**: No state crosses match boundaries. A single
//!   `GameState` has no internal locking; the adapter serializes access.
//!
//! ## Modules
//!
//! - `core`: Players, identities, boards, options, dice, game state
//! - `render`: Grid geometry, token stacking, image compositing
//! - `catalog`: Loading board definitions from disk
//! - `session`: Match lifecycle (begin, win, abort, admin toggles)
//! - `config`: YAML application config
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use snakes_ladders::{BoardDefinition, GameOptions, GameState, PlayerId, TransitionKind};
//!
//! let board = Arc::new(BoardDefinition::new("demo").with_transition(3, 40));
//! let mut game = GameState::new(board, GameOptions::default());
//!
//! game.add_player(PlayerId::new(1), "Alice").unwrap();
//! game.add_player(PlayerId::new(2), "Bob").unwrap();
//!
//! let result = game.move_player(PlayerId::new(1), 3, true).unwrap();
//! assert_eq!(result.position, 40);
//! assert_eq!(result.transition, TransitionKind::Ladder);
//! assert_eq!(game.turn().unwrap().name(), "Bob");
//! ```

pub mod core;
pub mod render;
pub mod catalog;
pub mod session;
pub mod config;

// Re-export commonly used types
pub use crate::core::{
    identity_for, BoardDefinition, Color, Dice, DiceState, GameError, GameOptions, GameState, MoveResult, Player,
    PlayerId, Shape, Square, TransitionKind, VisualIdentity, FINAL_SQUARE,
};

pub use crate::render::{
    coordinate_of, stack_layout, token_boxes, BoundingBox, ImageFormat, RenderError, RenderOptions, Renderer,
    StackGrid, TokenStyle,
};

pub use crate::catalog::{BoardCatalog, CatalogError};

pub use crate::session::{Match, MatchPhase, RollOutcome, SessionError, StatusLine};

pub use crate::config::{AppConfig, ConfigError};
