//! Match lifecycle around a `GameState`.
//!
//! The engine only knows whose turn it is and what a move does. `Match`
//! adds the lifecycle an adapter needs on top: players join while the match
//! awaits its start, rolls are accepted only after `begin`, the match
//! finishes when someone reaches the final square, and rule toggles and
//! aborts are reserved for the player who created it.
//!
//! `Match` does no messaging. Adapters turn its results into chat text,
//! images or whatever their platform uses.

mod lifecycle;

pub use lifecycle::{Match, MatchPhase, RollOutcome, SessionError, StatusLine};
