//! Board definitions: transition tables and background images.
//!
//! A `BoardDefinition` is immutable once built and is shared read-only by
//! every match played on it (wrap it in an `Arc`). The engine does not check
//! that the transition table is sane: cycles, chains and self-maps are taken
//! as given.

use std::sync::Arc;

use rustc_hash::FxHashMap;

/// A square number. `1..=100` on the board, `0` means "not yet entered".
pub type Square = u8;

/// The winning square.
pub const FINAL_SQUARE: Square = 100;

/// What happened after a token landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Redirected backwards.
    Snake,
    /// Plain landing, or a void move.
    None,
    /// Redirected forwards.
    Ladder,
}

impl TransitionKind {
    /// Classify a redirect from `from` to `to`.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => TransitionKind::Ladder,
            std::cmp::Ordering::Less => TransitionKind::Snake,
            std::cmp::Ordering::Equal => TransitionKind::None,
        }
    }

    /// `+1` ladder, `-1` snake, `0` otherwise.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            TransitionKind::Snake => -1,
            TransitionKind::None => 0,
            TransitionKind::Ladder => 1,
        }
    }
}

/// Immutable description of one playable board.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::BoardDefinition;
///
/// let board = BoardDefinition::new("classic")
///     .with_transition(11, 99)
///     .with_transition(98, 2);
///
/// assert_eq!(board.transition(11), Some(99));
/// assert_eq!(board.transition(12), None);
/// assert_eq!(board.ladder_count(), 1);
/// assert_eq!(board.snake_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardDefinition {
    name: String,
    transitions: FxHashMap<Square, Square>,
    background: Option<Arc<[u8]>>,
}

impl BoardDefinition {
    /// Create a board with no transitions and no background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: FxHashMap::default(),
            background: None,
        }
    }

    /// Add a transition. A later transition from the same square replaces
    /// the earlier one.
    #[must_use]
    pub fn with_transition(mut self, from: Square, to: Square) -> Self {
        self.transitions.insert(from, to);
        self
    }

    /// Add many transitions in order.
    #[must_use]
    pub fn with_transitions(mut self, transitions: impl IntoIterator<Item = (Square, Square)>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Attach encoded background image bytes.
    #[must_use]
    pub fn with_background(mut self, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.background = Some(bytes.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where a token arriving at `square` ends up, if redirected.
    #[must_use]
    pub fn transition(&self, square: Square) -> Option<Square> {
        self.transitions.get(&square).copied()
    }

    /// The full transition table.
    #[must_use]
    pub fn transitions(&self) -> &FxHashMap<Square, Square> {
        &self.transitions
    }

    /// Encoded background image, if the board has one.
    #[must_use]
    pub fn background(&self) -> Option<&[u8]> {
        self.background.as_deref()
    }

    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.transitions.iter().filter(|(from, to)| to > from).count()
    }

    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.transitions.iter().filter(|(from, to)| to < from).count()
    }
}
