//! Deterministic dice for simulations and bots.
//!
//! The engine never rolls on its own: `GameState::move_player` takes the
//! number of steps from the caller. `Dice` is what callers use when they do
//! not have a platform die to read from.
//!
//! ```
//! use snakes_ladders::core::Dice;
//!
//! let mut a = Dice::new(42);
//! let mut b = Dice::new(42);
//! for _ in 0..10 {
//!     let roll = a.roll();
//!     assert!((1..=6).contains(&roll));
//!     assert_eq!(roll, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded die with a configurable number of faces.
///
/// Uses ChaCha8 so a seed replays the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct Dice {
    inner: ChaCha8Rng,
    seed: u64,
    faces: u8,
}

impl Dice {
    /// Six-sided die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_faces(seed, 6)
    }

    /// Die with `faces` faces. Zero faces is treated as one.
    #[must_use]
    pub fn with_faces(seed: u64, faces: u8) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            faces: faces.max(1),
        }
    }

    /// Die seeded from the operating system.
    #[must_use]
    pub fn from_entropy(faces: u8) -> Self {
        let seed = rand::thread_rng().gen();
        Self::with_faces(seed, faces)
    }

    #[must_use]
    pub fn faces(&self) -> u8 {
        self.faces
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll once, returning a value in `1..=faces`.
    pub fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=self.faces)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceState {
        DiceState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            faces: self.faces,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            faces: state.faces.max(1),
        }
    }
}

/// Serializable die state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1) no matter
/// how many rolls came before.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceState {
    pub seed: u64,
    pub word_pos: u128,
    pub faces: u8,
}
