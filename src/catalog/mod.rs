//! Board catalog: discovering board definitions on disk.
//!
//! Layout expected under the catalog root:
//!
//! ```text
//! boards/
//!   classic/
//!     board.csv   # rows of "from,to"
//!     board.jpg   # optional 800x800 background
//!   spiral/
//!     board.csv
//! ```
//!
//! The directory name becomes the board name.

mod loader;

pub use loader::{load_board, parse_transitions, BoardCatalog, CatalogError, BACKGROUND_FILE, TRANSITIONS_FILE};
