//! Directory scanning and transition-table parsing.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{BoardDefinition, Dice, Square, FINAL_SQUARE};

/// Transition table file inside a board directory.
pub const TRANSITIONS_FILE: &str = "board.csv";

/// Optional background image inside a board directory.
pub const BACKGROUND_FILE: &str = "board.jpg";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse `from,to` rows into a transition map.
///
/// Blank lines are skipped, fields are trimmed and may be wrapped in
/// double quotes. Both values must be squares in `1..=100`. A repeated
/// `from` keeps the last row.
///
/// ```
/// use snakes_ladders::catalog::parse_transitions;
///
/// let map = parse_transitions("11,99\n98, 2\n\n11,50\n".as_bytes(), "board.csv").unwrap();
/// assert_eq!(map.get(&98), Some(&2));
/// assert_eq!(map.get(&11), Some(&50));
/// ```
pub fn parse_transitions(
    reader: impl Read,
    path: impl AsRef<Path>,
) -> Result<FxHashMap<Square, Square>, CatalogError> {
    let path = path.as_ref();
    let mut transitions = FxHashMap::default();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(io_error(path))?;
        let line_no = i + 1;
        let parse_error = |message: String| CatalogError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            message,
        };

        let row = line.trim();
        if row.is_empty() {
            continue;
        }

        let mut fields = row.split(',').map(str::trim);
        let (from, to) = match (fields.next(), fields.next()) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(parse_error(format!("expected 'from,to', got '{}'", row))),
        };

        let from = parse_square(from).map_err(parse_error)?;
        let to = parse_square(to).map_err(parse_error)?;
        transitions.insert(from, to);
    }

    Ok(transitions)
}

fn parse_square(field: &str) -> Result<Square, String> {
    let field = field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
        .trim();
    let value: u32 = field
        .parse()
        .map_err(|_| format!("'{}' is not a square number", field))?;
    if value == 0 || value > u32::from(FINAL_SQUARE) {
        return Err(format!("square {} is off the board", value));
    }
    Ok(value as Square)
}

/// Load one board from its directory, or `None` if it has no table.
pub fn load_board(dir: &Path) -> Result<Option<BoardDefinition>, CatalogError> {
    let table_path = dir.join(TRANSITIONS_FILE);
    if !table_path.is_file() {
        return Ok(None);
    }

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = fs::File::open(&table_path).map_err(io_error(&table_path))?;
    let transitions = parse_transitions(file, &table_path)?;
    let mut board = BoardDefinition::new(name).with_transitions(transitions);

    let image_path = dir.join(BACKGROUND_FILE);
    if image_path.is_file() {
        let bytes = fs::read(&image_path).map_err(io_error(&image_path))?;
        board = board.with_background(bytes);
    }

    Ok(Some(board))
}

/// Immutable list of boards discovered under one directory.
///
/// Built once at startup by an explicit `load` call and then shared.
#[derive(Clone, Debug, Default)]
pub struct BoardCatalog {
    boards: Vec<Arc<BoardDefinition>>,
}

impl BoardCatalog {
    /// Scan `root` for board directories, in name order.
    ///
    /// Entries that are not directories, directories without a transition
    /// table, and directories whose table cannot be read or parsed are
    /// skipped with a warning. Only an unreadable `root` fails the load.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let root = root.as_ref();
        let mut dirs = Vec::new();
        for entry in fs::read_dir(root).map_err(io_error(root))? {
            let entry = entry.map_err(io_error(root))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        let mut boards = Vec::new();
        for dir in dirs {
            match load_board(&dir) {
                Ok(Some(board)) => {
                    log::debug!(
                        "loaded board '{}' ({} ladders, {} snakes, background: {})",
                        board.name(),
                        board.ladder_count(),
                        board.snake_count(),
                        board.background().is_some()
                    );
                    boards.push(Arc::new(board));
                }
                Ok(None) => log::warn!("skipping {}: no {}", dir.display(), TRANSITIONS_FILE),
                Err(e) => log::warn!("skipping {}: {}", dir.display(), e),
            }
        }

        log::info!("loaded {} boards from {}", boards.len(), root.display());
        Ok(Self { boards })
    }

    /// Catalog from boards built in code.
    #[must_use]
    pub fn from_boards(boards: impl IntoIterator<Item = BoardDefinition>) -> Self {
        Self {
            boards: boards.into_iter().map(Arc::new).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<BoardDefinition>> {
        self.boards.iter().find(|b| b.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<BoardDefinition>> {
        self.boards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Pick a board at random for a new match.
    pub fn choose(&self, dice: &mut Dice) -> Option<Arc<BoardDefinition>> {
        dice.choose(&self.boards).cloned()
    }
}
