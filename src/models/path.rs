use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, 0-based
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Ordered cells traced by a player
pub type Path = Vec<Position>;

/// A dictionary word together with one path that spells it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WordPath {
    pub word: String,
    pub path: Path,
}

impl WordPath {
    pub fn new(word: impl Into<String>, path: Path) -> Self {
        Self {
            word: word.into(),
            path,
        }
    }
}
