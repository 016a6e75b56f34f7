use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Position;
use crate::error::BoardError;

/// King-move offsets (row, col) in the order neighbours are visited:
/// down, up, right, left, then the four diagonals
pub const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rectangular grid of letter strings.
///
/// A cell usually holds one letter but may hold several (the `"qu"` die face).
/// Cells are lowercased on construction to match the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Board {
    cells: Vec<Vec<String>>,
    cols: usize,
}

impl Board {
    /// Build a board, rejecting empty or ragged grids
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self, BoardError> {
        let cols = rows.first().map(Vec::len).ok_or(BoardError::NoRows)?;

        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(BoardError::EmptyRow(row));
            }
            if cells.len() != cols {
                return Err(BoardError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            if let Some(col) = cells.iter().position(|cell| cell.trim().is_empty()) {
                return Err(BoardError::EmptyCell { row, col });
            }
        }

        let cells = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.trim().to_lowercase())
                    .collect()
            })
            .collect();

        Ok(Self { cells, cols })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols
    }

    /// Letters at `pos`, or `None` when it lies outside the board
    pub fn get(&self, pos: Position) -> Option<&str> {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .map(String::as_str)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }

    /// In-bounds king-move neighbours of `pos`, in [`DIRECTIONS`] order
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let next = Position {
                row: pos.row.checked_add_signed(dr)?,
                col: pos.col.checked_add_signed(dc)?,
            };
            self.contains(next).then_some(next)
        })
    }

    /// Concatenate the letters along `path`. Does not check adjacency.
    pub fn spell(&self, path: &[Position]) -> Option<String> {
        path.iter().map(|&pos| self.get(pos)).collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Board> for Vec<Vec<String>> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Parses `"abcd/efgh/ijkl/mnop"` or one row per line.
///
/// A row containing whitespace is split into whitespace-separated cells,
/// so `"qu e / t a"` gives a cell `"qu"`; otherwise every character is a cell.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| {
                if row.contains(char::is_whitespace) {
                    row.split_whitespace().map(String::from).collect()
                } else {
                    row.chars().map(String::from).collect()
                }
            })
            .collect();

        Self::new(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("{:<2}", capitalize(cell)))
                .collect();
            write!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

fn capitalize(cell: &str) -> String {
    let mut chars = cell.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
