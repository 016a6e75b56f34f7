use thiserror::Error;

use crate::models::Position;

/// Reasons a grid cannot be used as a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no rows")]
    NoRows,

    #[error("row {0} has no cells")]
    EmptyRow(usize),

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) is an empty string")]
    EmptyCell { row: usize, col: usize },
}

/// Reasons a sequence of positions is not a legal path on a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,

    #[error("position ({}, {}) is outside the board", .0.row, .0.col)]
    OutOfBounds(Position),

    #[error("position ({}, {}) is used more than once", .0.row, .0.col)]
    RepeatedCell(Position),

    #[error(
        "({}, {}) -> ({}, {}) is not a single step",
        .from.row, .from.col, .to.row, .to.col
    )]
    NotAdjacent { from: Position, to: Position },
}
