use std::collections::HashSet;

use crate::{
    dictionary::Dictionary,
    error::PathError,
    models::{Board, Position},
};

/// The word spelled by `path` if it is a legal path and a dictionary word
pub fn is_valid_path(board: &Board, path: &[Position], dictionary: &Dictionary) -> Option<String> {
    check_path(board, path)
        .ok()
        .filter(|word| dictionary.contains(word))
}

/// Validate that positions form a legal path on the board and spell it.
///
/// Says nothing about the dictionary.
pub fn check_path(board: &Board, positions: &[Position]) -> Result<String, PathError> {
    if positions.is_empty() {
        return Err(PathError::Empty);
    }

    // Check that all positions are within bounds
    if let Some(&pos) = positions.iter().find(|&&pos| !board.contains(pos)) {
        return Err(PathError::OutOfBounds(pos));
    }

    // Check that no position is used twice
    let mut seen = HashSet::with_capacity(positions.len());
    if let Some(&pos) = positions.iter().find(|&&pos| !seen.insert(pos)) {
        return Err(PathError::RepeatedCell(pos));
    }

    // Check that each position is adjacent to the previous one
    for window in positions.windows(2) {
        if !are_adjacent(window[0], window[1]) {
            return Err(PathError::NotAdjacent {
                from: window[0],
                to: window[1],
            });
        }
    }

    board.spell(positions).ok_or(PathError::Empty)
}

/// Check if two positions are adjacent (including diagonals)
pub fn are_adjacent(a: Position, b: Position) -> bool {
    let row_diff = a.row.abs_diff(b.row);
    let col_diff = a.col.abs_diff(b.col);

    row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
}
