//! Boggle: trace adjacent cells on a letter grid to spell dictionary words.
//!
//! The core is [`game::PathFinder`], a depth-first search that finds every
//! path spelling a word of a given length, or the best path for every word on
//! the board. Boards and dictionaries are plain values owned by the caller.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;

pub use dictionary::Dictionary;
pub use error::{BoardError, PathError};
pub use game::{
    find_length_n_paths, find_length_n_words, is_valid_path, max_score_paths, PathFinder,
    SearchMode,
};
pub use models::{Board, Path, Position, WordPath};
