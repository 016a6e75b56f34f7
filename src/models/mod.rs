pub mod board;
pub mod path;

pub use board::{Board, DIRECTIONS};
pub use path::{Path, Position, WordPath};
