// Game engine modules

pub mod grid;
pub mod scorer;
pub mod search;
pub mod session;
pub mod validator;

pub use grid::BoardGenerator;
pub use scorer::Scorer;
pub use search::{
    find_length_n_paths, find_length_n_words, max_score_paths, PathFinder, SearchMode,
    MIN_WORD_LENGTH,
};
pub use session::{GameSession, SubmitOutcome};
pub use validator::{are_adjacent, check_path, is_valid_path};
