use rand::{
    seq::{IndexedRandom, SliceRandom},
    Rng,
};

use crate::{error::BoardError, models::Board};

/// Side length of a standard board
pub const BOARD_SIZE: usize = 4;

/// The sixteen dice of the classic game, one string of six faces each.
/// A `Q` face is printed as `Qu` and occupies a single cell.
pub const DICE: [&str; BOARD_SIZE * BOARD_SIZE] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
    "DISTTY", "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

pub struct BoardGenerator;

impl BoardGenerator {
    /// Shake the dice into a new 4x4 board
    pub fn generate() -> Result<Board, BoardError> {
        Self::generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng>(rng: &mut R) -> Result<Board, BoardError> {
        let mut dice = DICE;
        dice.shuffle(rng);

        let faces: Vec<String> = dice.iter().map(|die| Self::roll(die, rng)).collect();
        let rows = faces
            .chunks(BOARD_SIZE)
            .map(<[String]>::to_vec)
            .collect();

        Board::new(rows)
    }

    /// An empty die gives an empty cell, which `Board::new` rejects
    fn roll<R: Rng>(die: &str, rng: &mut R) -> String {
        match die.as_bytes().choose(rng) {
            Some(b'Q') => "Qu".to_string(),
            Some(&face) => (face as char).to_string(),
            None => String::new(),
        }
    }
}
