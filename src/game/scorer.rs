use crate::{
    dictionary::Dictionary,
    game::search::PathFinder,
    models::{Board, WordPath},
};

pub struct Scorer;

impl Scorer {
    /// Points for one accepted word.
    ///
    /// Scoring rule: the square of the word's letter count, so a `"qu"` cell
    /// counts for two letters.
    pub fn word_score(word: &str) -> u32 {
        let len = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
        len.saturating_mul(len)
    }

    /// Sum of the scores of `words`
    pub fn total<'a, I>(words: I) -> u32
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .map(Self::word_score)
            .fold(0, u32::saturating_add)
    }

    /// Score of a set of search results
    pub fn total_for(found: &[WordPath]) -> u32 {
        Self::total(found.iter().map(|wp| wp.word.as_str()))
    }

    /// Best possible score on `board`: every spellable word found once
    pub fn max_board_score(board: &Board, dictionary: &Dictionary) -> u32 {
        Self::total_for(&PathFinder::new(board, dictionary).max_score_paths())
    }
}
