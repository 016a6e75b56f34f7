use std::time::{Duration, Instant};

use rand::{seq::IndexedRandom, Rng};

use crate::{
    config::GameConfig,
    dictionary::Dictionary,
    error::PathError,
    game::{
        scorer::Scorer,
        search::{PathFinder, MIN_WORD_LENGTH},
        validator::check_path,
    },
    models::{Board, Position, WordPath},
};

/// Length of a round
pub const ROUND_DURATION: Duration = Duration::from_secs(180);

/// What happened to a submitted path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { word: String, points: u32 },
    AlreadyFound(String),
    NotAWord(String),
    TooShort(String),
    InvalidPath(PathError),
    TimeUp,
}

/// One player's round on one board
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    found: Vec<String>,
    tried: Vec<String>,
    score: u32,
    started_at: Instant,
    duration: Duration,
}

impl GameSession {
    pub fn new(board: Board, duration: Duration) -> Self {
        Self {
            board,
            found: Vec::new(),
            tried: Vec::new(),
            score: 0,
            started_at: Instant::now(),
            duration,
        }
    }

    /// Start a round lasting the configured `round_duration`
    pub fn from_config(board: Board, config: &GameConfig) -> Self {
        Self::new(board, config.round_duration)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Accepted words, in the order they were found
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// Rejected non-words long enough to count, each listed once
    pub fn tried(&self) -> &[String] {
        &self.tried
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.started_at.elapsed())
    }

    pub fn is_over(&self) -> bool {
        self.started_at.elapsed() >= self.duration
    }

    pub fn submit(&mut self, dictionary: &Dictionary, path: &[Position]) -> SubmitOutcome {
        if self.is_over() {
            return SubmitOutcome::TimeUp;
        }

        let word = match check_path(&self.board, path) {
            Ok(word) => word,
            Err(e) => return SubmitOutcome::InvalidPath(e),
        };

        if word.chars().count() < MIN_WORD_LENGTH {
            return SubmitOutcome::TooShort(word);
        }

        if !dictionary.contains(&word) {
            if !self.tried.contains(&word) {
                self.tried.push(word.clone());
            }
            return SubmitOutcome::NotAWord(word);
        }

        if self.found.contains(&word) {
            return SubmitOutcome::AlreadyFound(word);
        }

        let points = Scorer::word_score(&word);
        self.score = self.score.saturating_add(points);
        self.found.push(word.clone());
        tracing::debug!("Accepted '{}' for {} points (total {})", word, points, self.score);

        SubmitOutcome::Accepted { word, points }
    }

    /// A random not-yet-found word spelled by exactly `n` cells
    pub fn hint_of_length<R: Rng>(
        &self,
        dictionary: &Dictionary,
        n: usize,
        rng: &mut R,
    ) -> Option<WordPath> {
        if n < MIN_WORD_LENGTH {
            return None;
        }
        let candidates = PathFinder::new(&self.board, dictionary).words_of_length(n);
        self.pick_unfound(candidates, rng)
    }

    /// A random not-yet-found word from everything on the board
    pub fn reveal<R: Rng>(&self, dictionary: &Dictionary, rng: &mut R) -> Option<WordPath> {
        let candidates = PathFinder::new(&self.board, dictionary).max_score_paths();
        self.pick_unfound(candidates, rng)
    }

    fn pick_unfound<R: Rng>(&self, candidates: Vec<WordPath>, rng: &mut R) -> Option<WordPath> {
        let unfound: Vec<WordPath> = candidates
            .into_iter()
            .filter(|wp| !self.found.contains(&wp.word))
            .collect();
        unfound.choose(rng).cloned()
    }
}
