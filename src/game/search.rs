use std::collections::HashMap;

use crate::{
    dictionary::Dictionary,
    models::{Board, Path, Position, WordPath},
};

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// What a search is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Every path of exactly `n` cells that spells a word
    ExactLength(usize),
    /// Same result set as `ExactLength`; kept separate for callers asking
    /// for "words of length n"
    ExactLengthWords(usize),
    /// One path per distinct word of at least [`MIN_WORD_LENGTH`] letters,
    /// the shortest one found
    MaxScore,
}

/// Depth-first path search over a board, borrowing the caller's dictionary.
///
/// Holds no state between calls; every search allocates its own buffers.
pub struct PathFinder<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
}

impl<'a> PathFinder<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary) -> Self {
        Self { board, dictionary }
    }

    pub fn search(&self, mode: SearchMode) -> Vec<WordPath> {
        let results = match mode {
            SearchMode::ExactLength(n) | SearchMode::ExactLengthWords(n) => {
                self.exact_length(n)
            }
            SearchMode::MaxScore => self.max_score(),
        };

        tracing::debug!(
            "{:?} search on {}x{} board found {} paths",
            mode,
            self.board.rows(),
            self.board.cols(),
            results.len()
        );

        results
    }

    pub fn paths_of_length(&self, n: usize) -> Vec<WordPath> {
        self.search(SearchMode::ExactLength(n))
    }

    pub fn words_of_length(&self, n: usize) -> Vec<WordPath> {
        self.search(SearchMode::ExactLengthWords(n))
    }

    pub fn max_score_paths(&self) -> Vec<WordPath> {
        self.search(SearchMode::MaxScore)
    }

    fn exact_length(&self, n: usize) -> Vec<WordPath> {
        let mut results = Vec::new();
        if n == 0 || n > self.board.cell_count() {
            return results;
        }

        let mut walk = Walk::new(self.board);
        for start in self.board.positions() {
            walk.push(start);
            self.extend_exact(&mut walk, n, &mut results);
            walk.pop();
        }

        results
    }

    fn extend_exact(&self, walk: &mut Walk<'_>, n: usize, results: &mut Vec<WordPath>) {
        if walk.path.len() == n {
            if self.dictionary.contains(&walk.word) {
                results.push(walk.snapshot());
            }
            return;
        }
        if !self.dictionary.is_prefix(&walk.word) {
            return;
        }

        let Some(&last) = walk.path.last() else {
            return;
        };
        for next in self.board.neighbors(last) {
            if walk.is_visited(next) {
                continue;
            }
            walk.push(next);
            self.extend_exact(walk, n, results);
            walk.pop();
        }
    }

    fn max_score(&self) -> Vec<WordPath> {
        let mut best = BestPaths::default();

        let mut walk = Walk::new(self.board);
        for start in self.board.positions() {
            walk.push(start);
            self.extend_max_score(&mut walk, &mut best);
            walk.pop();
        }

        best.into_results()
    }

    fn extend_max_score(&self, walk: &mut Walk<'_>, best: &mut BestPaths) {
        if !self.dictionary.is_prefix(&walk.word) {
            return;
        }
        if walk.word.chars().count() >= MIN_WORD_LENGTH && self.dictionary.contains(&walk.word) {
            best.offer(&walk.word, &walk.path);
        }

        // A match does not end the branch: longer words may share this prefix
        let Some(&last) = walk.path.last() else {
            return;
        };
        for next in self.board.neighbors(last) {
            if walk.is_visited(next) {
                continue;
            }
            walk.push(next);
            self.extend_max_score(walk, best);
            walk.pop();
        }
    }
}

/// The path being extended, with its spelled word and a visited grid.
/// `push`/`pop` keep all three in step.
struct Walk<'b> {
    board: &'b Board,
    path: Path,
    word: String,
    /// `word.len()` before each push, for truncating on pop
    word_marks: Vec<usize>,
    visited: Vec<bool>,
}

impl<'b> Walk<'b> {
    fn new(board: &'b Board) -> Self {
        Self {
            board,
            path: Vec::with_capacity(board.cell_count()),
            word: String::new(),
            word_marks: Vec::with_capacity(board.cell_count()),
            visited: vec![false; board.cell_count()],
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.board.cols() + pos.col
    }

    fn is_visited(&self, pos: Position) -> bool {
        self.visited[self.index(pos)]
    }

    /// `pos` must be on the board
    fn push(&mut self, pos: Position) {
        let idx = self.index(pos);
        self.visited[idx] = true;
        self.word_marks.push(self.word.len());
        self.word.push_str(self.board.get(pos).unwrap_or_default());
        self.path.push(pos);
    }

    fn pop(&mut self) {
        if let Some(pos) = self.path.pop() {
            let idx = self.index(pos);
            self.visited[idx] = false;
        }
        if let Some(mark) = self.word_marks.pop() {
            self.word.truncate(mark);
        }
    }

    fn snapshot(&self) -> WordPath {
        WordPath::new(self.word.clone(), self.path.clone())
    }
}

/// Keeps one path per word, in the order words were first found
#[derive(Default)]
struct BestPaths {
    results: Vec<WordPath>,
    index: HashMap<String, usize>,
}

impl BestPaths {
    fn offer(&mut self, word: &str, path: &[Position]) {
        match self.index.get(word) {
            Some(&i) => {
                // Only multi-letter cells can spell one word with fewer cells
                if path.len() < self.results[i].path.len() {
                    self.results[i].path = path.to_vec();
                }
            }
            None => {
                self.index.insert(word.to_string(), self.results.len());
                self.results.push(WordPath::new(word, path.to_vec()));
            }
        }
    }

    fn into_results(self) -> Vec<WordPath> {
        self.results
    }
}

/// All paths of exactly `n` cells spelling a dictionary word
pub fn find_length_n_paths(n: usize, board: &Board, dictionary: &Dictionary) -> Vec<Path> {
    into_paths(PathFinder::new(board, dictionary).paths_of_length(n))
}

/// All paths spelling words of length `n`; same result set as [`find_length_n_paths`]
pub fn find_length_n_words(n: usize, board: &Board, dictionary: &Dictionary) -> Vec<Path> {
    into_paths(PathFinder::new(board, dictionary).words_of_length(n))
}

/// One path for every word of at least [`MIN_WORD_LENGTH`] letters on the board
pub fn max_score_paths(board: &Board, dictionary: &Dictionary) -> Vec<Path> {
    into_paths(PathFinder::new(board, dictionary).max_score_paths())
}

fn into_paths(found: Vec<WordPath>) -> Vec<Path> {
    found.into_iter().map(|wp| wp.path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn words(found: &[WordPath]) -> HashSet<&str> {
        found.iter().map(|wp| wp.word.as_str()).collect()
    }

    #[test]
    fn test_two_by_two_exact_length() {
        let board: Board = "at/no".parse().unwrap();
        let dict = Dictionary::from_words(["at", "an", "to", "on", "ta"]);

        let found = PathFinder::new(&board, &dict).paths_of_length(2);
        let pairs: HashSet<(String, Vec<Position>)> = found
            .into_iter()
            .map(|wp| (wp.word, wp.path))
            .collect();

        let expected: HashSet<(String, Vec<Position>)> = [
            ("at", vec![p(0, 0), p(0, 1)]),
            ("an", vec![p(0, 0), p(1, 0)]),
            ("to", vec![p(0, 1), p(1, 1)]),
            ("on", vec![p(1, 1), p(1, 0)]),
            ("ta", vec![p(0, 1), p(0, 0)]),
        ]
        .into_iter()
        .map(|(w, path)| (w.to_string(), path))
        .collect();

        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_diagonal_step_is_allowed() {
        let board: Board = "ax/xt".parse().unwrap();
        let dict = Dictionary::from_words(["at"]);

        let found = PathFinder::new(&board, &dict).paths_of_length(2);
        assert_eq!(found, vec![WordPath::new("at", vec![p(0, 0), p(1, 1)])]);
    }

    #[test]
    fn test_impossible_lengths_are_empty() {
        let board: Board = "ab/cd".parse().unwrap();
        let dict = Dictionary::from_words(["abdc", "abdca"]);
        let finder = PathFinder::new(&board, &dict);

        assert!(finder.paths_of_length(0).is_empty());
        assert!(finder.paths_of_length(5).is_empty());
        assert_eq!(finder.paths_of_length(4).len(), 1);
    }

    #[test]
    fn test_one_by_one_board() {
        let board: Board = "a".parse().unwrap();
        let dict = Dictionary::from_words(["a", "aa"]);
        let finder = PathFinder::new(&board, &dict);

        assert_eq!(finder.paths_of_length(1).len(), 1);
        assert!(finder.paths_of_length(2).is_empty());
        assert!(finder.max_score_paths().is_empty());
    }

    #[test]
    fn test_cells_are_not_reused() {
        let board: Board = "ab".parse().unwrap();
        let dict = Dictionary::from_words(["aba", "ab"]);
        let finder = PathFinder::new(&board, &dict);

        assert!(finder.paths_of_length(3).is_empty());
        assert!(finder.max_score_paths().is_empty());
    }

    #[test]
    fn test_exact_modes_agree() {
        let board: Board = "cat/ose/ret".parse().unwrap();
        let dict = Dictionary::from_words(["cat", "cot", "sea", "set", "rose", "tea"]);
        let finder = PathFinder::new(&board, &dict);

        for n in 0..=5 {
            assert_eq!(finder.paths_of_length(n), finder.words_of_length(n));
        }
    }

    #[test]
    fn test_max_score_one_path_per_word() {
        // "a" twice means "tat" can be spelled along several routes
        let board: Board = "tat/xax".parse().unwrap();
        let dict = Dictionary::from_words(["tat", "at", "ta"]);

        let found = PathFinder::new(&board, &dict).max_score_paths();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "tat");
        assert_eq!(board.spell(&found[0].path).as_deref(), Some("tat"));
    }

    #[test]
    fn test_max_score_continues_past_a_match() {
        let board: Board = "tea/xxm".parse().unwrap();
        let dict = Dictionary::from_words(["tea", "team"]);

        let found = PathFinder::new(&board, &dict).max_score_paths();
        assert_eq!(words(&found), HashSet::from(["tea", "team"]));
    }

    #[test]
    fn test_max_score_prefers_fewer_cells() {
        // "que" via the single "qu" cell (2 cells) or via q, u, e (3 cells)
        let board: Board = "q u e / x x qu".parse().unwrap();
        let dict = Dictionary::from_words(["que"]);

        let found = PathFinder::new(&board, &dict).max_score_paths();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, vec![p(1, 2), p(0, 2)]);
    }

    #[test]
    fn test_max_score_counts_letters_not_cells() {
        let board: Board = "qu a".parse().unwrap();
        let dict = Dictionary::from_words(["qua"]);

        let found = PathFinder::new(&board, &dict).max_score_paths();
        assert_eq!(found, vec![WordPath::new("qua", vec![p(0, 0), p(0, 1)])]);
    }

    #[test]
    fn test_max_score_skips_short_words() {
        let board: Board = "at/no".parse().unwrap();
        let dict = Dictionary::from_words(["at", "an", "to", "not", "ant"]);

        let found = PathFinder::new(&board, &dict).max_score_paths();
        assert_eq!(words(&found), HashSet::from(["not", "ant"]));
    }

    #[test]
    fn test_free_functions_return_paths() {
        let board: Board = "at/no".parse().unwrap();
        let dict = Dictionary::from_words(["at", "not"]);

        assert_eq!(
            find_length_n_paths(2, &board, &dict),
            vec![vec![p(0, 0), p(0, 1)]]
        );
        assert_eq!(
            find_length_n_words(2, &board, &dict),
            find_length_n_paths(2, &board, &dict)
        );
        assert_eq!(
            max_score_paths(&board, &dict),
            vec![vec![p(1, 0), p(1, 1), p(0, 1)]]
        );
    }

    #[test]
    fn test_empty_dictionary_finds_nothing() {
        let board: Board = "abc/def/ghi".parse().unwrap();
        let dict = Dictionary::empty();
        let finder = PathFinder::new(&board, &dict);

        assert!(finder.paths_of_length(3).is_empty());
        assert!(finder.max_score_paths().is_empty());
    }
}
