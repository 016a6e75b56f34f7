use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Lowercase word list supplied by the caller.
///
/// Besides the words themselves it keeps every proper prefix, which lets the
/// path search abandon a branch as soon as no word can start with it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let dictionary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build from any list of words. Entries are trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        let mut prefixes = HashSet::new();
        for word in &words {
            for (end, _) in word.char_indices().skip(1) {
                prefixes.insert(word[..end].to_string());
            }
        }

        Self { words, prefixes }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact membership. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// True when some word starts with `prefix` (including the word itself)
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix) || self.words.contains(prefix)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
