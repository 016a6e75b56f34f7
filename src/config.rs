use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::game::session::ROUND_DURATION;

#[derive(Debug, Clone)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub search: SearchConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Searches running longer than this are abandoned by the host
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub round_duration: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dictionary = DictionaryConfig {
            path: lookup("DICTIONARY_PATH").unwrap_or_else(|| "./boggle_dict.txt".to_string()),
        };

        let search = SearchConfig {
            timeout: Duration::from_secs(
                lookup("SEARCH_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse()
                    .context("SEARCH_TIMEOUT_SECS must be a number")?,
            ),
        };

        let game = GameConfig {
            round_duration: match lookup("ROUND_DURATION_SECS") {
                Some(secs) => Duration::from_secs(
                    secs.parse()
                        .context("ROUND_DURATION_SECS must be a number")?,
                ),
                None => ROUND_DURATION,
            },
        };

        Ok(Config {
            dictionary,
            search,
            game,
        })
    }

    pub fn dictionary_path(&self) -> &str {
        &self.dictionary.path
    }
}
