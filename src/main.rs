use std::{path::PathBuf, sync::Arc, thread, time::Duration};

use anyhow::{bail, Context, Result};
use boggle::{
    config::Config,
    game::{BoardGenerator, PathFinder, Scorer, SearchMode},
    is_valid_path, Board, Dictionary, Position, WordPath,
};
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tokio::sync::oneshot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "boggle", version, about = "Find words on a Boggle board")]
struct Cli {
    /// Word list, one word per line
    #[arg(long, global = true, env = "DICTIONARY_PATH")]
    dictionary: Option<PathBuf>,

    /// Give up on a search after this many seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every word on the board, one path each, with the best total score
    Solve(BoardArgs),
    /// Every path of exactly LENGTH cells that spells a word
    Words {
        #[arg(long, short)]
        length: usize,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Check whether a path spells a word, e.g. `check --board cat/ose/ret 0,0 0,1 0,2`
    Check {
        #[arg(long)]
        board: String,
        #[arg(required = true, value_parser = parse_position)]
        path: Vec<Position>,
    },
    /// Print a freshly shaken board
    Board {
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct BoardArgs {
    /// Rows separated by '/', e.g. "cat/ose/ret"; random when omitted
    #[arg(long)]
    board: Option<String>,

    /// Seed for the random board
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct Report<'a> {
    board: &'a Board,
    words: Vec<ScoredWord>,
    total: u32,
}

#[derive(Serialize)]
struct ScoredWord {
    word: String,
    path: Vec<Position>,
    points: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(path) = &cli.dictionary {
        config.dictionary.path = path.display().to_string();
    }
    if let Some(secs) = cli.timeout {
        config.search.timeout = Duration::from_secs(secs);
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Command::Board { seed } => {
            let board = make_board(None, seed)?;
            print_board(&board, cli.json)?;
        }
        Command::Check { board, path } => {
            let board: Board = board.parse()?;
            let dictionary = load_dictionary(&config).await;
            let word = is_valid_path(&board, &path, &dictionary);
            if cli.json {
                println!("{}", serde_json::to_string(&word)?);
            } else {
                match word {
                    Some(word) => println!("{} ({} points)", word, Scorer::word_score(&word)),
                    None => println!("not a valid word"),
                }
            }
        }
        Command::Solve(args) => {
            let board = make_board(args.board.as_deref(), args.seed)?;
            let dictionary = load_dictionary(&config).await;
            let found =
                run_search(board.clone(), dictionary, SearchMode::MaxScore, config.search.timeout)
                    .await?;
            report(&board, found, cli.json)?;
        }
        Command::Words { length, board } => {
            let board = make_board(board.board.as_deref(), board.seed)?;
            let dictionary = load_dictionary(&config).await;
            let found = run_search(
                board.clone(),
                dictionary,
                SearchMode::ExactLengthWords(length),
                config.search.timeout,
            )
            .await?;
            report(&board, found, cli.json)?;
        }
    }

    Ok(())
}

async fn load_dictionary(config: &Config) -> Arc<Dictionary> {
    let dictionary = match Dictionary::load(config.dictionary_path()).await {
        Ok(dict) => dict,
        Err(e) => {
            tracing::warn!("Failed to load dictionary: {:#}. Using empty dictionary.", e);
            tracing::warn!(
                "Put a word list at {} or set DICTIONARY_PATH",
                config.dictionary_path()
            );
            Dictionary::empty()
        }
    };
    Arc::new(dictionary)
}

fn make_board(rows: Option<&str>, seed: Option<u64>) -> Result<Board> {
    let board: Board = match (rows, seed) {
        (Some(rows), _) => rows.parse().context("invalid --board")?,
        (None, Some(seed)) => BoardGenerator::generate_with(&mut StdRng::seed_from_u64(seed))?,
        (None, None) => BoardGenerator::generate()?,
    };
    Ok(board)
}

/// Run the search on its own thread and wait at most `limit` for it.
///
/// The thread is detached: after a timeout nothing waits for it, so the
/// runtime can shut down and the process exit while it is still searching.
async fn run_search(
    board: Board,
    dictionary: Arc<Dictionary>,
    mode: SearchMode,
    limit: Duration,
) -> Result<Vec<WordPath>> {
    let (tx, rx) = oneshot::channel();
    thread::Builder::new()
        .name("path-search".to_string())
        .spawn(move || {
            let found = PathFinder::new(&board, &dictionary).search(mode);
            // The receiver is gone once the caller has timed out
            let _ = tx.send(found);
        })
        .context("failed to spawn search thread")?;

    match tokio::time::timeout(limit, rx).await {
        Ok(received) => received.context("search thread exited without a result"),
        Err(_) => bail!("{:?} search did not finish within {:?}", mode, limit),
    }
}

fn report(board: &Board, found: Vec<WordPath>, json: bool) -> Result<()> {
    let mut words: Vec<ScoredWord> = found
        .into_iter()
        .map(|wp| ScoredWord {
            points: Scorer::word_score(&wp.word),
            word: wp.word,
            path: wp.path,
        })
        .collect();
    words.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.word.cmp(&b.word)));
    let total: u32 = words.iter().map(|w| w.points).sum();

    if json {
        let report = Report {
            board,
            words,
            total,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    for w in &words {
        let cells: Vec<String> = w
            .path
            .iter()
            .map(|p| format!("({},{})", p.row, p.col))
            .collect();
        println!("{:>4}  {:<16} {}", w.points, w.word, cells.join(" "));
    }
    println!("\n{} paths, {} points", words.len(), total);
    Ok(())
}

fn print_board(board: &Board, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(board)?);
    } else {
        println!("{}", board);
    }
    Ok(())
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{}'", s))?;
    let row = row.trim().parse::<usize>().map_err(|e| format!("bad row '{}': {}", row, e))?;
    let col = col.trim().parse::<usize>().map_err(|e| format!("bad column '{}': {}", col, e))?;
    Ok(Position { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1,2"), Ok(Position::new(1, 2)));
        assert_eq!(parse_position(" 0 , 3 "), Ok(Position::new(0, 3)));
        assert!(parse_position("1").is_err());
        assert!(parse_position("-1,0").is_err());
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from(["boggle", "check", "--board", "cat", "0,0", "0,1", "0,2"])
            .unwrap();
        match cli.command {
            Command::Check { board, path } => {
                assert_eq!(board, "cat");
                assert_eq!(path.len(), 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_make_board_from_seed_is_stable() {
        let a = make_board(None, Some(5)).unwrap();
        let b = make_board(None, Some(5)).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_run_search_finds_words() {
        let board: Board = "cat/ose/ret".parse().unwrap();
        let dictionary = Arc::new(Dictionary::from_words(["cat", "rose"]));
        let found = run_search(board, dictionary, SearchMode::MaxScore, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_timed_out_search_does_not_hold_the_runtime() {
        // Every prefix of the only word matches, so the search walks every path
        let board: Board = "aaaa/aaaa/aaaa/aaaa".parse().unwrap();
        let dictionary = Arc::new(Dictionary::from_words(["aaaaaaaaaaaaaaaaz"]));
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();

        let result = runtime.block_on(run_search(
            board,
            dictionary,
            SearchMode::MaxScore,
            Duration::from_millis(10),
        ));
        assert!(result.is_err());

        let started = std::time::Instant::now();
        drop(runtime);
        assert!(
            started.elapsed() < Duration::from_millis(250),
            "runtime shutdown waited {:?} for the abandoned search",
            started.elapsed()
        );
    }
}
