//! Jumble Engine - CLI
//!
//! Dictionary queries and an interactive jumble game on top of the puzzle engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jumble_engine::{
    commands::{Query, run_play, run_query},
    game::{DEFAULT_GAME_LENGTH, GameConfig, GameManager},
    index::{DEFAULT_MIN_LENGTH, DictionaryIndex, SearchCriteria},
    output::print_query_result,
    wordlists::{embedded_index, loader::load_from_file},
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Dictionary-backed word puzzles: lookups, sub-words, anagrams and a jumble game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the jumble game (default)
    Play {
        /// Length of the scrambled word
        #[arg(short, long, default_value_t = DEFAULT_GAME_LENGTH)]
        length: usize,

        /// Minimum length of words to find
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },

    /// Check whether a word is in the dictionary
    Exists { word: String },

    /// List words starting with a prefix
    Prefix { prefix: String },

    /// Search by first letter, last letter and/or length
    Search {
        #[arg(short, long)]
        start: Option<char>,

        #[arg(short, long)]
        end: Option<char>,

        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List words that can be spelled from the letters of a word
    SubWords {
        word: String,

        /// Minimum sub-word length (default 3)
        #[arg(short, long)]
        min_length: Option<usize>,
    },

    /// List anagrams of a word
    Anagrams { word: String },

    /// List palindromes in the dictionary
    Palindromes,

    /// Pick a random word
    Random {
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Scramble the letters of a word
    Scramble { word: String },
}

/// Install the tracing subscriber; RUST_LOG overrides -v
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_index(wordlist: &str) -> Result<Arc<DictionaryIndex>> {
    match wordlist {
        "embedded" => Ok(embedded_index()),
        path => {
            let index = load_from_file(path)
                .with_context(|| format!("could not load wordlist '{path}'"))?;
            Ok(Arc::new(index))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let index = load_index(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: DEFAULT_GAME_LENGTH,
        min_length: DEFAULT_MIN_LENGTH,
    });

    let query = match command {
        Commands::Play { length, min_length } => {
            let config = GameConfig::new(length).with_min_length(min_length);
            let manager = GameManager::new(index);
            return run_play(&manager, &config);
        }
        Commands::Exists { word } => Query::Exists(word),
        Commands::Prefix { prefix } => Query::Prefix(prefix),
        Commands::Search { start, end, length } => {
            Query::Search(SearchCriteria::new(start, end, length))
        }
        Commands::SubWords { word, min_length } => Query::SubWords { word, min_length },
        Commands::Anagrams { word } => Query::Anagrams(word),
        Commands::Palindromes => Query::Palindromes,
        Commands::Random { length } => Query::Random { length },
        Commands::Scramble { word } => Query::Scramble(word),
    };

    print_query_result(&run_query(&index, &query));
    Ok(())
}
