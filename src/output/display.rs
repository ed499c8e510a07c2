//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, spaced_letters};
use crate::commands::QueryResult;
use crate::game::{GameSnapshot, GuessOutcome};
use colored::Colorize;

/// Print the result of a dictionary query
pub fn print_query_result(result: &QueryResult) {
    match result {
        QueryResult::Exists { word, exists } => {
            if *exists {
                println!("{} '{}' is in the dictionary", "✓".green().bold(), word);
            } else {
                println!("{} '{}' is not in the dictionary", "✗".red().bold(), word);
            }
        }
        QueryResult::Words { title, words } => {
            println!("\n{}", "─".repeat(60).cyan());
            println!("{} ({})", title.bright_cyan().bold(), words.len());
            println!("{}", "─".repeat(60).cyan());
            if words.is_empty() {
                println!("{}", "No matching words.".bright_black());
            }
            for row in format_columns(words, 6) {
                println!("  {row}");
            }
        }
        QueryResult::Word { title, word } => match word {
            Some(word) => println!("{}: {}", title.bright_cyan(), word.bright_yellow().bold()),
            None => println!("{}: {}", title.bright_cyan(), "no matching word".red()),
        },
    }
}

/// Print the board for a game
pub fn print_board(game: &GameSnapshot) {
    let found = game.total_words - game.remaining_words;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "  Letters:  {}",
        spaced_letters(&game.scrambled_word).bright_yellow().bold()
    );
    println!(
        "  Progress: [{}] {}/{}",
        create_progress_bar(found, game.total_words, 30).green(),
        found,
        game.total_words
    );
    println!("{}", "═".repeat(60).cyan());

    if !game.guessed_words.is_empty() {
        println!("  Found:");
        for row in format_columns(&game.guessed_words, 6) {
            println!("    {row}");
        }
    }
    println!();
}

/// Print the result of a single guess
pub fn print_guess_result(game: &GameSnapshot) {
    let message = match game.outcome {
        GuessOutcome::Incorrect => format!("❌ {}", game.result()).red(),
        GuessOutcome::AlreadyGuessed => {
            format!("↺ {} (already found)", game.result()).yellow()
        }
        GuessOutcome::Correct | GuessOutcome::AllGuessed | GuessOutcome::Created => {
            format!("✅ {}", game.result()).green().bold()
        }
    };
    println!("{message}");
    println!(
        "   {} of {} words remaining\n",
        game.remaining_words.to_string().bright_cyan(),
        game.total_words
    );
}
