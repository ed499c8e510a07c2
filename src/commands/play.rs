//! Interactive jumble game
//!
//! Text-based game loop on top of `GameManager`.

use crate::game::{GameConfig, GameManager, GameSnapshot, GuessOutcome};
use crate::output::{print_board, print_guess_result};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Quit,
    NewGame,
    Hint,
    Board,
    Guess(String),
}

impl PlayInput {
    /// Interpret one input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewGame,
            ":h" | ":hint" => Self::Hint,
            ":b" | ":board" => Self::Board,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the interactive game mode
///
/// # Errors
///
/// Returns an error if stdin/stdout fail or if no game can be created with the
/// given configuration.
pub fn run_play(manager: &GameManager, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Jumble - Word Game                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find every word that can be made from the scrambled letters.");
    println!(
        "Words must be at least {} letters long.\n",
        config.min_length
    );
    println!("Commands: ':hint', ':board', ':new', ':quit'\n");

    let mut game = new_game(manager, config)?;

    loop {
        let line = get_user_input("Guess")?;
        let id = game.id.to_string();

        match PlayInput::parse(&line) {
            PlayInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayInput::NewGame => {
                println!("\nThe word was {}.", game.original_word.to_uppercase().bold());
                game = new_game(manager, config)?;
            }
            PlayInput::Hint => {
                let hints = manager.hints(Some(id.as_str()), 1)?;
                match hints.first() {
                    Some(word) => {
                        let first = word.chars().next().unwrap_or('?');
                        println!(
                            "💡 Try a {}-letter word starting with '{}'\n",
                            word.len(),
                            first.to_ascii_uppercase()
                        );
                    }
                    None => println!("Nothing left to find!\n"),
                }
            }
            PlayInput::Board => {
                game = manager.snapshot(Some(id.as_str()))?;
                print_board(&game);
            }
            PlayInput::Guess(word) => {
                game = manager.guess(Some(id.as_str()), Some(word.as_str()))?;
                print_guess_result(&game);

                if game.outcome == GuessOutcome::AllGuessed {
                    println!(
                        "\n{}\n",
                        "    🎉  A L L   W O R D S   F O U N D !  🎉    "
                            .bright_green()
                            .bold()
                    );
                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => game = new_game(manager, config)?,
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn new_game(manager: &GameManager, config: &GameConfig) -> Result<GameSnapshot> {
    let game = manager
        .create_game_with(config)
        .context("could not start a new game")?;
    println!("\n🔄 New game started!");
    print_board(&game);
    Ok(game)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        // EOF behaves like quitting
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
