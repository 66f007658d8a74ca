//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use super::StatsReport;
use crate::controller::{Controller, SubmitError};
use crate::output::{print_board, print_end_screen, print_stats};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Share,
    Stats,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        ":q" | ":quit" | ":exit" => Command::Quit,
        ":n" | ":new" => Command::NewGame,
        ":s" | ":share" => Command::Share,
        ":stats" => Command::Stats,
        word => Command::Guess(word.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// game cannot be started.
pub fn run_simple(controller: &mut Controller<'_>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Game - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = *controller.config();
    println!(
        "Guess the {}-letter word in {} attempts.",
        config.word_length, config.max_attempts
    );
    println!("Commands: ':quit' to exit, ':new' for new game, ':share', ':stats'\n");

    print_board(controller.session());
    if controller.is_locked() {
        print_end_screen(controller);
        println!("\nType ':new' for another game.\n");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let prompt = if controller.is_locked() {
            "Command".to_string()
        } else {
            format!(
                "Guess {}/{}",
                controller.session().history().len() + 1,
                config.max_attempts
            )
        };
        print!("{prompt}: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };

        match parse_command(&line?) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                controller.new_game()?;
                println!("\n🔄 New game started!");
                print_board(controller.session());
            }
            Command::Share => match controller.share_text() {
                Some(text) => println!("\n{text}\n"),
                None => println!("Finish the game to share your result.\n"),
            },
            Command::Stats => print_stats(&StatsReport::new(*controller.stats())),
            Command::Guess(word) if word.is_empty() => {}
            Command::Guess(word) => match controller.submit_word(&word) {
                Ok(outcome) => {
                    print_board(controller.session());
                    if outcome.status.is_terminal() {
                        print_end_screen(controller);
                        println!("\nType ':new' for another game or ':quit' to exit.\n");
                    }
                }
                Err(SubmitError::Game(_)) => {
                    println!("{}\n", "The game is over. Type ':new' to play again.".yellow());
                }
                Err(e) => println!("❌ {}\n", e.to_string().red()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(" :NEW "), Command::NewGame);
        assert_eq!(parse_command(":share"), Command::Share);
        assert_eq!(parse_command(":stats"), Command::Stats);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(parse_command("Crane\n"), Command::Guess("crane".to_string()));
        assert_eq!(parse_command(""), Command::Guess(String::new()));
    }
}
