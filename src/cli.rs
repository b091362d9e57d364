use crate::art::hangman_stage;
use crate::game_loop::{GameInterface, UserAction, farewell, outcome_message};
use crate::game_state::{GameState, GuessOutcome};
use crate::stats::SessionStats;
use crate::wordbank::{Category, CategorySummary, find_category};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Hip-hop themed hangman
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding custom category word lists (east_coast.txt, ...)
    #[arg(short = 'w', long = "wordlists")]
    pub wordlist_dir: Option<PathBuf>,

    /// Play in the plain line-based interface instead of the TUI
    #[arg(long)]
    pub cli: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const EXIT_COMMAND: &str = "/exit";
pub const NEXT_COMMAND: &str = "/next";

/// A line of guess input after trimming.
#[derive(Debug, PartialEq, Eq)]
pub enum GuessInput {
    Guess(String),
    Empty,
    Exit,
    NewGame,
}

/// Result of reading one line.
enum Line {
    Text(String),
    Closed,
}

fn read_line<R: BufRead>(reader: &mut R) -> Line {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Line::Closed,
        Ok(_) => Line::Text(input.trim().to_string()),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            Line::Closed
        }
    }
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

pub fn parse_guess(input: &str) -> GuessInput {
    let input = input.trim();
    if input.eq_ignore_ascii_case(EXIT_COMMAND) {
        GuessInput::Exit
    } else if input.eq_ignore_ascii_case(NEXT_COMMAND) {
        GuessInput::NewGame
    } else if input.is_empty() {
        GuessInput::Empty
    } else {
        GuessInput::Guess(input.to_string())
    }
}

pub fn display_categories(categories: &[CategorySummary]) {
    println!("=== Welcome to Hiphop Hangman ===");
    println!("\n=== Choose Your Hip Hop Category ===");
    for summary in categories {
        println!(
            "{}: {} ({} artists)",
            summary.category.key, summary.category.name, summary.count
        );
    }
    println!();
}

/// Prompt until a valid category number is entered. `None` on end of input.
pub fn read_category<R: BufRead>(reader: &mut R, max: usize) -> Option<&'static Category> {
    loop {
        prompt(&format!("Enter category number (1-{max}): "));
        let Line::Text(choice) = read_line(reader) else {
            return None;
        };
        if let Some(category) = find_category(&choice) {
            println!("Selected: {}\n", category.name);
            return Some(category);
        }
        println!("Invalid choice. Please enter a number between 1 and {max}.");
    }
}

pub fn display_word_state(game: &GameState) {
    println!("Current word state: {}", game.word_display());
    println!("Attempts left: {}", game.attempts_remaining());
}

pub fn display_guessed_letters(game: &GameState) {
    println!("Guessed letters: {}", game.guessed_letters_display());
}

pub fn display_hangman(attempts_remaining: u32) {
    for line in hangman_stage(attempts_remaining) {
        println!("\t{line}");
    }
}

/// Line-based implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn choose_category(&mut self, categories: &[CategorySummary]) -> Option<&'static Category> {
        display_categories(categories);
        read_category(&mut self.reader, categories.len())
    }

    fn display_round_start(&mut self, category: &Category, game: &GameState) {
        println!("Category: {}", category.name);
        println!("Guess the artist's name ({} characters):", game.word_len());
        display_word_state(game);
        display_guessed_letters(game);
    }

    fn read_guess(&mut self, _game: &GameState) -> Option<UserAction> {
        prompt(&format!(
            "Enter your guess (single letter or full name, \
             {NEXT_COMMAND} for a new round, {EXIT_COMMAND} to quit): "
        ));
        let Line::Text(input) = read_line(&mut self.reader) else {
            return Some(UserAction::Exit);
        };
        match parse_guess(&input) {
            GuessInput::Guess(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Empty => {
                println!("Please enter a letter or a name to guess.");
                None
            }
        }
    }

    fn display_guess_result(&mut self, game: &GameState, outcome: GuessOutcome) {
        if matches!(outcome, GuessOutcome::Miss | GuessOutcome::WrongWord) {
            display_hangman(game.attempts_remaining());
        }
        println!("{}", outcome_message(outcome));
        if !matches!(outcome, GuessOutcome::Invalid | GuessOutcome::Duplicate) {
            display_word_state(game);
            display_guessed_letters(game);
        }
    }

    fn display_game_over(&mut self, game: &GameState, stats: &SessionStats) {
        let answer = game.answer().unwrap_or_default();
        if game.is_won() {
            println!("Congratulations! You've guessed the name: {answer}");
            println!("Your score is: {}", game.score());
        } else {
            println!("Game over! The correct name was: {answer}");
        }
        println!("{}", stats.summary());
    }

    fn confirm_play_again(&mut self) -> bool {
        loop {
            prompt("Play again? (y/n): ");
            let Line::Text(answer) = read_line(&mut self.reader) else {
                return false;
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("Please answer y or n."),
            }
        }
    }

    fn display_error(&mut self, message: &str) {
        println!("Error: {message}");
        println!("Please choose another category.\n");
    }

    fn display_exit_message(&mut self, stats: &SessionStats) {
        for line in farewell(stats) {
            println!("{line}");
        }
    }
}
