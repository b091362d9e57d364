// Library interface for hiphop-hangman
// The binary and the integration tests both build on these modules.

pub mod art;
pub mod cli;
pub mod game_loop;
pub mod game_state;
pub mod logging;
pub mod stats;
pub mod tui;
pub mod wordbank;

pub use game_loop::{GameInterface, UserAction, game_loop};
pub use game_state::{GameError, GameState, GuessOutcome, Outcome};
pub use stats::SessionStats;
pub use wordbank::{CATEGORIES, Category, WordSupply, WordSupplyError, find_category};
