use crate::game_state::{GameState, GuessOutcome};
use crate::stats::SessionStats;
use crate::wordbank::{Category, CategorySummary, WordSupply};

/// What the player asked for while a round is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Front-end abstraction shared by the line-based CLI and the TUI.
///
/// `game_loop` owns the round; implementors only read input and present
/// state.
pub trait GameInterface {
    /// Ask for a category; `None` ends the session.
    fn choose_category(&mut self, categories: &[CategorySummary]) -> Option<&'static Category>;

    fn display_round_start(&mut self, category: &Category, game: &GameState);

    /// Read one action. `None` means nothing actionable was entered and the
    /// loop should ask again.
    fn read_guess(&mut self, game: &GameState) -> Option<UserAction>;

    fn display_guess_result(&mut self, game: &GameState, outcome: GuessOutcome);

    fn display_game_over(&mut self, game: &GameState, stats: &SessionStats);

    fn confirm_play_again(&mut self) -> bool;

    fn display_error(&mut self, message: &str);

    fn display_exit_message(&mut self, stats: &SessionStats);
}

/// Player-facing text for a guess result.
pub fn outcome_message(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Hit => "Good guess!",
        GuessOutcome::Miss => "Wrong guess! That letter is not in the name.",
        GuessOutcome::Duplicate => "You already guessed that letter. Try again.",
        GuessOutcome::Solved => "You got it!",
        GuessOutcome::WrongWord => "Wrong guess! That's not the correct name.",
        GuessOutcome::Invalid => "Invalid input. Please enter a single letter or the full name.",
        GuessOutcome::AlreadyOver => "This round is already over.",
    }
}

/// Closing lines shown when the session ends.
pub fn farewell(stats: &SessionStats) -> Vec<String> {
    let mut lines = Vec::new();
    if stats.games_played > 0 {
        lines.push(format!("Final stats: {}", stats.summary()));
    }
    lines.push("Thanks for playing!".to_string());
    lines
}

enum RoundEnd {
    Finished,
    Abandoned,
    Exit,
}

/// Run rounds until the player quits and return the session tally.
pub fn game_loop<I: GameInterface>(supply: &WordSupply, interface: &mut I) -> SessionStats {
    let mut stats = SessionStats::default();

    loop {
        let summaries = supply.summaries();
        let Some(category) = interface.choose_category(&summaries) else {
            break;
        };
        log::info!("Category selected: {}", category.name);

        let mut game = match start_round(supply, category) {
            Ok(game) => game,
            Err(message) => {
                log::warn!("Could not start round: {message}");
                interface.display_error(&message);
                continue;
            }
        };
        interface.display_round_start(category, &game);

        match play_round(&mut game, interface) {
            RoundEnd::Exit => break,
            RoundEnd::Abandoned => {
                log::info!("Round abandoned");
                continue;
            }
            RoundEnd::Finished => {}
        }

        stats.record(&game);
        log::info!(
            "Round finished: won={} score={} attempts_left={}",
            game.is_won(),
            game.score(),
            game.attempts_remaining()
        );
        interface.display_game_over(&game, &stats);

        if !interface.confirm_play_again() {
            break;
        }
    }

    interface.display_exit_message(&stats);
    stats
}

fn start_round(supply: &WordSupply, category: &Category) -> Result<GameState, String> {
    let word = supply.random_word(category).map_err(|e| e.to_string())?;
    GameState::new(&word).map_err(|e| e.to_string())
}

fn play_round<I: GameInterface>(game: &mut GameState, interface: &mut I) -> RoundEnd {
    while !game.is_over() {
        match interface.read_guess(game) {
            Some(UserAction::Exit) => return RoundEnd::Exit,
            Some(UserAction::NewGame) => return RoundEnd::Abandoned,
            Some(UserAction::Guess(guess)) => {
                let outcome = game.submit(&guess);
                log::debug!("Guess of {} characters -> {outcome:?}", guess.chars().count());
                interface.display_guess_result(game, outcome);
            }
            None => {}
        }
    }
    RoundEnd::Finished
}
