// Property tests for the round state machine.

use hiphop_hangman::game_state::{GameState, MAX_ATTEMPTS, Outcome, WIN_BONUS, is_separator};
use proptest::prelude::*;

/// Artist-like names: one or two uppercase-or-lowercase words, optionally
/// joined by a separator.
fn name() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}([ .-][A-Za-z]{1,7})?"
}

fn distinct_letters(word: &str) -> Vec<char> {
    let mut letters = Vec::new();
    for c in word.to_uppercase().chars() {
        if !is_separator(c) && !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

proptest! {
    #[test]
    fn guessing_every_letter_wins_once(word in name()) {
        let mut game = GameState::new(&word).unwrap();
        let letters = distinct_letters(&word);
        for (i, letter) in letters.iter().enumerate() {
            prop_assert!(!game.is_over());
            prop_assert!(game.make_guess(&letter.to_string()));
            prop_assert_eq!(game.is_over(), i + 1 == letters.len());
        }
        prop_assert!(game.is_won());
        prop_assert_eq!(game.reveal_mask().iter().collect::<String>(), word.to_uppercase());
        prop_assert_eq!(game.score(), WIN_BONUS);
        prop_assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn repeated_letter_changes_nothing(word in name(), letter in "[A-Z]") {
        let mut game = GameState::new(&word).unwrap();
        game.make_guess(&letter);
        let before = game.clone();
        prop_assert!(!game.make_guess(&letter));
        prop_assert!(!game.make_guess(&letter.to_lowercase()));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn six_wrong_letters_lose(word in name()) {
        let mut game = GameState::new(&word).unwrap();
        let present = distinct_letters(&word);
        let wrong: Vec<char> = ('A'..='Z').filter(|c| !present.contains(c)).take(6).collect();
        prop_assert_eq!(wrong.len(), 6);
        for letter in wrong {
            prop_assert!(!game.make_guess(&letter.to_string()));
        }
        prop_assert_eq!(game.outcome(), Outcome::Lost);
        prop_assert!(!game.is_won());
        prop_assert_eq!(game.attempts_remaining(), 0);
        prop_assert_eq!(game.score(), 0);
    }

    #[test]
    fn full_word_guess_wins_after_any_prefix(word in name(), prefix in proptest::collection::vec("[A-Z]", 0..4)) {
        let mut game = GameState::new(&word).unwrap();
        for letter in &prefix {
            game.make_guess(letter);
        }
        prop_assume!(!game.is_over());
        prop_assert!(game.make_guess(&word.to_lowercase()));
        prop_assert!(game.is_won());
        prop_assert_eq!(game.reveal_mask().iter().collect::<String>(), word.to_uppercase());
        prop_assert_eq!(game.score(), WIN_BONUS);
    }

    #[test]
    fn wrong_full_word_costs_one_attempt(word in name()) {
        prop_assume!(word.chars().count() > 1);
        let mut game = GameState::new(&word).unwrap();
        // Same length, guaranteed different: swap every letter for a digit.
        let wrong: String = word.chars().map(|c| if is_separator(c) { c } else { '0' }).collect();
        let mask = game.reveal_mask().to_vec();
        prop_assert!(!game.make_guess(&wrong));
        prop_assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS - 1);
        prop_assert_eq!(game.reveal_mask(), mask.as_slice());
        prop_assert!(game.guessed_letters().is_empty());
    }

    #[test]
    fn separators_start_revealed(word in name()) {
        let game = GameState::new(&word).unwrap();
        prop_assert_eq!(game.reveal_mask().len(), word.chars().count());
        for (c, m) in word.chars().zip(game.reveal_mask()) {
            if is_separator(c) {
                prop_assert_eq!(c, *m);
            } else {
                prop_assert_eq!(*m, '_');
            }
        }
    }

    #[test]
    fn attempts_never_increase_and_frozen_after_over(word in name(), guesses in proptest::collection::vec("[A-Za-z]{1,3}", 0..30)) {
        let mut game = GameState::new(&word).unwrap();
        let mut last_attempts = game.attempts_remaining();
        let mut last_score = game.score();
        for guess in &guesses {
            let was_over = game.is_over();
            let before = game.clone();
            game.make_guess(guess);
            if was_over {
                prop_assert_eq!(&game, &before);
            }
            prop_assert!(game.attempts_remaining() <= last_attempts);
            prop_assert!(game.score() >= last_score);
            prop_assert!(!game.is_won() || game.is_over());
            last_attempts = game.attempts_remaining();
            last_score = game.score();
        }
    }
}
