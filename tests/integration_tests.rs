// Integration tests for hiphop-hangman
// Full sessions driven through the line interface over temporary word lists.

use hiphop_hangman::cli::CliInterface;
use hiphop_hangman::wordbank::load_wordlist_from_file;
use hiphop_hangman::*;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

/// Directory with a one-word list for every category.
fn word_list_dir(name: &str, word: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hiphop_hangman_it_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    for category in &CATEGORIES {
        fs::write(dir.join(category.file), format!("{word}\n")).unwrap();
    }
    dir
}

fn play(dir: &PathBuf, input: &str) -> SessionStats {
    let supply = WordSupply::from_dir(dir);
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    game_loop(&supply, &mut interface)
}

#[test]
fn test_win_by_letters() {
    let dir = word_list_dir("letters", "Ice-T");
    let stats = play(&dir, "1\ni\nc\ne\nt\nn\n");

    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.total_score, 10);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_win_by_full_name_with_spaces() {
    let dir = word_list_dir("fullname", "Kendrick Lamar");
    let stats = play(&dir, "2\nk\n  kendrick lamar  \nn\n");

    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.best_score, 10);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_loss_then_win_across_rounds() {
    let dir = word_list_dir("rounds", "Nas");
    let stats = play(&dir, "3\nb\nc\nd\ne\nf\ng\ny\n6\nnas\nn\n");

    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.total_score, 10);
    assert!((stats.average_score() - 5.0).abs() < f64::EPSILON);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_invalid_and_duplicate_guesses_cost_nothing() {
    let dir = word_list_dir("invalid", "Rakim");
    // Wrong length, duplicate letter and blank line, then five wrong letters:
    // the round is still alive, and the full name wins it.
    let stats = play(&dir, "1\nra\nr\nr\n\nb\nc\nd\ne\nf\nrakim\nn\n");

    assert_eq!(stats.games_won, 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_new_round_command_abandons_round() {
    let dir = word_list_dir("next", "Common");
    let stats = play(&dir, "4\nc\n/next\n4\ncommon\nn\n");

    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_exit_command_and_closed_input() {
    let dir = word_list_dir("exit", "Common");
    assert_eq!(play(&dir, "1\nc\n/exit\n"), SessionStats::default());
    assert_eq!(play(&dir, "1\nc\n"), SessionStats::default());
    assert_eq!(play(&dir, ""), SessionStats::default());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_list_reports_and_reprompts() {
    let dir = word_list_dir("missing", "Eminem");
    fs::remove_file(dir.join("midwest.txt")).unwrap();

    // Category 4 fails, category 7 works.
    let stats = play(&dir, "4\n7\neminem\nn\n");
    assert_eq!(stats.games_won, 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_embedded_words_are_playable() {
    let supply = WordSupply::embedded();
    for category in &CATEGORIES {
        for word in supply.load(category).unwrap() {
            let mut game = GameState::new(&word).unwrap();
            assert!(game.make_guess(&word), "{word} could not be solved");
            assert!(game.is_won());
        }
    }
}

#[test]
fn test_every_letter_solves_every_embedded_word() {
    let supply = WordSupply::embedded();
    for word in supply.load(find_category("7").unwrap()).unwrap() {
        let mut game = GameState::new(&word).unwrap();
        for c in word.to_uppercase().chars() {
            game.make_guess(&c.to_string());
        }
        assert!(game.is_won(), "{word} not solved letter by letter");
        assert_eq!(game.score(), 10);
    }
}

#[test]
fn test_file_loader_matches_directory_supply() {
    let dir = word_list_dir("loader", "Q-Tip");
    let words = load_wordlist_from_file(dir.join("groups.txt")).unwrap();
    assert_eq!(words, vec!["Q-Tip".to_string()]);
    let _ = fs::remove_dir_all(&dir);
}
