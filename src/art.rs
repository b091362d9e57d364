//! ASCII gallows, one stage per life lost.

use crate::game_state::MAX_ATTEMPTS;

const STAGES: [&[&str]; MAX_ATTEMPTS as usize + 1] = [
    &["  +---+", "  |   |", "      |", "      |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "========="],
];

/// Lines of the gallows drawing for the given number of lives left.
pub fn hangman_stage(attempts_remaining: u32) -> &'static [&'static str] {
    let lost = MAX_ATTEMPTS.saturating_sub(attempts_remaining) as usize;
    STAGES[lost.min(STAGES.len() - 1)]
}
