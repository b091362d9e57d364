//! Hangman round state and guess resolution.
//!
//! A [`GameState`] is created once per round from the secret word and mutated
//! only through [`GameState::submit`] / [`GameState::make_guess`]. After the
//! round reaches [`Outcome::Won`] or [`Outcome::Lost`] every field is frozen.

use thiserror::Error;

/// Lives at the start of every round.
pub const MAX_ATTEMPTS: u32 = 6;

/// Points awarded once, on the transition into [`Outcome::Won`].
pub const WIN_BONUS: u32 = 10;

/// Placeholder shown for a letter that has not been guessed yet.
pub const HIDDEN: char = '_';

/// Characters that are shown from the start and never need guessing.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '.')
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot start a round with an empty word")]
    EmptyWord,
    #[error("word '{0}' has no letters to guess")]
    NothingToGuess(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Active,
    Won,
    Lost,
}

/// Result of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs at least once in the word.
    Hit,
    /// Letter does not occur; one attempt lost.
    Miss,
    /// Letter was already guessed; nothing changed.
    Duplicate,
    /// Full word guessed correctly.
    Solved,
    /// Full word of the right length but wrong; one attempt lost.
    WrongWord,
    /// Neither a single letter nor the length of the word.
    Invalid,
    /// The round had already ended.
    AlreadyOver,
}

impl GuessOutcome {
    /// Whether the guess counts as correct for [`GameState::make_guess`].
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Hit | Self::Solved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    word: Vec<char>,
    reveal_mask: Vec<char>,
    guessed_letters: Vec<char>,
    attempts_remaining: u32,
    score: u32,
    outcome: Outcome,
}

impl GameState {
    /// Start a round for `word`. The word is uppercased; separators are
    /// revealed immediately.
    pub fn new(word: &str) -> Result<Self, GameError> {
        if word.is_empty() {
            return Err(GameError::EmptyWord);
        }
        let word: Vec<char> = word.to_uppercase().chars().collect();
        if word.iter().all(|&c| is_separator(c)) {
            return Err(GameError::NothingToGuess(word.iter().collect()));
        }
        let reveal_mask = word
            .iter()
            .map(|&c| if is_separator(c) { c } else { HIDDEN })
            .collect();

        Ok(Self {
            word,
            reveal_mask,
            guessed_letters: Vec::new(),
            attempts_remaining: MAX_ATTEMPTS,
            score: 0,
            outcome: Outcome::Active,
        })
    }

    /// Submit a guess and report whether it was correct.
    pub fn make_guess(&mut self, guess: &str) -> bool {
        self.submit(guess).is_correct()
    }

    /// Submit a guess: a single letter, or the whole word.
    pub fn submit(&mut self, guess: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::AlreadyOver;
        }
        let guess: Vec<char> = guess.to_uppercase().chars().collect();

        // A single character always takes the letter branch, even when the
        // word itself is one character long.
        match guess.as_slice() {
            [letter] => self.guess_letter(*letter),
            whole if whole.len() == self.word.len() => self.guess_word(whole),
            _ => GuessOutcome::Invalid,
        }
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.guessed_letters.contains(&letter) {
            return GuessOutcome::Duplicate;
        }
        self.guessed_letters.push(letter);

        let mut matched = false;
        for (slot, &c) in self.reveal_mask.iter_mut().zip(&self.word) {
            if c == letter {
                *slot = c;
                matched = true;
            }
        }
        if !matched {
            self.lose_attempt();
        }

        if self.reveal_mask == self.word {
            self.win();
        } else if self.attempts_remaining == 0 {
            self.outcome = Outcome::Lost;
        }

        if matched {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        }
    }

    fn guess_word(&mut self, whole: &[char]) -> GuessOutcome {
        if whole == self.word.as_slice() {
            self.reveal_mask.clone_from(&self.word);
            self.win();
            GuessOutcome::Solved
        } else {
            self.lose_attempt();
            if self.attempts_remaining == 0 {
                self.outcome = Outcome::Lost;
            }
            GuessOutcome::WrongWord
        }
    }

    fn lose_attempt(&mut self) {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
    }

    fn win(&mut self) {
        self.outcome = Outcome::Won;
        self.score += WIN_BONUS;
    }

    /// Mask positions joined by spaces, e.g. `I _ _ - _`.
    pub fn word_display(&self) -> String {
        join_chars(&self.reveal_mask)
    }

    /// Guessed letters in the order they were submitted, joined by spaces.
    pub fn guessed_letters_display(&self) -> String {
        join_chars(&self.guessed_letters)
    }

    pub fn reveal_mask(&self) -> &[char] {
        &self.reveal_mask
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Active
    }

    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// Number of characters in the word (separators included).
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// The secret word, available only once the round is over.
    pub fn answer(&self) -> Option<String> {
        self.is_over().then(|| self.word.iter().collect())
    }

    /// `(revealed, total)` counted over guessable positions only.
    pub fn progress(&self) -> (usize, usize) {
        self.word
            .iter()
            .zip(&self.reveal_mask)
            .filter(|(c, _)| !is_separator(**c))
            .fold((0, 0), |(revealed, total), (_, &m)| {
                (revealed + usize::from(m != HIDDEN), total + 1)
            })
    }
}

fn join_chars(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() * 2);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}
