use crate::game_state::GameState;

/// Running tally of finished rounds within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: u32,
    pub games_won: u32,
    pub total_score: u32,
    pub best_score: u32,
}

impl SessionStats {
    /// Record a finished round. Rounds still in progress are ignored.
    pub fn record(&mut self, game: &GameState) {
        if !game.is_over() {
            return;
        }
        self.games_played += 1;
        if game.is_won() {
            self.games_won += 1;
        }
        self.total_score += game.score();
        self.best_score = self.best_score.max(game.score());
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.total_score) / f64::from(self.games_played)
    }

    /// Fraction of rounds won, in `0.0..=1.0`.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played)
    }

    pub fn summary(&self) -> String {
        format!(
            "Games: {} | Won: {} ({:.0}%) | Total score: {} | Average: {:.1} | Best: {}",
            self.games_played,
            self.games_won,
            self.win_rate() * 100.0,
            self.total_score,
            self.average_score(),
            self.best_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won(word: &str) -> GameState {
        let mut game = GameState::new(word).unwrap();
        game.make_guess(word);
        game
    }

    fn lost(word: &str) -> GameState {
        let mut game = GameState::new(word).unwrap();
        for letter in ["Q", "V", "X", "J", "W", "Y"] {
            game.make_guess(letter);
        }
        assert!(game.is_over());
        game
    }

    #[test]
    fn test_empty_session() {
        let stats = SessionStats::default();
        assert_eq!(stats.average_score(), 0.0);
        assert_eq!(stats.win_rate(), 0.0);
    }

    #[test]
    fn test_record_wins_and_losses() {
        let mut stats = SessionStats::default();
        stats.record(&won("NAS"));
        stats.record(&lost("NAS"));
        stats.record(&won("RAKIM"));

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.total_score, 20);
        assert_eq!(stats.best_score, 10);
        assert!((stats.average_score() - 20.0 / 3.0).abs() < f64::EPSILON);
        assert!((stats.win_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unfinished_round_not_recorded() {
        let mut stats = SessionStats::default();
        let mut game = GameState::new("COMMON").unwrap();
        game.make_guess("C");
        stats.record(&game);
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_summary_mentions_counts() {
        let mut stats = SessionStats::default();
        stats.record(&won("NAS"));
        let summary = stats.summary();
        assert!(summary.contains("Games: 1"));
        assert!(summary.contains("Won: 1 (100%)"));
        assert!(summary.contains("Best: 10"));
    }
}
