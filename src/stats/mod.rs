#![allow(dead_code)]
//! Statistics aggregation
//!
//! Folds the core's [`StatEvent`]s into per-game and lifetime
//! aggregates. The core never reads these back; they exist for the
//! stats screens and for persistence.

use crate::game::StatEvent;

/// Aggregates for the game currently being played.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStats {
    pub score: u32,
    pub words_made: u32,
    pub avg_word_length: f64,
    pub highest_turn_score: u32,
    pub highest_combo_streak: u32,
}

/// Aggregates across every game ever finished on this machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifetimeStats {
    pub games_played: u32,
    pub high_score: u32,
    pub avg_score: f64,
    pub words_made: u32,
    pub avg_words_per_game: f64,
    pub avg_word_length: f64,
    pub highest_turn_score: u32,
    pub highest_combo_streak: u32,
}

/// Folds stat events into game and lifetime aggregates.
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    game: GameStats,
    lifetime: LifetimeStats,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume with previously persisted lifetime aggregates.
    pub fn with_lifetime(lifetime: LifetimeStats) -> Self {
        Self {
            game: GameStats::default(),
            lifetime,
        }
    }

    pub fn game(&self) -> &GameStats {
        &self.game
    }

    pub fn lifetime(&self) -> &LifetimeStats {
        &self.lifetime
    }

    /// Clear the per-game aggregates for a fresh game.
    pub fn start_game(&mut self) {
        self.game = GameStats::default();
    }

    /// Fold one event from [`crate::game::Game::take_events`].
    pub fn apply(&mut self, event: StatEvent) {
        match event {
            StatEvent::WordScored { length, points } => {
                self.record_word_length(length);
                self.game.highest_turn_score = self.game.highest_turn_score.max(points);
                self.lifetime.highest_turn_score = self.lifetime.highest_turn_score.max(points);
            }
            StatEvent::ComboStreak(streak) => {
                self.game.highest_combo_streak = self.game.highest_combo_streak.max(streak);
                self.lifetime.highest_combo_streak =
                    self.lifetime.highest_combo_streak.max(streak);
            }
            StatEvent::GameOver { score } => self.record_game_over(score),
        }
    }

    fn record_word_length(&mut self, length: usize) {
        let length = length as f64;

        self.game.avg_word_length = running_avg(
            self.game.avg_word_length,
            self.game.words_made,
            length,
        );
        self.game.words_made += 1;

        self.lifetime.avg_word_length = running_avg(
            self.lifetime.avg_word_length,
            self.lifetime.words_made,
            length,
        );
        self.lifetime.words_made += 1;
    }

    fn record_game_over(&mut self, score: u32) {
        self.game.score = score;

        let played = self.lifetime.games_played;
        self.lifetime.avg_score = running_avg(self.lifetime.avg_score, played, score as f64);
        self.lifetime.avg_words_per_game = running_avg(
            self.lifetime.avg_words_per_game,
            played,
            self.game.words_made as f64,
        );
        self.lifetime.games_played += 1;
        self.lifetime.high_score = self.lifetime.high_score.max(score);
    }
}

/// Incremental mean: fold `next` into an average over `count` samples.
fn running_avg(avg: f64, count: u32, next: f64) -> f64 {
    (avg * count as f64 + next) / (count + 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_scored_updates_counts_and_average() {
        let mut tracker = StatsTracker::new();
        tracker.apply(StatEvent::WordScored {
            length: 3,
            points: 15,
        });
        tracker.apply(StatEvent::WordScored {
            length: 5,
            points: 40,
        });

        assert_eq!(tracker.game().words_made, 2);
        assert!((tracker.game().avg_word_length - 4.0).abs() < 1e-9);
        assert_eq!(tracker.game().highest_turn_score, 40);
        assert_eq!(tracker.lifetime().words_made, 2);
        assert!((tracker.lifetime().avg_word_length - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_combo_streak_keeps_maximum() {
        let mut tracker = StatsTracker::new();
        tracker.apply(StatEvent::ComboStreak(2));
        tracker.apply(StatEvent::ComboStreak(5));
        tracker.apply(StatEvent::ComboStreak(1));

        assert_eq!(tracker.game().highest_combo_streak, 5);
        assert_eq!(tracker.lifetime().highest_combo_streak, 5);
    }

    #[test]
    fn test_game_over_folds_into_lifetime() {
        let mut tracker = StatsTracker::new();
        tracker.apply(StatEvent::WordScored {
            length: 4,
            points: 20,
        });
        tracker.apply(StatEvent::GameOver { score: 120 });

        assert_eq!(tracker.game().score, 120);
        assert_eq!(tracker.lifetime().games_played, 1);
        assert_eq!(tracker.lifetime().high_score, 120);
        assert!((tracker.lifetime().avg_score - 120.0).abs() < 1e-9);
        assert!((tracker.lifetime().avg_words_per_game - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_score_across_games() {
        let mut tracker = StatsTracker::new();
        tracker.apply(StatEvent::GameOver { score: 100 });
        tracker.start_game();
        tracker.apply(StatEvent::GameOver { score: 200 });

        assert_eq!(tracker.lifetime().games_played, 2);
        assert!((tracker.lifetime().avg_score - 150.0).abs() < 1e-9);
        assert_eq!(tracker.lifetime().high_score, 200);
    }

    #[test]
    fn test_start_game_resets_game_only() {
        let mut tracker = StatsTracker::new();
        tracker.apply(StatEvent::WordScored {
            length: 3,
            points: 15,
        });
        tracker.apply(StatEvent::ComboStreak(3));
        tracker.apply(StatEvent::GameOver { score: 15 });

        tracker.start_game();
        assert_eq!(tracker.game(), &GameStats::default());
        assert_eq!(tracker.lifetime().words_made, 1);
        assert_eq!(tracker.lifetime().highest_combo_streak, 3);
        assert_eq!(tracker.lifetime().games_played, 1);
    }

    #[test]
    fn test_with_lifetime_resumes_aggregates() {
        let lifetime = LifetimeStats {
            games_played: 10,
            high_score: 500,
            avg_score: 250.0,
            ..Default::default()
        };
        let mut tracker = StatsTracker::with_lifetime(lifetime);
        tracker.apply(StatEvent::GameOver { score: 130 });

        assert_eq!(tracker.lifetime().games_played, 11);
        assert_eq!(tracker.lifetime().high_score, 500);
        // (250 * 10 + 130) / 11
        assert!((tracker.lifetime().avg_score - 2630.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_avg_words_per_game_uses_game_count() {
        let mut tracker = StatsTracker::new();
        for _ in 0..3 {
            tracker.apply(StatEvent::WordScored {
                length: 3,
                points: 15,
            });
        }
        tracker.apply(StatEvent::GameOver { score: 45 });
        tracker.start_game();
        tracker.apply(StatEvent::WordScored {
            length: 3,
            points: 15,
        });
        tracker.apply(StatEvent::GameOver { score: 15 });

        assert!((tracker.lifetime().avg_words_per_game - 2.0).abs() < 1e-9);
    }
}
