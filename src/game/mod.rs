#![allow(dead_code)]
//! Game logic: turns, the board window, word matching, scoring
//!
//! The `Game` struct is the turn state machine. It owns the board
//! window, the five-slot bank, the letter supply, and the combo/score
//! state; the presentation layer calls [`Game::play_tile`] with a
//! bank index and renders whatever comes back. Stat updates are
//! emitted as typed [`StatEvent`]s and drained by the caller.

pub mod board;
pub mod dictionary;
pub mod letters;
pub mod matcher;
pub mod scoring;

use board::{Board, Tile, TileId};
use dictionary::Dictionary;
use letters::LetterSupply;
use std::collections::VecDeque;

/// Turns in a full game
pub const INITIAL_TURNS: u32 = 50;

/// Bank slots offered to the player
pub const BANK_SIZE: usize = 5;

/// Once this few turns remain, emptied bank slots are not refilled,
/// so the bank drains to nothing exactly as the game ends.
const BANK_DRAIN_TURNS: u32 = 4;

/// A matched word and the points it scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub word: String,
    pub points: u32,
}

/// Result of a play request.
///
/// A rejected play (`accepted == false`) is the expected outcome of
/// playing while input is locked, after the game is over, or from an
/// empty bank slot; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub accepted: bool,
    pub matched: Option<WordScore>,
    /// Combo count after this play resolved
    pub combo: u32,
}

impl PlayOutcome {
    fn rejected(combo: u32) -> Self {
        Self {
            accepted: false,
            matched: None,
            combo,
        }
    }
}

/// Final result of the end-of-game sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndSummary {
    pub final_score: u32,
    pub words_found: Vec<WordScore>,
}

/// Stat updates emitted by the core for an external aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatEvent {
    /// A word was matched and scored
    WordScored { length: usize, points: u32 },
    /// The combo streak reached this length
    ComboStreak(u32),
    /// The game ended with this final score
    GameOver { score: u32 },
}

/// The turn state machine.
pub struct Game {
    dict: Dictionary,
    board: Board,
    bank: Vec<Option<Tile>>,
    /// Pre-generated letter stream feeding the bank
    queue: VecDeque<char>,
    supply: LetterSupply,
    turns: u32,
    score: u32,
    combo: u32,
    last_word: Option<String>,
    /// Live presentation transitions; plays are dropped while > 0
    in_flight: u32,
    /// Set once the end-of-game sweep has run
    swept: bool,
    sweep_results: Vec<WordScore>,
    next_tile_id: TileId,
    events: Vec<StatEvent>,
}

impl Game {
    /// Start a game against the given dictionary. A seed makes the
    /// letter stream deterministic (daily challenge); `None` draws
    /// from OS entropy.
    pub fn new(dict: Dictionary, seed: Option<u64>) -> Self {
        let mut game = Self {
            dict,
            board: Board::new(),
            bank: Vec::new(),
            queue: VecDeque::new(),
            supply: LetterSupply::new(),
            turns: 0,
            score: 0,
            combo: 0,
            last_word: None,
            in_flight: 0,
            swept: false,
            sweep_results: Vec::new(),
            next_tile_id: 0,
            events: Vec::new(),
        };
        game.new_game(seed);
        game
    }

    /// Reset all state for a fresh game: new supply (seeded when
    /// given), pre-generated letter stream, full bank with a
    /// guaranteed vowel in the first slot.
    pub fn new_game(&mut self, seed: Option<u64>) {
        self.supply = match seed {
            Some(seed) => LetterSupply::seeded(seed),
            None => LetterSupply::new(),
        };
        self.queue = self
            .supply
            .pregenerate(INITIAL_TURNS as usize + BANK_SIZE)
            .into();
        self.board.clear();
        self.turns = INITIAL_TURNS;
        self.score = 0;
        self.combo = 0;
        self.last_word = None;
        self.in_flight = 0;
        self.swept = false;
        self.sweep_results.clear();
        self.events.clear();

        let opening_vowel = self.supply.vowel_only();
        let mut bank = Vec::with_capacity(BANK_SIZE);
        bank.push(Some(self.make_tile(opening_vowel)));
        for _ in 1..BANK_SIZE {
            let letter = self.draw_from_stream();
            bank.push(Some(self.make_tile(letter)));
        }
        self.bank = bank;
    }

    /// Play the tile in the given bank slot.
    ///
    /// Rejected silently while a transition is in flight, once the
    /// game is over, or when the slot is empty or out of range.
    /// Otherwise the tile moves to the board tail (evicting the head
    /// when full), the slot refills from the letter stream, and a
    /// full board is checked for a word at offset 0. The last turn
    /// skips that check: the end-of-game sweep starts at offset 0 and
    /// would score it twice otherwise.
    pub fn play_tile(&mut self, slot: usize) -> PlayOutcome {
        if self.in_flight > 0 || self.is_over() {
            return PlayOutcome::rejected(self.combo);
        }
        let tile = match self.bank.get_mut(slot).and_then(Option::take) {
            Some(tile) => tile,
            None => return PlayOutcome::rejected(self.combo),
        };

        self.turns -= 1;
        self.board.push(tile);

        if self.turns > BANK_DRAIN_TURNS {
            let letter = self.draw_from_stream();
            let refill = self.make_tile(letter);
            self.bank[slot] = Some(refill);
        }

        let matched = if self.turns == 0 {
            None
        } else if self.board.is_full() {
            self.check_for_word(0)
        } else {
            None
        };

        PlayOutcome {
            accepted: true,
            matched,
            combo: self.combo,
        }
    }

    /// Run the end-of-game sweep and return the final summary.
    ///
    /// Offsets are checked in increasing order, each match scored
    /// (and each miss resetting the combo) before the next offset is
    /// looked at. Idempotent: repeat calls return the same summary.
    pub fn end_game(&mut self) -> EndSummary {
        if !self.swept {
            self.swept = true;
            self.turns = 0;
            for start in 0..self.board.len().saturating_sub(1) {
                if let Some(scored) = self.check_for_word(start) {
                    self.sweep_results.push(scored);
                }
            }
            self.events.push(StatEvent::GameOver { score: self.score });
        }
        EndSummary {
            final_score: self.score,
            words_found: self.sweep_results.clone(),
        }
    }

    /// Match the board against the dictionary at `start`; score and
    /// extend the combo on a hit, reset it on a miss.
    fn check_for_word(&mut self, start: usize) -> Option<WordScore> {
        let letters = self.board.letters();
        let word = match matcher::find_match(&letters, &self.dict, start) {
            Some(found) => found.to_string(),
            None => {
                self.combo = 0;
                return None;
            }
        };

        let points = scoring::score_word(&word, self.combo);
        self.score += points;
        self.combo += 1;
        self.last_word = Some(word.clone());
        self.events.push(StatEvent::WordScored {
            length: word.len(),
            points,
        });
        self.events.push(StatEvent::ComboStreak(self.combo));

        Some(WordScore { word, points })
    }

    /// Mark a presentation transition as started; plays are dropped
    /// until every transition has ended.
    pub fn begin_transition(&mut self) {
        self.in_flight += 1;
    }

    /// Mark a presentation transition as finished.
    pub fn end_transition(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Whether plays are currently being dropped.
    pub fn is_locked(&self) -> bool {
        self.in_flight > 0
    }

    /// Whether all turns are spent (or the sweep has run).
    pub fn is_over(&self) -> bool {
        self.turns == 0 || self.swept
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn last_word(&self) -> Option<&str> {
        self.last_word.as_deref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Bank slots in order; `None` is a drained slot.
    pub fn bank(&self) -> &[Option<Tile>] {
        &self.bank
    }

    /// Drain stat events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<StatEvent> {
        std::mem::take(&mut self.events)
    }

    fn draw_from_stream(&mut self) -> char {
        self.queue
            .pop_front()
            .unwrap_or_else(|| self.supply.next_letter())
    }

    fn make_tile(&mut self, letter: char) -> Tile {
        let tile = Tile::new(self.next_tile_id, letter);
        self.next_tile_id += 1;
        tile
    }

    #[cfg(test)]
    fn force_board(&mut self, letters: &str) {
        self.board.clear();
        for c in letters.chars() {
            let tile = self.make_tile(c);
            self.board.push(tile);
        }
    }

    #[cfg(test)]
    fn force_bank(&mut self, letters: &str) {
        self.bank = letters
            .chars()
            .map(|c| {
                let tile = self.make_tile(c);
                Some(tile)
            })
            .collect();
    }

    #[cfg(test)]
    fn force_turns(&mut self, turns: u32) {
        self.turns = turns;
    }

    #[cfg(test)]
    fn force_combo(&mut self, combo: u32) {
        self.combo = combo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_lines(words.iter().copied())
    }

    fn seeded_game(words: &[&str]) -> Game {
        Game::new(dict(words), Some(42))
    }

    #[test]
    fn test_new_game_fills_bank() {
        let game = seeded_game(&["cat"]);
        assert_eq!(game.bank().len(), BANK_SIZE);
        assert!(game.bank().iter().all(Option::is_some));
        assert_eq!(game.turns_remaining(), INITIAL_TURNS);
        assert_eq!(game.score(), 0);
        assert_eq!(game.combo(), 0);
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_first_bank_letter_is_vowel() {
        for seed in 0..50 {
            let game = Game::new(Dictionary::empty(), Some(seed));
            let first = game.bank()[0].expect("first slot filled").letter;
            assert!(
                matches!(first, 'a' | 'e' | 'i' | 'o' | 'u'),
                "seed {} opened with {}",
                seed,
                first
            );
        }
    }

    #[test]
    fn test_play_decrements_turns_and_moves_tile() {
        let mut game = seeded_game(&[]);
        let letter = game.bank()[2].unwrap().letter;
        let outcome = game.play_tile(2);
        assert!(outcome.accepted);
        assert_eq!(game.turns_remaining(), INITIAL_TURNS - 1);
        assert_eq!(game.board().letters(), letter.to_string());
    }

    #[test]
    fn test_bank_slot_refills_after_play() {
        let mut game = seeded_game(&[]);
        let before = game.bank()[0].unwrap();
        game.play_tile(0);
        let after = game.bank()[0].expect("slot refilled");
        assert_ne!(before.id, after.id);
    }

    #[test]
    fn test_out_of_range_slot_rejected() {
        let mut game = seeded_game(&[]);
        let outcome = game.play_tile(99);
        assert!(!outcome.accepted);
        assert_eq!(game.turns_remaining(), INITIAL_TURNS);
    }

    #[test]
    fn test_play_rejected_while_locked() {
        let mut game = seeded_game(&[]);
        game.begin_transition();
        assert!(game.is_locked());
        assert!(!game.play_tile(0).accepted);
        assert_eq!(game.turns_remaining(), INITIAL_TURNS);

        game.end_transition();
        assert!(!game.is_locked());
        assert!(game.play_tile(0).accepted);
    }

    #[test]
    fn test_nested_transitions_all_must_end() {
        let mut game = seeded_game(&[]);
        game.begin_transition();
        game.begin_transition();
        game.end_transition();
        assert!(!game.play_tile(0).accepted);
        game.end_transition();
        assert!(game.play_tile(0).accepted);
    }

    #[test]
    fn test_no_check_until_board_full() {
        let mut game = seeded_game(&["cat", "dog"]);
        for _ in 0..6 {
            let outcome = game.play_tile(0);
            assert!(outcome.accepted);
            assert_eq!(outcome.matched, None);
        }
        assert_eq!(game.board().len(), 6);
    }

    #[test]
    fn test_full_board_match_scores() {
        let mut game = seeded_game(&["cat"]);
        game.force_board("xcatdo");
        game.force_bank("gzzzz");

        // Playing 'g' fills the board: "xcatdog" -> no match at 0
        let outcome = game.play_tile(0);
        assert!(outcome.accepted);
        assert_eq!(outcome.matched, None);
        assert_eq!(game.combo(), 0);

        // Next play evicts 'x': "catdogz" -> "cat" at offset 0
        let outcome = game.play_tile(1);
        let scored = outcome.matched.expect("cat matched");
        assert_eq!(scored.word, "cat");
        assert_eq!(scored.points, 15);
        assert_eq!(outcome.combo, 1);
        assert_eq!(game.score(), 15);
        assert_eq!(game.last_word(), Some("cat"));
    }

    #[test]
    fn test_no_match_resets_combo() {
        let mut game = seeded_game(&["cat"]);
        game.force_combo(3);
        game.force_board("zzzzzz");
        game.force_bank("zzzzz");

        let outcome = game.play_tile(0);
        assert!(outcome.accepted);
        assert_eq!(outcome.matched, None);
        assert_eq!(outcome.combo, 0);
        assert_eq!(game.combo(), 0);
    }

    #[test]
    fn test_combo_raises_score() {
        let mut game = seeded_game(&["cat"]);
        game.force_combo(2);
        game.force_board("catdo");
        game.force_bank("gz");
        game.play_tile(0);
        // "catdogz": cat at combo 2 -> 15 * 3
        let outcome = game.play_tile(1);
        assert_eq!(outcome.matched.unwrap().points, 45);
        assert_eq!(game.combo(), 3);
    }

    #[test]
    fn test_last_turn_skips_regular_check() {
        let mut game = seeded_game(&["cat"]);
        game.force_turns(1);
        game.force_board("zcatdog");
        game.force_bank("c");

        // Board becomes "catdogc" but the final play defers to the sweep
        let outcome = game.play_tile(0);
        assert!(outcome.accepted);
        assert_eq!(outcome.matched, None);
        assert!(game.is_over());

        let summary = game.end_game();
        assert_eq!(summary.words_found.len(), 1);
        assert_eq!(summary.words_found[0].word, "cat");
        assert_eq!(summary.final_score, 15);
    }

    #[test]
    fn test_play_rejected_after_game_over() {
        let mut game = seeded_game(&[]);
        game.force_turns(1);
        game.play_tile(0);
        assert!(game.is_over());
        assert!(!game.play_tile(1).accepted);
    }

    #[test]
    fn test_sweep_scores_in_offset_order() {
        let mut game = seeded_game(&["cat", "dog"]);
        game.force_board("catdogx");

        let summary = game.end_game();
        let words: Vec<&str> = summary
            .words_found
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(words, vec!["cat", "dog"]);
        // cat at combo 0 (15), miss at offset 1 resets, dog at combo 0 (15)
        assert_eq!(summary.words_found[0].points, 15);
        assert_eq!(summary.words_found[1].points, 15);
        assert_eq!(summary.final_score, 30);
    }

    #[test]
    fn test_sweep_combo_chains_across_offsets() {
        let mut game = seeded_game(&["sss"]);
        game.force_board("sssssss");

        // "sss" matches at offsets 0-4; each consecutive hit extends
        // the combo: 9, 18, 27, 36, 45
        let summary = game.end_game();
        let points: Vec<u32> = summary.words_found.iter().map(|w| w.points).collect();
        assert_eq!(points, vec![9, 18, 27, 36, 45]);
        assert_eq!(summary.final_score, 135);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let mut game = seeded_game(&["cat"]);
        game.force_board("catzzzz");

        let first = game.end_game();
        let second = game.end_game();
        assert_eq!(first, second);
        assert_eq!(game.score(), first.final_score);
    }

    #[test]
    fn test_sweep_on_short_board() {
        let mut game = seeded_game(&["cat"]);
        game.force_board("cat");
        let summary = game.end_game();
        assert_eq!(summary.words_found.len(), 1);

        let mut game = seeded_game(&["cat"]);
        game.force_board("");
        let summary = game.end_game();
        assert!(summary.words_found.is_empty());
    }

    #[test]
    fn test_empty_dictionary_game_is_playable() {
        let mut game = Game::new(Dictionary::empty(), Some(9));
        for turn in 0..INITIAL_TURNS as usize {
            let slot = if game.turns_remaining() > BANK_DRAIN_TURNS {
                0
            } else {
                // Bank stops refilling at the end; spend the leftovers
                turn % BANK_SIZE
            };
            assert!(game.play_tile(slot).accepted, "turn {}", turn);
        }
        assert!(game.is_over());
        let summary = game.end_game();
        assert_eq!(summary.final_score, 0);
        assert!(summary.words_found.is_empty());
    }

    #[test]
    fn test_bank_drains_over_final_turns() {
        let mut game = Game::new(Dictionary::empty(), Some(13));
        while game.turns_remaining() > BANK_DRAIN_TURNS {
            assert!(game.play_tile(0).accepted);
            if game.turns_remaining() > BANK_DRAIN_TURNS {
                assert!(game.bank()[0].is_some());
            }
        }
        // The drained slot is not refilled and cannot be replayed
        assert!(game.bank()[0].is_none());
        assert!(!game.play_tile(0).accepted);
        // The remaining slots still play out
        for slot in 1..BANK_SIZE {
            assert!(game.play_tile(slot).accepted);
        }
        assert!(game.is_over());
    }

    #[test]
    fn test_seeded_games_play_identically() {
        let mut a = Game::new(Dictionary::empty(), Some(77));
        let mut b = Game::new(Dictionary::empty(), Some(77));
        for _ in 0..20 {
            a.play_tile(0);
            b.play_tile(0);
        }
        assert_eq!(a.board().letters(), b.board().letters());
        let bank_a: Vec<Option<char>> = a.bank().iter().map(|s| s.map(|t| t.letter)).collect();
        let bank_b: Vec<Option<char>> = b.bank().iter().map(|s| s.map(|t| t.letter)).collect();
        assert_eq!(bank_a, bank_b);
    }

    #[test]
    fn test_new_game_resets_state() {
        let mut game = seeded_game(&["cat"]);
        game.force_board("xcatdo");
        game.force_bank("gzzzz");
        game.play_tile(0);
        game.play_tile(1);
        assert!(game.score() > 0);

        game.new_game(Some(5));
        assert_eq!(game.score(), 0);
        assert_eq!(game.combo(), 0);
        assert_eq!(game.turns_remaining(), INITIAL_TURNS);
        assert!(game.board().is_empty());
        assert!(game.bank().iter().all(Option::is_some));
        assert!(!game.is_over());
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_stat_events_emitted() {
        let mut game = seeded_game(&["cat"]);
        game.force_board("xcatdo");
        game.force_bank("gz");
        game.play_tile(0);
        game.take_events();

        game.play_tile(1);
        let events = game.take_events();
        assert_eq!(
            events,
            vec![
                StatEvent::WordScored {
                    length: 3,
                    points: 15
                },
                StatEvent::ComboStreak(1),
            ]
        );

        let summary = game.end_game();
        let events = game.take_events();
        assert!(events.contains(&StatEvent::GameOver {
            score: summary.final_score
        }));
    }

    #[test]
    fn test_events_drained_once() {
        let mut game = seeded_game(&[]);
        game.play_tile(0);
        game.take_events();
        assert!(game.take_events().is_empty());
    }
}
