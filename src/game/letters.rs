#![allow(dead_code)]
//! Letter supply for the bank
//!
//! Letters are drawn without replacement from a fixed 96-tile pool
//! with natural English frequency, refilled whenever it runs dry.
//! Pre-generation adds a vowel/consonant smoothing pass so a full
//! game's letter stream never contains long same-class runs.

use rand::prelude::*;
use rand::rngs::StdRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-game letter pool: natural English frequency, 96 tiles total.
const LETTER_POOL: [(char, u8); 26] = [
    ('a', 9),
    ('b', 2),
    ('c', 2),
    ('d', 4),
    ('e', 12),
    ('f', 2),
    ('g', 3),
    ('h', 2),
    ('i', 8),
    ('j', 1),
    ('k', 1),
    ('l', 4),
    ('m', 2),
    ('n', 6),
    ('o', 7),
    ('p', 2),
    ('q', 1),
    ('r', 6),
    ('s', 4),
    ('t', 6),
    ('u', 4),
    ('v', 2),
    ('w', 2),
    ('x', 1),
    ('y', 2),
    ('z', 1),
];

/// Total tiles in a fresh pool
pub const POOL_SIZE: usize = 96;

/// Smoothing step applied to the wipe odds on each accepted letter.
/// At 0.2 the odds saturate after 5 consecutive same-class letters,
/// which bounds every same-class run at 5.
pub const ODDS_WIPE_STEP: f64 = 0.2;

/// Redraw attempts before the bag is topped up. Only reachable when
/// the bag has drained to a single letter class while that class is
/// fully wiped.
const MAX_REDRAWS: u32 = 64;

/// Letters offered when a guaranteed-playable vowel is needed
const VOWELS_ONLY: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Classify a letter for streak smoothing. `y` counts as a vowel here.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Seed derived from the calendar date (days since the Unix epoch),
/// so every player sees the same letter sequence on a given day.
pub fn daily_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86_400)
        .unwrap_or(0)
}

/// The per-game letter source.
///
/// Owns its RNG so a seeded game replays the exact same stream; no
/// global random state is involved anywhere.
#[derive(Debug, Clone)]
pub struct LetterSupply {
    remaining: Vec<char>,
    odds_wipe_vowel: f64,
    odds_wipe_consonant: f64,
    rng: StdRng,
}

impl LetterSupply {
    /// Fresh supply seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Fresh supply with a fixed seed (daily challenge, tests).
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut supply = Self {
            remaining: Vec::with_capacity(POOL_SIZE),
            odds_wipe_vowel: 0.0,
            odds_wipe_consonant: 0.0,
            rng,
        };
        supply.refill();
        supply
    }

    /// Restore the full 96-tile distribution.
    fn refill(&mut self) {
        self.remaining.clear();
        for (letter, count) in LETTER_POOL {
            for _ in 0..count {
                self.remaining.push(letter);
            }
        }
    }

    /// Tiles left before the next refill.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Uniform draw from the remaining pool, without replacement.
    /// An exhausted pool refills itself; this never fails.
    pub fn next_letter(&mut self) -> char {
        if self.remaining.is_empty() {
            self.refill();
        }
        let idx = self.rng.random_range(0..self.remaining.len());
        self.remaining.swap_remove(idx)
    }

    /// Uniform draw from the vowel alphabet, bypassing the pool.
    /// Used to force a playable opening tile.
    pub fn vowel_only(&mut self) -> char {
        VOWELS_ONLY[self.rng.random_range(0..VOWELS_ONLY.len())]
    }

    /// Build a full game's letter stream with streak smoothing.
    ///
    /// Each slot redraws candidates until one survives its class's
    /// wipe odds; rejected letters stay in the bag. Accepting a vowel
    /// raises the vowel wipe odds by [`ODDS_WIPE_STEP`] and lowers the
    /// consonant odds by the same step (floored at zero), and mirror
    /// for consonants, so same-class runs die out within 5 letters.
    pub fn pregenerate(&mut self, count: usize) -> Vec<char> {
        (0..count).map(|_| self.next_smoothed()).collect()
    }

    fn next_smoothed(&mut self) -> char {
        let mut attempts = 0;
        loop {
            if self.remaining.is_empty() {
                self.refill();
            }
            let idx = self.rng.random_range(0..self.remaining.len());
            let letter = self.remaining[idx];

            let wipe = if is_vowel(letter) {
                self.odds_wipe_vowel
            } else {
                self.odds_wipe_consonant
            };

            if wipe > 0.0 && self.rng.random::<f64>() < wipe {
                attempts += 1;
                // A single-class bag under full wipe would spin; the
                // top-up restores the other class, whose odds are 0
                // whenever this one has saturated.
                if attempts >= MAX_REDRAWS {
                    self.refill();
                    attempts = 0;
                }
                continue;
            }

            self.remaining.swap_remove(idx);
            self.note_accepted(letter);
            return letter;
        }
    }

    fn note_accepted(&mut self, letter: char) {
        if is_vowel(letter) {
            self.odds_wipe_vowel += ODDS_WIPE_STEP;
            self.odds_wipe_consonant = (self.odds_wipe_consonant - ODDS_WIPE_STEP).max(0.0);
        } else {
            self.odds_wipe_consonant += ODDS_WIPE_STEP;
            self.odds_wipe_vowel = (self.odds_wipe_vowel - ODDS_WIPE_STEP).max(0.0);
        }
    }
}

impl Default for LetterSupply {
    fn default() -> Self {
        Self::new()
    }
}
