#![allow(dead_code)]
//! Dictionary for word matching
//!
//! Embeds a profanity-filtered wordlist at build time. Words are kept
//! as an ordered list sorted by descending length, so a linear scan
//! naturally prefers the longest match at any board offset.

use once_cell::sync::Lazy;

/// Embedded wordlist: lowercase, alphabetic only, one per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Words shorter than this can never score
pub const MIN_WORD_LENGTH: usize = 3;

/// Words longer than the board cannot fit and are dropped at load
pub const MAX_WORD_LENGTH: usize = 7;

/// Shared embedded dictionary, built once per process
static EMBEDDED: Lazy<Dictionary> = Lazy::new(|| Dictionary::from_lines(WORDS_DATA.lines()));

/// An ordered word list, longest words first.
///
/// The order is load-bearing: the matcher returns the first entry that
/// fits, so descending length gives longest-match-wins for free. An
/// empty dictionary is valid and simply never matches.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from raw lines: filter to 3-7 letter
    /// lowercase words, then sort by descending length. The sort is
    /// stable, so source order breaks length ties.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut words: Vec<String> = lines
            .into_iter()
            .map(str::trim)
            .filter(|w| {
                (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&w.len())
                    && w.chars().all(|c| c.is_ascii_lowercase())
            })
            .map(str::to_string)
            .collect();

        words.sort_by(|a, b| b.len().cmp(&a.len()));

        Self { words }
    }

    /// The embedded wordlist shipped with the game.
    pub fn embedded() -> &'static Dictionary {
        &EMBEDDED
    }

    /// An empty dictionary (never matches anything).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Words in match-priority order (longest first).
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the dictionary contains the exact word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
