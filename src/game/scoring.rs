//! Word scoring
//!
//! Letter-value scoring: each letter carries a fixed point value
//! (rarer letters are worth more), the sum is multiplied by word
//! length, a seven-letter word doubles that, and an active combo
//! multiplies the fully adjusted score once more.

use super::board::BOARD_CAPACITY;

/// Point value per letter, a through z. Rare letters score high.
const LETTER_VALUES: [u32; 26] = [
    1, // a
    3, // b
    3, // c
    2, // d
    1, // e
    4, // f
    2, // g
    4, // h
    1, // i
    8, // j
    5, // k
    1, // l
    3, // m
    1, // n
    1, // o
    3, // p
    10, // q
    1, // r
    1, // s
    1, // t
    1, // u
    4, // v
    4, // w
    8, // x
    4, // y
    10, // z
];

/// Point value for a single letter. Non-alphabetic input is worth
/// nothing, matching the dictionary's lowercase-only guarantee.
pub fn letter_value(letter: char) -> u32 {
    if letter.is_ascii_lowercase() {
        LETTER_VALUES[(letter as u8 - b'a') as usize]
    } else {
        0
    }
}

/// Score a matched word against the current combo count.
///
/// - base: sum of letter values
/// - length step: base x word length
/// - full-board bonus: a 7-letter word doubles the length-multiplied
///   score
/// - combo: the adjusted score is multiplied by (combo + 1); combo is
///   the count of consecutive scoring turns before this one
pub fn score_word(word: &str, combo: u32) -> u32 {
    let base: u32 = word.chars().map(letter_value).sum();
    let mut scored = base * word.len() as u32;

    if word.len() == BOARD_CAPACITY {
        scored *= 2;
    }

    scored * (combo + 1)
}
