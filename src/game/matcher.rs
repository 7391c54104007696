//! Word matching against the board window
//!
//! A deliberate straight scan over the length-sorted dictionary, per
//! the game's design: the list is small enough that indexing it would
//! buy nothing, and the sort order encodes the match priority.

use super::dictionary::Dictionary;

/// Find the best dictionary word in `window` starting at `start`.
///
/// Candidates are tried in dictionary order (longest first) and must
/// equal the window slice exactly over their whole length, so the
/// first hit is the longest possible match at that offset. Words that
/// would run past the end of the window are skipped, which guarantees
/// every returned match fits the window from its offset. Returns
/// `None` once the scan exhausts the dictionary.
pub fn find_match<'d>(window: &str, dict: &'d Dictionary, start: usize) -> Option<&'d str> {
    if start >= window.len() {
        return None;
    }
    let tail = &window[start..];

    dict.words()
        .iter()
        .find(|word| tail.len() >= word.len() && &tail[..word.len()] == word.as_str())
        .map(String::as_str)
}
