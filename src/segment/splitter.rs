//! Sentence splitting for a single transcript line.
//!
//! A boundary is a run of whitespace that follows `.`, `!` or `?` and is
//! followed by an ASCII uppercase letter. Two contexts never split: the
//! period of a single-letter initial ("J. Smith") and the period of "Dr.".
//! Other abbreviations ("Mr.", "U.S.") are not recognised and do split.

use once_cell::sync::Lazy;
use regex::Regex;

/// Candidate boundary: terminal mark, whitespace gap (group 1), uppercase start.
static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?](\s+)[A-Z]").unwrap());

/// Split a line into sentence units.
///
/// The line is trimmed first. Each unit is a slice of the trimmed line; the
/// whitespace consumed at a boundary is the only text dropped. A line with no
/// boundary comes back as a single unit, and a blank line yields no units.
///
/// # Example
/// ```
/// use transcript_prep::segment::splitter::split_sentences;
///
/// let units = split_sentences("Revenue grew 10%. Margins improved.");
/// assert_eq!(units, vec!["Revenue grew 10%.", "Margins improved."]);
/// ```
#[must_use]
pub fn split_sentences(line: &str) -> Vec<&str> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    let mut units = Vec::new();
    let mut start = 0;
    for caps in BOUNDARY.captures_iter(line) {
        let Some(gap) = caps.get(1) else { continue };
        // The terminal mark is ASCII, so it occupies the byte before the gap.
        if is_protected(&line[..gap.start()]) {
            continue;
        }
        units.push(&line[start..gap.start()]);
        start = gap.end();
    }
    units.push(&line[start..]);
    units
}

/// `head` ends with the terminal mark of a candidate boundary.
fn is_protected(head: &str) -> bool {
    let Some(before) = head.strip_suffix('.') else {
        return false;
    };
    is_single_initial(before) || ends_with_title(before, "Dr")
}

/// A lone ASCII letter after whitespace or at line start, e.g. the "J" in "J.".
///
/// A letter after other punctuation does not count, so "U.S." still splits.
fn is_single_initial(before: &str) -> bool {
    let mut rev = before.chars().rev();
    match rev.next() {
        Some(c) if c.is_ascii_alphabetic() => rev.next().map_or(true, char::is_whitespace),
        _ => false,
    }
}

fn ends_with_title(before: &str, title: &str) -> bool {
    before
        .strip_suffix(title)
        .is_some_and(|rest| starts_word(rest.chars().next_back()))
}

/// True if a word begins right after `prev` (or at the start of the line).
fn starts_word(prev: Option<char>) -> bool {
    prev.map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
}
