//! Line filter: keeps only lines that read like spoken content.
//!
//! Titles, headings, speaker labels and blank lines do not end in
//! punctuation; everything that does is treated as transcript content.

use once_cell::sync::Lazy;
use regex::Regex;

/// Line terminators: CRLF, LF, lone CR, and the Unicode line/paragraph breaks.
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap());

/// Characters that mark a line as content when they end it.
pub const TERMINAL_PUNCTUATION: [char; 6] = ['.', '!', '?', ':', ';', ','];

/// One newline-delimited line of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Raw line text, without the line terminator.
    pub text: &'a str,
    /// Whether the trimmed line ends in terminal punctuation.
    pub terminated: bool,
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            terminated: is_content_line(text),
        }
    }
}

/// Returns true if the whitespace-trimmed line ends in one of `. ! ? : ; ,`.
#[must_use]
pub fn is_content_line(line: &str) -> bool {
    line.trim_end().ends_with(&TERMINAL_PUNCTUATION[..])
}

/// Split a transcript into classified lines.
///
/// A terminator at the very end does not open an extra empty line.
pub fn lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut parts: Vec<&str> = LINE_BREAK.split(source).collect();
    if parts.last() == Some(&"") {
        parts.pop();
    }
    parts.into_iter().map(Line::new)
}
