//! Transcript cleaning: line filtering followed by sentence splitting.

pub mod filter;
pub mod splitter;

pub use filter::{is_content_line, Line};
pub use splitter::split_sentences;

/// Sentence units extracted from one transcript, with line statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText<'a> {
    /// Sentence units in original order.
    pub sentences: Vec<&'a str>,
    /// Lines in the source text.
    pub lines_read: usize,
    /// Lines that passed the filter.
    pub lines_kept: usize,
}

impl CleanedText<'_> {
    /// Render one sentence per line, each newline-terminated.
    #[must_use]
    pub fn to_output(&self) -> String {
        let mut out = String::with_capacity(self.sentences.iter().map(|s| s.len() + 1).sum());
        for sentence in &self.sentences {
            out.push_str(sentence);
            out.push('\n');
        }
        out
    }
}

/// Drop non-content lines and split the rest into sentence units.
#[must_use]
pub fn clean_text(source: &str) -> CleanedText<'_> {
    let mut cleaned = CleanedText::default();
    for line in filter::lines(source) {
        cleaned.lines_read += 1;
        if !line.terminated {
            continue;
        }
        cleaned.lines_kept += 1;
        cleaned.sentences.extend(split_sentences(line.text));
    }
    cleaned
}
