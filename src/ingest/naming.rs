//! Transcript filename parsing and output name construction.
//!
//! Input files are named `{ticker}-{Mon}-{day}-{year}.txt`; outputs are
//! renamed to `{year}-{ticker}-{month_number}-{day}.txt` so they sort by date.

use std::path::Path;

use crate::error::{PrepError, Result};

/// Three-letter English month abbreviations and their two-digit numbers.
pub const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// Look up the two-digit month number for an abbreviation such as "Mar".
#[must_use]
pub fn month_number(abbrev: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == abbrev)
        .map(|(_, number)| *number)
}

/// Fields parsed from a transcript filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTokens {
    pub ticker: String,
    pub month: String,
    pub day: String,
    pub year: String,
}

impl FilenameTokens {
    /// Parse `{ticker}-{Mon}-{day}-{year}.{ext}` from a path's file name.
    pub fn parse(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| PrepError::MalformedFilename {
                name: name.clone(),
                detail: "file name is not valid UTF-8".into(),
            })?;

        let fields: Vec<&str> = stem.split('-').collect();
        let [ticker, month, day, year] = fields.as_slice() else {
            return Err(PrepError::MalformedFilename {
                name,
                detail: format!(
                    "expected 4 dash-separated fields (ticker-Mon-day-year), found {}",
                    fields.len()
                ),
            });
        };

        Ok(Self {
            ticker: (*ticker).to_string(),
            month: (*month).to_string(),
            day: (*day).to_string(),
            year: (*year).to_string(),
        })
    }

    /// Build the normalized output name, e.g. `2025-ACME-03-15.txt`.
    ///
    /// Returns `None` when the month abbreviation is not in [`MONTHS`].
    #[must_use]
    pub fn output_file_name(&self, extension: &str) -> Option<String> {
        let month = month_number(&self.month)?;
        Some(format!(
            "{}-{}-{}-{}.{extension}",
            self.year, self.ticker, month, self.day
        ))
    }
}

/// Derive the output file name for a transcript path.
pub fn output_file_name(path: &Path, extension: &str) -> Result<String> {
    let tokens = FilenameTokens::parse(path)?;
    tokens
        .output_file_name(extension)
        .ok_or_else(|| PrepError::UnknownMonth {
            abbrev: tokens.month.clone(),
            path: path.display().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_table_is_complete() {
        assert_eq!(month_number("Jan"), Some("01"));
        assert_eq!(month_number("Mar"), Some("03"));
        assert_eq!(month_number("Dec"), Some("12"));
        assert_eq!(month_number("Sept"), None);
        assert_eq!(month_number("mar"), None);
    }

    #[test]
    fn parses_filename_tokens() {
        let tokens = FilenameTokens::parse(Path::new("transcripts/ACME-Mar-15-2025.txt")).unwrap();
        assert_eq!(
            tokens,
            FilenameTokens {
                ticker: "ACME".into(),
                month: "Mar".into(),
                day: "15".into(),
                year: "2025".into(),
            }
        );
    }

    #[test]
    fn builds_output_name() {
        let name = output_file_name(Path::new("ACME-Mar-15-2025.txt"), "txt").unwrap();
        assert_eq!(name, "2025-ACME-03-15.txt");
    }

    #[test]
    fn tokens_with_unknown_month_have_no_output_name() {
        let tokens = FilenameTokens::parse(Path::new("ACME-Foo-15-2025.txt")).unwrap();
        assert_eq!(tokens.output_file_name("txt"), None);
        let tokens = FilenameTokens::parse(Path::new("ACME-Dec-01-2024.txt")).unwrap();
        assert_eq!(tokens.output_file_name("txt").as_deref(), Some("2024-ACME-12-01.txt"));
    }

    #[test]
    fn day_is_copied_verbatim() {
        let name = output_file_name(Path::new("lly-Oct-5-2025.txt"), "txt").unwrap();
        assert_eq!(name, "2025-lly-10-5.txt");
    }

    #[test]
    fn unknown_month_is_an_error() {
        let err = output_file_name(Path::new("dir/ACME-Foo-15-2025.txt"), "txt").unwrap_err();
        match err {
            PrepError::UnknownMonth { abbrev, path } => {
                assert_eq!(abbrev, "Foo");
                assert!(path.ends_with("ACME-Foo-15-2025.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        for name in ["lly-2025-q3.txt", "BRK-B-Mar-15-2025.txt", "notes.txt"] {
            let err = FilenameTokens::parse(Path::new(name)).unwrap_err();
            assert!(
                matches!(err, PrepError::MalformedFilename { .. }),
                "{name} should be malformed"
            );
        }
    }
}
