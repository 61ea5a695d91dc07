use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::ingest::naming;
use crate::ingest::scanner::{ScannedFile, Scanner};
use crate::segment::{clean_text, CleanedText};

/// Statistics from a processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    pub files_scanned: usize,
    /// Files cleaned and written during this run.
    pub files_processed: usize,
    /// Files whose output already existed.
    pub files_skipped: usize,
    pub lines_read: usize,
    /// Lines that passed the punctuation filter.
    pub lines_kept: usize,
    pub sentences_written: usize,
}

/// What happened to a single transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Output already present; nothing was read or written.
    Skipped,
    /// Output written with the given line statistics.
    Written {
        output: PathBuf,
        lines_read: usize,
        lines_kept: usize,
        sentences: usize,
    },
}

impl ProcessResult {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Skipped => self.files_skipped += 1,
            FileOutcome::Written {
                lines_read,
                lines_kept,
                sentences,
                ..
            } => {
                self.files_processed += 1;
                self.lines_read += lines_read;
                self.lines_kept += lines_kept;
                self.sentences_written += sentences;
            }
        }
    }
}

/// Run the pipeline: scan transcripts, clean each one, write the mirrored tree.
///
/// Files are handled one at a time in sorted order. The first failure
/// (bad filename, unknown month, I/O error) aborts the run.
pub fn run(config: &Config) -> Result<ProcessResult> {
    let scanner = Scanner::with_extension(&config.input_root, config.transcript_extension());
    let scanned = scanner.scan()?;
    tracing::debug!(
        "found {} transcript(s) under {}",
        scanned.len(),
        config.input_root.display()
    );

    let mut result = ProcessResult {
        files_scanned: scanned.len(),
        ..Default::default()
    };

    for file in &scanned {
        let outcome = process_file(config, file)?;
        result.record(&outcome);
    }

    Ok(result)
}

/// Process one scanned transcript, skipping it if its output already exists.
pub fn process_file(config: &Config, file: &ScannedFile) -> Result<FileOutcome> {
    let output = output_path(config, file)?;

    if output.exists() {
        tracing::info!("Skipping {}, already processed.", file.path.display());
        return Ok(FileOutcome::Skipped);
    }

    tracing::info!("Processing {}...", file.path.display());
    let source = read_transcript(&file.path)?;
    let cleaned = clean_text(&source);
    tracing::debug!(
        "{}: kept {} of {} lines, {} sentence(s)",
        file.relative_path,
        cleaned.lines_kept,
        cleaned.lines_read,
        cleaned.sentences.len()
    );
    if cleaned.sentences.is_empty() {
        tracing::warn!("{} has no content lines", file.relative_path);
    }

    write_sentences(&output, &cleaned)?;
    tracing::info!("Wrote processed transcript to {}.", output.display());

    Ok(FileOutcome::Written {
        output,
        lines_read: cleaned.lines_read,
        lines_kept: cleaned.lines_kept,
        sentences: cleaned.sentences.len(),
    })
}

/// Mirror the file's subdirectory under the output root with the renamed file.
pub fn output_path(config: &Config, file: &ScannedFile) -> Result<PathBuf> {
    let name = naming::output_file_name(&file.path, config.transcript_extension())?;
    Ok(config.output_root.join(&file.relative_dir).join(name))
}

/// Read a whole transcript as UTF-8.
pub fn read_transcript(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Read a transcript and return its sentence units.
pub fn process_transcript(path: &Path) -> Result<Vec<String>> {
    let source = read_transcript(path)?;
    Ok(clean_text(&source)
        .sentences
        .into_iter()
        .map(str::to_string)
        .collect())
}

fn write_sentences(output: &Path, cleaned: &CleanedText<'_>) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, cleaned.to_output())?;
    Ok(())
}
