//! Run summary printed by the CLI after a successful run.

use serde::Serialize;

use crate::processor::ProcessResult;

/// Serializable run summary; zero counters are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_processed: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub files_skipped: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub lines_read: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub lines_kept: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub sentences_written: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde's skip_serializing_if
fn is_zero(v: &usize) -> bool {
    *v == 0
}

impl From<ProcessResult> for RunSummary {
    fn from(result: ProcessResult) -> Self {
        Self {
            files_scanned: result.files_scanned,
            files_processed: result.files_processed,
            files_skipped: result.files_skipped,
            lines_read: result.lines_read,
            lines_kept: result.lines_kept,
            sentences_written: result.sentences_written,
        }
    }
}
