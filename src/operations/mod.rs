//! Output shapes shared by the CLI and library callers.

pub mod summary;

pub use summary::RunSummary;
