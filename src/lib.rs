// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: The only panic is a constant regex compiling
// - module_name_repetitions: `FilenameTokens` in `naming` reads fine
// - manual_let_else: if-let with early return is often clearer in context
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::manual_let_else
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod operations;
pub mod processor;
pub mod segment;
