use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PrepError, Result};

/// Default directory holding raw transcripts.
pub const INPUT_DIR: &str = "transcripts";
/// Default directory receiving cleaned transcripts.
pub const OUTPUT_DIR: &str = "processed";
/// Optional settings file, looked up in the working directory.
const CONFIG_FILE: &str = "transcript-prep.toml";
/// Extension of transcript files picked up by the scanner.
const TRANSCRIPT_EXT: &str = "txt";

/// Run configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths are resolved against.
    pub working_dir: PathBuf,
    /// Root of the raw transcript tree.
    pub input_root: PathBuf,
    /// Root of the mirrored output tree.
    pub output_root: PathBuf,
    /// User settings loaded from `transcript-prep.toml`.
    pub settings: UserSettings,
}

/// User-configurable settings from transcript-prep.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Input/output directory overrides.
    pub paths: PathSettings,
    /// Scanner configuration.
    pub scan: ScanSettings,
}

/// Directory overrides. Relative paths are resolved against the working directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Scanner-related settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// File extension (without dot) of transcripts to process.
    pub extension: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extension: TRANSCRIPT_EXT.into(),
        }
    }
}

impl Config {
    /// Create config for a given working directory.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let config_path = working_dir.join(CONFIG_FILE);
        let settings = Self::load_settings(&config_path).unwrap_or_default();

        let input_root = working_dir.join(
            settings
                .paths
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(INPUT_DIR)),
        );
        let output_root = working_dir.join(
            settings
                .paths
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(OUTPUT_DIR)),
        );

        Self {
            working_dir,
            input_root,
            output_root,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| PrepError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Override the input and/or output roots (e.g. from CLI flags).
    #[must_use]
    pub fn with_roots(mut self, input: Option<&Path>, output: Option<&Path>) -> Self {
        if let Some(input) = input {
            self.input_root = self.working_dir.join(input);
        }
        if let Some(output) = output {
            self.output_root = self.working_dir.join(output);
        }
        self
    }

    /// Load settings from the config file if it exists.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!("ignoring invalid {}: {e}", config_path.display());
                None
            }
        }
    }

    /// Extension the scanner matches, without a leading dot.
    #[must_use]
    pub fn transcript_extension(&self) -> &str {
        self.settings.scan.extension.trim_start_matches('.')
    }
}
