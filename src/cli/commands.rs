use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "transcript-prep",
    version,
    about = "Clean call transcripts into one sentence per line",
    after_help = "Reads every *.txt under ./transcripts, named TICKER-Mon-DAY-YEAR.txt, and writes \
                  YEAR-TICKER-MM-DAY.txt under ./processed with the same subdirectories. \
                  Files whose output already exists are skipped, so re-running is safe. \
                  Progress is logged to stderr (RUST_LOG=debug for per-file detail)."
)]
pub struct Cli {
    /// Transcript root (default: ./transcripts, or [paths].input in transcript-prep.toml)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output root (default: ./processed, or [paths].output in transcript-prep.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["transcript-prep"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn roots_can_be_overridden() {
        let cli =
            Cli::try_parse_from(["transcript-prep", "--input", "raw", "-o", "clean"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("raw")));
        assert_eq!(cli.output, Some(PathBuf::from("clean")));
    }
}
