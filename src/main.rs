// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc)]

use clap::Parser;

use transcript_prep::cli::commands::Cli;
use transcript_prep::cli::output;
use transcript_prep::config::Config;
use transcript_prep::operations::RunSummary;
use transcript_prep::processor;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Progress logs go to stderr so stdout carries only the summary.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::fmt::Display>> {
    let config = Config::from_cwd()
        .map_err(map_err)?
        .with_roots(cli.input.as_deref(), cli.output.as_deref());

    tracing::debug!(
        "input root {}, output root {}",
        config.input_root.display(),
        config.output_root.display()
    );

    let result = processor::run(&config).map_err(map_err)?;
    let summary: RunSummary = result.into();
    println!("{}", output::format_json(&summary));
    Ok(())
}

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}
