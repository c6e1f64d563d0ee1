//! fixture-corpus CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fixture_corpus::cli::{Cli, Commands};
use fixture_corpus::commands::{
    run_check, run_export, run_languages, run_list, run_show, CommandContext,
};
use fixture_corpus::CorpusConfig;

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(output) = e.stdout_output() {
                print!("{}", output);
            }
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> fixture_corpus::Result<String> {
    let cli = Cli::parse();
    let config = CorpusConfig::load(cli.config.as_deref())?;

    init_tracing(&cli, &config);
    if let Some(source) = &config.source {
        tracing::debug!("loaded config from {}", source.display());
    }

    let ctx = CommandContext::from_cli(&cli, config);

    match &cli.command {
        Commands::Languages => run_languages(&ctx),
        Commands::List(args) => run_list(args, &ctx),
        Commands::Show(args) => run_show(args, &ctx),
        Commands::Check(args) => run_check(args, &ctx),
        Commands::Export(args) => run_export(args, &ctx),
    }
}

/// Logs go to stderr: `RUST_LOG` wins, then `-v`, then the configured level
fn init_tracing(cli: &Cli, config: &CorpusConfig) {
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("fixture_corpus={}", default_level)))
        .unwrap_or_else(|_| EnvFilter::new("fixture_corpus=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
