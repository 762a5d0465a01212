use std::io;
use std::process::ExitCode;

use calcsvc_calculator::Calculator;
use calcsvc_cli::{CalcsvcConfig, Cli, ConfigSource, Outcome, execute, logging};
use clap::Parser;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let (config, source) = CalcsvcConfig::load(cli.config.as_deref())?;
    logging::init_logger(&config.logging, cli.verbose);

    match &source {
        ConfigSource::File(path) => debug!(path = %path.display(), "loaded configuration"),
        ConfigSource::Defaults(path) => {
            debug!(path = %path.display(), "configuration file not found, using defaults")
        }
    }

    let format = cli.format.unwrap_or(config.output.format);
    let calculator = Calculator::new();
    execute(
        &cli.command,
        &config,
        format,
        &calculator,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
