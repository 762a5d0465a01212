//! Argument parsing for the `calcsvc` binary.

use std::path::PathBuf;

use calcsvc_calculator::Value;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Stateless calculators for arithmetic, strings, temperature and drink volume
#[derive(Parser, Debug)]
#[command(name = "calcsvc")]
#[command(about = "Stateless arithmetic, string, temperature and volume calculators")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to $CALCSVC_CONFIG_PATH, then ./calcsvc.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format, overriding the configuration file
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every registered calculator
    List,

    /// Run a calculator with named arguments
    Run {
        /// Calculator name, e.g. `divide` or `kelvin_to_celsius`
        name: String,

        /// Arguments as key=value; values are parsed as null, booleans, numbers or text
        #[arg(value_parser = parse_argument)]
        args: Vec<(String, Value)>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Splits `key=value` at the first `=`; the value goes through [`Value::parse_literal`].
pub fn parse_argument(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("missing argument name in '{raw}'"));
    }
    Ok((key.to_string(), Value::parse_literal(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_argument_splits_on_first_equals() {
        assert_eq!(parse_argument("a=10"), Ok(("a".to_string(), Value::Integer(10))));
        assert_eq!(
            parse_argument("s=x=y"),
            Ok(("s".to_string(), Value::String("x=y".to_string())))
        );
        assert_eq!(parse_argument("s="), Ok(("s".to_string(), Value::String(String::new()))));
    }

    #[test]
    fn parse_argument_rejects_malformed_input() {
        assert!(parse_argument("novalue").is_err());
        assert!(parse_argument("=5").is_err());
    }

    #[test]
    fn cli_parses_run_with_global_flags() {
        let cli = Cli::try_parse_from([
            "calcsvc", "run", "divide", "a=10", "b=3", "--format", "json", "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(
            cli.command,
            Command::Run {
                name: "divide".to_string(),
                args: vec![
                    ("a".to_string(), Value::Integer(10)),
                    ("b".to_string(), Value::Integer(3)),
                ],
            }
        );
    }

    #[test]
    fn cli_parses_list_without_flags() {
        let cli = Cli::try_parse_from(["calcsvc", "list"]).unwrap();
        assert_eq!(cli.command, Command::List);
        assert_eq!(cli.format, None);
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_rejects_bad_argument() {
        assert!(Cli::try_parse_from(["calcsvc", "run", "add", "a"]).is_err());
    }
}
