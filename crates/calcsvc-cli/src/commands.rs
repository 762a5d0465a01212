//! Command execution for the `calcsvc` binary.

use std::collections::HashMap;
use std::io::Write;
use std::process::ExitCode;

use calcsvc_calculator::{Calculator, CalculatorError, Value};
use serde_json::json;
use tracing::{debug, warn};

use crate::cli::{Command, OutputFormat};
use crate::config::CalcsvcConfig;

/// How a successfully dispatched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The calculator rejected its input; the error has already been reported.
    CalculationFailed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::CalculationFailed => ExitCode::from(2),
        }
    }
}

/// Run `command`, writing results to `out` and calculator errors in text mode to `err`.
pub fn execute(
    command: &Command,
    config: &CalcsvcConfig,
    format: OutputFormat,
    calculator: &Calculator,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    match command {
        Command::List => {
            for name in calculator.names() {
                writeln!(out, "{name}")?;
            }
            Ok(Outcome::Success)
        }
        Command::Config => {
            write!(out, "{}", config.to_toml_string()?)?;
            Ok(Outcome::Success)
        }
        Command::Run { name, args } => run_calculator(name, args, format, calculator, out, err),
    }
}

fn run_calculator(
    name: &str,
    args: &[(String, Value)],
    format: OutputFormat,
    calculator: &Calculator,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let mut variables = HashMap::with_capacity(args.len());
    for (key, value) in args {
        if variables.insert(key.clone(), value.clone()).is_some() {
            warn!(argument = %key, "argument given more than once, keeping the last value");
        }
    }

    match calculator.calculate(name, &variables) {
        Ok(value) => {
            debug!(
                calculator = name,
                result = %value,
                kind = value.type_name(),
                "calculation succeeded"
            );
            match format {
                OutputFormat::Text => writeln!(out, "{value}")?,
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({ "calculator": name, "result": serde_json::Value::from(value) })
                )?,
            }
            Ok(Outcome::Success)
        }
        Err(e) => {
            report_failure(name, &e, format, out, err)?;
            Ok(Outcome::CalculationFailed)
        }
    }
}

fn report_failure(
    name: &str,
    error: &CalculatorError,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    debug!(calculator = name, code = ?error.code(), "calculation rejected");
    match format {
        OutputFormat::Text => writeln!(err, "error: {error}")?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({
                "calculator": name,
                "error": { "code": error.code(), "message": error.to_string() },
            })
        )?,
    }
    Ok(())
}
