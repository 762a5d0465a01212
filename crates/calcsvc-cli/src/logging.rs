//! Structured logging setup
//!
//! Logs always go to stderr so stdout carries nothing but results.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Target prefixes match, so `calcsvc` covers the binary and both library crates.
const VERBOSE_DIRECTIVES: &str = "calcsvc=debug,info";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(config: &LoggingConfig, verbose: bool) -> String {
    if verbose { VERBOSE_DIRECTIVES.to_string() } else { config.level.clone() }
}

pub fn init_logger(config: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config, verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match config.format {
        LogFormat::Compact => {
            tracing_subscriber::registry().with(filter).with(fmt_layer.compact()).init()
        }
        LogFormat::Json => tracing_subscriber::registry().with(filter).with(fmt_layer.json()).init(),
    }
}
