//! `http-call` command line entry point.
//!
//! Reads the input document from stdin (or `--input`), runs one call, and
//! writes one output document to stdout. The exit status is 0 for every
//! call outcome; failures are reported in the `error` field.

use clap::Parser;
use http_call::prelude::*;
use std::io::{self, Read};
use std::path::PathBuf;

/// Issue one HTTP request described by a JSON parameter document.
#[derive(Debug, Parser)]
#[command(name = "http-call", version, about)]
struct Cli {
    /// Read the input document from this file instead of stdin
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pretty-print the output document
    #[arg(long)]
    pretty: bool,

    /// Log to stderr at this level (trace, debug, info, warn, error)
    #[arg(long, env = "HTTP_CALL_LOG_LEVEL", value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log to stderr using tracing filter directives
    #[arg(long, env = "HTTP_CALL_LOG", value_name = "DIRECTIVES")]
    log_filter: Option<String>,
}

impl Cli {
    /// Builds the logging configuration. An unknown level is reported on
    /// stderr and ignored so the call still runs.
    fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::disabled();
        if let Some(ref level) = self.log_level {
            match level.parse::<LogLevel>() {
                Ok(level) => config = config.with_level(level),
                Err(e) => eprintln!("http-call: {e}"),
            }
        }
        if let Some(ref directives) = self.log_filter {
            config = config.with_directives(directives.clone());
        }
        config
    }

    fn read_input(&self) -> io::Result<Vec<u8>> {
        match self.input {
            Some(ref path) => std::fs::read(path),
            None => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.logging_config()) {
        eprintln!("http-call: {e}");
    }

    let executor = RequestExecutor::new();
    let output = match cli.read_input() {
        Ok(bytes) => executor.execute(&bytes),
        Err(e) => Output::failure(&CallError::decode(e.to_string())),
    };

    if let Err(e) = output.write_to(io::stdout().lock(), cli.pretty) {
        eprintln!("http-call: failed to write output: {e}");
    }
}
