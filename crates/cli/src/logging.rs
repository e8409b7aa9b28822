// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The quantumstream Authors

//! Process-wide log subscriber.
//!
//! Events go to stderr in a compact, timestamp-free format. The level is
//! `info` by default, `debug` for this crate with `--verbose`, or whatever
//! `QUANTUMSTREAM_LOG` says when it is set. Failed runs are logged at error
//! level whatever the filter says.

use std::env::VarError;
use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::app::FAILURE_TARGET;
use crate::error::{Error, Result};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "QUANTUMSTREAM_LOG";

const DEFAULT_DIRECTIVES: &str = "info";
const VERBOSE_DIRECTIVES: &str = "quantumstream=debug,info";

/// Resolve the filter directives for the given verbosity and env value.
pub fn directives(verbose: bool, env_value: Option<&str>) -> &str {
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ if verbose => VERBOSE_DIRECTIVES,
        _ => DEFAULT_DIRECTIVES,
    }
}

/// Build the event filter for the given verbosity and env value.
pub fn filter_for(verbose: bool, env_value: Option<&str>) -> Result<EnvFilter> {
    let directives = directives(verbose, env_value);
    let full = format!("{},{FAILURE_TARGET}=error", directives.trim_end_matches(','));
    EnvFilter::try_new(full).map_err(|source| Error::InvalidLogFilter {
        var: LOG_ENV,
        value: directives.to_string(),
        source,
    })
}

/// Interpret the result of looking up [`LOG_ENV`].
pub fn env_value(lookup: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match lookup {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::NonUnicodeLogFilter { var: LOG_ENV }),
    }
}

/// Install the global subscriber. Call once, before the application runs.
pub fn init(verbose: bool) -> Result<()> {
    let env = env_value(std::env::var(LOG_ENV))?;
    let filter = filter_for(verbose, env.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| Error::LogInit(e.to_string()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
