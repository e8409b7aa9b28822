// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The quantumstream Authors

//! Application lifecycle: construct, run, map the outcome to an exit code.
//!
//! The application is reached only through the [`App`] trait, so `launch`
//! never depends on what a run actually does. Runs report failure by
//! returning an error; deciding to log it and exit belongs to `launch`.

use crate::cli::Cli;
use crate::error::ExitCode;

/// Log target of the failed-run event. Always enabled at error level.
pub const FAILURE_TARGET: &str = "quantumstream::exit";

/// A runnable application.
pub trait App {
    /// Construct the application from its verbosity setting.
    fn new(verbose: bool) -> Self
    where
        Self: Sized;

    /// Run the application to completion.
    fn run(&mut self) -> anyhow::Result<()>;
}

/// Application configuration, fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    verbose: bool,
}

impl AppConfig {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.verbose)
    }
}

/// The quantumstream application.
#[derive(Debug)]
pub struct QuantumStream {
    config: AppConfig,
}

impl QuantumStream {
    pub fn config(&self) -> AppConfig {
        self.config
    }
}

impl App for QuantumStream {
    fn new(verbose: bool) -> Self {
        Self { config: AppConfig::new(verbose) }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        tracing::debug!(verbose = self.config.verbose(), "starting quantumstream");
        tracing::debug!("quantumstream stopped");
        Ok(())
    }
}

/// Construct and run `A` once, logging a failed run.
pub fn launch<A: App>(config: AppConfig) -> ExitCode {
    let mut app = A::new(config.verbose());
    match app.run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::error!(target: FAILURE_TARGET, "{e:#}");
            ExitCode::Failure
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
