// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The quantumstream Authors

//! Error types and process exit codes.

use tracing_subscriber::filter::ParseError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The application ran to completion.
    Success = 0,
    /// The application's run reported an error.
    Failure = 1,
    /// Invalid arguments or logging configuration.
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors raised by the entry point before the application runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidLogFilter {
        var: &'static str,
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("invalid {var} value: not valid unicode")]
    NonUnicodeLogFilter { var: &'static str },

    #[error("failed to install log subscriber: {0}")]
    LogInit(String),
}

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::InvalidLogFilter { .. } | Error::NonUnicodeLogFilter { .. } | Error::LogInit(_) => {
                ExitCode::ConfigError
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
