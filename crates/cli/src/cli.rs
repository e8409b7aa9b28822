// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The quantumstream Authors

//! CLI argument parsing with clap derive.
//!
//! The flag syntax follows Go's `flag` package: booleans take an optional
//! `=value`, long flags may be spelled with a single dash, and flag parsing
//! stops at the first non-flag argument. Everything from there on is
//! collected but not interpreted.

use std::ffi::{OsStr, OsString};

use clap::{ArgAction, Parser};

/// Long flags that may also be spelled with a single leading dash.
const SINGLE_DASH_LONG: &[&str] = &["verbose", "help"];

/// Streaming application entry point
#[derive(Debug, Parser)]
#[command(name = "quantumstream")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool_flag,
        action = ArgAction::Set,
    )]
    pub verbose: bool,

    /// Arguments after the last flag; ignored
    #[arg(value_name = "ARGS", num_args = 1.., trailing_var_arg = true, hide = true)]
    pub rest: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments, exiting with usage on error.
    pub fn parse_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse an explicit argument vector (including the program name).
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Parse a boolean flag value.
///
/// Accepts the same literals as Go's `strconv.ParseBool`.
pub fn parse_bool_flag(s: &str) -> Result<bool, String> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value {s:?} (expected true or false)")),
    }
}

/// Rewrite single-dash long flags (`-verbose`, `-verbose=false`, `-help`)
/// into their double-dash form. Rewriting stops at `--` or at the first
/// non-flag argument.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut in_flags = true;

    for arg in args {
        if in_flags {
            if arg == "--" || !is_flag(&arg) {
                in_flags = false;
            } else if let Some(flag) = single_dash_long(&arg) {
                normalized.push(OsString::from(format!("-{flag}")));
                continue;
            }
        }
        normalized.push(arg);
    }
    normalized
}

/// A flag starts with `-` and is more than a lone dash.
fn is_flag(arg: &OsStr) -> bool {
    arg.len() > 1 && arg.as_encoded_bytes().starts_with(b"-")
}

/// Returns the argument text if it is a known long flag with one dash.
fn single_dash_long(arg: &OsStr) -> Option<&str> {
    let text = arg.to_str()?;
    let rest = text.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG.contains(&name).then_some(text)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
