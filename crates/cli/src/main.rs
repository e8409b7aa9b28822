// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The quantumstream Authors

use quantumstream::app::{self, AppConfig, QuantumStream};
use quantumstream::cli::Cli;
use quantumstream::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse_env();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("quantumstream: {e}");
        return e.exit_code().into();
    }

    app::launch::<QuantumStream>(AppConfig::from(&cli)).into()
}
