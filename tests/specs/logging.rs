//! Behavioral specs for log level configuration.

use crate::prelude::*;

/// > QUANTUMSTREAM_LOG overrides the default level
#[test]
fn log_env_enables_debug_without_flag() {
    quantumstream_cmd()
        .env(LOG_ENV, "debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("starting quantumstream"))
        .stderr(predicates::str::contains("verbose=false"));
}

/// > QUANTUMSTREAM_LOG overrides --verbose too
#[test]
fn log_env_silences_verbose_flag() {
    quantumstream_cmd()
        .env(LOG_ENV, "warn")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicates::str::contains("starting quantumstream").not());
}

/// > An empty QUANTUMSTREAM_LOG falls back to the flag
#[test]
fn empty_log_env_is_ignored() {
    quantumstream_cmd()
        .env(LOG_ENV, "")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicates::str::contains("starting quantumstream"));
}

/// > An invalid QUANTUMSTREAM_LOG is a configuration error (exit 2)
#[test]
fn invalid_log_env_exits_2() {
    quantumstream_cmd()
        .env(LOG_ENV, "quantumstream=loud")
        .assert()
        .code(2)
        .stderr(predicates::str::contains(LOG_ENV));
}

/// > A non-unicode QUANTUMSTREAM_LOG is a configuration error (exit 2)
#[cfg(unix)]
#[test]
fn non_unicode_log_env_exits_2() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    quantumstream_cmd()
        .env(LOG_ENV, OsStr::from_bytes(b"debug\xff"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("not valid unicode"));
}
