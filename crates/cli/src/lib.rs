// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The quantumstream Authors

//! quantumstream: command-line entry point and application lifecycle.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
