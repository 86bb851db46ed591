// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `tracing` subscriber setup for the binary.
//!
//! The library only emits events; installing a subscriber is left to the entry point.
//! `RUST_LOG` overrides the default `warn` filter.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Names a file that receives logs while the TUI owns the terminal.
pub const LOG_FILE_ENV: &str = "TETHER_LOG";

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to stderr. A second call is a no-op.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}

/// Appends logs to `path` without ANSI colors. A second call is a no-op.
pub fn init_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
