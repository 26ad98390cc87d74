// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! File-based logging.
//!
//! Standard output carries the command prompt and toasts, so tracing output
//! goes to a daily rotating file instead.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::{non_blocking::WorkerGuard, rolling::{RollingFileAppender, Rotation}};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "darify";

/// Initialize the logging system.
///
/// Logs are written to `<log_dir>/darify.YYYY-MM-DD` with daily rotation.
/// The log level can be controlled via the `RUST_LOG` environment variable,
/// defaulting to debug for this crate and warn for everything else.
///
/// The returned guard flushes buffered log lines when dropped, so it must be
/// kept alive for the lifetime of the application.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub(crate) fn init_logging(log_dir: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).with_context(|| format!("Failed to create log directory {log_dir}"))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("darify=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging initialized - logs written to {}/", log_dir);

    Ok(guard)
}
