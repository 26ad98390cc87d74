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

//! Data access layer.
//!
//! This module handles all interactions with the SQLite database that backs
//! persistent application storage. The database holds a single key/value
//! table, so callers store whole serialized blobs under fixed keys.
//!
//! # Tables
//!
//! * `storage` - Text values indexed by a unique text key.
//!
//! # Performance
//!
//! Most functions in this module use [`rusqlite::Connection::prepare_cached`]
//! to reduce SQL parsing overhead.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

/// Opens a connection to the SQLite database and configures performance settings.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging so a crash mid-write never
///   leaves a torn blob behind.
/// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
/// * **Schema**: Executes [`create_schema`] to ensure the table exists.
///
/// # Arguments
///
/// * `path` - The file system path to the SQLite database file.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * The initial PRAGMA configurations fail.
/// * The schema initialization fails.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open database {path}"))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

    conn.set_prepared_statement_cache_capacity(16);

    create_schema(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// # Errors
///
/// Returns an error if there are permission issues with the database file,
/// or if the SQL syntax is invalid.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS storage (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )
    .context("Failed to create schema")
}

/// Fetches the value stored under `key`, if any.
///
/// # Errors
///
/// Returns a [`rusqlite::Error`] if the query fails.
pub(crate) fn fetch_value(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM storage WHERE key = ?")?;
    stmt.query_row([key], |row| row.get(0)).optional()
}

/// Stores `value` under `key`, replacing any previous value.
///
/// # Errors
///
/// Returns a [`rusqlite::Error`] if the write fails, for example when the
/// disk is full or the database file is read-only.
pub(crate) fn store_value(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    let sql = "
        INSERT INTO storage (key, value)
        VALUES (?1, ?2)
        ON CONFLICT (key)
        DO UPDATE SET value = ?2";

    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params![key, value])?;

    Ok(())
}

pub(crate) fn remove_value(conn: &Connection, key: &str) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare_cached("DELETE FROM storage WHERE key = ?")?;
    stmt.execute([key])?;

    Ok(())
}
