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

//! Persistent key/value storage backends for the state store.
//!
//! [`Storage`] mirrors the small surface the store needs from a browser-style
//! key/value store: get, set and remove a text value under a key.

use anyhow::Result;
use rusqlite::Connection;

use crate::{db, store::StoreError};

pub(crate) trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Storage backed by the application's SQLite database.
pub(crate) struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialised, see
    /// [`db::init_db`].
    pub(crate) fn open(path: &str) -> Result<Self> {
        let conn = db::init_db(path)?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(db::fetch_value(&self.conn, key)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(db::store_value(&self.conn, key, value)?)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        Ok(db::remove_value(&self.conn, key)?)
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;
