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

//! Application configuration.
//!
//! This module manages the application configuration file. A missing or
//! unreadable file yields the defaults.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "darify";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// SQLite database holding the persisted application state.
    pub database_file: String,
    /// Directory the rendered pages are written to.
    pub export_dir: String,
    /// Address of the playlist page, used to build share links.
    pub share_base_url: String,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: "darify.db".to_string(),
            export_dir: "site".to_string(),
            share_base_url: "http://localhost:8000/playlist.html".to_string(),
            log_dir: ".logs".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
