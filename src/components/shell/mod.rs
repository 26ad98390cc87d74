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

//! Home page surface.
//!
//! Shows the last listening and new release rows, the artist list with a
//! live search filter and follow buttons, the sign-in controls and the
//! player bar.

mod event;
mod render;

use crate::{components::Player, dom::Document, model::Artist};

pub(crate) const SHELL_TITLE: &str = "Darify";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellEvent {
    OpenLogin,
    CancelLogin,
    SubmitSignIn(String),
    SignOut,
    SearchArtists(String),
    ToggleFollow(String),
    TogglePlay,
    Seek(u8),
}

pub(crate) struct ShellView {
    doc: Document,
    /// The artist search query as typed, untrimmed.
    artist_query: String,
    login_open: bool,
    player: Player,
}

impl ShellView {
    pub(crate) fn new() -> Self {
        Self {
            doc: Document::new(SHELL_TITLE),
            artist_query: String::new(),
            login_open: false,
            player: Player::default(),
        }
    }
}

/// Artists whose name contains the trimmed `query`, ignoring case.
pub(crate) fn filter_artists<'a>(artists: &'a [Artist], query: &str) -> Vec<&'a Artist> {
    let query = query.trim().to_lowercase();
    artists
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&query))
        .collect()
}

/// Message for an empty artist list, naming the query when there is one.
pub(crate) fn empty_artists_message(query: &str) -> String {
    if query.trim().is_empty() {
        "No artists found. Try another name.".to_string()
    } else {
        format!("No artists match “{query}”.")
    }
}
