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

//! Playlist manager surface.
//!
//! The manager shows the library, the open playlist with its tracks, cover
//! and inline editor, track search with catalog suggestions, similar
//! playlists and the queue panel.
//!
//! # Selection states
//!
//! The view is always derived from two values: the store's current playlist
//! pointer and the local `is_editing` flag.
//!
//! * **No playlist selected**: no pointer, or the pointer is dangling.
//! * **Playlist open**: selected from the library or the similar row, or
//!   just created.
//! * **Playlist open, editing**: after the edit action. Saving or cancelling
//!   returns to the open state.
//!
//! Signing out always returns to the no-playlist state.

mod event;
mod render;

use std::path::PathBuf;

use crate::{components::Player, dom::Document};

pub(crate) const MANAGER_TITLE: &str = "Darify playlists";

/// Maximum number of catalog suggestions shown under the track search.
pub(crate) const MAX_SUGGESTIONS: usize = 5;

pub(crate) const MSG_NO_PLAYLIST: &str = "Create a playlist first";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ManagerEvent {
    OpenLogin,
    CancelLogin,
    SubmitSignIn(String),
    SignOut,

    OpenCreate,
    CancelCreate,
    SubmitCreate { name: String, description: String },

    OpenFromLibrary(String),
    OpenFromSimilar(String),

    TrackSearchInput(String),
    PickSuggestion(String),
    AddTrack,
    RemoveTrack(String),

    RemoveFromQueue(String),
    /// Result of a drag gesture on the queue list.
    DropQueueItem { from: usize, to: usize },
    ToggleQueue,
    CloseQueue,
    ToggleHelper,

    TogglePrivacy,
    CopyLink,

    OpenEdit,
    SaveEdit { name: String, description: String },
    CancelEdit,

    RequestCover(PathBuf),
    /// Completion of a cover read started by [`ManagerEvent::RequestCover`].
    CoverLoaded { playlist_id: String, data_url: String },
    RemoveCover,

    TogglePlay,
    Seek(u8),

    ResetDemo,
}

pub(crate) struct ManagerView {
    doc: Document,
    share_base_url: String,

    is_editing: bool,
    edit_name: String,
    edit_description: String,

    track_query: String,

    login_open: bool,
    create_open: bool,
    queue_open: bool,
    helper_open: bool,

    player: Player,
}

impl ManagerView {
    pub(crate) fn new(share_base_url: &str) -> Self {
        Self {
            doc: Document::new(MANAGER_TITLE),
            share_base_url: share_base_url.to_string(),
            is_editing: false,
            edit_name: String::new(),
            edit_description: String::new(),
            track_query: String::new(),
            login_open: false,
            create_open: false,
            queue_open: false,
            helper_open: false,
            player: Player::default(),
        }
    }

    /// Link to a playlist on the manager page.
    pub(crate) fn share_link(&self, playlist_id: &str) -> String {
        format!("{}#{}", self.share_base_url, playlist_id)
    }
}
