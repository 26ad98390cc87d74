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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, such as
//! users, artists, playlists, tracks and queue entries, representing the
//! schema of the persisted application state.
//!
//! All persisted types serialize with camelCase keys so that the stored blob
//! keeps the same shape across versions.

pub(crate) mod seed;

use serde::{Deserialize, Serialize};

/// Fallback display name when the email has no local part.
const DEFAULT_USER_NAME: &str = "Listener";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct User {
    pub(crate) signed_in: bool,
    pub(crate) email: String,
    pub(crate) name: String,
}

impl User {
    /// Creates a signed-in user, deriving the display name from the local
    /// part of the email address.
    pub(crate) fn signed_in(email: &str) -> Self {
        let local = email.split('@').next().unwrap_or_default();
        let name = if local.is_empty() {
            DEFAULT_USER_NAME.to_string()
        } else {
            local.to_string()
        };

        Self {
            signed_in: true,
            email: email.to_string(),
            name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Artist {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) followers: String,
    pub(crate) tagline: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Track {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) added_at: String,
}

/// Catalog entry used as a lookup source when adding tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SampleTrack {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) artist: &'static str,
    pub(crate) album: &'static str,
    pub(crate) duration: &'static str,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Playlist {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) public: bool,
    pub(crate) cover: String,
    pub(crate) tracks: Vec<Track>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct QueueEntry {
    pub(crate) id: String,
    pub(crate) track_id: String,
    pub(crate) playlist_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ListeningItem {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) cover: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Release {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
}

/// Root application state, persisted as a single blob.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppState {
    pub(crate) user: User,
    pub(crate) current_playlist_id: Option<String>,
    pub(crate) playlists: Vec<Playlist>,
    pub(crate) queue: Vec<QueueEntry>,
    pub(crate) artists: Vec<Artist>,
    pub(crate) followed_artists: Vec<String>,
    pub(crate) last_listening: Vec<ListeningItem>,
    pub(crate) releases: Vec<Release>,
}

impl Default for AppState {
    fn default() -> Self {
        seed::default_state()
    }
}

/// A persisted blob as it may have been written by any earlier version.
///
/// Every field is optional so that older shapes still parse; missing fields
/// are filled from the defaults by [`AppState::merge_default`].
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersistedState {
    user: Option<User>,
    current_playlist_id: Option<String>,
    playlists: Option<Vec<Playlist>>,
    queue: Option<Vec<QueueEntry>>,
    artists: Option<Vec<Artist>>,
    followed_artists: Option<Vec<String>>,
    last_listening: Option<Vec<ListeningItem>>,
    releases: Option<Vec<Release>>,
}

impl AppState {
    /// Merges a persisted blob over the default state.
    pub(crate) fn merge_default(persisted: PersistedState) -> Self {
        let defaults = Self::default();

        Self {
            user: persisted.user.unwrap_or(defaults.user),
            current_playlist_id: persisted.current_playlist_id,
            playlists: persisted.playlists.unwrap_or(defaults.playlists),
            queue: persisted.queue.unwrap_or(defaults.queue),
            artists: persisted.artists.unwrap_or(defaults.artists),
            followed_artists: persisted.followed_artists.unwrap_or(defaults.followed_artists),
            last_listening: persisted.last_listening.unwrap_or(defaults.last_listening),
            releases: persisted.releases.unwrap_or(defaults.releases),
        }
    }
}

/// Input for [`crate::store::Store::create_playlist`].
#[derive(Debug, Clone, Default)]
pub(crate) struct NewPlaylist {
    pub(crate) name: String,
    pub(crate) description: String,
}

/// Partial playlist update, only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlaylistMeta {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) cover: Option<String>,
    pub(crate) is_public: Option<bool>,
}

/// A track about to be added to a playlist. Empty fields take defaults.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrackDraft {
    pub(crate) id: Option<String>,
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) added_at: Option<String>,
}

impl From<&SampleTrack> for TrackDraft {
    fn from(sample: &SampleTrack) -> Self {
        Self {
            id: None,
            name: sample.name.to_string(),
            artist: sample.artist.to_string(),
            album: sample.album.to_string(),
            added_at: None,
        }
    }
}

/// A track resolved from a queue entry, either from a playlist or from the
/// sample catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedTrack<'a> {
    Playlist(&'a Track),
    Sample(&'a SampleTrack),
}

impl ResolvedTrack<'_> {
    pub(crate) fn name(&self) -> &str {
        match self {
            ResolvedTrack::Playlist(t) => &t.name,
            ResolvedTrack::Sample(t) => t.name,
        }
    }

    pub(crate) fn artist(&self) -> &str {
        match self {
            ResolvedTrack::Playlist(t) => &t.artist,
            ResolvedTrack::Sample(t) => t.artist,
        }
    }

    pub(crate) fn album(&self) -> &str {
        match self {
            ResolvedTrack::Playlist(t) => &t.album,
            ResolvedTrack::Sample(t) => t.album,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_derives_name_from_email() {
        let user = User::signed_in("mark@example.com");
        assert!(user.signed_in);
        assert_eq!(user.name, "mark");
        assert_eq!(user.email, "mark@example.com");
    }

    #[test]
    fn test_signed_in_falls_back_to_listener() {
        let user = User::signed_in("@example.com");
        assert_eq!(user.name, "Listener");
    }

    #[test]
    fn test_merge_missing_queue_yields_empty_queue() {
        let persisted: PersistedState =
            serde_json::from_str(r#"{"user":{"signedIn":true,"email":"a@b.c","name":"a"}}"#).unwrap();
        let state = AppState::merge_default(persisted);

        assert!(state.queue.is_empty());
        assert!(state.user.signed_in);
        assert_eq!(state.artists.len(), 8);
        assert_eq!(state.releases.len(), 4);
    }

    #[test]
    fn test_merge_null_fields_are_defaulted() {
        let persisted: PersistedState =
            serde_json::from_str(r#"{"queue":null,"artists":null,"currentPlaylistId":null}"#).unwrap();
        let state = AppState::merge_default(persisted);

        assert!(state.queue.is_empty());
        assert_eq!(state.artists.len(), 8);
        assert_eq!(state.current_playlist_id, None);
    }

    #[test]
    fn test_merge_keeps_present_fields() {
        let persisted: PersistedState = serde_json::from_str(
            r#"{"currentPlaylistId":"p-1","playlists":[{"id":"p-1","name":"Mine"}],"followedArtists":["a2"]}"#,
        )
        .unwrap();
        let state = AppState::merge_default(persisted);

        assert_eq!(state.current_playlist_id.as_deref(), Some("p-1"));
        assert_eq!(state.playlists[0].name, "Mine");
        assert!(state.playlists[0].tracks.is_empty());
        assert_eq!(state.followed_artists, vec!["a2".to_string()]);
    }

    #[test]
    fn test_state_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&AppState::default()).unwrap();
        assert!(json.contains("\"signedIn\":false"));
        assert!(json.contains("\"currentPlaylistId\":null"));
        assert!(json.contains("\"followedArtists\":[]"));
        assert!(json.contains("\"lastListening\""));
    }
}
