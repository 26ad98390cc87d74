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

//! Application state store.
//!
//! The [`Store`] is the single source of truth for all persisted data. It
//! owns the in-memory [`AppState`] together with a [`Storage`] backend, and
//! every mutating operation writes the whole state back to storage before
//! returning.
//!
//! # Failure semantics
//!
//! * Lookups return [`Option`], callers decide how to report a miss.
//! * Mutations on an unknown id are silent no-ops and do not persist.
//! * Storage failures while loading fall back to the default state; failures
//!   while persisting are returned to the caller as a [`StoreError`].

pub(crate) mod storage;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{
    AppState, Artist, NewPlaylist, PersistedState, Playlist, PlaylistMeta, QueueEntry,
    ResolvedTrack, SampleTrack, Track, TrackDraft, User, seed::SAMPLE_TRACKS,
};

pub(crate) use storage::{SqliteStorage, Storage};

/// Key under which the serialized state is persisted.
pub(crate) const STORAGE_KEY: &str = "darify-state-v2";

const DEFAULT_PLAYLIST_NAME: &str = "New playlist";
const DEFAULT_PLAYLIST_DESCRIPTION: &str = "Just created";
const DEFAULT_TRACK_ARTIST: &str = "Unknown";
const DEFAULT_TRACK_ALBUM: &str = "Single";

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub(crate) struct Store<S: Storage> {
    state: AppState,
    storage: S,
}

impl<S: Storage> Store<S> {
    /// Loads the persisted state from `storage`, merging it over the defaults.
    ///
    /// A missing blob, a storage read failure or a blob that fails to parse
    /// all result in the default state. None of these are fatal.
    pub(crate) fn load(storage: S) -> Self {
        let state = read_state(&storage);
        Self { state, storage }
    }

    /// Loads the state like [`Store::load`] and writes it straight back, so
    /// a blob from an older version is stored in the current shape.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails.
    pub(crate) fn open(storage: S) -> Result<Self, StoreError> {
        let mut store = Self::load(storage);
        store.persist()?;
        Ok(store)
    }

    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    /// Serializes the full state and writes it to storage.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if serialization or the storage write fails.
    pub(crate) fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.state)?;
        self.storage.set_item(STORAGE_KEY, &blob)?;
        Ok(())
    }

    pub(crate) fn user(&self) -> &User {
        &self.state.user
    }

    pub(crate) fn is_signed_in(&self) -> bool {
        self.state.user.signed_in
    }

    /// Signs in with `email`. No credential check is made.
    pub(crate) fn sign_in(&mut self, email: &str) -> Result<&User, StoreError> {
        self.state.user = User::signed_in(email);
        debug!(name = %self.state.user.name, "Signed in");
        self.persist()?;
        Ok(&self.state.user)
    }

    pub(crate) fn sign_out(&mut self) -> Result<(), StoreError> {
        self.state.user = User::default();
        debug!("Signed out");
        self.persist()
    }

    /// Flips membership of `artist_id` in the followed artists, returning
    /// whether the artist is followed afterwards.
    pub(crate) fn toggle_follow(&mut self, artist_id: &str) -> Result<bool, StoreError> {
        let following = match self.state.followed_artists.iter().position(|id| id == artist_id) {
            Some(idx) => {
                self.state.followed_artists.remove(idx);
                false
            }
            None => {
                self.state.followed_artists.push(artist_id.to_string());
                true
            }
        };

        debug!(artist_id, following, "Toggled follow");
        self.persist()?;
        Ok(following)
    }

    pub(crate) fn is_following(&self, artist_id: &str) -> bool {
        self.state.followed_artists.iter().any(|id| id == artist_id)
    }

    pub(crate) fn artist(&self, id: &str) -> Option<&Artist> {
        self.state.artists.iter().find(|a| a.id == id)
    }

    pub(crate) fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.state.playlists.iter().find(|p| p.id == id)
    }

    fn playlist_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.state.playlists.iter_mut().find(|p| p.id == id)
    }

    /// The playlist referenced by the current playlist pointer, if it still
    /// exists.
    pub(crate) fn current_playlist(&self) -> Option<&Playlist> {
        self.state
            .current_playlist_id
            .as_deref()
            .and_then(|id| self.playlist(id))
    }

    pub(crate) fn set_current_playlist(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        self.state.current_playlist_id = id.map(str::to_string);
        self.persist()
    }

    /// Creates a playlist at the front of the library and makes it current.
    pub(crate) fn create_playlist(&mut self, new: NewPlaylist) -> Result<Playlist, StoreError> {
        let id = generate_id("p", |id| self.playlist(id).is_some());

        let playlist = Playlist {
            id: id.clone(),
            name: non_empty_or(new.name, DEFAULT_PLAYLIST_NAME),
            description: non_empty_or(new.description, DEFAULT_PLAYLIST_DESCRIPTION),
            public: true,
            cover: String::new(),
            tracks: vec![],
        };

        self.state.playlists.insert(0, playlist.clone());
        self.state.current_playlist_id = Some(id);

        debug!(id = %playlist.id, name = %playlist.name, "Created playlist");
        self.persist()?;
        Ok(playlist)
    }

    /// Applies the `Some` fields of `meta` to the playlist, returning the
    /// updated playlist or `None` if no playlist has that id.
    pub(crate) fn update_playlist_meta(
        &mut self,
        id: &str,
        meta: PlaylistMeta,
    ) -> Result<Option<Playlist>, StoreError> {
        let Some(playlist) = self.playlist_mut(id) else {
            return Ok(None);
        };

        if let Some(name) = meta.name {
            playlist.name = name;
        }
        if let Some(description) = meta.description {
            playlist.description = description;
        }
        if let Some(cover) = meta.cover {
            playlist.cover = cover;
        }
        if let Some(is_public) = meta.is_public {
            playlist.public = is_public;
        }

        let updated = playlist.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Normalizes `draft` and appends it to the playlist's tracks.
    pub(crate) fn add_track_to_playlist(
        &mut self,
        playlist_id: &str,
        draft: TrackDraft,
    ) -> Result<Option<Track>, StoreError> {
        let Some(playlist) = self.playlist_mut(playlist_id) else {
            return Ok(None);
        };

        let taken = |id: &str| playlist.tracks.iter().any(|t| t.id == id);
        let id = match draft.id {
            Some(id) if !id.is_empty() && !taken(id.as_str()) => id,
            _ => generate_id("t", taken),
        };

        let track = Track {
            id,
            name: draft.name,
            artist: non_empty_or(draft.artist, DEFAULT_TRACK_ARTIST),
            album: non_empty_or(draft.album, DEFAULT_TRACK_ALBUM),
            added_at: draft
                .added_at
                .filter(|d| !d.is_empty())
                .unwrap_or_else(today),
        };

        playlist.tracks.push(track.clone());

        debug!(playlist_id, track_id = %track.id, "Added track to playlist");
        self.persist()?;
        Ok(Some(track))
    }

    pub(crate) fn remove_track(&mut self, playlist_id: &str, track_id: &str) -> Result<(), StoreError> {
        let Some(playlist) = self.playlist_mut(playlist_id) else {
            return Ok(());
        };

        playlist.tracks.retain(|t| t.id != track_id);
        self.persist()
    }

    /// Appends a queue entry, returning the new entry id.
    pub(crate) fn add_to_queue(&mut self, track_id: &str, playlist_id: &str) -> Result<String, StoreError> {
        let id = generate_id("q", |id| self.state.queue.iter().any(|q| q.id == id));

        self.state.queue.push(QueueEntry {
            id: id.clone(),
            track_id: track_id.to_string(),
            playlist_id: playlist_id.to_string(),
        });

        self.persist()?;
        Ok(id)
    }

    pub(crate) fn remove_from_queue(&mut self, queue_id: &str) -> Result<(), StoreError> {
        self.state.queue.retain(|q| q.id != queue_id);
        self.persist()
    }

    /// Moves the queue entry at `from` to `to`. Out of range indices leave
    /// the queue untouched.
    pub(crate) fn reorder_queue(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.state.queue.len();
        if from >= len || to >= len {
            debug!(from, to, len, "Ignoring out of range queue reorder");
            return Ok(());
        }

        let entry = self.state.queue.remove(from);
        self.state.queue.insert(to, entry);
        self.persist()
    }

    /// Clears persisted storage and returns to the default state.
    pub(crate) fn reset_demo(&mut self) -> Result<(), StoreError> {
        self.storage.remove_item(STORAGE_KEY)?;
        self.state = read_state(&self.storage);
        debug!("Reset demo state");
        Ok(())
    }

    /// Resolves a queue entry's soft track reference.
    ///
    /// Playlists are scanned first, then the sample catalog. Removing a track
    /// from its playlist does not remove queue entries that reference it, so
    /// `None` is an expected outcome.
    pub(crate) fn resolve_track(&self, track_id: &str) -> Option<ResolvedTrack<'_>> {
        self.state
            .playlists
            .iter()
            .flat_map(|p| p.tracks.iter())
            .find(|t| t.id == track_id)
            .map(ResolvedTrack::Playlist)
            .or_else(|| {
                SAMPLE_TRACKS
                    .iter()
                    .find(|t| t.id == track_id)
                    .map(ResolvedTrack::Sample)
            })
    }
}

/// Finds a catalog track whose name, or failing that whose artist, equals
/// `query` ignoring case.
pub(crate) fn find_sample_track(query: &str) -> Option<&'static SampleTrack> {
    let query = query.to_lowercase();

    SAMPLE_TRACKS
        .iter()
        .find(|t| t.name.to_lowercase() == query)
        .or_else(|| SAMPLE_TRACKS.iter().find(|t| t.artist.to_lowercase() == query))
}

/// Catalog tracks whose name or artist contains `query` ignoring case, at
/// most `limit` of them.
pub(crate) fn suggest_sample_tracks(query: &str, limit: usize) -> Vec<&'static SampleTrack> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vec![];
    }

    SAMPLE_TRACKS
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&query) || t.artist.to_lowercase().contains(&query))
        .take(limit)
        .collect()
}

fn read_state<S: Storage>(storage: &S) -> AppState {
    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppState::default(),
        Err(e) => {
            warn!(error = %e, "Failed to read persisted state, using defaults");
            return AppState::default();
        }
    };

    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(persisted) => AppState::merge_default(persisted),
        Err(e) => {
            warn!(error = %e, "Failed to parse persisted state, using defaults");
            AppState::default()
        }
    }
}

fn generate_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = format!("{prefix}-{:016x}", rand::random::<u64>());
        if !taken(&id) {
            return id;
        }
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() { default.to_string() } else { value }
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
