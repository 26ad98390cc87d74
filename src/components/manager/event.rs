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

//! Event handling for the playlist manager surface.
//!
//! Every gated action checks the sign-in state first; when signed out the
//! login modal opens and the action is dropped. Actions that need an open
//! playlist report a missing one as a toast.

use std::sync::mpsc::Sender;

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    components::{
        Surface, ensure_signed_in, hide_toast,
        manager::{MSG_NO_PLAYLIST, ManagerEvent, ManagerView},
        show_toast,
    },
    dom::Document,
    model::{NewPlaylist, Playlist, PlaylistMeta, TrackDraft, seed::SAMPLE_TRACKS},
    store::{Storage, Store, find_sample_track},
    tasks::AppTask,
};

impl Surface for ManagerView {
    type Event = ManagerEvent;

    fn process_event<S: Storage>(
        &mut self,
        store: &mut Store<S>,
        event: ManagerEvent,
        task_tx: &Sender<AppTask>,
    ) -> Result<()> {
        debug!(?event, "Manager event");
        hide_toast(&mut self.doc);

        match event {
            ManagerEvent::OpenLogin => self.login_open = true,
            ManagerEvent::CancelLogin => self.login_open = false,
            ManagerEvent::SubmitSignIn(email) => self.sign_in(store, &email)?,
            ManagerEvent::SignOut => self.sign_out(store)?,

            ManagerEvent::OpenCreate => {
                if self.gate(store) {
                    self.create_open = true;
                }
            }
            ManagerEvent::CancelCreate => self.create_open = false,
            ManagerEvent::SubmitCreate { name, description } => {
                self.create_playlist(store, name, description)?
            }

            ManagerEvent::OpenFromLibrary(id) => self.open_playlist(store, &id, "Playlist opened")?,
            ManagerEvent::OpenFromSimilar(id) => self.open_playlist(store, &id, "Opened from Similar")?,

            ManagerEvent::TrackSearchInput(query) => self.track_query = query,
            ManagerEvent::PickSuggestion(track_id) => {
                if let Some(sample) = SAMPLE_TRACKS.iter().find(|t| t.id == track_id) {
                    self.track_query = sample.name.to_string();
                    self.add_track(store)?;
                }
            }
            ManagerEvent::AddTrack => self.add_track(store)?,
            ManagerEvent::RemoveTrack(track_id) => self.remove_track(store, &track_id)?,

            ManagerEvent::RemoveFromQueue(queue_id) => {
                if self.gate(store) {
                    store.remove_from_queue(&queue_id)?;
                    show_toast(&mut self.doc, "Track removed from queue");
                }
            }
            ManagerEvent::DropQueueItem { from, to } => {
                if self.gate(store) {
                    store.reorder_queue(from, to)?;
                    show_toast(&mut self.doc, "Queue updated");
                }
            }
            ManagerEvent::ToggleQueue => self.queue_open = !self.queue_open,
            ManagerEvent::CloseQueue => self.queue_open = false,
            ManagerEvent::ToggleHelper => self.helper_open = !self.helper_open,

            ManagerEvent::TogglePrivacy => self.toggle_privacy(store)?,
            ManagerEvent::CopyLink => {
                if let Some(playlist) = self.require_playlist(store) {
                    let url = self.share_link(&playlist.id);
                    show_toast(&mut self.doc, format!("Copy manually: {url}"));
                }
            }

            ManagerEvent::OpenEdit => {
                if self.gate(store) {
                    if let Some(playlist) = self.require_playlist(store) {
                        self.edit_name = playlist.name;
                        self.edit_description = playlist.description;
                        self.is_editing = true;
                    }
                }
            }
            ManagerEvent::SaveEdit { name, description } => self.save_edit(store, name, description)?,
            ManagerEvent::CancelEdit => {
                self.is_editing = false;
                if let Some(playlist) = store.current_playlist() {
                    self.edit_name = playlist.name.clone();
                    self.edit_description = playlist.description.clone();
                }
            }

            ManagerEvent::RequestCover(path) => {
                if self.gate(store) {
                    if let Some(playlist) = self.require_editing(store) {
                        task_tx.send(AppTask::LoadCover {
                            playlist_id: playlist.id,
                            path,
                        })?;
                    }
                }
            }
            ManagerEvent::CoverLoaded { playlist_id, data_url } => {
                let meta = PlaylistMeta {
                    cover: Some(data_url),
                    ..Default::default()
                };
                if store.update_playlist_meta(&playlist_id, meta)?.is_some() {
                    show_toast(&mut self.doc, "Cover updated");
                }
            }
            ManagerEvent::RemoveCover => {
                if self.gate(store) {
                    if let Some(playlist) = self.require_editing(store) {
                        let meta = PlaylistMeta {
                            cover: Some(String::new()),
                            ..Default::default()
                        };
                        store.update_playlist_meta(&playlist.id, meta)?;
                        show_toast(&mut self.doc, "Cover removed");
                    }
                }
            }

            ManagerEvent::TogglePlay => self.player.toggle(),
            ManagerEvent::Seek(percent) => {
                let percent = self.player.seek(percent);
                show_toast(&mut self.doc, format!("Seeked to {percent}%"));
            }

            ManagerEvent::ResetDemo => {
                store.reset_demo()?;
                info!("Demo reset");
                let share_base_url = self.share_base_url.clone();
                *self = ManagerView::new(&share_base_url);
            }
        }

        Ok(())
    }

    fn render<S: Storage>(&mut self, store: &Store<S>) {
        self.render_page(store);
    }

    fn document(&self) -> &Document {
        &self.doc
    }
}

impl ManagerView {
    fn gate<S: Storage>(&mut self, store: &Store<S>) -> bool {
        ensure_signed_in(store, &mut self.doc, &mut self.login_open)
    }

    /// The open playlist, or `None` after telling the user to create one.
    fn require_playlist<S: Storage>(&mut self, store: &Store<S>) -> Option<Playlist> {
        let playlist = store.current_playlist().cloned();
        if playlist.is_none() {
            show_toast(&mut self.doc, MSG_NO_PLAYLIST);
        }
        playlist
    }

    /// The open playlist while the inline editor is showing. The cover and
    /// save controls only exist in that state, so anything else is ignored.
    fn require_editing<S: Storage>(&mut self, store: &Store<S>) -> Option<Playlist> {
        let playlist = self.require_playlist(store)?;
        if !self.is_editing {
            debug!(id = %playlist.id, "Ignoring edit action outside edit mode");
            return None;
        }
        Some(playlist)
    }

    fn sign_in<S: Storage>(&mut self, store: &mut Store<S>, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            show_toast(&mut self.doc, "Enter an email");
            return Ok(());
        }

        store.sign_in(email)?;
        self.login_open = false;
        show_toast(&mut self.doc, "Signed in");
        Ok(())
    }

    fn sign_out<S: Storage>(&mut self, store: &mut Store<S>) -> Result<()> {
        store.sign_out()?;
        store.set_current_playlist(None)?;
        self.is_editing = false;
        self.queue_open = false;
        show_toast(&mut self.doc, "Signed out");
        Ok(())
    }

    fn create_playlist<S: Storage>(
        &mut self,
        store: &mut Store<S>,
        name: String,
        description: String,
    ) -> Result<()> {
        if !self.gate(store) {
            return Ok(());
        }

        store.create_playlist(NewPlaylist { name, description })?;
        self.create_open = false;
        self.is_editing = false;
        show_toast(&mut self.doc, "Playlist created");
        Ok(())
    }

    fn open_playlist<S: Storage>(&mut self, store: &mut Store<S>, id: &str, message: &str) -> Result<()> {
        if store.playlist(id).is_none() {
            debug!(id, "Ignoring open of unknown playlist");
            return Ok(());
        }

        store.set_current_playlist(Some(id))?;
        self.is_editing = false;
        show_toast(&mut self.doc, message);
        Ok(())
    }

    /// Adds the track named in the search input to the open playlist and to
    /// the queue.
    ///
    /// The title is matched exactly (ignoring case) against catalog track
    /// names, then artist names. Anything else is added verbatim with
    /// default artist and album.
    fn add_track<S: Storage>(&mut self, store: &mut Store<S>) -> Result<()> {
        if !self.gate(store) {
            return Ok(());
        }
        let Some(playlist) = self.require_playlist(store) else {
            return Ok(());
        };

        let title = self.track_query.trim();
        if title.is_empty() {
            show_toast(&mut self.doc, "Enter a track name");
            return Ok(());
        }

        let draft = match find_sample_track(title) {
            Some(sample) => TrackDraft::from(sample),
            None => TrackDraft {
                name: title.to_string(),
                ..Default::default()
            },
        };

        if let Some(track) = store.add_track_to_playlist(&playlist.id, draft)? {
            store.add_to_queue(&track.id, &playlist.id)?;
            info!(playlist_id = %playlist.id, track = %track.name, "Track added");
        }

        self.track_query.clear();
        show_toast(&mut self.doc, "Track added to playlist and queue");
        Ok(())
    }

    fn remove_track<S: Storage>(&mut self, store: &mut Store<S>, track_id: &str) -> Result<()> {
        if !self.gate(store) {
            return Ok(());
        }
        let Some(playlist) = store.current_playlist().map(|p| p.id.clone()) else {
            return Ok(());
        };

        store.remove_track(&playlist, track_id)?;
        show_toast(&mut self.doc, "Track removed");
        Ok(())
    }

    fn toggle_privacy<S: Storage>(&mut self, store: &mut Store<S>) -> Result<()> {
        if !self.gate(store) {
            return Ok(());
        }
        let Some(playlist) = self.require_playlist(store) else {
            return Ok(());
        };

        let meta = PlaylistMeta {
            is_public: Some(!playlist.public),
            ..Default::default()
        };
        if let Some(updated) = store.update_playlist_meta(&playlist.id, meta)? {
            let message = if updated.public { "Playlist is public" } else { "Playlist is private" };
            show_toast(&mut self.doc, message);
        }
        Ok(())
    }

    fn save_edit<S: Storage>(&mut self, store: &mut Store<S>, name: String, description: String) -> Result<()> {
        if !self.gate(store) {
            return Ok(());
        }
        let Some(id) = self.require_editing(store).map(|p| p.id) else {
            return Ok(());
        };

        let meta = PlaylistMeta {
            name: Some(name),
            description: Some(description),
            ..Default::default()
        };
        store.update_playlist_meta(&id, meta)?;
        self.is_editing = false;
        show_toast(&mut self.doc, "Updated playlist info");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::mpsc::Receiver};

    use super::*;
    use crate::{
        components::{
            MSG_SIGN_IN_REQUIRED, TOAST,
            tests::{signed_in_store, task_channel},
        },
        store::{storage::MemoryStorage, tests::new_store},
    };

    const BASE_URL: &str = "http://localhost/playlist.html";

    struct Harness {
        view: ManagerView,
        store: Store<MemoryStorage>,
        task_tx: Sender<AppTask>,
        task_rx: Receiver<AppTask>,
    }

    impl Harness {
        fn new(store: Store<MemoryStorage>) -> Self {
            let (task_tx, task_rx) = task_channel();
            let mut view = ManagerView::new(BASE_URL);
            view.render(&store);
            Self { view, store, task_tx, task_rx }
        }

        fn signed_in() -> Self {
            Self::new(signed_in_store())
        }

        fn send(&mut self, event: ManagerEvent) {
            self.view.process_event(&mut self.store, event, &self.task_tx).unwrap();
            self.view.render(&self.store);
        }

        fn create(&mut self, name: &str) -> String {
            self.send(ManagerEvent::SubmitCreate {
                name: name.into(),
                description: String::new(),
            });
            self.store.current_playlist().unwrap().id.clone()
        }

        fn add(&mut self, title: &str) {
            self.send(ManagerEvent::TrackSearchInput(title.into()));
            self.send(ManagerEvent::AddTrack);
        }

        fn doc(&self) -> &Document {
            self.view.document()
        }

        fn toast(&self) -> &str {
            self.doc().text(TOAST)
        }
    }

    #[test]
    fn test_road_trip_end_to_end() {
        let mut h = Harness::signed_in();
        let id = h.create("Road Trip");
        h.add("SICKO MODE");

        let playlist = h.store.playlist(&id).unwrap();
        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.tracks.len(), 1);
        let track = &playlist.tracks[0];
        assert_eq!(track.name, "SICKO MODE");
        assert_eq!(track.artist, "Travis Scott");
        assert_eq!(track.album, "Astroworld");

        let queue = &h.store.state().queue;
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].track_id, track.id);
        assert_eq!(queue[0].playlist_id, id);

        assert_eq!(h.toast(), "Track added to playlist and queue");
        assert_eq!(h.doc().text("track-count"), "1 track(s)");
        assert!(h.doc().html("track-list").contains("Astroworld"));
        assert!(h.doc().html("queue-list").contains("Travis Scott"));
        assert_eq!(h.doc().value("track-search"), "");
    }

    #[test]
    fn test_sign_out_clears_selection() {
        let mut h = Harness::signed_in();
        h.create("Road Trip");
        h.send(ManagerEvent::ToggleQueue);
        assert!(!h.doc().is_hidden("queue-panel"));

        h.send(ManagerEvent::SignOut);

        assert_eq!(h.store.state().current_playlist_id, None);
        assert_eq!(h.doc().text("playlist-name"), "No playlist selected");
        assert_eq!(h.doc().text("playlist-empty"), "Pick a playlist from My library to view it.");
        assert!(h.doc().is_hidden("queue-panel"));
        assert!(h.doc().is_hidden("playlist-main"));
        assert!(!h.doc().is_hidden("playlist-guest"));
        assert!(h.doc().is_disabled("add-from-search"));
    }

    #[test]
    fn test_empty_selection_without_playlists() {
        let h = Harness::signed_in();

        assert_eq!(h.doc().text("playlist-name"), "No playlist selected");
        assert_eq!(h.doc().text("track-empty"), "No playlists yet — press “＋” to create one.");
        assert!(h.doc().is_hidden("playlist-template"));
        assert!(h.doc().is_hidden("similar-block"));
        assert!(h.doc().is_disabled("track-search"));
    }

    #[test]
    fn test_dangling_current_pointer_renders_empty_selection() {
        let blob = r#"{"user":{"signedIn":true,"email":"a@b.c","name":"a"},"currentPlaylistId":"p-gone"}"#;
        let store = Store::load(MemoryStorage::with_item(crate::store::STORAGE_KEY, blob));
        let h = Harness::new(store);

        assert_eq!(h.doc().text("playlist-name"), "No playlist selected");
    }

    #[test]
    fn test_gated_actions_open_login() {
        let mut h = Harness::new(new_store());
        assert!(h.doc().is_hidden("login-modal"));

        h.send(ManagerEvent::OpenCreate);

        assert!(!h.doc().is_hidden("login-modal"));
        assert!(h.doc().is_hidden("create-modal"));
        assert_eq!(h.toast(), MSG_SIGN_IN_REQUIRED);

        h.send(ManagerEvent::SubmitCreate {
            name: "Sneaky".into(),
            description: String::new(),
        });
        assert!(h.store.state().playlists.is_empty());
    }

    #[test]
    fn test_add_track_without_playlist() {
        let mut h = Harness::signed_in();
        h.add("Nights");

        assert_eq!(h.toast(), MSG_NO_PLAYLIST);
        assert!(h.store.state().queue.is_empty());
    }

    #[test]
    fn test_add_track_requires_title() {
        let mut h = Harness::signed_in();
        h.create("Mix");
        h.add("   ");

        assert_eq!(h.toast(), "Enter a track name");
        assert!(h.store.current_playlist().unwrap().tracks.is_empty());
    }

    #[test]
    fn test_add_track_matches_artist_and_accepts_unknown_titles() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        h.add("dua lipa");
        h.add("My Own Song");

        let tracks = &h.store.playlist(&id).unwrap().tracks;
        assert_eq!(tracks[0].name, "Levitating");
        assert_eq!(tracks[1].name, "My Own Song");
        assert_eq!(tracks[1].artist, "Unknown");
        assert_eq!(tracks[1].album, "Single");
        assert_eq!(h.store.state().queue.len(), 2);
    }

    #[test]
    fn test_adding_same_catalog_track_twice_keeps_ids_unique() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        h.add("Nights");
        h.add("Nights");

        let tracks = &h.store.playlist(&id).unwrap().tracks;
        assert_eq!(tracks.len(), 2);
        assert_ne!(tracks[0].id, tracks[1].id);
    }

    #[test]
    fn test_suggestions_and_pick() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        h.send(ManagerEvent::TrackSearchInput("weeknd".into()));

        let suggestions = h.doc().html("track-suggestions");
        assert_eq!(suggestions.matches("data-suggest").count(), 2);
        assert!(suggestions.contains("Blinding Lights — The Weeknd"));

        h.send(ManagerEvent::PickSuggestion("t8".into()));

        assert_eq!(h.store.playlist(&id).unwrap().tracks[0].name, "Save Your Tears");
        assert_eq!(h.doc().html("track-suggestions"), "");
    }

    #[test]
    fn test_removed_track_leaves_fallback_queue_entry() {
        let mut h = Harness::signed_in();
        h.create("Mix");
        h.add("Some Demo");
        let track_id = h.store.current_playlist().unwrap().tracks[0].id.clone();

        h.send(ManagerEvent::RemoveTrack(track_id));

        assert_eq!(h.toast(), "Track removed");
        assert_eq!(h.store.state().queue.len(), 1);
        let queue = h.doc().html("queue-list");
        assert!(queue.contains("<strong>Track</strong>"));
        assert!(queue.contains(">Unknown<"));
        assert!(queue.contains(r#"<span class="pill-muted">-</span>"#));
    }

    #[test]
    fn test_queue_remove_and_reorder() {
        let mut h = Harness::signed_in();
        h.create("Mix");
        h.add("Nights");
        h.add("N95");
        h.add("Bad Guy");

        h.send(ManagerEvent::DropQueueItem { from: 0, to: 2 });
        assert_eq!(h.toast(), "Queue updated");
        let names: Vec<String> = h
            .store
            .state()
            .queue
            .iter()
            .map(|q| h.store.resolve_track(&q.track_id).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["N95", "Bad Guy", "Nights"]);

        let first = h.store.state().queue[0].id.clone();
        h.send(ManagerEvent::RemoveFromQueue(first));
        assert_eq!(h.store.state().queue.len(), 2);
        assert_eq!(h.toast(), "Track removed from queue");
    }

    #[test]
    fn test_queue_reorder_is_gated() {
        let mut h = Harness::signed_in();
        h.create("Mix");
        h.add("Nights");
        h.add("N95");
        let before = h.store.state().queue.clone();

        h.send(ManagerEvent::SignOut);
        h.send(ManagerEvent::DropQueueItem { from: 0, to: 1 });

        assert_eq!(h.store.state().queue, before);
        assert!(!h.doc().is_hidden("login-modal"));
    }

    #[test]
    fn test_edit_state_machine() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        assert!(h.doc().is_hidden("edit-inline"));

        h.send(ManagerEvent::OpenEdit);
        assert!(!h.doc().is_hidden("edit-inline"));
        assert_eq!(h.doc().value("edit-name"), "Mix");
        assert!(!h.doc().is_hidden("cover-upload"));

        h.send(ManagerEvent::SaveEdit {
            name: "Weekend".into(),
            description: String::new(),
        });
        assert!(h.doc().is_hidden("edit-inline"));
        assert_eq!(h.store.playlist(&id).unwrap().name, "Weekend");
        assert_eq!(h.doc().text("playlist-description"), "No description yet");

        h.send(ManagerEvent::OpenEdit);
        h.send(ManagerEvent::CancelEdit);
        assert!(h.doc().is_hidden("edit-inline"));
        assert!(h.doc().is_hidden("cover-upload"));
        assert_eq!(h.store.playlist(&id).unwrap().name, "Weekend");
    }

    #[test]
    fn test_edit_actions_outside_edit_mode_are_ignored() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        h.send(ManagerEvent::OpenEdit);
        h.send(ManagerEvent::CoverLoaded {
            playlist_id: id.clone(),
            data_url: "data:image/png;base64,AA==".into(),
        });
        h.send(ManagerEvent::SaveEdit {
            name: "Mix".into(),
            description: "Kept".into(),
        });
        assert!(h.doc().is_hidden("cover-remove"));

        h.send(ManagerEvent::SaveEdit {
            name: "Hijacked".into(),
            description: String::new(),
        });
        h.send(ManagerEvent::RemoveCover);
        h.send(ManagerEvent::RequestCover(PathBuf::from("b.png")));

        let playlist = h.store.playlist(&id).unwrap();
        assert_eq!(playlist.name, "Mix");
        assert_eq!(playlist.description, "Kept");
        assert_eq!(playlist.cover, "data:image/png;base64,AA==");
        assert!(h.doc().is_hidden(TOAST));
        assert!(h.task_rx.try_recv().is_err());
    }

    #[test]
    fn test_helper_panel_toggles() {
        let mut h = Harness::new(new_store());
        assert!(h.doc().is_hidden("helper"));

        h.send(ManagerEvent::ToggleHelper);
        assert!(!h.doc().is_hidden("helper"));

        h.send(ManagerEvent::ToggleHelper);
        assert!(h.doc().is_hidden("helper"));
    }

    #[test]
    fn test_selecting_playlist_leaves_edit_mode() {
        let mut h = Harness::signed_in();
        let first = h.create("First");
        h.create("Second");
        h.send(ManagerEvent::OpenEdit);

        h.send(ManagerEvent::OpenFromSimilar(first.clone()));

        assert_eq!(h.store.state().current_playlist_id.as_deref(), Some(first.as_str()));
        assert!(h.doc().is_hidden("edit-inline"));
        assert_eq!(h.toast(), "Opened from Similar");
    }

    #[test]
    fn test_library_and_similar_lists() {
        let mut h = Harness::signed_in();
        let first = h.create("First");
        let second = h.create("Second");

        let library = h.doc().html("library-list");
        assert!(library.find("Second").unwrap() < library.find("First").unwrap());
        assert!(library.contains(&format!(r#"data-pl="{second}" style="border-color: var(--accent);""#)));

        let similar = h.doc().html("similar");
        assert!(similar.contains(&format!(r#"data-open="{first}""#)));
        assert!(!similar.contains(&format!(r#"data-open="{second}""#)));
        assert!(!h.doc().is_hidden("similar-block"));

        h.send(ManagerEvent::OpenFromLibrary(first));
        assert_eq!(h.toast(), "Playlist opened");
        assert_eq!(h.doc().text("playlist-name"), "First");
    }

    #[test]
    fn test_open_unknown_playlist_is_ignored() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        h.send(ManagerEvent::OpenFromLibrary("p-missing".into()));

        assert_eq!(h.store.state().current_playlist_id, Some(id));
    }

    #[test]
    fn test_toggle_privacy() {
        let mut h = Harness::signed_in();
        h.create("Mix");
        assert_eq!(h.doc().text("privacy"), "Public");
        assert_eq!(h.doc().text("btn-private-toggle"), "Close access");

        h.send(ManagerEvent::TogglePrivacy);

        assert!(!h.store.current_playlist().unwrap().public);
        assert_eq!(h.doc().text("privacy"), "Private");
        assert_eq!(h.doc().text("btn-private-toggle"), "Open access");
        assert_eq!(h.toast(), "Playlist is private");
    }

    #[test]
    fn test_copy_link() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        h.send(ManagerEvent::CopyLink);

        assert_eq!(h.toast(), format!("Copy manually: {BASE_URL}#{id}"));
    }

    #[test]
    fn test_cover_request_and_completion() {
        let mut h = Harness::signed_in();
        let id = h.create("Mix");
        h.send(ManagerEvent::OpenEdit);
        h.send(ManagerEvent::RequestCover(PathBuf::from("/tmp/cover.png")));

        match h.task_rx.try_recv().unwrap() {
            AppTask::LoadCover { playlist_id, path } => {
                assert_eq!(playlist_id, id);
                assert_eq!(path, PathBuf::from("/tmp/cover.png"));
            }
        }

        h.send(ManagerEvent::CoverLoaded {
            playlist_id: id.clone(),
            data_url: "data:image/png;base64,AA==".into(),
        });

        assert_eq!(h.toast(), "Cover updated");
        assert_eq!(h.doc().value("cover-image"), "data:image/png;base64,AA==");
        assert!(!h.doc().is_hidden("cover-image"));
        assert!(h.doc().is_hidden("cover-label"));

        h.send(ManagerEvent::RemoveCover);
        assert!(h.store.playlist(&id).unwrap().cover.is_empty());
        assert!(h.doc().is_hidden("cover-image"));
    }

    #[test]
    fn test_cover_applies_to_requesting_playlist() {
        let mut h = Harness::signed_in();
        let first = h.create("First");
        h.send(ManagerEvent::OpenEdit);
        h.send(ManagerEvent::RequestCover(PathBuf::from("a.png")));
        let second = h.create("Second");

        h.send(ManagerEvent::CoverLoaded {
            playlist_id: first.clone(),
            data_url: "data:image/png;base64,AA==".into(),
        });

        assert!(!h.store.playlist(&first).unwrap().cover.is_empty());
        assert!(h.store.playlist(&second).unwrap().cover.is_empty());
    }

    #[test]
    fn test_cover_request_without_playlist() {
        let mut h = Harness::signed_in();
        h.send(ManagerEvent::RequestCover(PathBuf::from("a.png")));

        assert_eq!(h.toast(), MSG_NO_PLAYLIST);
        assert!(h.task_rx.try_recv().is_err());
    }

    #[test]
    fn test_reset_demo() {
        let mut h = Harness::signed_in();
        h.create("Mix");
        h.add("Nights");
        h.send(ManagerEvent::ToggleQueue);

        h.send(ManagerEvent::ResetDemo);

        assert!(!h.store.is_signed_in());
        assert!(h.store.state().playlists.is_empty());
        assert!(h.store.state().queue.is_empty());
        assert!(h.doc().is_hidden("queue-panel"));
        assert!(!h.doc().is_hidden("queue-empty"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut h = Harness::signed_in();
        h.create("Mix");
        h.add("Nights");
        let before = h.doc().to_html();

        h.view.render(&h.store);

        assert_eq!(h.doc().to_html(), before);
    }
}
