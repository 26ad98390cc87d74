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

//! Rendering for the playlist manager surface.
//!
//! Each render rewrites every element the manager owns, so calling
//! [`ManagerView::render_page`] twice in a row produces the same document.

use crate::{
    components::{
        LOGIN_MODAL, render_auth,
        manager::{MAX_SUGGESTIONS, ManagerView},
    },
    dom::escape,
    model::{Playlist, QueueEntry, SampleTrack, Track},
    store::{Storage, Store, suggest_sample_tracks},
    util::format::format_date,
};

const EMPTY_TRACKS_TEXT: &str = "The playlist is empty — add a track using the search below.";
const PICK_PLAYLIST_TEXT: &str = "Pick a playlist from My library to view it.";
const NO_PLAYLISTS_TEXT: &str = "No playlists yet — press “＋” to create one.";

/// Controls that only work with an open playlist.
const PLAYLIST_CONTROLS: &[&str] = &[
    "add-from-search",
    "btn-edit-open",
    "btn-private-toggle",
    "btn-copy-link",
    "track-search",
    "cover-input",
];

const PUBLIC_BADGE_STYLE: &str = "background: rgba(20,184,166,0.12); color: #0f766e";
const PRIVATE_BADGE_STYLE: &str = "background: rgba(239,68,68,0.12); color: #b91c1c";
const NEUTRAL_BADGE_STYLE: &str = "background: rgba(15,23,42,0.08); color: #0f172a";

impl ManagerView {
    pub(super) fn render_page<S: Storage>(&mut self, store: &Store<S>) {
        self.render_auth(store);

        self.doc.set_hidden(LOGIN_MODAL, !self.login_open);
        self.doc.set_hidden("create-modal", !self.create_open);
        self.doc.set_hidden("queue-panel", !self.queue_open);
        self.doc.set_hidden("helper", !self.helper_open);

        self.render_library(store);
        match store.current_playlist() {
            Some(playlist) => self.render_playlist(store, playlist),
            None => self.render_empty_selection(store),
        }
        self.render_suggestions();
        self.render_queue(store);

        self.player.render(&mut self.doc);
    }

    /// Signed out visitors only see the guest placeholder.
    fn render_auth<S: Storage>(&mut self, store: &Store<S>) {
        let user = store.user();
        render_auth(&mut self.doc, user);

        let hide_app = !user.signed_in;
        self.doc.set_hidden("layout", hide_app);
        self.doc.set_hidden("player", hide_app);
        self.doc.set_hidden("playlist-main", hide_app);
        self.doc.set_hidden("playlist-guest", !hide_app);
    }

    fn render_library<S: Storage>(&mut self, store: &Store<S>) {
        let current = store.state().current_playlist_id.as_deref();

        let html = store
            .state()
            .playlists
            .iter()
            .map(|p| {
                let style = if Some(p.id.as_str()) == current {
                    r#" style="border-color: var(--accent);""#
                } else {
                    ""
                };
                format!(
                    r#"<button class="btn ghost" data-pl="{}"{style}>{}</button>"#,
                    escape(&p.id),
                    escape(&p.name)
                )
            })
            .collect();

        self.doc.set_html("library-list", html);
    }

    fn render_empty_selection<S: Storage>(&mut self, store: &Store<S>) {
        let has_playlists = !store.state().playlists.is_empty();
        let message = if has_playlists { PICK_PLAYLIST_TEXT } else { NO_PLAYLISTS_TEXT };

        self.is_editing = false;

        self.doc.set_hidden("playlist-template", !has_playlists);
        self.doc.set_hidden("edit-inline", true);

        self.doc.set_text("playlist-name", "No playlist selected");
        self.doc.set_text("playlist-description", "Create or open a playlist to manage tracks.");
        self.doc.set_text("track-count", "0 track(s)");
        self.doc.set_text("privacy", "Public");
        self.doc.el("privacy").style = NEUTRAL_BADGE_STYLE.to_string();

        self.render_cover("");

        self.doc.set_html("track-list", String::new());
        self.doc.set_text("track-empty", message);
        self.doc.set_hidden("track-empty", false);
        self.doc.set_text("playlist-empty", message);
        self.doc.set_hidden("playlist-empty", false);

        self.doc.set_hidden("similar-block", true);
        self.doc.set_html("similar", String::new());

        self.toggle_controls(false);
    }

    fn render_playlist<S: Storage>(&mut self, store: &Store<S>, playlist: &Playlist) {
        self.doc.set_hidden("playlist-template", false);
        self.doc.set_hidden("playlist-empty", true);
        self.toggle_controls(true);

        self.doc.set_text("playlist-name", playlist.name.as_str());
        let description = if playlist.description.is_empty() {
            "No description yet"
        } else {
            playlist.description.as_str()
        };
        self.doc.set_text("playlist-description", description);
        self.doc.set_text("track-count", format!("{} track(s)", playlist.tracks.len()));

        let (badge, style, toggle) = if playlist.public {
            ("Public", PUBLIC_BADGE_STYLE, "Close access")
        } else {
            ("Private", PRIVATE_BADGE_STYLE, "Open access")
        };
        self.doc.set_text("privacy", badge);
        self.doc.el("privacy").style = style.to_string();
        self.doc.set_text("btn-private-toggle", toggle);

        self.render_cover(&playlist.cover);

        self.doc.set_hidden("edit-inline", !self.is_editing);
        if self.is_editing {
            self.doc.el("edit-name").value = self.edit_name.clone();
            self.doc.el("edit-description").value = self.edit_description.clone();
        }

        self.render_tracks(&playlist.tracks);
        self.render_similar(store, &playlist.id);
    }

    /// Cover image plus the editor controls, which only show while editing.
    fn render_cover(&mut self, cover: &str) {
        let has_cover = !cover.is_empty();

        let image = self.doc.el("cover-image");
        image.value = cover.to_string();
        image.hidden = !has_cover;
        self.doc.set_hidden("cover-label", has_cover);

        self.doc.set_hidden("cover-upload", !self.is_editing);
        self.doc.set_hidden("cover-remove", !self.is_editing || !has_cover);
    }

    fn toggle_controls(&mut self, enabled: bool) {
        for id in PLAYLIST_CONTROLS {
            self.doc.set_disabled(id, !enabled);
        }
    }

    fn render_tracks(&mut self, tracks: &[Track]) {
        self.doc.set_text("track-empty", EMPTY_TRACKS_TEXT);
        self.doc.set_hidden("track-empty", !tracks.is_empty());

        let html = tracks
            .iter()
            .enumerate()
            .map(|(idx, track)| track_row(idx, track))
            .collect();
        self.doc.set_html("track-list", html);
    }

    fn render_similar<S: Storage>(&mut self, store: &Store<S>, current_id: &str) {
        let items: Vec<&Playlist> = store
            .state()
            .playlists
            .iter()
            .filter(|p| p.id != current_id)
            .collect();

        self.doc.set_hidden("similar-block", items.is_empty());
        self.doc.set_html("similar", items.into_iter().map(similar_card).collect());
    }

    fn render_suggestions(&mut self) {
        self.doc.el("track-search").value = self.track_query.clone();

        let html = suggest_sample_tracks(&self.track_query, MAX_SUGGESTIONS)
            .into_iter()
            .map(suggestion_button)
            .collect();
        self.doc.set_html("track-suggestions", html);
    }

    fn render_queue<S: Storage>(&mut self, store: &Store<S>) {
        let queue = &store.state().queue;
        self.doc.set_hidden("queue-empty", !queue.is_empty());

        let html = queue
            .iter()
            .enumerate()
            .map(|(index, entry)| queue_item(store, index, entry))
            .collect();
        self.doc.set_html("queue-list", html);
    }
}

fn track_row(idx: usize, track: &Track) -> String {
    format!(
        concat!(
            r#"<div class="row"><div class="cell">#{}</div>"#,
            r#"<div class="cell"><strong>{}</strong><br /><span class="card-sub">{}</span></div>"#,
            r#"<div class="cell pill-muted">{}</div><div class="cell pill-muted">{}</div>"#,
            r#"<div class="cell action-cell"><button type="button" class="icon-btn danger" data-remove="{}" title="Delete">🗑</button></div></div>"#,
        ),
        idx + 1,
        escape(&track.name),
        escape(&track.artist),
        escape(&track.album),
        escape(&format_date(&track.added_at)),
        escape(&track.id)
    )
}

fn similar_card(playlist: &Playlist) -> String {
    let thumb = if playlist.cover.is_empty() {
        r#"<div class="cover-thumb"></div>"#.to_string()
    } else {
        format!(
            r#"<img src="{}" alt="{}" class="cover-thumb" />"#,
            escape(&playlist.cover),
            escape(&playlist.name)
        )
    };
    let description = if playlist.description.is_empty() { "Playlist" } else { playlist.description.as_str() };

    format!(
        r#"<button type="button" class="card similar-card" data-open="{}">{thumb}<p class="card-title">{}</p><p class="card-sub">{}</p></button>"#,
        escape(&playlist.id),
        escape(&playlist.name),
        escape(description)
    )
}

fn suggestion_button(track: &SampleTrack) -> String {
    format!(
        r#"<button class="btn ghost" data-suggest="{}">{} — {}</button>"#,
        track.id,
        escape(track.name),
        escape(track.artist)
    )
}

/// Queue entries whose track no longer resolves show placeholder labels.
fn queue_item<S: Storage>(store: &Store<S>, index: usize, entry: &QueueEntry) -> String {
    let track = store.resolve_track(&entry.track_id);
    let name = track.as_ref().map_or("Track", |t| t.name());
    let artist = track.as_ref().map_or("Unknown", |t| t.artist());
    let album = track.as_ref().map_or("-", |t| t.album());

    format!(
        concat!(
            r#"<div class="queue-item" draggable="true" data-index="{}"><span>≡</span>"#,
            r#"<div><strong>{}</strong><div class="card-sub">{}</div></div>"#,
            r#"<span class="pill-muted">{}</span><button class="btn ghost" data-remove="{}">✕</button></div>"#,
        ),
        index,
        escape(name),
        escape(artist),
        escape(album),
        escape(&entry.id)
    )
}
