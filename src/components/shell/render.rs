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

//! Rendering for the home page surface.

use crate::{
    components::{
        LOGIN_MODAL, render_auth,
        shell::{ShellView, empty_artists_message, filter_artists},
    },
    dom::escape,
    model::{Artist, ListeningItem, Release},
    store::{Storage, Store},
    util::format::initials,
};

impl ShellView {
    pub(super) fn render_page<S: Storage>(&mut self, store: &Store<S>) {
        render_auth(&mut self.doc, store.user());
        self.doc.set_hidden(LOGIN_MODAL, !self.login_open);

        let state = store.state();
        self.doc.set_html("last-listening", render_listening(&state.last_listening));
        self.doc.set_html("releases", render_releases(&state.releases));
        self.render_artists(store);

        self.player.render(&mut self.doc);
    }

    fn render_artists<S: Storage>(&mut self, store: &Store<S>) {
        let artists = filter_artists(&store.state().artists, &self.artist_query);

        if artists.is_empty() {
            self.doc.set_html("artist-list", String::new());
            self.doc.set_text("artist-empty", empty_artists_message(&self.artist_query));
            self.doc.set_hidden("artist-empty", false);
            return;
        }

        self.doc.set_hidden("artist-empty", true);

        let signed_in = store.is_signed_in();
        let html = artists
            .into_iter()
            .map(|artist| {
                let follow = signed_in.then(|| store.is_following(&artist.id));
                artist_card(artist, follow)
            })
            .collect();
        self.doc.set_html("artist-list", html);
    }
}

fn render_listening(items: &[ListeningItem]) -> String {
    items
        .iter()
        .map(|item| circle_card("♫", &item.title, &item.description))
        .collect()
}

fn render_releases(items: &[Release]) -> String {
    items
        .iter()
        .map(|item| circle_card("◎", &item.title, &item.artist))
        .collect()
}

fn circle_card(icon: &str, title: &str, sub: &str) -> String {
    format!(
        r#"<div class="circle-card"><div class="circle">{icon}</div><p class="card-title">{}</p><p class="card-sub">{}</p></div>"#,
        escape(title),
        escape(sub)
    )
}

/// `follow` is `None` when signed out, which omits the follow button.
fn artist_card(artist: &Artist, follow: Option<bool>) -> String {
    let button = match follow {
        Some(following) => format!(
            r#"<button class="btn ghost" data-follow="{}">{}</button>"#,
            escape(&artist.id),
            if following { "Following" } else { "Follow" }
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="circle-card"><div class="circle avatar" aria-hidden="true"><span>{}</span></div><p class="card-title">{}</p><p class="card-sub">{}</p>{button}</div>"#,
        escape(&initials(&artist.name)),
        escape(&artist.name),
        escape(&artist.tagline)
    )
}
