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

//! Event handling for the home page surface.

use std::sync::mpsc::Sender;

use anyhow::Result;
use tracing::debug;

use crate::{
    components::{
        Surface, ensure_signed_in, hide_toast, show_toast,
        shell::{ShellEvent, ShellView},
    },
    dom::Document,
    store::{Storage, Store},
    tasks::AppTask,
};

impl Surface for ShellView {
    type Event = ShellEvent;

    fn process_event<S: Storage>(
        &mut self,
        store: &mut Store<S>,
        event: ShellEvent,
        _task_tx: &Sender<AppTask>,
    ) -> Result<()> {
        debug!(?event, "Shell event");
        hide_toast(&mut self.doc);

        match event {
            ShellEvent::OpenLogin => self.login_open = true,
            ShellEvent::CancelLogin => self.login_open = false,

            ShellEvent::SubmitSignIn(email) => {
                let email = email.trim();
                if email.is_empty() {
                    show_toast(&mut self.doc, "Enter an email");
                    return Ok(());
                }
                store.sign_in(email)?;
                self.login_open = false;
                show_toast(&mut self.doc, "Signed in");
            }

            ShellEvent::SignOut => {
                store.sign_out()?;
                show_toast(&mut self.doc, "Signed out");
            }

            ShellEvent::SearchArtists(query) => self.artist_query = query,

            ShellEvent::ToggleFollow(artist_id) => {
                if !ensure_signed_in(store, &mut self.doc, &mut self.login_open) {
                    return Ok(());
                }
                if store.artist(&artist_id).is_none() {
                    return Ok(());
                }
                let following = store.toggle_follow(&artist_id)?;
                show_toast(&mut self.doc, if following { "Followed" } else { "Unfollowed" });
            }

            ShellEvent::TogglePlay => self.player.toggle(),

            ShellEvent::Seek(percent) => {
                let percent = self.player.seek(percent);
                show_toast(&mut self.doc, format!("Seeked to {percent}%"));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{MSG_SIGN_IN_REQUIRED, TOAST, tests::{signed_in_store, task_channel}},
        store::{storage::MemoryStorage, tests::new_store},
    };

    fn dispatch(view: &mut ShellView, store: &mut Store<MemoryStorage>, event: ShellEvent) {
        let (tx, _rx) = task_channel();
        view.process_event(store, event, &tx).unwrap();
        view.render(store);
    }

    fn artist_cards(view: &ShellView) -> usize {
        view.document().html("artist-list").matches("class=\"circle-card\"").count()
    }

    #[test]
    fn test_initial_render_lists_everything() {
        let store = new_store();
        let mut view = ShellView::new();
        view.render(&store);

        assert_eq!(artist_cards(&view), 8);
        assert_eq!(view.document().html("releases").matches("circle-card").count(), 4);
        assert_eq!(view.document().html("last-listening").matches("circle-card").count(), 4);
        assert!(view.document().is_hidden("artist-empty"));
        assert!(view.document().is_hidden("login-modal"));
        assert!(!view.document().html("artist-list").contains("data-follow"));
    }

    #[test]
    fn test_search_kendrick_matches_one() {
        let mut store = new_store();
        let mut view = ShellView::new();
        dispatch(&mut view, &mut store, ShellEvent::SearchArtists("kendrick".into()));

        assert_eq!(artist_cards(&view), 1);
        assert!(view.document().html("artist-list").contains("Kendrick Lamar"));
        assert!(view.document().is_hidden("artist-empty"));
    }

    #[test]
    fn test_search_without_match_names_query() {
        let mut store = new_store();
        let mut view = ShellView::new();
        dispatch(&mut view, &mut store, ShellEvent::SearchArtists("zzz".into()));

        assert_eq!(artist_cards(&view), 0);
        assert!(!view.document().is_hidden("artist-empty"));
        assert_eq!(view.document().text("artist-empty"), "No artists match “zzz”.");
    }

    #[test]
    fn test_follow_requires_sign_in() {
        let mut store = new_store();
        let mut view = ShellView::new();
        dispatch(&mut view, &mut store, ShellEvent::ToggleFollow("a1".into()));

        assert!(!store.is_following("a1"));
        assert!(!view.document().is_hidden("login-modal"));
        assert_eq!(view.document().text(TOAST), MSG_SIGN_IN_REQUIRED);
    }

    #[test]
    fn test_follow_keeps_active_query() {
        let mut store = signed_in_store();
        let mut view = ShellView::new();
        dispatch(&mut view, &mut store, ShellEvent::SearchArtists("the".into()));
        let before = artist_cards(&view);

        dispatch(&mut view, &mut store, ShellEvent::ToggleFollow("a2".into()));

        assert!(store.is_following("a2"));
        assert_eq!(artist_cards(&view), before);
        assert!(view.document().html("artist-list").contains(">Following</button>"));
        assert_eq!(view.document().text(TOAST), "Followed");

        dispatch(&mut view, &mut store, ShellEvent::ToggleFollow("a2".into()));
        assert!(!store.is_following("a2"));
        assert_eq!(view.document().text(TOAST), "Unfollowed");
    }

    #[test]
    fn test_sign_in_shows_follow_buttons() {
        let mut store = new_store();
        let mut view = ShellView::new();
        dispatch(&mut view, &mut store, ShellEvent::OpenLogin);
        assert!(!view.document().is_hidden("login-modal"));

        dispatch(&mut view, &mut store, ShellEvent::SubmitSignIn("dee@example.com".into()));

        assert!(store.is_signed_in());
        assert!(view.document().is_hidden("login-modal"));
        assert_eq!(view.document().text("auth-status"), "Signed in as dee@example.com");
        assert!(view.document().is_hidden("btn-login"));
        assert_eq!(view.document().html("artist-list").matches("data-follow").count(), 8);

        dispatch(&mut view, &mut store, ShellEvent::SignOut);
        assert!(!store.is_signed_in());
        assert!(view.document().is_hidden("auth-status"));
        assert!(!view.document().html("artist-list").contains("data-follow"));
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let mut store = new_store();
        let mut view = ShellView::new();
        dispatch(&mut view, &mut store, ShellEvent::SubmitSignIn("  ".into()));

        assert!(!store.is_signed_in());
        assert_eq!(view.document().text(TOAST), "Enter an email");
    }

    #[test]
    fn test_seek_reports_progress() {
        let mut store = new_store();
        let mut view = ShellView::new();
        dispatch(&mut view, &mut store, ShellEvent::Seek(42));

        assert_eq!(view.document().text(TOAST), "Seeked to 42%");
        assert_eq!(view.document().value("player-progress"), "42");
    }
}
