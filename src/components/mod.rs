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

//! Render surfaces and the helpers they share.
//!
//! Each surface owns a [`Document`] plus its local view state (open modals,
//! search inputs, edit mode). Handling an event mutates the [`Store`] and the
//! view state; rendering is then a full re-derivation of every element the
//! surface owns from those two sources.
//!
//! * [`shell`]: the home page with releases, listening history and artists.
//! * [`manager`]: the playlist manager with library, tracks and queue.

pub(crate) mod manager;
pub(crate) mod shell;

use std::sync::mpsc::Sender;

use anyhow::Result;

pub(crate) use manager::{ManagerEvent, ManagerView};
pub(crate) use shell::{ShellEvent, ShellView};

use crate::{
    dom::Document,
    model::User,
    store::{Storage, Store},
    tasks::AppTask,
    util::format::progress_background,
};

pub(crate) const TOAST: &str = "toast";
pub(crate) const LOGIN_MODAL: &str = "login-modal";

pub(crate) const MSG_SIGN_IN_REQUIRED: &str = "Sign in to manage playlists";

pub(crate) trait Surface {
    type Event;

    fn process_event<S: Storage>(
        &mut self,
        store: &mut Store<S>,
        event: Self::Event,
        task_tx: &Sender<AppTask>,
    ) -> Result<()>;

    fn render<S: Storage>(&mut self, store: &Store<S>);

    fn document(&self) -> &Document;
}

pub(crate) fn show_toast(doc: &mut Document, message: impl Into<String>) {
    let toast = doc.el(TOAST);
    toast.text = message.into();
    toast.hidden = false;
}

pub(crate) fn hide_toast(doc: &mut Document) {
    doc.set_hidden(TOAST, true);
}

/// Returns whether the user may perform a gated action. When signed out the
/// login modal is opened instead and the user is told why.
pub(crate) fn ensure_signed_in<S: Storage>(store: &Store<S>, doc: &mut Document, login_open: &mut bool) -> bool {
    if store.is_signed_in() {
        return true;
    }

    *login_open = true;
    show_toast(doc, MSG_SIGN_IN_REQUIRED);
    false
}

/// Renders the top bar auth controls.
pub(crate) fn render_auth(doc: &mut Document, user: &User) {
    if user.signed_in {
        doc.set_text("auth-status", format!("Signed in as {}", user.email));
    }
    doc.set_hidden("auth-status", !user.signed_in);
    doc.set_hidden("btn-login", user.signed_in);
    doc.set_hidden("btn-logout", !user.signed_in);
}

/// State of the demo player bar. Nothing is actually played.
#[derive(Debug, Default)]
pub(crate) struct Player {
    playing: bool,
    progress: u8,
}

impl Player {
    pub(crate) fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Moves the progress slider, clamped to 100, returning the new value.
    pub(crate) fn seek(&mut self, percent: u8) -> u8 {
        self.progress = percent.min(100);
        self.progress
    }

    pub(crate) fn render(&self, doc: &mut Document) {
        doc.set_text("player-play", if self.playing { "⏸" } else { "▶" });

        let progress = doc.el("player-progress");
        progress.value = self.progress.to_string();
        progress.style = progress_background(self.progress);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::mpsc::{self, Receiver, Sender};

    use super::*;
    use crate::store::{storage::MemoryStorage, tests::new_store};

    pub(crate) fn task_channel() -> (Sender<AppTask>, Receiver<AppTask>) {
        mpsc::channel()
    }

    pub(crate) fn signed_in_store() -> Store<MemoryStorage> {
        let mut store = new_store();
        store.sign_in("listener@example.com").unwrap();
        store
    }

    #[test]
    fn test_gate_opens_login_when_signed_out() {
        let store = new_store();
        let mut doc = Document::new("t");
        let mut login_open = false;

        assert!(!ensure_signed_in(&store, &mut doc, &mut login_open));
        assert!(login_open);
        assert_eq!(doc.text(TOAST), MSG_SIGN_IN_REQUIRED);
        assert!(!doc.is_hidden(TOAST));
    }

    #[test]
    fn test_gate_passes_when_signed_in() {
        let store = signed_in_store();
        let mut doc = Document::new("t");
        let mut login_open = false;

        assert!(ensure_signed_in(&store, &mut doc, &mut login_open));
        assert!(!login_open);
        assert!(doc.get(TOAST).is_none());
    }

    #[test]
    fn test_player_toggle_and_seek() {
        let mut player = Player::default();
        let mut doc = Document::new("t");

        player.toggle();
        assert_eq!(player.seek(250), 100);
        player.render(&mut doc);

        assert_eq!(doc.text("player-play"), "⏸");
        assert_eq!(doc.value("player-progress"), "100");
        assert!(doc.get("player-progress").unwrap().style.contains("100%"));
    }
}
