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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (text commands), background task results and the
//! page rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function routes each event to the
//!    surface it targets, which mutates the store and its own view state.
//! 3. **Render**: After each event is processed, both pages are re-rendered
//!    and exported.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::{
    App,
    commander::HELP,
    components::{ManagerEvent, ShellEvent, Surface, TOAST},
    dom::Document,
    render::draw,
    store::Storage,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Shell(ShellEvent),
    Manager(ManagerEvent),

    Help,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the pages.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if persisting the state or exporting a page fails.
pub(crate) fn process_events<S: Storage>(app: &mut App<S>) -> Result<()> {
    draw(app)?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,

            AppEvent::Shell(event) => {
                app.shell
                    .process_event(&mut app.store, event, &app.task_tx)
                    .context("Failed to process home page event")?;
                draw(app)?;
                report_toast("home", app.shell.document());
            }

            AppEvent::Manager(event) => {
                app.manager
                    .process_event(&mut app.store, event, &app.task_tx)
                    .context("Failed to process playlist page event")?;
                draw(app)?;
                report_toast("playlists", app.manager.document());
            }

            AppEvent::Help => println!("{HELP}"),

            AppEvent::Error(message) => {
                error!(%message, "Application error");
                eprintln!("error: {message}");
            }
        }
    }

    info!("Event loop finished");
    Ok(())
}

/// Prints the page's toast, if it is showing.
fn report_toast(page: &str, doc: &Document) {
    if !doc.is_hidden(TOAST) {
        if let Some(toast) = doc.get(TOAST) {
            println!("[{page}] {}", toast.text);
        }
    }
}
