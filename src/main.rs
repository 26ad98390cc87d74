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

//! # Darify.
//!
//! A music streaming demo: a persisted library of playlists, tracks, a play
//! queue and followed artists, presented as a home page and a playlist
//! manager page.
//!
//! The pages are rendered into in-memory documents and exported as HTML
//! files after every event. Input is read as text commands from standard
//! input.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the application state, processes events and
//!   renders the pages.
//! * A **Background Worker** handles blocking work (reading cover images)
//!   via asynchronous task processing.
//! * An **Input Thread** parses command lines into application events.
//!
//! ## Architecture
//!
//! Communication between the input thread, the worker and the event loop is
//! handled via `std::sync::mpsc` channels. The state is persisted to SQLite
//! after every mutation.

mod commander;
mod components;
mod config;
mod db;
mod dom;
mod events;
mod logging;
mod model;
mod render;
mod store;
mod tasks;
mod util;

use anyhow::{Context, Result};
use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{info, warn};

use crate::{
    components::{ManagerView, ShellView},
    config::AppConfig,
    events::{AppEvent, process_events},
    store::{SqliteStorage, Storage, Store},
    tasks::AppTask,
};

/// Application state.
pub(crate) struct App<S: Storage> {
    pub(crate) config: AppConfig,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_tx: Sender<AppTask>,

    pub(crate) store: Store<S>,

    pub(crate) shell: ShellView,
    pub(crate) manager: ManagerView,
}

impl<S: Storage> App<S> {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig, store: Store<S>, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let manager = ManagerView::new(&config.share_base_url);

        Self {
            config,
            event_tx,
            event_rx,
            task_tx,
            store,
            shell: ShellView::new(),
            manager,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration and persisted state, starts the background
/// workers and runs the event loop until the user quits or input ends.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = logging::init_logging(&config.log_dir).context("Failed to initialise logging")?;

    let storage = SqliteStorage::open(&config.database_file)
        .with_context(|| format!("Failed to open database {}", config.database_file))?;
    let store = Store::open(storage).context("Failed to save initial state")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, store, task_tx);

    info!(export_dir = %app.config.export_dir, "Darify started");
    println!("Darify: pages are written to {}/, type `help` for commands", app.config.export_dir);

    run(&mut app, task_rx).context("Application error occurred")
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to parse command lines from standard input.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the state updates and rendering.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run<S: Storage>(app: &mut App<S>, task_rx: Receiver<AppTask>) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    tasks::spawn_task_worker(task_rx, app.event_tx.clone());

    // Spawn a thread to translate input lines to application events, end of
    // input quits the application.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };

            match commander::parse_command(&line) {
                Ok(events) => {
                    for event in events {
                        if tx_input.send(event).is_err() {
                            return;
                        }
                    }
                }
                Err(e) => {
                    warn!(line = %line, "Rejected command: {e}");
                    let _ = tx_input.send(AppEvent::Error(e.to_string()));
                }
            }
        }

        let _ = tx_input.send(AppEvent::ExitApplication);
    });

    process_events(app)
}
