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

//! Background application task processing.
//!
//! This module implements the command pattern used to keep blocking work off
//! the event loop thread. A dedicated worker translates [`AppTask`] requests
//! into file reads and posts the results back to the application as
//! [`AppEvent`]s.
//!
//! Only actions that may block should be implemented as tasks. Everything
//! else is handled directly by the surfaces.

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::debug;

use crate::{components::ManagerEvent, events::AppEvent, util::cover};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Read an image file and encode it as a data URL for the cover of
    /// `playlist_id`, the playlist open when the read was requested.
    LoadCover { playlist_id: String, path: PathBuf },
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
    });
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, event_tx: &Sender<AppEvent>) -> Result<()> {
    match task {
        AppTask::LoadCover { playlist_id, path } => load_cover(event_tx, playlist_id, path),
    }
}

fn load_cover(event_tx: &Sender<AppEvent>, playlist_id: String, path: PathBuf) -> Result<()> {
    let data_url = cover::read_data_url(&path)?;
    debug!(playlist_id = %playlist_id, path = %path.display(), bytes = data_url.len(), "Cover loaded");

    event_tx.send(AppEvent::Manager(ManagerEvent::CoverLoaded { playlist_id, data_url }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{io::Write, sync::mpsc, time::Duration};

    use tempfile::Builder;

    use super::*;

    #[test]
    fn test_cover_task_posts_loaded_event() {
        let mut file = Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"hi").unwrap();

        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(task_rx, event_tx);

        task_tx
            .send(AppTask::LoadCover {
                playlist_id: "p-1".into(),
                path: file.path().to_path_buf(),
            })
            .unwrap();

        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::Manager(ManagerEvent::CoverLoaded { playlist_id, data_url }) => {
                assert_eq!(playlist_id, "p-1");
                assert_eq!(data_url, "data:image/png;base64,aGk=");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_cover_task_reports_missing_file() {
        let (event_tx, event_rx) = mpsc::channel();
        let task = AppTask::LoadCover {
            playlist_id: "p-1".into(),
            path: PathBuf::from("/definitely/not/here.png"),
        };

        assert!(handle_task(task, &event_tx).is_err());
        assert!(event_rx.try_recv().is_err());
    }
}
