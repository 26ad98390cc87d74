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

//! Page rendering and export.
//!
//! This module drives both surfaces through a full render of the [`App`]
//! state and writes the resulting documents to the export directory, one
//! HTML file per page.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::trace;

use crate::{App, components::Surface, dom::Document, store::Storage};

pub(crate) const SHELL_PAGE: &str = "index.html";
pub(crate) const MANAGER_PAGE: &str = "playlist.html";

/// Renders both surfaces from the current store state and exports them.
///
/// # Errors
///
/// Returns an error if the export directory cannot be created or a page
/// cannot be written.
pub(crate) fn draw<S: Storage>(app: &mut App<S>) -> Result<()> {
    app.shell.render(&app.store);
    app.manager.render(&app.store);

    let dir = Path::new(&app.config.export_dir);
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    write_page(&dir.join(SHELL_PAGE), app.shell.document())?;
    write_page(&dir.join(MANAGER_PAGE), app.manager.document())?;

    Ok(())
}

fn write_page(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, doc.to_html()).with_context(|| format!("Failed to write {}", path.display()))?;
    trace!(path = %path.display(), "Exported page");
    Ok(())
}
