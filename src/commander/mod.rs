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

//! Command-line input parsing.
//!
//! Each line typed at the prompt is split into words and matched against the
//! command table, producing the application events to dispatch. Commands are
//! prefixed with the page they target: `home` for the home page and `pl` for
//! the playlist manager.
//!
//! Free text arguments (names, descriptions, queries) are the remaining words
//! joined by single spaces. Where a command takes both a name and a
//! description they are separated by `|`.

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    components::{ManagerEvent, ShellEvent},
    events::AppEvent,
};

pub(crate) const HELP: &str = "\
Commands:
  q | quit                     exit
  help                         show this help

Home page (home ...):
  login | login-cancel         open or close the sign-in dialog
  signin <email>               sign in
  signout                      sign out
  search [query]               filter the artist list
  follow <artist id>           follow or unfollow an artist
  play                         play or pause
  seek <0-100>                 move the progress slider

Playlists (pl ...):
  login | login-cancel         open or close the sign-in dialog
  signin <email>               sign in
  signout                      sign out
  new | new-cancel             open or close the create dialog
  create <name> [| desc]       create a playlist
  open <playlist id>           open a playlist from the library
  similar <playlist id>        open a playlist from the similar row
  find [query]                 type into the track search
  pick <track id>              add a suggested catalog track
  add [title]                  add the searched (or given) track
  rm <track id>                remove a track from the playlist
  queue | queue-close          toggle or close the queue panel
  helper                       show or hide the helper panel
  unqueue <queue id>           remove a queue entry
  move <from> <to>             reorder the queue
  privacy                      open or close access
  share                        show the share link
  edit | edit-cancel           start or cancel editing
  save <name> [| desc]         save the edited name and description
  cover <path>                 set the cover from an image file (editing)
  uncover                      remove the cover (editing)
  play                         play or pause
  seek <0-100>                 move the progress slider
  reset                        restore the demo data";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Not a number: {0}")]
    InvalidNumber(String),
}

/// Parses one line of input into the events it stands for.
///
/// A blank line yields no events.
pub(crate) fn parse_command(line: &str) -> Result<Vec<AppEvent>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let event = match parts.as_slice() {
        [] => return Ok(Vec::new()),

        ["q"] | ["quit"] => AppEvent::ExitApplication,
        ["help"] => AppEvent::Help,

        ["home", rest @ ..] => AppEvent::Shell(parse_shell(rest)?),
        ["pl", "add", title @ ..] if !title.is_empty() => {
            return Ok(vec![
                AppEvent::Manager(ManagerEvent::TrackSearchInput(title.join(" "))),
                AppEvent::Manager(ManagerEvent::AddTrack),
            ]);
        }
        ["pl", rest @ ..] => AppEvent::Manager(parse_manager(rest)?),

        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };

    Ok(vec![event])
}

fn parse_shell(parts: &[&str]) -> Result<ShellEvent, CommandError> {
    let event = match parts {
        ["login"] => ShellEvent::OpenLogin,
        ["login-cancel"] => ShellEvent::CancelLogin,
        ["signin", email @ ..] => ShellEvent::SubmitSignIn(email.join(" ")),
        ["signout"] => ShellEvent::SignOut,
        ["search", query @ ..] => ShellEvent::SearchArtists(query.join(" ")),
        ["follow", id] => ShellEvent::ToggleFollow(id.to_string()),
        ["follow"] => return Err(CommandError::MissingArgument("artist id")),
        ["play"] => ShellEvent::TogglePlay,
        ["seek", percent] => ShellEvent::Seek(parse_number(percent)?),
        ["seek"] => return Err(CommandError::MissingArgument("percent")),
        _ => return Err(CommandError::Unknown(format!("home {}", parts.join(" ")))),
    };

    Ok(event)
}

fn parse_manager(parts: &[&str]) -> Result<ManagerEvent, CommandError> {
    let event = match parts {
        ["login"] => ManagerEvent::OpenLogin,
        ["login-cancel"] => ManagerEvent::CancelLogin,
        ["signin", email @ ..] => ManagerEvent::SubmitSignIn(email.join(" ")),
        ["signout"] => ManagerEvent::SignOut,

        ["new"] => ManagerEvent::OpenCreate,
        ["new-cancel"] => ManagerEvent::CancelCreate,
        ["create", text @ ..] => {
            let (name, description) = split_name_description(text);
            ManagerEvent::SubmitCreate { name, description }
        }

        ["open", id] => ManagerEvent::OpenFromLibrary(id.to_string()),
        ["similar", id] => ManagerEvent::OpenFromSimilar(id.to_string()),
        ["open"] | ["similar"] => return Err(CommandError::MissingArgument("playlist id")),

        ["find", query @ ..] => ManagerEvent::TrackSearchInput(query.join(" ")),
        ["pick", id] => ManagerEvent::PickSuggestion(id.to_string()),
        ["add"] => ManagerEvent::AddTrack,
        ["rm", id] => ManagerEvent::RemoveTrack(id.to_string()),
        ["pick"] | ["rm"] => return Err(CommandError::MissingArgument("track id")),

        ["queue"] => ManagerEvent::ToggleQueue,
        ["queue-close"] => ManagerEvent::CloseQueue,
        ["helper"] => ManagerEvent::ToggleHelper,
        ["unqueue", id] => ManagerEvent::RemoveFromQueue(id.to_string()),
        ["unqueue"] => return Err(CommandError::MissingArgument("queue id")),
        ["move", from, to] => ManagerEvent::DropQueueItem {
            from: parse_number(from)?,
            to: parse_number(to)?,
        },
        ["move", ..] => return Err(CommandError::MissingArgument("from and to positions")),

        ["privacy"] => ManagerEvent::TogglePrivacy,
        ["share"] => ManagerEvent::CopyLink,

        ["edit"] => ManagerEvent::OpenEdit,
        ["edit-cancel"] => ManagerEvent::CancelEdit,
        ["save", text @ ..] => {
            let (name, description) = split_name_description(text);
            ManagerEvent::SaveEdit { name, description }
        }

        ["cover"] => return Err(CommandError::MissingArgument("image path")),
        ["cover", path @ ..] => ManagerEvent::RequestCover(PathBuf::from(path.join(" "))),
        ["uncover"] => ManagerEvent::RemoveCover,

        ["play"] => ManagerEvent::TogglePlay,
        ["seek", percent] => ManagerEvent::Seek(parse_number(percent)?),
        ["seek"] => return Err(CommandError::MissingArgument("percent")),

        ["reset"] => ManagerEvent::ResetDemo,

        _ => return Err(CommandError::Unknown(format!("pl {}", parts.join(" ")))),
    };

    Ok(event)
}

/// Splits `name words | description words` into its two halves.
fn split_name_description(parts: &[&str]) -> (String, String) {
    let text = parts.join(" ");
    match text.split_once('|') {
        Some((name, description)) => (name.trim().to_string(), description.trim().to_string()),
        None => (text, String::new()),
    }
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, CommandError> {
    text.parse().map_err(|_| CommandError::InvalidNumber(text.to_string()))
}
