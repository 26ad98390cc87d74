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

//! Seed data for a fresh application state and the sample track catalog.

use crate::model::{AppState, Artist, ListeningItem, Release, SampleTrack, User};

pub(crate) const SAMPLE_TRACKS: &[SampleTrack] = &[
    SampleTrack { id: "t1", name: "Praise The Lord", artist: "A$AP Rocky", album: "Testing", duration: "3:25" },
    SampleTrack { id: "t2", name: "Sundress", artist: "A$AP Rocky", album: "Single", duration: "3:12" },
    SampleTrack { id: "t3", name: "SICKO MODE", artist: "Travis Scott", album: "Astroworld", duration: "5:13" },
    SampleTrack { id: "t4", name: "HIGHEST IN THE ROOM", artist: "Travis Scott", album: "Single", duration: "2:57" },
    SampleTrack { id: "t5", name: "HUMBLE.", artist: "Kendrick Lamar", album: "DAMN.", duration: "2:57" },
    SampleTrack { id: "t6", name: "N95", artist: "Kendrick Lamar", album: "Mr. Morale & the Big Steppers", duration: "3:15" },
    SampleTrack { id: "t7", name: "Blinding Lights", artist: "The Weeknd", album: "After Hours", duration: "3:20" },
    SampleTrack { id: "t8", name: "Save Your Tears", artist: "The Weeknd", album: "After Hours", duration: "3:36" },
    SampleTrack { id: "t9", name: "Bad Guy", artist: "Billie Eilish", album: "When We All Fall Asleep", duration: "3:14" },
    SampleTrack { id: "t10", name: "Levitating", artist: "Dua Lipa", album: "Future Nostalgia", duration: "3:23" },
    SampleTrack { id: "t11", name: "See You Again", artist: "Tyler, The Creator", album: "Flower Boy", duration: "3:00" },
    SampleTrack { id: "t12", name: "Nights", artist: "Frank Ocean", album: "Blonde", duration: "5:07" },
];

const ARTISTS: &[(&str, &str, &str, &str)] = &[
    ("a1", "Kendrick Lamar", "29.8M", "West Coast storytelling and sharp bars."),
    ("a2", "The Weeknd", "49.2M", "Dark R&B with stadium-scale hooks."),
    ("a3", "Billie Eilish", "58.3M", "Whispery pop with cinematic edges."),
    ("a4", "Dua Lipa", "32.4M", "Disco-pop grooves with global reach."),
    ("a5", "A$AP Rocky", "14.1M", "Harlem grit meets luxury rap."),
    ("a6", "Travis Scott", "26.4M", "Psychedelic trap and stadium energy."),
    ("a7", "Tyler, The Creator", "18.2M", "Genre-blending with bold aesthetics."),
    ("a8", "Frank Ocean", "19.5M", "Introspective R&B storyteller."),
];

const LAST_LISTENING: &[(&str, &str, &str)] = &[
    ("ll1", "Playlist #1", "Indie mix"),
    ("ll2", "Playlist #2", "Focus beats"),
    ("ll3", "Playlist #3", "Soft piano"),
    ("ll4", "Playlist #4", "Night jazz"),
];

const RELEASES: &[(&str, &str, &str)] = &[
    ("r1", "Album #1", "Nova Echo"),
    ("r2", "Album #2", "Astra Lane"),
    ("r3", "Album #3", "Golden Hour"),
    ("r4", "Album #4", "Paper Trails"),
];

/// Builds the state of a fresh install: signed out, no playlists, an empty
/// queue, and the static display seeds.
pub(crate) fn default_state() -> AppState {
    AppState {
        user: User::default(),
        current_playlist_id: None,
        playlists: vec![],
        queue: vec![],
        artists: ARTISTS
            .iter()
            .map(|(id, name, followers, tagline)| Artist {
                id: id.to_string(),
                name: name.to_string(),
                followers: followers.to_string(),
                tagline: tagline.to_string(),
            })
            .collect(),
        followed_artists: vec![],
        last_listening: LAST_LISTENING
            .iter()
            .map(|(id, title, description)| ListeningItem {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                cover: String::new(),
            })
            .collect(),
        releases: RELEASES
            .iter()
            .map(|(id, title, artist)| Release {
                id: id.to_string(),
                title: title.to_string(),
                artist: artist.to_string(),
            })
            .collect(),
    }
}
